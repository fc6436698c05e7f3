use chrono::Local;

use crate::client::StoreClient;
use crate::data::Comment;

/// The two icon families a visitor can pick an avatar from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSet {
    Avatars,
    Animals,
}

impl IconSet {
    /// The icon a freshly toggled-to family starts out selected on.
    pub fn default_icon(self) -> String {
        match self {
            IconSet::Avatars => "/asset/avatar.svg".to_owned(),
            IconSet::Animals => "/asset/animal.svg".to_owned(),
        }
    }

    /// The family's selectable icons, in display order.
    pub fn icons(self) -> Vec<String> {
        let prefix = match self {
            IconSet::Avatars => "avatar",
            IconSet::Animals => "animal",
        };
        (1..=12).map(|i| format!("/asset/{prefix}{i}.svg")).collect()
    }

    pub fn toggled(self) -> IconSet {
        match self {
            IconSet::Avatars => IconSet::Animals,
            IconSet::Animals => IconSet::Avatars,
        }
    }
}

/// View state for one on-screen lifetime of the comment widget.
///
/// Nothing here is persisted. The displayed list is whatever the store
/// endpoint last returned; the rest is user-controlled and discarded
/// when the widget goes away.
pub struct Widget {
    comments: Vec<Comment>,
    draft: String,
    name: String,
    selected_icon: String,
    icon_set: IconSet,
    settings_open: bool,
}

impl Widget {
    pub fn new() -> Self {
        Widget {
            comments: Vec::new(),
            draft: String::new(),
            name: "User".to_owned(),
            selected_icon: IconSet::Avatars.default_icon(),
            icon_set: IconSet::Avatars,
            settings_open: false,
        }
    }

    /// The displayed comments, in list order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selected_icon(&self) -> &str {
        &self.selected_icon
    }

    pub fn icon_set(&self) -> IconSet {
        self.icon_set
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    /// Swap icon families and reset the selection to the new family's
    /// default, discarding whatever was selected before.
    pub fn toggle_icon_set(&mut self) {
        self.icon_set = self.icon_set.toggled();
        self.selected_icon = self.icon_set.default_icon();
    }

    /// Select an icon from the currently displayed family. The selection
    /// outlives the settings modal until changed or reset by a toggle.
    pub fn select_icon(&mut self, icon: impl Into<String>) {
        self.selected_icon = icon.into();
    }

    /// Build the comment this widget would submit right now.
    pub fn compose(&self) -> Comment {
        Comment {
            author: self.name.clone(),
            timestamp: Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            content: self.draft.clone(),
            avatar: self.selected_icon.clone(),
        }
    }

    /// Replace the displayed list with a freshly fetched one.
    pub fn loaded(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }

    /// Fetch the comment list and make it the displayed list.
    ///
    /// A failed fetch leaves the widget untouched and hands the error
    /// to the caller.
    pub async fn mount(&mut self, client: &StoreClient) -> reqwest::Result<()> {
        let comments = client.list().await?;
        self.loaded(comments);
        Ok(())
    }

    /// Submit the composed comment. On success the server's returned
    /// list replaces the displayed one and the draft clears; on failure
    /// the draft is preserved and the error propagates.
    pub async fn submit(&mut self, client: &StoreClient) -> reqwest::Result<()> {
        let comment = self.compose();
        self.comments = client.append(&comment).await?;
        self.draft.clear();
        Ok(())
    }
}
