use crate::data::Comment;
use crate::widget::{IconSet, Widget};

use super::*;

/// The comment page: composer, comment cards, and the settings modal,
/// rendered from the widget's view state.
///
/// The server renders the current list; the page script re-fetches on
/// load and after each submit, so the endpoint's response stays the
/// source of truth for what is displayed.
pub fn comments(widget: &Widget) -> Markup {
    let toggle_label = match widget.icon_set() {
        IconSet::Avatars => "Show Animals",
        IconSet::Animals => "Show Avatars",
    };

    let body = html! {
        #widget {
            .settings-row {
                button #open-settings title="Adjust settings" { "⚙" }
            }
            .composer {
                textarea #draft placeholder="Type your comment here..." { (widget.draft()) }
                button #add { "Add new comment" }
            }
            #comments {
                (comment_list(widget.comments()))
            }
            #settings-modal .hidden[!widget.settings_open()] {
                .dialog {
                    h2 { "Adjust Settings" }
                    button #toggle-icons { (toggle_label) }
                    input #name type="text" placeholder="Enter your name" value=(widget.name());
                    (icon_grid(IconSet::Avatars, widget))
                    (icon_grid(IconSet::Animals, widget))
                    button #save { "Save" }
                }
            }
        }
    };

    wrappers::universal(body, "comments", "Comments")
}

pub fn comment_list(comments: &[Comment]) -> Markup {
    html! {
        @for comment in comments {
            (comment_card(comment))
        }
    }
}

fn comment_card(comment: &Comment) -> Markup {
    html! {
        .comment {
            img.avatar src=(comment.avatar) alt="Avatar";
            .body {
                h3 { (comment.author) }
                span.timestamp { (comment.timestamp) }
                p { (comment.content) }
            }
        }
    }
}

fn icon_grid(set: IconSet, widget: &Widget) -> Markup {
    let id = match set {
        IconSet::Avatars => "avatar-icons",
        IconSet::Animals => "animal-icons",
    };
    html! {
        .icons #(id) .hidden[widget.icon_set() != set] {
            @for icon in set.icons() {
                img.icon
                    .selected[icon == widget.selected_icon()]
                    src=(icon)
                    alt="Icon"
                    data-default=(set.default_icon());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str, content: &str, avatar: &str) -> Comment {
        Comment {
            author: author.to_owned(),
            timestamp: "1/2/2026, 3:04:05 PM".to_owned(),
            content: content.to_owned(),
            avatar: avatar.to_owned(),
        }
    }

    #[test]
    fn cards_render_in_list_order_with_all_fields() {
        let comments = vec![
            comment("Ada", "first", "/asset/avatar1.svg"),
            comment("Ben", "second", "/asset/animal2.svg"),
        ];
        let markup = comment_list(&comments).into_string();

        let ada = markup.find("Ada").unwrap();
        let ben = markup.find("Ben").unwrap();
        assert!(ada < ben);
        assert!(markup.contains("first"));
        assert!(markup.contains("/asset/avatar1.svg"));
        assert!(markup.contains("1/2/2026, 3:04:05 PM"));
    }

    #[test]
    fn page_includes_both_icon_families() {
        let widget = Widget::new();
        let markup = comments(&widget).into_string();
        assert!(markup.contains("/asset/avatar12.svg"));
        assert!(markup.contains("/asset/animal12.svg"));
        assert!(markup.contains("Type your comment here..."));
        assert!(markup.contains("value=\"User\""));
    }

    #[test]
    fn page_renders_the_loaded_list() {
        let mut widget = Widget::new();
        widget.loaded(vec![comment("Ada", "hello", "/asset/avatar3.svg")]);
        let markup = comments(&widget).into_string();
        assert!(markup.contains("hello"));
        assert!(markup.contains("/asset/avatar3.svg"));
    }
}
