use std::io;

use serde::{Deserialize, Serialize};

pub use store::CommentStore;

/// The flat-file comment store.
pub mod store;

/// A single comment as stored and displayed.
///
/// Comments have no id; a comment is identified only by its position in
/// the stored list, and it is never edited or deleted after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// The display name the visitor chose.
    pub author: String,

    /// When the comment was submitted, as a human-readable string
    /// formatted by the widget. Display only, never a sort key.
    pub timestamp: String,

    /// The comment text.
    pub content: String,

    /// Path of the icon shown next to the comment.
    pub avatar: String,
}

#[derive(Debug)]
pub enum StoreError {
    /// The persisted document could not be read or written.
    Io(io::Error),

    /// The persisted document is not a valid comment list.
    Format(serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
