use std::{fs, io, path::PathBuf};

use super::*;

/// An ordered list of comments persisted as one pretty-printed JSON array.
///
/// The store is append-only at the data level: every write rewrites the
/// whole document, but records are never edited or removed. Appends take
/// `&mut self`, so a store shared behind the app-state mutex serializes
/// its writers and overlapping appends cannot clobber each other.
pub struct CommentStore {
    path: PathBuf,
}

impl CommentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CommentStore { path: path.into() }
    }

    /// Read the full comment list in stored order.
    ///
    /// A document that does not exist yet reads as an empty list. A
    /// document that exists but is not a valid JSON comment array is a
    /// `Format` error; nothing is recovered from a corrupt document.
    pub fn list(&self) -> StoreResult<Vec<Comment>> {
        let document = match fs::read_to_string(&self.path) {
            Ok(document) => document,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };
        serde_json::from_str(&document).map_err(StoreError::Format)
    }

    /// Append a comment to the end of the list and return the updated list.
    ///
    /// The returned list always has the new comment at the tail.
    pub fn append(&mut self, comment: Comment) -> StoreResult<Vec<Comment>> {
        let mut comments = self.list()?;
        comments.push(comment);

        let document =
            serde_json::to_string_pretty(&comments).map_err(StoreError::Format)?;
        fs::write(&self.path, document).map_err(StoreError::Io)?;

        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str, content: &str) -> Comment {
        Comment {
            author: author.to_owned(),
            timestamp: "t1".to_owned(),
            content: content.to_owned(),
            avatar: "/asset/avatar.svg".to_owned(),
        }
    }

    #[test]
    fn missing_document_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CommentStore::new(dir.path().join("comments.json"));
        assert_eq!(store.list().unwrap(), vec![]);
    }

    #[test]
    fn corrupt_document_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comments.json");
        fs::write(&path, "not json").unwrap();

        let store = CommentStore::new(path);
        assert!(matches!(store.list(), Err(StoreError::Format(_))));
    }

    #[test]
    fn append_returns_list_with_new_tail() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CommentStore::new(dir.path().join("comments.json"));

        let before = store.list().unwrap();
        let updated = store.append(comment("User", "hi")).unwrap();

        assert_eq!(updated.last(), Some(&comment("User", "hi")));
        assert_eq!(updated[..updated.len() - 1], before[..]);
    }

    #[test]
    fn sequential_appends_preserve_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CommentStore::new(dir.path().join("comments.json"));

        for i in 1..=4 {
            store.append(comment("User", &format!("c{i}"))).unwrap();
        }

        let contents: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|c| c.content)
            .collect();
        assert_eq!(contents, vec!["c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn list_never_touches_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comments.json");

        let mut store = CommentStore::new(path.clone());
        store.append(comment("A", "first")).unwrap();

        let before = fs::read_to_string(&path).unwrap();
        store.list().unwrap();
        store.list().unwrap();
        let after = fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CommentStore::new(dir.path().join("comments.json"));
        store.append(comment("A", "first")).unwrap();

        assert_eq!(store.list().unwrap(), store.list().unwrap());
    }

    #[test]
    fn document_is_pretty_printed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comments.json");

        let mut store = CommentStore::new(path.clone());
        store.append(comment("User", "hi")).unwrap();

        let document = fs::read_to_string(&path).unwrap();
        assert_eq!(
            document,
            "[\n  {\n    \"author\": \"User\",\n    \"timestamp\": \"t1\",\n    \
             \"content\": \"hi\",\n    \"avatar\": \"/asset/avatar.svg\"\n  }\n]"
        );
    }
}
