use crate::data::Comment;

/// HTTP client for the comment store endpoint.
///
/// One instance per widget lifetime. Requests carry no timeout and are
/// never retried; each call is a single attempt whose failure the
/// widget surfaces to its caller.
pub struct StoreClient {
    base: String,
    http: reqwest::Client,
}

impl StoreClient {
    pub fn new(base: impl Into<String>) -> Self {
        StoreClient {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the full comment list in stored order.
    pub async fn list(&self) -> reqwest::Result<Vec<Comment>> {
        self.http
            .get(format!("{}/api/comments", self.base))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Append a comment and return the server's updated list, the new
    /// source of truth for the caller's display.
    pub async fn append(&self, comment: &Comment) -> reqwest::Result<Vec<Comment>> {
        self.http
            .post(format!("{}/api/comments", self.base))
            .json(comment)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
