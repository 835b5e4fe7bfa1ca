//! Line listing methods for [`LineClient`].

use crate::client::LineClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Line;

impl LineClient {
    /// Fetch every line known to the backend, in backend order.
    ///
    /// No pagination and no retries: one request per call.
    pub async fn list_lines(&mut self) -> Result<Vec<Line>> {
        let token = self.get_auth_token().await?;
        endpoints::list_lines(&self.http, &self.base_url, &token).await
    }
}
