use reqwest::Client;
use tracing::trace;

use crate::errors::FetchError;
use crate::fetch::snapshot::Snapshot;

/// Read-only client for the lot status endpoint.
///
/// Cheap to clone: clones share the underlying connection pool, so the
/// runner hands one copy to every spawned poll task. No request timeout is
/// configured; a hung request stalls only its own cycle.
#[derive(Clone, Debug)]
pub struct StatusClient {
    client: Client,
    endpoint: String,
}

impl StatusClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS roots...).
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        StatusClient {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode one snapshot.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        let resp = self.client.get(&self.endpoint).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = resp.bytes().await?;
        trace!(bytes = body.len(), "status body received");
        Snapshot::from_slice(&body)
    }
}
