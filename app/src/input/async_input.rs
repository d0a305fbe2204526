use crossterm::event::EventStream;
use futures_util::stream::StreamExt;
use tracing::warn;

use super::InputEvent;

/// Asynchronous terminal input, suitable for `tokio::select!`.
///
/// Errors from the underlying `crossterm` event stream are logged and
/// skipped so a transient read error does not end the UI.
pub struct InputStream {
    stream: EventStream,
}

impl InputStream {
    pub fn new() -> Self {
        InputStream {
            stream: EventStream::new(),
        }
    }

    /// Next terminal event, or `None` once stdin is closed.
    pub async fn next(&mut self) -> Option<InputEvent> {
        while let Some(result) = self.stream.next().await {
            match result {
                Ok(event) => return Some(event.into()),
                Err(e) => warn!("terminal event stream error (continuing): {}", e),
            }
        }
        None
    }
}

impl Default for InputStream {
    fn default() -> Self {
        Self::new()
    }
}
