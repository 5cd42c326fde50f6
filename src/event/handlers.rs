use crate::event::{EditorEvent, EventHandler};

/// Writes every processed event to the log
#[derive(Debug, Default)]
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::ResourceLoadFailed { url, reason } => {
                log::warn!("Resource {} failed to load: {}", url, reason);
            }
            other => log::debug!("Event: {:?}", other),
        }
    }
}
