#![allow(dead_code)]

use egui::{Color32, ColorImage};
use parking_lot::Mutex;
use scene_editor::element::DecodedImage;
use scene_editor::loader::{CompletionSender, ImageLoader};
use scene_editor::video::HeadlessPlayer;
use scene_editor::{EditorConfig, EditorError, EditorEvent, Editor, EventHandler, MountPoint};
use std::sync::Arc;

/// Loader whose decodes finish only when the test says so
#[derive(Clone, Default)]
pub struct ManualLoader {
    pending: Arc<Mutex<Vec<CompletionSender>>>,
}

impl ImageLoader for ManualLoader {
    fn begin(&self, done: CompletionSender) {
        self.pending.lock().push(done);
    }
}

impl ManualLoader {
    pub fn pending_urls(&self) -> Vec<String> {
        self.pending
            .lock()
            .iter()
            .map(|done| done.ticket().url.clone())
            .collect()
    }

    /// Finish the oldest outstanding request for `url`
    pub fn complete(&self, url: &str, result: Result<DecodedImage, EditorError>) {
        let done = {
            let mut pending = self.pending.lock();
            let index = pending
                .iter()
                .position(|done| done.ticket().url == url)
                .unwrap_or_else(|| panic!("no pending decode for {url}"));
            pending.remove(index)
        };
        done.complete(result);
    }

    pub fn succeed(&self, url: &str) {
        self.complete(url, Ok(test_image(100, 80)));
    }

    pub fn fail(&self, url: &str) {
        self.complete(url, Err(EditorError::resource_load(url, "404 Not Found")));
    }
}

pub fn test_image(width: usize, height: usize) -> DecodedImage {
    DecodedImage::new(ColorImage::new([width, height], Color32::RED))
}

pub fn mounts() -> Vec<MountPoint> {
    vec![MountPoint::new("container")]
}

pub fn editor() -> (Editor, ManualLoader) {
    let loader = ManualLoader::default();
    let editor = Editor::new(
        EditorConfig::default(),
        &mounts(),
        Box::new(loader.clone()),
        Box::new(HeadlessPlayer::new()),
    )
    .unwrap();
    (editor, loader)
}

/// Collects every processed event
#[derive(Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<EditorEvent>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.lock().clone()
    }
}

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.events.lock().push(event.clone());
    }
}
