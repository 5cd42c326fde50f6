//! Fetching and decoding image sources off the UI thread.
//!
//! A loader receives a [`DecodeTicket`] and a [`CompletionSender`] and reports back exactly once.
//! Completions arrive on one channel in the order decodes finish, which is not necessarily the
//! order they were requested in.

use egui::ColorImage;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use log::{debug, info, warn};

use crate::element::DecodedImage;
use crate::error::{EditorError, EditorResult};

/// One outstanding request to fetch and decode an image source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeTicket {
    pub id: u64,
    pub url: String,
}

#[derive(Debug)]
pub struct DecodeCompletion {
    pub ticket: DecodeTicket,
    pub result: EditorResult<DecodedImage>,
}

/// Reports the outcome of one ticket back to the editor
#[derive(Debug)]
pub struct CompletionSender {
    ticket: DecodeTicket,
    sender: UnboundedSender<DecodeCompletion>,
}

impl CompletionSender {
    pub(crate) fn new(ticket: DecodeTicket, sender: UnboundedSender<DecodeCompletion>) -> Self {
        Self { ticket, sender }
    }

    pub fn ticket(&self) -> &DecodeTicket {
        &self.ticket
    }

    pub fn complete(self, result: EditorResult<DecodedImage>) {
        let completion = DecodeCompletion {
            ticket: self.ticket,
            result,
        };
        if let Err(err) = self.sender.unbounded_send(completion) {
            // The editor is gone; nobody is waiting for this image anymore
            debug!("Dropping decode completion: {}", err);
        }
    }
}

pub(crate) fn completion_channel() -> (
    UnboundedSender<DecodeCompletion>,
    UnboundedReceiver<DecodeCompletion>,
) {
    mpsc::unbounded()
}

/// Source of decoded images
pub trait ImageLoader {
    /// Starts loading `done.ticket()`. Must return without waiting for the result.
    fn begin(&self, done: CompletionSender);
}

/// Loads every request on its own worker thread
#[derive(Default)]
pub struct ThreadedImageLoader {
    repaint: Option<egui::Context>,
}

impl ThreadedImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a repaint of `ctx` whenever a decode finishes
    pub fn with_repaint(ctx: egui::Context) -> Self {
        Self { repaint: Some(ctx) }
    }
}

impl ImageLoader for ThreadedImageLoader {
    fn begin(&self, done: CompletionSender) {
        let repaint = self.repaint.clone();
        let url = done.ticket().url.clone();
        let spawned = std::thread::Builder::new()
            .name(format!("image-loader-{}", done.ticket().id))
            .spawn(move || {
                let result = fetch_bytes(&url).and_then(|bytes| decode_bytes(&url, &bytes));
                done.complete(result);
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            });
        if let Err(err) = spawned {
            // The sender moved into the closure is dropped with it, so the ticket never completes
            warn!("Failed to spawn image loader thread: {}", err);
        }
    }
}

/// Reads the raw bytes behind `url`: http(s) is fetched, anything else is a file path
pub fn fetch_bytes(url: &str) -> EditorResult<Vec<u8>> {
    if url.starts_with("http://") || url.starts_with("https://") {
        info!("Fetching image from {}", url);
        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| EditorError::resource_load(url, e))?;
        let bytes = response
            .bytes()
            .map_err(|e| EditorError::resource_load(url, e))?;
        Ok(bytes.to_vec())
    } else {
        let path = url.strip_prefix("file://").unwrap_or(url);
        info!("Reading image from {}", path);
        std::fs::read(path).map_err(|e| EditorError::resource_load(url, e))
    }
}

/// Decodes an encoded image (png, jpeg, ...) into RGBA pixels
pub fn decode_bytes(url: &str, bytes: &[u8]) -> EditorResult<DecodedImage> {
    let img = image::load_from_memory(bytes).map_err(|e| EditorError::resource_load(url, e))?;
    debug!("Decoded {}: {}x{}", url, img.width(), img.height());

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Ok(DecodedImage::new(pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let decoded = decode_bytes("red.png", &png_bytes(3, 2)).unwrap();
        assert_eq!(decoded.dimensions(), [3, 2]);
        assert_eq!(decoded.pixels().pixels[0], egui::Color32::RED);
    }

    #[test]
    fn test_decode_garbage_fails_with_url() {
        let err = decode_bytes("broken.png", b"not an image").unwrap_err();
        assert!(matches!(err, EditorError::ResourceLoad { ref url, .. } if url == "broken.png"));
    }

    #[test]
    fn test_missing_file_fails() {
        let err = fetch_bytes("file:///definitely/not/here.png").unwrap_err();
        assert!(matches!(err, EditorError::ResourceLoad { .. }));
    }

    #[test]
    fn test_completions_arrive_in_send_order() {
        let (tx, mut rx) = completion_channel();
        let first = CompletionSender::new(DecodeTicket { id: 1, url: "a.png".into() }, tx.clone());
        let second = CompletionSender::new(DecodeTicket { id: 2, url: "b.png".into() }, tx);

        second.complete(Err(EditorError::resource_load("b.png", "boom")));
        first.complete(Err(EditorError::resource_load("a.png", "boom")));

        let ids: Vec<u64> = std::iter::from_fn(|| rx.try_next().ok().flatten())
            .map(|c| c.ticket.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
