//! Background video overlay.
//!
//! ```text
//!            toggle            toggle
//!  Absent ───────────► Playing ◄──────► Paused
//!    ▲                    │                │
//!    └────── stop ────────┴────────────────┘
//! ```

use log::{info, warn};

use crate::error::{EditorError, EditorResult};

pub const DEFAULT_VIDEO_URL: &str = "https://www.w3schools.com/html/mov_bbb.mp4";

/// Fixed playback configuration of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackOptions {
    pub autoplay: bool,
    pub looped: bool,
    pub muted: bool,
}

pub const OVERLAY_PLAYBACK: PlaybackOptions = PlaybackOptions {
    autoplay: true,
    looped: true,
    muted: true,
};

/// Opaque video decoder/player
pub trait VideoPlayer {
    /// Opens `url` and starts playback according to `options`
    fn load(&mut self, url: &str, options: PlaybackOptions) -> EditorResult<()>;
    fn play(&mut self);
    fn pause(&mut self);
    /// Stops playback and drops the loaded resource
    fn unload(&mut self);
    fn is_playing(&self) -> bool;
    /// Playback position in seconds
    fn current_time(&self) -> f64;
    /// Advance playback by `dt` seconds of wall time
    fn advance(&mut self, _dt: f64) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Absent,
    Playing,
    Paused,
}

/// A player that keeps time but never decodes a frame
#[derive(Debug, Clone, Default)]
pub struct HeadlessPlayer {
    source: Option<String>,
    options: Option<PlaybackOptions>,
    playing: bool,
    position: f64,
    /// Clip length used for looping, if known
    duration: Option<f64>,
}

impl HeadlessPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn options(&self) -> Option<PlaybackOptions> {
        self.options
    }
}

impl VideoPlayer for HeadlessPlayer {
    fn load(&mut self, url: &str, options: PlaybackOptions) -> EditorResult<()> {
        if url.trim().is_empty() {
            return Err(EditorError::resource_load(url, "empty video source"));
        }
        self.source = Some(url.to_owned());
        self.options = Some(options);
        self.position = 0.0;
        self.playing = options.autoplay;
        Ok(())
    }

    fn play(&mut self) {
        if self.source.is_some() {
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn unload(&mut self) {
        self.source = None;
        self.options = None;
        self.playing = false;
        self.position = 0.0;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn advance(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        self.position += dt;
        if let Some(duration) = self.duration.filter(|d| *d > 0.0) {
            let looped = self.options.is_some_and(|o| o.looped);
            if self.position >= duration {
                if looped {
                    self.position %= duration;
                } else {
                    self.position = duration;
                    self.playing = false;
                }
            }
        }
    }
}

/// Background video layer. Never part of the element list or the selection.
pub struct VideoOverlay {
    player: Box<dyn VideoPlayer>,
    source_url: String,
    /// Empty while no video is shown
    url: String,
    playing: bool,
}

impl std::fmt::Debug for VideoOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoOverlay")
            .field("url", &self.url)
            .field("playing", &self.playing)
            .finish_non_exhaustive()
    }
}

impl VideoOverlay {
    pub fn new(player: Box<dyn VideoPlayer>) -> Self {
        Self::with_source(player, DEFAULT_VIDEO_URL)
    }

    /// Overlay that shows `source_url` when toggled on
    pub fn with_source(player: Box<dyn VideoPlayer>, source_url: impl Into<String>) -> Self {
        Self {
            player,
            source_url: source_url.into(),
            url: String::new(),
            playing: false,
        }
    }

    pub fn state(&self) -> PlaybackState {
        match (self.url.is_empty(), self.playing) {
            (true, _) => PlaybackState::Absent,
            (false, true) => PlaybackState::Playing,
            (false, false) => PlaybackState::Paused,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_time(&self) -> f64 {
        self.player.current_time()
    }

    /// Source shown the next time the overlay is toggled on
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Advances the state machine. A source that fails to load leaves the overlay Absent.
    pub fn toggle(&mut self) -> EditorResult<PlaybackState> {
        match self.state() {
            PlaybackState::Absent => {
                if self.source_url.is_empty() {
                    warn!("No video source configured");
                    return Err(EditorError::resource_load("", "no video source configured"));
                }
                if let Err(err) = self.player.load(&self.source_url, OVERLAY_PLAYBACK) {
                    warn!("Video {} was not added: {}", self.source_url, err);
                    return Err(err);
                }
                self.url = self.source_url.clone();
                self.playing = true;
                info!("Video {} added", self.url);
            }
            PlaybackState::Playing => {
                self.player.pause();
                self.playing = false;
            }
            PlaybackState::Paused => {
                self.player.play();
                self.playing = true;
            }
        }
        Ok(self.state())
    }

    pub fn stop(&mut self) {
        if self.state() != PlaybackState::Absent {
            info!("Video {} stopped", self.url);
            self.player.unload();
        }
        self.url.clear();
        self.playing = false;
    }

    /// Forward frame time to the player
    pub fn tick(&mut self, dt: f64) {
        if self.playing {
            self.player.advance(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_player_loops() {
        let mut player = HeadlessPlayer::with_duration(10.0);
        player.load("clip.mp4", OVERLAY_PLAYBACK).unwrap();
        assert!(player.is_playing());

        player.advance(12.5);
        assert!((player.current_time() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_headless_player_stops_at_end_without_loop() {
        let mut player = HeadlessPlayer::with_duration(4.0);
        player.load(
            "clip.mp4",
            PlaybackOptions {
                autoplay: true,
                looped: false,
                muted: true,
            },
        )
        .unwrap();
        player.advance(5.0);
        assert!(!player.is_playing());
        assert_eq!(player.current_time(), 4.0);
    }

    #[test]
    fn test_paused_overlay_does_not_advance() {
        let mut overlay = VideoOverlay::new(Box::new(HeadlessPlayer::new()));
        overlay.toggle().unwrap();
        overlay.tick(1.0);
        overlay.toggle().unwrap();
        overlay.tick(1.0);
        assert_eq!(overlay.state(), PlaybackState::Paused);
        assert!((overlay.current_time() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_headless_player_rejects_empty_source() {
        let mut player = HeadlessPlayer::new();
        let err = player.load("", OVERLAY_PLAYBACK).unwrap_err();
        assert!(matches!(err, EditorError::ResourceLoad { .. }));
        assert!(!player.is_playing());
        assert_eq!(player.source(), None);
    }
}
