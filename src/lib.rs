#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod editor;
pub mod element;
pub mod error;
pub mod event;
pub mod id_generator;
pub mod input;
pub mod loader;
pub mod panels;
pub mod selection;
pub mod state;
pub mod surface;
pub mod texture_manager;
pub mod tools;
pub mod video;

pub use app::SceneEditorApp;
pub use command::Command;
pub use config::EditorConfig;
pub use editor::Editor;
pub use element::{Element, ElementKind, ElementType, FontFamily};
pub use error::{EditorError, EditorResult};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use id_generator::ElementId;
pub use selection::Selection;
pub use state::EditorState;
pub use surface::{CanvasSurface, MountPoint};
pub use tools::{ImageTool, TextTool, TextToolState, Tool};
pub use video::{PlaybackState, VideoOverlay};
