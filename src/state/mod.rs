pub mod context;
mod editor_state;

pub use context::SceneContext;
pub use editor_state::EditorState;
