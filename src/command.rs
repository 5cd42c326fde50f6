use egui::{Pos2, Vec2};

use crate::element::FontFamily;
use crate::id_generator::ElementId;

/// User actions the editor executes, one at a time and to completion
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The text input changed
    SetPendingText(String),
    /// "Add Text" / "Remove Text"
    ToggleText,
    SetFontFamily(FontFamily),
    AddImage(String),
    RemoveLastImage,
    /// "Add Video" / "Pause Video" / "Play Video"
    ToggleVideo,
    StopVideo,
    /// Click at a canvas position
    Click(Pos2),
    /// An element is being dragged by `delta`
    Drag { id: ElementId, delta: Vec2 },
    EndDrag(ElementId),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetPendingText(_) => "SetPendingText",
            Command::ToggleText => "ToggleText",
            Command::SetFontFamily(_) => "SetFontFamily",
            Command::AddImage(_) => "AddImage",
            Command::RemoveLastImage => "RemoveLastImage",
            Command::ToggleVideo => "ToggleVideo",
            Command::StopVideo => "StopVideo",
            Command::Click(_) => "Click",
            Command::Drag { .. } => "Drag",
            Command::EndDrag(_) => "EndDrag",
        }
    }
}
