use egui::{Pos2, pos2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;

// Where each tool drops a freshly created element
pub const DEFAULT_TEXT_POSITION: Pos2 = pos2(100.0, 100.0);
pub const DEFAULT_IMAGE_POSITION: Pos2 = pos2(150.0, 50.0);

pub const DEFAULT_FONT_SIZE: u32 = 40;

/// Average advance of a glyph relative to the font size, used for text hit areas
pub(crate) const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// The two categories of placeable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Text,
    Image,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Font families offered by the font selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    #[serde(rename = "Courier New")]
    CourierNew,
    Georgia,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Verdana,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Arial,
        FontFamily::CourierNew,
        FontFamily::Georgia,
        FontFamily::TimesNewRoman,
        FontFamily::Verdana,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Verdana => "Verdana",
        }
    }

    /// egui only ships a proportional and a monospace face
    pub fn egui_family(&self) -> egui::FontFamily {
        match self {
            FontFamily::CourierNew => egui::FontFamily::Monospace,
            _ => egui::FontFamily::Proportional,
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| EditorError::UnknownFontFamily(s.to_owned()))
    }
}
