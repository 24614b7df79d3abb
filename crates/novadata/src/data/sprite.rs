//! Sprite sheet (rlëD) data.

use std::sync::Arc;

use novadata_resource::GlobalId;

/// Sprite sheet metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    pub id: GlobalId,
    pub name: String,
    pub frame_width: u16,
    pub frame_height: u16,
    pub frame_count: u16,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        SpriteSheet {
            id: GlobalId::DEFAULT,
            name: "default sprite sheet".into(),
            frame_width: 24,
            frame_height: 24,
            frame_count: 1,
        }
    }
}

/// The fully expanded sheet, RGBA, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheetImage {
    pub id: GlobalId,
    pub width: u16,
    pub height: u16,
    pub rgba: Arc<[u8]>,
}

impl Default for SpriteSheetImage {
    fn default() -> Self {
        let sheet = SpriteSheet::default();
        let pixels = sheet.frame_width as usize * sheet.frame_height as usize;
        SpriteSheetImage {
            id: GlobalId::DEFAULT,
            width: sheet.frame_width,
            height: sheet.frame_height,
            rgba: vec![0u8; pixels * 4].into(),
        }
    }
}

/// Pixel rectangle of one frame within the expanded sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Frame geometry for one sheet, in frame order (row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheetFrames {
    pub id: GlobalId,
    pub frames: Vec<FrameRect>,
}

impl Default for SpriteSheetFrames {
    fn default() -> Self {
        let sheet = SpriteSheet::default();
        SpriteSheetFrames {
            id: GlobalId::DEFAULT,
            frames: vec![FrameRect {
                x: 0,
                y: 0,
                width: sheet.frame_width,
                height: sheet.frame_height,
            }],
        }
    }
}

/// Combined result of one rlëD decode.
///
/// Run-length expansion and frame geometry come out of a single pass; the
/// three public sprite accessors are projections over this.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpriteSheetParts {
    pub sheet: Arc<SpriteSheet>,
    pub image: Arc<SpriteSheetImage>,
    pub frames: Arc<SpriteSheetFrames>,
}
