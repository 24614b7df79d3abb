//! Still image (PICT) data.

use std::sync::Arc;

use novadata_resource::GlobalId;

/// PICT metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Pict {
    pub id: GlobalId,
    pub name: String,
    pub width: u16,
    pub height: u16,
}

impl Default for Pict {
    fn default() -> Self {
        Pict {
            id: GlobalId::DEFAULT,
            name: "default pict".into(),
            width: 24,
            height: 24,
        }
    }
}

/// Decoded PICT pixels, RGBA, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PictImage {
    pub id: GlobalId,
    pub width: u16,
    pub height: u16,
    pub rgba: Arc<[u8]>,
}

impl Default for PictImage {
    fn default() -> Self {
        let default_pict = Pict::default();
        let pixels = default_pict.width as usize * default_pict.height as usize;
        PictImage {
            id: GlobalId::DEFAULT,
            width: default_pict.width,
            height: default_pict.height,
            rgba: vec![0u8; pixels * 4].into(),
        }
    }
}

/// Combined result of one PICT decode.
///
/// The expensive step (palette expansion) runs once; the public `Pict` and
/// `PictImage` accessors are projections over this.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PictParts {
    pub pict: Arc<Pict>,
    pub image: Arc<PictImage>,
}
