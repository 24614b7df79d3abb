//! Sprite sheet (rlëD) transformer: one expansion, three projections.

use std::sync::Arc;

use novadata_resource::RecordHandle;

use crate::data::{FrameRect, SpriteSheet, SpriteSheetFrames, SpriteSheetImage, SpriteSheetParts};
use crate::reporter::ProblemReporter;
use crate::transform::image::expand_palette;
use crate::{Error, Result};

/// Expand a run-length encoded sprite sheet.
///
/// One pass produces the full RGBA sheet, its metadata, and the per-frame
/// geometry; the three public sprite accessors project out of this combined
/// result so the expansion never runs more than once per id.
pub(crate) async fn sprite_sheet_parts(
    handle: RecordHandle,
    _reporter: ProblemReporter,
) -> Result<SpriteSheetParts> {
    let record = handle.record();
    let Some(fields) = record.fields.as_sprite_sheet() else {
        return Err(Error::Transform(format!("record {} is not an rlëD", record.global_id)));
    };
    let id = record.global_id;

    if fields.frames_per_row == 0 || fields.frame_count == 0 {
        return Err(Error::Transform(format!("rlëD {id} declares no frames")));
    }

    let per_row = fields.frames_per_row.min(fields.frame_count);
    let rows = fields.frame_count.div_ceil(per_row);
    let width = per_row as u32 * fields.frame_width as u32;
    let height = rows as u32 * fields.frame_height as u32;
    let expected = (width * height) as usize;

    let mut rgba = Vec::with_capacity(expected * 4);
    for &(run, index) in &fields.runs {
        let pixel = expand_palette(index);
        for _ in 0..run {
            rgba.extend_from_slice(&pixel);
        }
    }
    if rgba.len() != expected * 4 {
        return Err(Error::Transform(format!(
            "rlëD {id} run data covers {} pixels, expected {expected}",
            rgba.len() / 4
        )));
    }

    let frames = (0..fields.frame_count)
        .map(|frame| FrameRect {
            x: (frame % per_row) * fields.frame_width,
            y: (frame / per_row) * fields.frame_height,
            width: fields.frame_width,
            height: fields.frame_height,
        })
        .collect();

    Ok(SpriteSheetParts {
        sheet: Arc::new(SpriteSheet {
            id,
            name: record.name.clone(),
            frame_width: fields.frame_width,
            frame_height: fields.frame_height,
            frame_count: fields.frame_count,
        }),
        image: Arc::new(SpriteSheetImage {
            id,
            width: width as u16,
            height: height as u16,
            rgba: rgba.into(),
        }),
        frames: Arc::new(SpriteSheetFrames { id, frames }),
    })
}
