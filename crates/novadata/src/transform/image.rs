//! PICT transformer: one decode, two projections.

use std::sync::Arc;

use novadata_resource::RecordHandle;

use crate::data::{Pict, PictImage, PictParts};
use crate::reporter::ProblemReporter;
use crate::{Error, Result};

/// Decode a PICT record into metadata plus RGBA pixels.
///
/// The palette expansion is the expensive half, so it runs once here and
/// the public `Pict` and `PictImage` accessors project out their slice of
/// the combined result.
pub(crate) async fn pict_parts(
    handle: RecordHandle,
    _reporter: ProblemReporter,
) -> Result<PictParts> {
    let record = handle.record();
    let Some(fields) = record.fields.as_pict() else {
        return Err(Error::Transform(format!("record {} is not a PICT", record.global_id)));
    };
    let id = record.global_id;

    let expected = fields.width as usize * fields.height as usize;
    if fields.indexed.len() != expected {
        return Err(Error::Transform(format!(
            "PICT {id} has {} pixels, expected {expected}",
            fields.indexed.len()
        )));
    }

    let mut rgba = Vec::with_capacity(expected * 4);
    for &index in &fields.indexed {
        rgba.extend_from_slice(&expand_palette(index));
    }

    Ok(PictParts {
        pict: Arc::new(Pict {
            id,
            name: record.name.clone(),
            width: fields.width,
            height: fields.height,
        }),
        image: Arc::new(PictImage {
            id,
            width: fields.width,
            height: fields.height,
            rgba: rgba.into(),
        }),
    })
}

/// The archives use an 8-bit greyscale palette; index 255 is transparent.
pub(crate) fn expand_palette(index: u8) -> [u8; 4] {
    if index == 255 {
        [0, 0, 0, 0]
    } else {
        [index, index, index, 255]
    }
}
