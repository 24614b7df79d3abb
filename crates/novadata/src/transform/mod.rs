//! Record transformers: raw records to typed game data objects.
//!
//! Each transformer takes an owned [`RecordHandle`](novadata_resource::RecordHandle)
//! plus the problem reporter, resolves every cross-reference through the
//! shared space, and converts raw archive units into per-second quantities.
//! Unresolved references go through the reporter: fatal in strict mode,
//! logged-and-defaulted otherwise.

mod image;
mod misc;
mod outfit;
mod ship;
mod sprite;
mod weapon;

pub(crate) use image::pict_parts;
pub(crate) use misc::{explosion, planet, star_system, status_bar, target_corners};
pub(crate) use outfit::outfit;
pub(crate) use ship::ship;
pub(crate) use sprite::sprite_sheet_parts;
pub(crate) use weapon::weapon;

/// Archive frame rate. Raw per-frame quantities convert through this.
pub(crate) const FPS: f32 = 30.0;

/// Hundredths of a degree per frame to radians per second.
pub(crate) const TURN_RATE_CONVERSION: f32 = FPS * std::f32::consts::PI / 18_000.0;
