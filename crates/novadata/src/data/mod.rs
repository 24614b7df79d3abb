//! Typed game data objects produced by the transformers.
//!
//! Every object type has a `Default` impl that doubles as its non-strict
//! substitute: when a requested id is missing and the engine is lenient,
//! the default object is returned in place of a failure.

mod image;
mod misc;
mod outfit;
mod ship;
mod sprite;
mod weapon;

pub use image::{Pict, PictImage, PictParts};
pub use misc::{Explosion, Planet, StarSystem, StatusBar, TargetCorners};
pub use outfit::Outfit;
pub use ship::{Animation, Ship, ShipProperties};
pub use sprite::{FrameRect, SpriteSheet, SpriteSheetFrames, SpriteSheetImage, SpriteSheetParts};
pub use weapon::Weapon;
