//! Lazily materialized game data for EV Nova-style archives.
//!
//! This crate sits on top of [`novadata_resource`]'s merged id space and
//! exposes the game's content as typed, cross-referenced objects, one
//! memoizing accessor per category:
//!
//! - every id is transformed at most once, no matter how many concurrent
//!   callers request it, and the result (success or failure) is cached;
//! - a failed space build is captured as a value and replayed to every
//!   accessor instead of failing construction;
//! - two derived fallback maps patch holes in the data the way the game
//!   engine expects: ships without a PICT borrow one from the first ship
//!   sharing their base sprite sheet, and weapons learn which outfit
//!   introduces them;
//! - expensive multi-part decodes (PICT pixels, rlëD sprite sheets) run
//!   once per id and feed several independently cached accessors.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use novadata::GameData;
//! use novadata_resource::{GlobalId, LocalId, MemoryProvider};
//!
//! # async fn demo(provider: MemoryProvider) -> novadata::Result<()> {
//! let game = GameData::new(Arc::new(provider), false);
//!
//! let id = GlobalId::from_parts(0, LocalId(128));
//! let ship = game.ships.get(id).await?;
//! let pict = game.picts.get(ship.pict_id).await?;
//! println!("{}: {}x{}", ship.name, pict.width, pict.height);
//! # Ok(())
//! # }
//! ```

pub use novadata_resource as resource;

mod data;
mod error;
mod fallback;
mod game_data;
mod gettable;
mod reporter;
mod transform;

pub use data::{
    Animation, Explosion, FrameRect, Outfit, Pict, PictImage, PictParts, Planet, Ship,
    ShipProperties, SpriteSheet, SpriteSheetFrames, SpriteSheetImage, SpriteSheetParts,
    StarSystem, StatusBar, TargetCorners, Weapon,
};
pub use error::{Error, Result};
pub use fallback::{ShipPictMap, WeaponOutfitMap};
pub use game_data::GameData;
pub use gettable::Gettable;
pub use reporter::ProblemReporter;
