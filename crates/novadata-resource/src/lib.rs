//! Merged resource id space for overlaid EV Nova-style data archives.
//!
//! A game install is a stack of archives: the stock data files plus any
//! number of plug-ins layered on top. Each archive carries flat tables of
//! tag-keyed records (ships, outfits, weapons, images). This crate merges
//! those tables into one globally-addressable, immutable
//! [`ResourceIdSpace`]:
//!
//! - every record gets a [`GlobalId`] that is a pure function of its source's
//!   position in load order and its local id, so rebuilds are reproducible;
//! - when two sources carry the same (type, local id), the later-loaded
//!   source overrides the earlier one;
//! - cross-type references are resolved through [`RecordHandle`], an owned
//!   `(space, type, local id)` triple — records never point at each other.
//!
//! # Example
//!
//! ```
//! use novadata_resource::{
//!     build_id_space, ArchiveSource, DescFields, LocalId, RecordFields, ResourceType,
//!     SeedRecord,
//! };
//!
//! let base = ArchiveSource::new("base").with(SeedRecord::new(
//!     128u16,
//!     "Shuttle blurb",
//!     RecordFields::Desc(DescFields { text: "A reliable workhorse.".into() }),
//! ));
//!
//! let space = build_id_space(&[base])?;
//! let record = space.record(ResourceType::Desc, LocalId(128)).unwrap();
//! assert_eq!(record.global_id.source_ordinal(), 0);
//! # Ok::<(), novadata_resource::Error>(())
//! ```

mod builder;
mod error;
mod provider;
mod record;
mod space;
mod types;

pub use builder::{build_id_space, ArchiveSource};
pub use error::{Error, Result};
pub use provider::{MemoryProvider, RecordProvider};
pub use record::{
    DescFields, ExplosionFields, OutfitFields, PictFields, PlanetFields, RawRecord, RecordFields,
    SeedRecord, ShanFields, ShipFields, SpriteSheetFields, StatusBarFields, SystemFields,
    TargetCornersFields, WeaponFields,
};
pub use space::{RecordHandle, RecordTable, ResourceIdSpace};
pub use types::{GlobalId, LocalId, ResourceType};
