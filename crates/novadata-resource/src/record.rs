//! Raw records and their per-type field structs.
//!
//! Field decoding from archive bytes is the provider's job; what lands here
//! is already split into named fields. Numeric fields keep the raw archive
//! units (frames, hundredths, ticks) — unit conversion happens in the
//! transformers that turn raw records into game data objects.

use crate::types::{GlobalId, LocalId, ResourceType};

/// Fields of a ship definition (`shïp`).
///
/// Cross-references (`pict_id`, `desc_id`, explosion ids) are local ids
/// resolved through the merged space at transform time.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipFields {
    pub pict_id: LocalId,
    pub desc_id: LocalId,
    pub initial_explosion: Option<LocalId>,
    pub final_explosion: Option<LocalId>,
    pub shield: i32,
    /// Shield points regained per 1000 frames.
    pub shield_recharge: i32,
    pub armor: i32,
    pub armor_recharge: i32,
    pub energy: i32,
    /// Frames per unit of energy regained.
    pub energy_recharge: i32,
    pub ionization: i32,
    /// Hundredths of an ion point shed per frame.
    pub deionize: i32,
    pub speed: i32,
    pub acceleration: i32,
    /// Hundredths of a degree per frame.
    pub turn_rate: i32,
    pub mass: i32,
    /// Frames between destruction and the final explosion.
    pub death_delay: i32,
}

/// Fields of a ship animation definition (`shän`).
#[derive(Debug, Clone, PartialEq)]
pub struct ShanFields {
    /// Local id of the base sprite sheet (`rlëD`).
    pub base_image_id: LocalId,
    pub base_frame_count: u16,
    pub base_size: (u16, u16),
}

/// Fields of an outfit definition (`öutf`).
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitFields {
    /// Weapons granted by this outfit, in declaration order.
    pub weapons: Vec<LocalId>,
    pub mass: i32,
    pub price: i32,
    pub display_weight: i32,
}

/// Fields of a weapon definition (`wëap`).
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponFields {
    /// Frames between shots.
    pub reload: i32,
    pub shot_speed: i32,
    pub shield_damage: i32,
    pub armor_damage: i32,
}

/// Fields of a still image (`PICT`), pixels still palette-indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct PictFields {
    pub width: u16,
    pub height: u16,
    /// One palette index per pixel, row-major, `width * height` bytes.
    pub indexed: Vec<u8>,
}

/// Fields of a description record (`dësc`).
#[derive(Debug, Clone, PartialEq)]
pub struct DescFields {
    pub text: String,
}

/// Fields of a run-length encoded sprite sheet (`rlëD`).
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheetFields {
    pub frame_width: u16,
    pub frame_height: u16,
    pub frames_per_row: u16,
    pub frame_count: u16,
    /// `(run length, palette index)` pairs covering the whole sheet.
    pub runs: Vec<(u8, u8)>,
}

/// Fields of an explosion definition (`bööm`).
#[derive(Debug, Clone, PartialEq)]
pub struct ExplosionFields {
    /// Animation rate in percent of the base frame rate.
    pub frame_rate: u32,
    /// Local id of the sprite sheet holding the explosion graphics.
    pub sprite_id: LocalId,
}

/// Fields of a planet or station (`spöb`).
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetFields {
    pub pos_x: i32,
    pub pos_y: i32,
    /// Local id of the landing PICT.
    pub graphic_id: LocalId,
    pub desc_id: LocalId,
}

/// Fields of a star system (`sÿst`).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemFields {
    pub pos_x: i32,
    pub pos_y: i32,
    /// Planets present in this system, in slot order.
    pub planets: Vec<LocalId>,
}

/// Fields of a HUD status bar layout (`ïntf`).
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarFields {
    /// Local id of the backdrop PICT.
    pub image_id: LocalId,
    pub shield_color: u32,
    pub armor_color: u32,
    pub fuel_color: u32,
}

/// Fields of a target bracket icon (`cicn`).
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCornersFields {
    pub width: u16,
    pub height: u16,
}

/// Type-tagged fields of a raw record, one variant per resource type.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordFields {
    Ship(ShipFields),
    Outfit(OutfitFields),
    Weapon(WeaponFields),
    Pict(PictFields),
    Desc(DescFields),
    Shan(ShanFields),
    SpriteSheet(SpriteSheetFields),
    Explosion(ExplosionFields),
    Planet(PlanetFields),
    System(SystemFields),
    StatusBar(StatusBarFields),
    TargetCorners(TargetCornersFields),
}

macro_rules! fields_accessor {
    ($name:ident, $variant:ident, $ty:ty) => {
        /// Borrow the fields if this record is of the matching type.
        pub fn $name(&self) -> Option<&$ty> {
            match self {
                RecordFields::$variant(fields) => Some(fields),
                _ => None,
            }
        }
    };
}

impl RecordFields {
    /// The resource type these fields belong to.
    pub fn kind(&self) -> ResourceType {
        match self {
            RecordFields::Ship(_) => ResourceType::Ship,
            RecordFields::Outfit(_) => ResourceType::Outfit,
            RecordFields::Weapon(_) => ResourceType::Weapon,
            RecordFields::Pict(_) => ResourceType::Pict,
            RecordFields::Desc(_) => ResourceType::Desc,
            RecordFields::Shan(_) => ResourceType::Shan,
            RecordFields::SpriteSheet(_) => ResourceType::SpriteSheet,
            RecordFields::Explosion(_) => ResourceType::Explosion,
            RecordFields::Planet(_) => ResourceType::Planet,
            RecordFields::System(_) => ResourceType::System,
            RecordFields::StatusBar(_) => ResourceType::StatusBar,
            RecordFields::TargetCorners(_) => ResourceType::TargetCorners,
        }
    }

    fields_accessor!(as_ship, Ship, ShipFields);
    fields_accessor!(as_outfit, Outfit, OutfitFields);
    fields_accessor!(as_weapon, Weapon, WeaponFields);
    fields_accessor!(as_pict, Pict, PictFields);
    fields_accessor!(as_desc, Desc, DescFields);
    fields_accessor!(as_shan, Shan, ShanFields);
    fields_accessor!(as_sprite_sheet, SpriteSheet, SpriteSheetFields);
    fields_accessor!(as_explosion, Explosion, ExplosionFields);
    fields_accessor!(as_planet, Planet, PlanetFields);
    fields_accessor!(as_system, System, SystemFields);
    fields_accessor!(as_status_bar, StatusBar, StatusBarFields);
    fields_accessor!(as_target_corners, TargetCorners, TargetCornersFields);
}

/// One decoded, type-tagged record inside the merged space.
///
/// Records never hold references back into the space; cross-type lookups go
/// through a [`RecordHandle`](crate::RecordHandle) so the object graph stays
/// acyclic.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub kind: ResourceType,
    /// Identifier unique within this record's (type, source) table.
    pub local_id: LocalId,
    /// Identifier unique across the merged space, assigned by the builder.
    pub global_id: GlobalId,
    pub name: String,
    pub fields: RecordFields,
}

/// A record as supplied by a provider, before global id assignment.
///
/// The resource type is implied by the fields variant.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRecord {
    pub local_id: LocalId,
    pub name: String,
    pub fields: RecordFields,
}

impl SeedRecord {
    pub fn new(local_id: impl Into<LocalId>, name: impl Into<String>, fields: RecordFields) -> Self {
        SeedRecord {
            local_id: local_id.into(),
            name: name.into(),
            fields,
        }
    }

    /// The resource type this seed belongs to.
    pub fn kind(&self) -> ResourceType {
        self.fields.kind()
    }
}
