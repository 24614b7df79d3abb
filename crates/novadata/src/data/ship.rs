//! Ship data.

use novadata_resource::GlobalId;

/// Flight and combat properties, converted to per-second units.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShipProperties {
    pub shield: f32,
    /// Shield points per second.
    pub shield_recharge: f32,
    pub armor: f32,
    /// Armor points per second.
    pub armor_recharge: f32,
    pub energy: f32,
    /// Energy units per second.
    pub energy_recharge: f32,
    pub ionization: f32,
    /// Ion points shed per second.
    pub deionize: f32,
    pub speed: f32,
    pub acceleration: f32,
    /// Radians per second.
    pub turn_rate: f32,
    pub mass: f32,
    pub free_mass: f32,
}

/// Sprite animation metadata resolved from a ship's `shän` record.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// Global id of the base sprite sheet, or the default sentinel.
    pub sprite_sheet_id: GlobalId,
    pub frame_count: u16,
    pub size: (u16, u16),
}

impl Default for Animation {
    /// The stand-in animation used when a ship has no resolvable `shän`.
    fn default() -> Self {
        Animation {
            sprite_sheet_id: GlobalId::DEFAULT,
            frame_count: 1,
            size: (24, 24),
        }
    }
}

/// A fully resolved ship.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub id: GlobalId,
    pub name: String,
    pub properties: ShipProperties,
    /// Global id of the ship's PICT, possibly inferred through the
    /// base-image fallback map, or the default sentinel.
    pub pict_id: GlobalId,
    pub desc: String,
    pub initial_explosion: Option<GlobalId>,
    pub final_explosion: Option<GlobalId>,
    /// Seconds between destruction and the final explosion.
    pub death_delay: f32,
    pub large_explosion: bool,
    pub display_weight: u32,
    pub animation: Animation,
}

impl Default for Ship {
    fn default() -> Self {
        Ship {
            id: GlobalId::DEFAULT,
            name: "default ship".into(),
            properties: ShipProperties::default(),
            pict_id: GlobalId::DEFAULT,
            desc: String::new(),
            initial_explosion: None,
            final_explosion: None,
            death_delay: 0.0,
            large_explosion: false,
            display_weight: 0,
            animation: Animation::default(),
        }
    }
}
