//! Planets, systems, explosions, and HUD data.

use novadata_resource::GlobalId;

/// A planet or station.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: GlobalId,
    pub name: String,
    pub position: (i32, i32),
    /// Global id of the landing PICT, or the default sentinel.
    pub graphic_id: GlobalId,
    pub desc: String,
}

impl Default for Planet {
    fn default() -> Self {
        Planet {
            id: GlobalId::DEFAULT,
            name: "default planet".into(),
            position: (0, 0),
            graphic_id: GlobalId::DEFAULT,
            desc: String::new(),
        }
    }
}

/// A star system.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    pub id: GlobalId,
    pub name: String,
    pub position: (i32, i32),
    /// Planets present in this system, in slot order, as global ids.
    pub planets: Vec<GlobalId>,
}

impl Default for StarSystem {
    fn default() -> Self {
        StarSystem {
            id: GlobalId::DEFAULT,
            name: "default system".into(),
            position: (0, 0),
            planets: Vec::new(),
        }
    }
}

/// An explosion definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub id: GlobalId,
    pub name: String,
    /// Global id of the sprite sheet holding the graphics, or the default
    /// sentinel.
    pub sprite_sheet_id: GlobalId,
    /// Playback rate as a fraction of the base frame rate (1.0 = 100%).
    pub rate: f32,
}

impl Default for Explosion {
    fn default() -> Self {
        Explosion {
            id: GlobalId::DEFAULT,
            name: "default explosion".into(),
            sprite_sheet_id: GlobalId::DEFAULT,
            rate: 1.0,
        }
    }
}

/// HUD status bar layout.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBar {
    pub id: GlobalId,
    pub name: String,
    /// Global id of the backdrop PICT, or the default sentinel.
    pub image_id: GlobalId,
    pub shield_color: u32,
    pub armor_color: u32,
    pub fuel_color: u32,
}

impl Default for StatusBar {
    fn default() -> Self {
        StatusBar {
            id: GlobalId::DEFAULT,
            name: "default status bar".into(),
            image_id: GlobalId::DEFAULT,
            shield_color: 0x00ff_ffff,
            armor_color: 0x00ff_8000,
            fuel_color: 0x0080_ff80,
        }
    }
}

/// Target bracket corner dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCorners {
    pub id: GlobalId,
    pub name: String,
    pub width: u16,
    pub height: u16,
}

impl Default for TargetCorners {
    fn default() -> Self {
        TargetCorners {
            id: GlobalId::DEFAULT,
            name: "default target corners".into(),
            width: 8,
            height: 8,
        }
    }
}
