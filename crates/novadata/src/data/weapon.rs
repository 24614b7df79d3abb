//! Weapon data.

use novadata_resource::GlobalId;

/// A fully resolved weapon.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub id: GlobalId,
    pub name: String,
    /// Seconds between shots.
    pub reload: f32,
    pub shot_speed: f32,
    pub shield_damage: f32,
    pub armor_damage: f32,
    /// The outfit that introduces this weapon, if any outfit declares it.
    pub source_outfit: Option<GlobalId>,
}

impl Default for Weapon {
    fn default() -> Self {
        Weapon {
            id: GlobalId::DEFAULT,
            name: "default weapon".into(),
            reload: 1.0,
            shot_speed: 0.0,
            shield_damage: 0.0,
            armor_damage: 0.0,
            source_outfit: None,
        }
    }
}
