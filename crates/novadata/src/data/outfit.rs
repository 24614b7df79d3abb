//! Outfit data.

use novadata_resource::GlobalId;

/// A fully resolved outfit.
#[derive(Debug, Clone, PartialEq)]
pub struct Outfit {
    pub id: GlobalId,
    pub name: String,
    /// Weapons this outfit grants, in declaration order, as global ids.
    pub weapons: Vec<GlobalId>,
    pub mass: f32,
    pub price: i32,
    pub display_weight: i32,
}

impl Default for Outfit {
    fn default() -> Self {
        Outfit {
            id: GlobalId::DEFAULT,
            name: "default outfit".into(),
            weapons: Vec::new(),
            mass: 0.0,
            price: 0,
            display_weight: 0,
        }
    }
}
