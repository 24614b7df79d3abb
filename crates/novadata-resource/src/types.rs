//! Resource type tags and identifier newtypes.

use std::fmt;

/// Resource types this engine understands.
///
/// Each variant corresponds to one four-character tag found in the source
/// archives. Dispatch over resource type is always exhaustive enum dispatch;
/// the tag strings exist only for display and for matching provider input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    /// Ship definition (`shïp`).
    Ship,
    /// Outfit definition (`öutf`).
    Outfit,
    /// Weapon definition (`wëap`).
    Weapon,
    /// Still image (`PICT`).
    Pict,
    /// Long-form description text (`dësc`).
    Desc,
    /// Ship animation definition (`shän`).
    Shan,
    /// Run-length encoded sprite sheet (`rlëD`).
    SpriteSheet,
    /// Explosion definition (`bööm`).
    Explosion,
    /// Planet or station (`spöb`).
    Planet,
    /// Star system (`sÿst`).
    System,
    /// HUD status bar layout (`ïntf`).
    StatusBar,
    /// Target bracket corners (`cicn`).
    TargetCorners,
}

impl ResourceType {
    /// All resource types, in a fixed order usable for table indexing.
    pub const ALL: [ResourceType; 12] = [
        ResourceType::Ship,
        ResourceType::Outfit,
        ResourceType::Weapon,
        ResourceType::Pict,
        ResourceType::Desc,
        ResourceType::Shan,
        ResourceType::SpriteSheet,
        ResourceType::Explosion,
        ResourceType::Planet,
        ResourceType::System,
        ResourceType::StatusBar,
        ResourceType::TargetCorners,
    ];

    /// Number of resource types.
    pub const COUNT: usize = Self::ALL.len();

    /// The four-character archive tag for this type.
    pub fn tag(self) -> &'static str {
        match self {
            ResourceType::Ship => "shïp",
            ResourceType::Outfit => "öutf",
            ResourceType::Weapon => "wëap",
            ResourceType::Pict => "PICT",
            ResourceType::Desc => "dësc",
            ResourceType::Shan => "shän",
            ResourceType::SpriteSheet => "rlëD",
            ResourceType::Explosion => "bööm",
            ResourceType::Planet => "spöb",
            ResourceType::System => "sÿst",
            ResourceType::StatusBar => "ïntf",
            ResourceType::TargetCorners => "cicn",
        }
    }

    /// Parse an archive tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.tag() == tag)
    }

    /// Position of this type within [`ResourceType::ALL`].
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Identifier unique within one resource type's table inside one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LocalId(pub u16);

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for LocalId {
    fn from(value: u16) -> Self {
        LocalId(value)
    }
}

/// Identifier unique across the whole merged space.
///
/// A global id is a pure function of the record's source archive position in
/// load order and its local id: `(ordinal + 1) << 16 | local`. Rebuilding the
/// space from the same sources therefore reproduces identical global ids.
/// Ordinal zero is reserved, so [`GlobalId::DEFAULT`] is never assigned to a
/// real record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalId(u32);

impl GlobalId {
    /// Sentinel used where a reference could not be resolved and a default
    /// object stands in. Never assigned by the builder.
    pub const DEFAULT: GlobalId = GlobalId(0);

    /// Build a global id from a source ordinal (position in load order) and
    /// a local id.
    #[inline]
    pub fn from_parts(source_ordinal: u16, local: LocalId) -> Self {
        GlobalId(((source_ordinal as u32 + 1) << 16) | local.0 as u32)
    }

    /// The source ordinal this id was assigned under.
    #[inline]
    pub fn source_ordinal(self) -> u16 {
        (self.0 >> 16).saturating_sub(1) as u16
    }

    /// The local id component.
    #[inline]
    pub fn local(self) -> LocalId {
        LocalId(self.0 as u16)
    }

    /// Raw numeric value.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == GlobalId::DEFAULT {
            f.write_str("default")
        } else {
            write!(f, "{}:{}", self.0 >> 16, self.0 as u16)
        }
    }
}
