//! Derived fallback maps: ship→PICT inference and weapon→outfit ownership.
//!
//! Both routines run once per [`GameData`](crate::GameData), asynchronously,
//! over the whole id space. Ties are broken first-wins by the space's
//! per-type iteration order (ascending local id), which is stable across
//! runs. When the space itself failed to build, each routine yields an
//! empty map rather than an error — the accessors that consult the maps
//! surface the build failure themselves.

use std::hash::BuildHasherDefault;
use std::sync::Arc;

use hashbrown::HashMap as FastHashMap;
use rustc_hash::FxHasher;

use novadata_resource::{GlobalId, ResourceType};

use crate::data::Outfit;
use crate::gettable::{Gettable, SharedResult};
use crate::reporter::ProblemReporter;
use crate::Result;

type FxHashMap<K, V> = FastHashMap<K, V, BuildHasherDefault<FxHasher>>;

/// Memoized id space future shared by every accessor and derivation.
pub(crate) type SpaceFuture = SharedResult<novadata_resource::ResourceIdSpace>;

/// Ship global id → PICT global id, direct or inferred.
pub type ShipPictMap = FxHashMap<GlobalId, GlobalId>;

/// Weapon global id → global id of the first outfit declaring it.
pub type WeaponOutfitMap = FxHashMap<GlobalId, GlobalId>;

/// Infer a PICT for ships that lack one.
///
/// Ships missing a direct PICT borrow the PICT of the first ship (in table
/// order) that shares the same base sprite sheet. Two passes:
///
/// 1. For every ship with a direct PICT, resolve its `shän` and base image;
///    the first ship per base image claims it.
/// 2. Map every ship to its direct PICT, else to the claimed PICT of its
///    base image. Ships with neither stay absent from the map; the ship
///    transformer reports them and falls back to the default PICT.
///
/// A ship whose `shän` or base image cannot be resolved is reported, not
/// silently dropped.
pub(crate) async fn derive_ship_pict_map(
    space: SpaceFuture,
    reporter: ProblemReporter,
) -> Result<Arc<ShipPictMap>> {
    let space = match space.await {
        Ok(space) => space,
        Err(_) => return Ok(Arc::new(ShipPictMap::default())),
    };

    let ships = space.table(ResourceType::Ship);
    let mut base_pict: FxHashMap<GlobalId, GlobalId> = FxHashMap::default();

    for (&local, ship) in ships {
        let Some(fields) = ship.fields.as_ship() else { continue };
        let Some(pict) = space.record(ResourceType::Pict, fields.pict_id) else {
            continue; // No direct PICT, nothing to claim in this pass.
        };
        let Some(base) = base_image(&space, ship.global_id, local, &reporter)? else {
            continue;
        };
        // First ship wins; later ships sharing the base image do not
        // overwrite.
        base_pict.entry(base).or_insert(pict.global_id);
    }

    let mut map = ShipPictMap::default();
    for (&local, ship) in ships {
        let Some(fields) = ship.fields.as_ship() else { continue };
        if let Some(pict) = space.record(ResourceType::Pict, fields.pict_id) {
            map.insert(ship.global_id, pict.global_id);
        } else if let Some(base) = base_image(&space, ship.global_id, local, &reporter)? {
            if let Some(&pict) = base_pict.get(&base) {
                map.insert(ship.global_id, pict);
            }
        }
    }

    Ok(Arc::new(map))
}

/// Resolve a ship's base sprite sheet global id through its `shän` record.
fn base_image(
    space: &novadata_resource::ResourceIdSpace,
    ship: GlobalId,
    local: novadata_resource::LocalId,
    reporter: &ProblemReporter,
) -> Result<Option<GlobalId>> {
    let Some(shan) = space.record(ResourceType::Shan, local) else {
        reporter.report(format!("shïp {ship} missing shän"))?;
        return Ok(None);
    };
    let Some(fields) = shan.fields.as_shan() else {
        return Ok(None);
    };
    let Some(sheet) = space.record(ResourceType::SpriteSheet, fields.base_image_id) else {
        reporter.report(format!(
            "shïp {ship} missing rlëD of id {}",
            fields.base_image_id
        ))?;
        return Ok(None);
    };
    Ok(Some(sheet.global_id))
}

/// Record, for every weapon, the first outfit (in table order) declaring it.
///
/// Outfits are transformed through the outfit accessor, so any
/// transformation triggered here is memoized and shared with ordinary
/// outfit requests.
pub(crate) async fn derive_weapon_outfit_map(
    space: SpaceFuture,
    outfits: Gettable<Outfit>,
) -> Result<Arc<WeaponOutfitMap>> {
    let space = match space.await {
        Ok(space) => space,
        Err(_) => return Ok(Arc::new(WeaponOutfitMap::default())),
    };

    let mut map = WeaponOutfitMap::default();
    for outfit in space.table(ResourceType::Outfit).values() {
        let data = outfits.get(outfit.global_id).await?;
        for &weapon in &data.weapons {
            map.entry(weapon).or_insert(outfit.global_id);
        }
    }

    Ok(Arc::new(map))
}
