//! Weapon transformer.

use novadata_resource::RecordHandle;

use crate::data::Weapon;
use crate::fallback::WeaponOutfitMap;
use crate::gettable::SharedResult;
use crate::reporter::ProblemReporter;
use crate::transform::FPS;
use crate::{Error, Result};

/// Transform a raw weapon record.
///
/// The owning outfit comes from the weapon→outfit ownership map; a weapon
/// no outfit declares simply has no source outfit, which is not a problem
/// worth reporting.
pub(crate) async fn weapon(
    handle: RecordHandle,
    _reporter: ProblemReporter,
    owners: SharedResult<WeaponOutfitMap>,
) -> Result<Weapon> {
    let record = handle.record();
    let Some(fields) = record.fields.as_weapon() else {
        return Err(Error::Transform(format!("record {} is not a wëap", record.global_id)));
    };
    let id = record.global_id;

    let source_outfit = owners.await?.get(&id).copied();

    Ok(Weapon {
        id,
        name: record.name.clone(),
        reload: fields.reload as f32 / FPS,
        shot_speed: fields.shot_speed as f32,
        shield_damage: fields.shield_damage as f32,
        armor_damage: fields.armor_damage as f32,
        source_outfit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use futures::FutureExt;
    use novadata_resource::{
        build_id_space, ArchiveSource, GlobalId, LocalId, RecordFields, ResourceType, SeedRecord,
        WeaponFields,
    };

    #[tokio::test]
    async fn reload_converts_to_seconds_and_owner_comes_from_map() {
        let source = ArchiveSource::new("base").with(SeedRecord::new(
            500u16,
            "Laser",
            RecordFields::Weapon(WeaponFields {
                reload: 15,
                shot_speed: 900,
                shield_damage: 4,
                armor_damage: 2,
            }),
        ));
        let space = Arc::new(build_id_space(&[source]).unwrap());
        let laser = GlobalId::from_parts(0, LocalId(500));
        let owner = GlobalId::from_parts(0, LocalId(128));

        let owners: SharedResult<WeaponOutfitMap> = {
            let mut map = WeaponOutfitMap::default();
            map.insert(laser, owner);
            async move { Ok(Arc::new(map)) }.boxed().shared()
        };

        let handle = RecordHandle::new(space, ResourceType::Weapon, LocalId(500)).unwrap();
        let weapon = weapon(handle, ProblemReporter::new(true), owners).await.unwrap();

        assert!((weapon.reload - 0.5).abs() < 1e-6);
        assert_eq!(weapon.source_outfit, Some(owner));
    }
}
