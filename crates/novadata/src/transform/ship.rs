//! Ship transformer.

use novadata_resource::{GlobalId, LocalId, RecordHandle, ResourceType};

use crate::data::{Animation, Ship, ShipProperties};
use crate::fallback::ShipPictMap;
use crate::gettable::SharedResult;
use crate::reporter::ProblemReporter;
use crate::transform::{FPS, TURN_RATE_CONVERSION};
use crate::{Error, Result};

/// Transform a raw ship record.
///
/// Resolves the description, explosion, animation, and PICT references.
/// Ships without a direct PICT consult the ship→PICT fallback map; ships
/// absent from that too get the default PICT id and a report.
pub(crate) async fn ship(
    handle: RecordHandle,
    reporter: ProblemReporter,
    pict_map: SharedResult<ShipPictMap>,
) -> Result<Ship> {
    let record = handle.record();
    let Some(fields) = record.fields.as_ship() else {
        return Err(Error::Transform(format!("record {} is not a shïp", record.global_id)));
    };
    let id = record.global_id;

    let desc = match handle.related(ResourceType::Desc, fields.desc_id) {
        Some(desc) => desc
            .fields
            .as_desc()
            .map(|d| d.text.clone())
            .unwrap_or_default(),
        None => {
            // The message doubles as the placeholder text, as players of
            // broken plug-ins will recognize.
            let message = format!("No matching dësc for shïp of id {id}");
            reporter.report(message.clone())?;
            message
        }
    };

    let initial_explosion = explosion_ref(&handle, fields.initial_explosion, &reporter)?;
    let final_explosion = explosion_ref(&handle, fields.final_explosion, &reporter)?;

    let animation = match handle.related(ResourceType::Shan, record.local_id) {
        Some(shan) => {
            let Some(shan_fields) = shan.fields.as_shan() else {
                return Err(Error::Transform(format!("shän for shïp {id} has wrong fields")));
            };
            match handle.related(ResourceType::SpriteSheet, shan_fields.base_image_id) {
                Some(sheet) => Animation {
                    sprite_sheet_id: sheet.global_id,
                    frame_count: shan_fields.base_frame_count,
                    size: shan_fields.base_size,
                },
                None => {
                    reporter.report(format!(
                        "shïp {id} missing rlëD of id {}",
                        shan_fields.base_image_id
                    ))?;
                    Animation::default()
                }
            }
        }
        None => {
            reporter.report(format!("No matching shän for shïp of id {id}"))?;
            Animation::default()
        }
    };

    let pict_id = match handle.related(ResourceType::Pict, fields.pict_id) {
        Some(pict) => pict.global_id,
        None => match pict_map.await?.get(&id) {
            Some(&inferred) => inferred,
            None => {
                reporter.report(format!("No matching PICT for shïp of id {id}"))?;
                GlobalId::DEFAULT
            }
        },
    };

    let properties = ShipProperties {
        shield: fields.shield as f32,
        shield_recharge: fields.shield_recharge as f32 * FPS / 1000.0,
        armor: fields.armor as f32,
        armor_recharge: fields.armor_recharge as f32 * FPS / 1000.0,
        energy: fields.energy as f32,
        // Raw value is frames per unit regained.
        energy_recharge: if fields.energy_recharge > 0 {
            FPS / fields.energy_recharge as f32
        } else {
            0.0
        },
        ionization: fields.ionization as f32,
        deionize: fields.deionize as f32 / 100.0 * FPS,
        speed: fields.speed as f32,
        acceleration: fields.acceleration as f32,
        turn_rate: fields.turn_rate as f32 * TURN_RATE_CONVERSION,
        mass: fields.mass as f32,
        free_mass: 0.0,
    };

    Ok(Ship {
        id,
        name: record.name.clone(),
        properties,
        pict_id,
        desc,
        initial_explosion,
        final_explosion,
        death_delay: fields.death_delay as f32 / FPS,
        large_explosion: fields.death_delay >= 60,
        display_weight: record.local_id.0 as u32,
        animation,
    })
}

fn explosion_ref(
    handle: &RecordHandle,
    local: Option<LocalId>,
    reporter: &ProblemReporter,
) -> Result<Option<GlobalId>> {
    let Some(local) = local else { return Ok(None) };
    match handle.related(ResourceType::Explosion, local) {
        Some(boom) => Ok(Some(boom.global_id)),
        None => {
            reporter.report(format!(
                "shïp {} missing bööm of id {local}",
                handle.global_id()
            ))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use futures::FutureExt;
    use novadata_resource::{
        build_id_space, ArchiveSource, DescFields, ExplosionFields, PictFields, RecordFields,
        ResourceIdSpace, SeedRecord, ShanFields, ShipFields, SpriteSheetFields,
    };

    fn fixture() -> ArchiveSource {
        let mut source = ArchiveSource::new("base");
        source.push(SeedRecord::new(
            128u16,
            "Shuttle",
            RecordFields::Ship(ShipFields {
                pict_id: LocalId(200),
                desc_id: LocalId(128),
                initial_explosion: Some(LocalId(400)),
                final_explosion: Some(LocalId(999)),
                shield: 100,
                shield_recharge: 100,
                armor: 50,
                armor_recharge: 0,
                energy: 300,
                energy_recharge: 15,
                ionization: 0,
                deionize: 200,
                speed: 300,
                acceleration: 400,
                turn_rate: 100,
                mass: 40,
                death_delay: 90,
            }),
        ));
        source.push(SeedRecord::new(
            128u16,
            "Shuttle blurb",
            RecordFields::Desc(DescFields { text: "A reliable workhorse.".into() }),
        ));
        source.push(SeedRecord::new(
            128u16,
            "Shuttle shan",
            RecordFields::Shan(ShanFields {
                base_image_id: LocalId(300),
                base_frame_count: 36,
                base_size: (48, 48),
            }),
        ));
        source.push(SeedRecord::new(
            200u16,
            "Shuttle pict",
            RecordFields::Pict(PictFields { width: 2, height: 2, indexed: vec![0; 4] }),
        ));
        source.push(SeedRecord::new(
            300u16,
            "Shuttle sprites",
            RecordFields::SpriteSheet(SpriteSheetFields {
                frame_width: 2,
                frame_height: 2,
                frames_per_row: 1,
                frame_count: 1,
                runs: vec![(4, 0)],
            }),
        ));
        source.push(SeedRecord::new(
            400u16,
            "small boom",
            RecordFields::Explosion(ExplosionFields { frame_rate: 100, sprite_id: LocalId(300) }),
        ));
        source
    }

    fn handle(space: Arc<ResourceIdSpace>, local: u16) -> RecordHandle {
        RecordHandle::new(space, ResourceType::Ship, LocalId(local)).unwrap()
    }

    fn empty_map() -> SharedResult<ShipPictMap> {
        async { Ok(Arc::new(ShipPictMap::default())) }.boxed().shared()
    }

    #[tokio::test]
    async fn resolves_references_and_converts_units() {
        let space = Arc::new(build_id_space(&[fixture()]).unwrap());
        let reporter = ProblemReporter::new(false);

        let ship = ship(handle(space, 128), reporter, empty_map()).await.unwrap();
        assert_eq!(ship.desc, "A reliable workhorse.");
        assert_eq!(ship.pict_id, GlobalId::from_parts(0, LocalId(200)));
        assert_eq!(ship.initial_explosion, Some(GlobalId::from_parts(0, LocalId(400))));
        // bööm 999 does not exist; lenient mode leaves it unset.
        assert_eq!(ship.final_explosion, None);
        assert_eq!(ship.animation.sprite_sheet_id, GlobalId::from_parts(0, LocalId(300)));
        assert_eq!(ship.animation.frame_count, 36);

        // 100 raw shield recharge = 3 points per second at 30 fps.
        assert!((ship.properties.shield_recharge - 3.0).abs() < 1e-6);
        // 15 frames per energy unit = 2 units per second.
        assert!((ship.properties.energy_recharge - 2.0).abs() < 1e-6);
        // 200 raw deionize = 60 ion points per second.
        assert!((ship.properties.deionize - 60.0).abs() < 1e-6);
        // 90 frames of death delay = 3 seconds, and counts as large.
        assert!((ship.death_delay - 3.0).abs() < 1e-6);
        assert!(ship.large_explosion);
    }

    #[tokio::test]
    async fn missing_desc_substitutes_message_when_lenient() {
        let mut source = fixture();
        // A second ship whose desc id points nowhere.
        source.push(SeedRecord::new(
            129u16,
            "Mule",
            RecordFields::Ship(ShipFields {
                pict_id: LocalId(200),
                desc_id: LocalId(500),
                initial_explosion: None,
                final_explosion: None,
                shield: 1,
                shield_recharge: 0,
                armor: 1,
                armor_recharge: 0,
                energy: 1,
                energy_recharge: 0,
                ionization: 0,
                deionize: 0,
                speed: 1,
                acceleration: 1,
                turn_rate: 1,
                mass: 1,
                death_delay: 1,
            }),
        ));
        source.push(SeedRecord::new(
            129u16,
            "Mule shan",
            RecordFields::Shan(ShanFields {
                base_image_id: LocalId(300),
                base_frame_count: 36,
                base_size: (48, 48),
            }),
        ));
        let space = Arc::new(build_id_space(&[source]).unwrap());

        let lenient = ship(handle(Arc::clone(&space), 129), ProblemReporter::new(false), empty_map())
            .await
            .unwrap();
        assert!(lenient.desc.contains("No matching dësc"));

        let strict = ship(handle(space, 129), ProblemReporter::new(true), empty_map()).await;
        assert!(matches!(strict, Err(Error::Reference(_))));
    }

    #[tokio::test]
    async fn missing_pict_falls_back_to_map_then_default() {
        let mut source = fixture();
        source.push(SeedRecord::new(
            130u16,
            "Clipper",
            RecordFields::Ship(ShipFields {
                pict_id: LocalId(999),
                desc_id: LocalId(128),
                initial_explosion: None,
                final_explosion: None,
                shield: 1,
                shield_recharge: 0,
                armor: 1,
                armor_recharge: 0,
                energy: 1,
                energy_recharge: 0,
                ionization: 0,
                deionize: 0,
                speed: 1,
                acceleration: 1,
                turn_rate: 1,
                mass: 1,
                death_delay: 1,
            }),
        ));
        source.push(SeedRecord::new(
            130u16,
            "Clipper shan",
            RecordFields::Shan(ShanFields {
                base_image_id: LocalId(300),
                base_frame_count: 36,
                base_size: (48, 48),
            }),
        ));
        let space = Arc::new(build_id_space(&[source]).unwrap());
        let clipper = GlobalId::from_parts(0, LocalId(130));
        let inherited = GlobalId::from_parts(0, LocalId(200));

        let map: SharedResult<ShipPictMap> = {
            let mut map = ShipPictMap::default();
            map.insert(clipper, inherited);
            async move { Ok(Arc::new(map)) }.boxed().shared()
        };
        let with_map = ship(handle(Arc::clone(&space), 130), ProblemReporter::new(false), map)
            .await
            .unwrap();
        assert_eq!(with_map.pict_id, inherited);

        let without_map = ship(handle(space, 130), ProblemReporter::new(false), empty_map())
            .await
            .unwrap();
        assert_eq!(without_map.pict_id, GlobalId::DEFAULT);
    }
}
