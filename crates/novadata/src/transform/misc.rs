//! Planet, system, explosion, and HUD transformers.

use novadata_resource::{GlobalId, RecordHandle, ResourceType};

use crate::data::{Explosion, Planet, StarSystem, StatusBar, TargetCorners};
use crate::reporter::ProblemReporter;
use crate::{Error, Result};

pub(crate) async fn planet(handle: RecordHandle, reporter: ProblemReporter) -> Result<Planet> {
    let record = handle.record();
    let Some(fields) = record.fields.as_planet() else {
        return Err(Error::Transform(format!("record {} is not a spöb", record.global_id)));
    };
    let id = record.global_id;

    let graphic_id = match handle.related(ResourceType::Pict, fields.graphic_id) {
        Some(pict) => pict.global_id,
        None => {
            reporter.report(format!("spöb {id} missing PICT of id {}", fields.graphic_id))?;
            GlobalId::DEFAULT
        }
    };

    let desc = match handle.related(ResourceType::Desc, fields.desc_id) {
        Some(desc) => desc
            .fields
            .as_desc()
            .map(|d| d.text.clone())
            .unwrap_or_default(),
        None => {
            let message = format!("No matching dësc for spöb of id {id}");
            reporter.report(message.clone())?;
            message
        }
    };

    Ok(Planet {
        id,
        name: record.name.clone(),
        position: (fields.pos_x, fields.pos_y),
        graphic_id,
        desc,
    })
}

pub(crate) async fn star_system(
    handle: RecordHandle,
    reporter: ProblemReporter,
) -> Result<StarSystem> {
    let record = handle.record();
    let Some(fields) = record.fields.as_system() else {
        return Err(Error::Transform(format!("record {} is not a sÿst", record.global_id)));
    };
    let id = record.global_id;

    let mut planets = Vec::with_capacity(fields.planets.len());
    for &local in &fields.planets {
        match handle.related(ResourceType::Planet, local) {
            Some(planet) => planets.push(planet.global_id),
            None => reporter.report(format!("sÿst {id} missing spöb of id {local}"))?,
        }
    }

    Ok(StarSystem {
        id,
        name: record.name.clone(),
        position: (fields.pos_x, fields.pos_y),
        planets,
    })
}

pub(crate) async fn explosion(
    handle: RecordHandle,
    reporter: ProblemReporter,
) -> Result<Explosion> {
    let record = handle.record();
    let Some(fields) = record.fields.as_explosion() else {
        return Err(Error::Transform(format!("record {} is not a bööm", record.global_id)));
    };
    let id = record.global_id;

    let sprite_sheet_id = match handle.related(ResourceType::SpriteSheet, fields.sprite_id) {
        Some(sheet) => sheet.global_id,
        None => {
            reporter.report(format!("bööm {id} missing rlëD of id {}", fields.sprite_id))?;
            GlobalId::DEFAULT
        }
    };

    Ok(Explosion {
        id,
        name: record.name.clone(),
        sprite_sheet_id,
        // Raw rate is percent of the base frame rate.
        rate: fields.frame_rate as f32 / 100.0,
    })
}

pub(crate) async fn status_bar(
    handle: RecordHandle,
    reporter: ProblemReporter,
) -> Result<StatusBar> {
    let record = handle.record();
    let Some(fields) = record.fields.as_status_bar() else {
        return Err(Error::Transform(format!("record {} is not an ïntf", record.global_id)));
    };
    let id = record.global_id;

    let image_id = match handle.related(ResourceType::Pict, fields.image_id) {
        Some(pict) => pict.global_id,
        None => {
            reporter.report(format!("ïntf {id} missing PICT of id {}", fields.image_id))?;
            GlobalId::DEFAULT
        }
    };

    Ok(StatusBar {
        id,
        name: record.name.clone(),
        image_id,
        shield_color: fields.shield_color,
        armor_color: fields.armor_color,
        fuel_color: fields.fuel_color,
    })
}

pub(crate) async fn target_corners(
    handle: RecordHandle,
    _reporter: ProblemReporter,
) -> Result<TargetCorners> {
    let record = handle.record();
    let Some(fields) = record.fields.as_target_corners() else {
        return Err(Error::Transform(format!("record {} is not a cicn", record.global_id)));
    };

    Ok(TargetCorners {
        id: record.global_id,
        name: record.name.clone(),
        width: fields.width,
        height: fields.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use novadata_resource::{
        build_id_space, ArchiveSource, ExplosionFields, LocalId, PlanetFields, RecordFields,
        SeedRecord, SpriteSheetFields, SystemFields,
    };

    #[tokio::test]
    async fn system_collects_resolvable_planets() {
        let mut source = ArchiveSource::new("base");
        source.push(SeedRecord::new(
            128u16,
            "Sol",
            RecordFields::System(SystemFields {
                pos_x: 0,
                pos_y: 0,
                planets: vec![LocalId(128), LocalId(129)],
            }),
        ));
        source.push(SeedRecord::new(
            128u16,
            "Earth",
            RecordFields::Planet(PlanetFields {
                pos_x: 10,
                pos_y: -20,
                graphic_id: LocalId(999),
                desc_id: LocalId(999),
            }),
        ));
        let space = Arc::new(build_id_space(&[source]).unwrap());
        let handle = RecordHandle::new(space, ResourceType::System, LocalId(128)).unwrap();

        // Planet 129 is missing; lenient mode keeps the rest.
        let system = star_system(handle, ProblemReporter::new(false)).await.unwrap();
        assert_eq!(system.planets, vec![GlobalId::from_parts(0, LocalId(128))]);
    }

    #[tokio::test]
    async fn explosion_resolves_its_sprite_sheet() {
        let mut source = ArchiveSource::new("base");
        source.push(SeedRecord::new(
            400u16,
            "big boom",
            RecordFields::Explosion(ExplosionFields { frame_rate: 150, sprite_id: LocalId(300) }),
        ));
        source.push(SeedRecord::new(
            300u16,
            "boom sprites",
            RecordFields::SpriteSheet(SpriteSheetFields {
                frame_width: 2,
                frame_height: 2,
                frames_per_row: 1,
                frame_count: 1,
                runs: vec![(4, 0)],
            }),
        ));
        let space = Arc::new(build_id_space(&[source]).unwrap());
        let handle = RecordHandle::new(space, ResourceType::Explosion, LocalId(400)).unwrap();

        let explosion = explosion(handle, ProblemReporter::new(true)).await.unwrap();
        assert_eq!(explosion.sprite_sheet_id, GlobalId::from_parts(0, LocalId(300)));
        assert!((explosion.rate - 1.5).abs() < 1e-6);
    }
}
