//! Outfit transformer.

use novadata_resource::{RecordHandle, ResourceType};

use crate::data::Outfit;
use crate::reporter::ProblemReporter;
use crate::{Error, Result};

/// Transform a raw outfit record, resolving its weapon references.
///
/// Weapons keep declaration order; the weapon→outfit ownership derivation
/// depends on that order.
pub(crate) async fn outfit(handle: RecordHandle, reporter: ProblemReporter) -> Result<Outfit> {
    let record = handle.record();
    let Some(fields) = record.fields.as_outfit() else {
        return Err(Error::Transform(format!("record {} is not an öutf", record.global_id)));
    };
    let id = record.global_id;

    let mut weapons = Vec::with_capacity(fields.weapons.len());
    for &local in &fields.weapons {
        match handle.related(ResourceType::Weapon, local) {
            Some(weapon) => weapons.push(weapon.global_id),
            None => reporter.report(format!("öutf {id} missing wëap of id {local}"))?,
        }
    }

    Ok(Outfit {
        id,
        name: record.name.clone(),
        weapons,
        mass: fields.mass as f32,
        price: fields.price,
        display_weight: fields.display_weight,
    })
}
