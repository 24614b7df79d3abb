//! The aggregate root: one memoizing accessor per semantic category.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use novadata_resource::{
    build_id_space, RecordHandle, RecordProvider, ResourceIdSpace, ResourceType,
};

use crate::data::{
    Explosion, Outfit, Pict, PictImage, PictParts, Planet, Ship, SpriteSheet, SpriteSheetFrames,
    SpriteSheetImage, SpriteSheetParts, StarSystem, StatusBar, TargetCorners, Weapon,
};
use crate::fallback::{
    derive_ship_pict_map, derive_weapon_outfit_map, ShipPictMap, SpaceFuture, WeaponOutfitMap,
};
use crate::gettable::{Gettable, SharedResult};
use crate::reporter::ProblemReporter;
use crate::transform;
use crate::{Error, Result};

/// Lazily materialized game data over a stack of archives.
///
/// Construction is synchronous and never fails: the space build and both
/// fallback derivations are kicked off in the background (an ambient Tokio
/// runtime is required) and any failure is captured as a value, replayed to
/// every accessor that actually dereferences the broken space. Each category
/// accessor memoizes per id.
///
/// With `strict` set, every unresolved reference is a hard failure; without
/// it, problems are logged through `tracing` and documented defaults stand
/// in.
pub struct GameData {
    reporter: ProblemReporter,
    space: SpaceFuture,
    ship_pict_map: SharedResult<ShipPictMap>,
    weapon_outfit_map: SharedResult<WeaponOutfitMap>,

    pub ships: Gettable<Ship>,
    pub outfits: Gettable<Outfit>,
    pub weapons: Gettable<Weapon>,
    pub picts: Gettable<Pict>,
    pub pict_images: Gettable<PictImage>,
    pub planets: Gettable<Planet>,
    pub systems: Gettable<StarSystem>,
    pub sprite_sheets: Gettable<SpriteSheet>,
    pub sprite_sheet_images: Gettable<SpriteSheetImage>,
    pub sprite_sheet_frames: Gettable<SpriteSheetFrames>,
    pub status_bars: Gettable<StatusBar>,
    pub explosions: Gettable<Explosion>,
    pub target_corners: Gettable<TargetCorners>,
}

impl GameData {
    /// Wire up every category accessor over `provider`'s archives.
    ///
    /// Must be called within a Tokio runtime.
    pub fn new(provider: Arc<dyn RecordProvider>, strict: bool) -> Self {
        let reporter = ProblemReporter::new(strict);

        let space: SpaceFuture = {
            let provider = Arc::clone(&provider);
            async move {
                let sources = provider.load().await?;
                Ok(Arc::new(build_id_space(&sources)?))
            }
            .boxed()
            .shared()
        };

        let ship_pict_map = derive_ship_pict_map(space.clone(), reporter).boxed().shared();

        let outfits = category(space.clone(), reporter, ResourceType::Outfit, |handle, reporter| {
            transform::outfit(handle, reporter).boxed()
        });

        let weapon_outfit_map = derive_weapon_outfit_map(space.clone(), outfits.clone())
            .boxed()
            .shared();

        let ships = {
            let pict_map = ship_pict_map.clone();
            category(space.clone(), reporter, ResourceType::Ship, move |handle, reporter| {
                transform::ship(handle, reporter, pict_map.clone()).boxed()
            })
        };

        let weapons = {
            let owners = weapon_outfit_map.clone();
            category(space.clone(), reporter, ResourceType::Weapon, move |handle, reporter| {
                transform::weapon(handle, reporter, owners.clone()).boxed()
            })
        };

        // One decode per PICT id; the public accessors are projections.
        let pict_multi: Gettable<PictParts> =
            category(space.clone(), reporter, ResourceType::Pict, |handle, reporter| {
                transform::pict_parts(handle, reporter).boxed()
            });
        let picts = project(pict_multi.clone(), |parts: &PictParts| Arc::clone(&parts.pict));
        let pict_images = project(pict_multi, |parts: &PictParts| Arc::clone(&parts.image));

        // Same split for sprite sheets, three ways.
        let sprite_multi: Gettable<SpriteSheetParts> =
            category(space.clone(), reporter, ResourceType::SpriteSheet, |handle, reporter| {
                transform::sprite_sheet_parts(handle, reporter).boxed()
            });
        let sprite_sheets =
            project(sprite_multi.clone(), |parts: &SpriteSheetParts| Arc::clone(&parts.sheet));
        let sprite_sheet_images =
            project(sprite_multi.clone(), |parts: &SpriteSheetParts| Arc::clone(&parts.image));
        let sprite_sheet_frames =
            project(sprite_multi, |parts: &SpriteSheetParts| Arc::clone(&parts.frames));

        let planets = category(space.clone(), reporter, ResourceType::Planet, |handle, reporter| {
            transform::planet(handle, reporter).boxed()
        });
        let systems = category(space.clone(), reporter, ResourceType::System, |handle, reporter| {
            transform::star_system(handle, reporter).boxed()
        });
        let status_bars =
            category(space.clone(), reporter, ResourceType::StatusBar, |handle, reporter| {
                transform::status_bar(handle, reporter).boxed()
            });
        let explosions =
            category(space.clone(), reporter, ResourceType::Explosion, |handle, reporter| {
                transform::explosion(handle, reporter).boxed()
            });
        let target_corners =
            category(space.clone(), reporter, ResourceType::TargetCorners, |handle, reporter| {
                transform::target_corners(handle, reporter).boxed()
            });

        // Trigger the build and both derivations now; nothing awaits them
        // here, so construction never blocks.
        tokio::spawn({
            let space = space.clone();
            let pict_map = ship_pict_map.clone();
            let owners = weapon_outfit_map.clone();
            async move {
                let _ = futures::join!(space, pict_map, owners);
            }
        });

        GameData {
            reporter,
            space,
            ship_pict_map,
            weapon_outfit_map,
            ships,
            outfits,
            weapons,
            picts,
            pict_images,
            planets,
            systems,
            sprite_sheets,
            sprite_sheet_images,
            sprite_sheet_frames,
            status_bars,
            explosions,
            target_corners,
        }
    }

    /// Whether unresolved references are fatal.
    pub fn is_strict(&self) -> bool {
        self.reporter.is_strict()
    }

    /// The merged id space, or the captured build failure.
    pub async fn id_space(&self) -> Result<Arc<ResourceIdSpace>> {
        self.space.clone().await
    }

    /// The ship→PICT fallback map (empty when the space failed to build).
    pub async fn ship_pict_map(&self) -> Result<Arc<ShipPictMap>> {
        self.ship_pict_map.clone().await
    }

    /// The weapon→outfit ownership map (empty when the space failed to
    /// build).
    pub async fn weapon_outfit_map(&self) -> Result<Arc<WeaponOutfitMap>> {
        self.weapon_outfit_map.clone().await
    }
}

/// Build one category accessor: space lookup, presence check, transform.
///
/// A missing id is fatal in strict mode; lenient mode logs it and hands
/// back the category's default object.
fn category<T, F>(
    space: SpaceFuture,
    reporter: ProblemReporter,
    kind: ResourceType,
    transform: F,
) -> Gettable<T>
where
    T: Default + Send + Sync + 'static,
    F: Fn(RecordHandle, ProblemReporter) -> BoxFuture<'static, Result<T>> + Send + Sync + 'static,
{
    let transform = Arc::new(transform);
    Gettable::new(move |id| {
        let space = space.clone();
        let transform = Arc::clone(&transform);
        async move {
            let space = space.await?;
            let handle = space
                .by_global(id)
                .filter(|record| record.kind == kind)
                .and_then(|record| RecordHandle::new(Arc::clone(&space), kind, record.local_id));
            let Some(handle) = handle else {
                reporter.raise(Error::IdNotFound { kind, id })?;
                return Ok(Arc::new(T::default()));
            };
            transform(handle, reporter).await.map(Arc::new)
        }
        .boxed()
    })
}

/// Build a projection accessor over a multi-part decode.
fn project<M, T, F>(multi: Gettable<M>, extract: F) -> Gettable<T>
where
    M: Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Fn(&M) -> Arc<T> + Clone + Send + Sync + 'static,
{
    Gettable::new(move |id| {
        let multi = multi.clone();
        let extract = extract.clone();
        async move { Ok(extract(&*multi.get(id).await?)) }.boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use novadata_resource::{
        ArchiveSource, DescFields, GlobalId, LocalId, MemoryProvider, OutfitFields, PictFields,
        RecordFields, SeedRecord, ShanFields, ShipFields, SpriteSheetFields, WeaponFields,
    };

    fn ship_fields(pict_id: u16, desc_id: u16) -> RecordFields {
        RecordFields::Ship(ShipFields {
            pict_id: LocalId(pict_id),
            desc_id: LocalId(desc_id),
            initial_explosion: None,
            final_explosion: None,
            shield: 100,
            shield_recharge: 10,
            armor: 50,
            armor_recharge: 5,
            energy: 300,
            energy_recharge: 6,
            ionization: 0,
            deionize: 0,
            speed: 300,
            acceleration: 400,
            turn_rate: 30,
            mass: 40,
            death_delay: 20,
        })
    }

    /// Base fixture: ships 128 (direct PICT) and 129 (inferred PICT via a
    /// shared base image), outfits 140/141 over weapons 500-502, a sprite
    /// sheet, and supporting records.
    fn fixture() -> ArchiveSource {
        let mut source = ArchiveSource::new("base");
        source.push(SeedRecord::new(128u16, "Shuttle", ship_fields(200, 128)));
        source.push(SeedRecord::new(129u16, "Shuttle Variant", ship_fields(998, 128)));
        source.push(SeedRecord::new(
            128u16,
            "Shuttle blurb",
            RecordFields::Desc(DescFields { text: "A reliable workhorse.".into() }),
        ));
        for local in [128u16, 129u16] {
            source.push(SeedRecord::new(
                local,
                "shan",
                RecordFields::Shan(ShanFields {
                    base_image_id: LocalId(300),
                    base_frame_count: 36,
                    base_size: (48, 48),
                }),
            ));
        }
        source.push(SeedRecord::new(
            200u16,
            "Shuttle pict",
            RecordFields::Pict(PictFields { width: 2, height: 2, indexed: vec![1, 2, 3, 255] }),
        ));
        source.push(SeedRecord::new(
            300u16,
            "Shuttle sprites",
            RecordFields::SpriteSheet(SpriteSheetFields {
                frame_width: 2,
                frame_height: 2,
                frames_per_row: 2,
                frame_count: 2,
                runs: vec![(8, 5)],
            }),
        ));
        for (local, weapons) in [(140u16, vec![500u16, 501]), (141u16, vec![501, 502])] {
            source.push(SeedRecord::new(
                local,
                format!("outfit {local}"),
                RecordFields::Outfit(OutfitFields {
                    weapons: weapons.into_iter().map(LocalId).collect(),
                    mass: 5,
                    price: 1000,
                    display_weight: 0,
                }),
            ));
        }
        for local in [500u16, 501, 502] {
            source.push(SeedRecord::new(
                local,
                format!("weapon {local}"),
                RecordFields::Weapon(WeaponFields {
                    reload: 15,
                    shot_speed: 900,
                    shield_damage: 4,
                    armor_damage: 2,
                }),
            ));
        }
        source
    }

    fn game(strict: bool) -> GameData {
        GameData::new(Arc::new(MemoryProvider::new(vec![fixture()])), strict)
    }

    fn gid(local: u16) -> GlobalId {
        GlobalId::from_parts(0, LocalId(local))
    }

    #[tokio::test]
    async fn ship_without_pict_inherits_through_fallback_map() {
        let game = game(false);
        let variant = game.ships.get(gid(129)).await.unwrap();
        assert_eq!(variant.pict_id, gid(200));

        let direct = game.ships.get(gid(128)).await.unwrap();
        assert_eq!(direct.pict_id, gid(200));
    }

    #[tokio::test]
    async fn weapon_ownership_is_first_outfit_wins() {
        let game = game(false);
        assert_eq!(game.weapons.get(gid(500)).await.unwrap().source_outfit, Some(gid(140)));
        assert_eq!(game.weapons.get(gid(501)).await.unwrap().source_outfit, Some(gid(140)));
        assert_eq!(game.weapons.get(gid(502)).await.unwrap().source_outfit, Some(gid(141)));
    }

    #[tokio::test]
    async fn absent_id_is_fatal_only_in_strict_mode() {
        let strict = game(true);
        let result = strict.ships.get(gid(999)).await;
        assert!(matches!(
            result,
            Err(Error::IdNotFound { kind: ResourceType::Ship, .. })
        ));

        let lenient = game(false);
        let substitute = lenient.ships.get(gid(999)).await.unwrap();
        assert_eq!(substitute.name, "default ship");
        assert_eq!(substitute.id, GlobalId::DEFAULT);
    }

    #[tokio::test]
    async fn a_global_id_of_the_wrong_category_is_not_found() {
        let strict = game(true);
        // 200 is a PICT id, not a ship id.
        let result = strict.ships.get(gid(200)).await;
        assert!(matches!(result, Err(Error::IdNotFound { .. })));
    }

    #[tokio::test]
    async fn build_failure_replays_to_every_category() {
        // An empty provider makes the space build fail, but construction
        // itself stays quiet.
        let game = GameData::new(Arc::new(MemoryProvider::new(Vec::new())), true);

        let ship = game.ships.get(gid(128)).await;
        assert!(matches!(ship, Err(Error::Build(_))));
        let pict = game.picts.get(gid(200)).await;
        assert!(matches!(pict, Err(Error::Build(_))));
        let system = game.systems.get(gid(128)).await;
        assert!(matches!(system, Err(Error::Build(_))));

        // Fallback maps are empty rather than failed.
        assert!(game.ship_pict_map().await.unwrap().is_empty());
        assert!(game.weapon_outfit_map().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn projections_of_one_id_share_one_decode() {
        let game = game(true);

        let pict = game.picts.get(gid(200)).await.unwrap();
        let image = game.pict_images.get(gid(200)).await.unwrap();
        assert_eq!((pict.width, pict.height), (image.width, image.height));
        // The projections hand out slices of the same decoded parts.
        let image_again = game.pict_images.get(gid(200)).await.unwrap();
        assert!(Arc::ptr_eq(&image, &image_again));

        let sheet = game.sprite_sheets.get(gid(300)).await.unwrap();
        let frames = game.sprite_sheet_frames.get(gid(300)).await.unwrap();
        let sprite_image = game.sprite_sheet_images.get(gid(300)).await.unwrap();
        assert_eq!(sheet.frame_count as usize, frames.frames.len());
        assert_eq!(
            sprite_image.rgba.len(),
            sprite_image.width as usize * sprite_image.height as usize * 4
        );
    }

    #[tokio::test]
    async fn id_space_is_exposed_and_memoized() {
        let game = game(false);
        let first = game.id_space().await.unwrap();
        let second = game.id_space().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.table(ResourceType::Ship).len(), 2);
    }
}
