//! Fluent construction of a world, checked as a whole at the end.

use crate::character::Character;
use crate::entity::Item;
use crate::error::{CoreError, CoreResult};
use crate::location::Location;
use crate::world::World;

/// Builds a [`World`] step by step.
///
/// The first failing step is remembered and returned by [`build`](Self::build);
/// later steps are skipped. `build` also runs [`World::check_integrity`], so a
/// world that comes out of the builder satisfies every structural invariant.
#[derive(Debug)]
pub struct WorldBuilder {
    world: World,
    error: Option<CoreError>,
}

impl WorldBuilder {
    /// Start a world around its player.
    pub fn new(player: Character) -> Self {
        Self {
            world: World::new(player),
            error: None,
        }
    }

    /// Register a location.
    pub fn location(self, location: Location) -> Self {
        self.step(|w| w.add_location(location))
    }

    /// Register several locations.
    pub fn locations(self, locations: impl IntoIterator<Item = Location>) -> Self {
        self.step(|w| w.add_locations(locations))
    }

    /// Register a non-player character.
    pub fn character(self, character: Character) -> Self {
        self.step(|w| w.add_character(character))
    }

    /// Register an item lying in `location`.
    pub fn item_at(self, item: Item, location: &str) -> Self {
        self.step(|w| {
            let name = item.name.clone();
            w.add_item(item)?;
            w.place_item(&name, location)
        })
    }

    /// Register an item carried by `character` (the player included).
    pub fn item_held(self, item: Item, character: &str) -> Self {
        self.step(|w| {
            let name = item.name.clone();
            w.add_item(item)?;
            w.stow_item(&name, character)
        })
    }

    /// Open the one-way passage `from` -> `to`.
    pub fn connect(self, from: &str, to: &str) -> Self {
        self.step(|w| w.connect(from, to))
    }

    /// Open passages both ways between `a` and `b`.
    pub fn connect_both(self, a: &str, b: &str) -> Self {
        self.step(|w| w.connect_both(a, b))
    }

    /// Register `obstacle` and block the open passage `from` -> `to` with it.
    pub fn block(self, from: &str, to: &str, obstacle: Item, symmetric: bool) -> Self {
        self.step(|w| {
            let name = obstacle.name.clone();
            w.add_item(obstacle)?;
            w.block_passage(from, to, &name, symmetric)
        })
    }

    /// Finish construction.
    pub fn build(self) -> CoreResult<World> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.world.check_integrity()?;
        Ok(self.world)
    }

    fn step(mut self, f: impl FnOnce(&mut World) -> CoreResult<()>) -> Self {
        if self.error.is_none() {
            if let Err(error) = f(&mut self.world) {
                self.error = Some(error);
            }
        }
        self
    }
}
