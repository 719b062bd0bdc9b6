//! State transitions: blocking passages, moving characters, and moving items.
//!
//! Every item transfer goes through `World::relocate`, which validates the
//! whole move before touching anything and then removes the item from its old
//! holder and inserts it into the new one. An item is never observable with
//! no holder or with two.

use tracing::debug;

use crate::character::Character;
use crate::entity::EntityKind;
use crate::error::{CoreError, CoreResult};
use crate::location::{BlockedPassage, Location};
use crate::registry::Registry;
use crate::world::{Holder, World, unknown};

impl World {
    // -----------------------------------------------------------------------
    // Passages
    // -----------------------------------------------------------------------

    /// Block the open passage `from` -> `to` with `obstacle`.
    ///
    /// The obstacle item leaves its current holder and is held by the passage
    /// until it is unblocked.
    pub fn block_passage(
        &mut self,
        from: &str,
        to: &str,
        obstacle: &str,
        symmetric: bool,
    ) -> CoreResult<()> {
        let to = self.locations.resolve(to)?.name.clone();
        let obstacle = self.items.resolve(obstacle)?.name.clone();
        let previous = self.holder_of(&obstacle);
        if let Some(Holder::Obstacle { from, to }) = previous {
            return Err(CoreError::ItemIsObstacle {
                item: obstacle,
                from,
                to,
            });
        }

        let origin = self
            .locations
            .get_mut(from)
            .ok_or_else(|| unknown(EntityKind::Location, from))?;
        origin.block(&to, &obstacle, symmetric)?;
        let from = origin.name.clone();

        if let Some(previous) = previous {
            self.detach(&obstacle, &previous);
        }
        debug!(%from, %to, %obstacle, symmetric, "passage blocked");
        Ok(())
    }

    /// Clear the obstacle on `from` -> `to`.
    ///
    /// A symmetric block also opens `to` -> `from`, whatever its previous
    /// state. Obstacles released this way fall to the ground on their side of
    /// the passage.
    pub fn unblock_passage(&mut self, from: &str, to: &str) -> CoreResult<BlockedPassage> {
        let to = self.locations.resolve(to)?.name.clone();
        let origin = self
            .locations
            .get_mut(from)
            .ok_or_else(|| unknown(EntityKind::Location, from))?;
        let passage = origin.unblock(&to)?;
        origin.items.insert(passage.obstacle.clone());
        let from = origin.name.clone();

        if passage.symmetric {
            let target = self
                .locations
                .get_mut(&to)
                .ok_or_else(|| unknown(EntityKind::Location, &to))?;
            if let Ok(reverse) = target.unblock(&from) {
                target.items.insert(reverse.obstacle);
            }
            target.connections.insert(from.clone());
        }

        debug!(%from, %to, obstacle = %passage.obstacle, symmetric = passage.symmetric, "passage unblocked");
        Ok(passage)
    }

    // -----------------------------------------------------------------------
    // Character actions
    // -----------------------------------------------------------------------

    /// Move a character along an open passage.
    pub fn move_character(&mut self, who: &str, to: &str) -> CoreResult<()> {
        let to = self.locations.resolve(to)?.name.clone();
        let (actor, locations) = self.split_actor(who)?;
        let here = locations.resolve(&actor.location)?;
        actor.move_to(here, &to)?;
        debug!(who = %actor.name, %to, "character moved");
        Ok(())
    }

    /// A character picks up an item lying in its current location.
    pub fn take(&mut self, who: &str, item: &str) -> CoreResult<()> {
        let item = self.items.resolve(item)?;
        if !item.gettable {
            return Err(CoreError::NotGettable(item.name.clone()));
        }
        let item = item.name.clone();
        let actor = self.actor(who).ok_or_else(|| unknown(EntityKind::Character, who))?;
        if actor.holds(&item) {
            return Err(CoreError::AlreadyHeld {
                item,
                holder: actor.name.clone(),
            });
        }
        let inventory = Holder::Inventory(actor.name.clone());
        let here = actor.location.clone();
        match self.holder_of(&item) {
            Some(Holder::Obstacle { from, to }) => {
                return Err(CoreError::ItemIsObstacle { item, from, to });
            }
            Some(Holder::Ground(location)) if location == here => {}
            _ => {
                return Err(CoreError::NotHere {
                    item,
                    location: here,
                });
            }
        }
        self.relocate(&item, inventory)
    }

    /// A character leaves an item in its current location.
    ///
    /// Dropping something the character does not carry still places it here;
    /// the removal from the inventory is simply a no-op.
    pub fn drop(&mut self, who: &str, item: &str) -> CoreResult<()> {
        let actor = self.actor(who).ok_or_else(|| unknown(EntityKind::Character, who))?;
        let to = Holder::Ground(actor.location.clone());
        self.relocate(item, to)
    }

    /// Hand an item over to another character.
    ///
    /// Transfers between characters skip the gettable and already-held
    /// checks. Everything is validated before the item moves, so a failed
    /// give leaves the item with its original holder.
    pub fn give(&mut self, giver: &str, item: &str, receiver: &str) -> CoreResult<()> {
        let giver = self
            .actor(giver)
            .ok_or_else(|| unknown(EntityKind::Character, giver))?
            .name
            .clone();
        let receiver = self
            .actor(receiver)
            .ok_or_else(|| unknown(EntityKind::Character, receiver))?
            .name
            .clone();
        self.relocate(item, Holder::Inventory(receiver.clone()))?;
        debug!(%giver, %receiver, item, "item given");
        Ok(())
    }

    /// Register-time placement: put an item on the ground of `location`.
    pub fn place_item(&mut self, item: &str, location: &str) -> CoreResult<()> {
        let location = self.locations.resolve(location)?.name.clone();
        self.relocate(item, Holder::Ground(location))
    }

    /// Register-time placement: put an item in a character's inventory.
    pub fn stow_item(&mut self, item: &str, character: &str) -> CoreResult<()> {
        let character = self
            .actor(character)
            .ok_or_else(|| unknown(EntityKind::Character, character))?
            .name
            .clone();
        self.relocate(item, Holder::Inventory(character))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Move `item` from wherever it is into `to`. Obstacles stay put.
    fn relocate(&mut self, item: &str, to: Holder) -> CoreResult<()> {
        let item = self.items.resolve(item)?.name.clone();
        let previous = self.holder_of(&item);
        if let Some(Holder::Obstacle { from, to }) = previous {
            return Err(CoreError::ItemIsObstacle { item, from, to });
        }
        let exists = match &to {
            Holder::Ground(location) => self.locations.contains(location),
            Holder::Inventory(character) => self.actor(character).is_some(),
            Holder::Obstacle { .. } => false,
        };
        if !exists {
            return Err(CoreError::Integrity(format!("cannot move {item} to {to}")));
        }
        if previous.as_ref() == Some(&to) {
            return Ok(());
        }

        if let Some(previous) = &previous {
            self.detach(&item, previous);
        }
        match &to {
            Holder::Ground(location) => {
                if let Some(location) = self.locations.get_mut(location) {
                    location.items.insert(item.clone());
                }
            }
            Holder::Inventory(character) => {
                if let Some(character) = self.actor_mut(character) {
                    character.inventory.insert(item.clone());
                }
            }
            Holder::Obstacle { .. } => {}
        }
        debug!(%item, ?previous, %to, "item relocated");
        Ok(())
    }

    fn detach(&mut self, item: &str, holder: &Holder) {
        match holder {
            Holder::Ground(location) => {
                if let Some(location) = self.locations.get_mut(location) {
                    location.items.remove(item);
                }
            }
            Holder::Inventory(character) => {
                if let Some(character) = self.actor_mut(character) {
                    character.inventory.remove(item);
                }
            }
            // The passage record is dropped or rewritten by its caller.
            Holder::Obstacle { .. } => {}
        }
    }

    fn actor_mut(&mut self, name: &str) -> Option<&mut Character> {
        if self.is_player(name) {
            Some(&mut self.player)
        } else {
            self.characters.get_mut(name)
        }
    }

    /// Borrow a character mutably alongside the location registry.
    fn split_actor(&mut self, who: &str) -> CoreResult<(&mut Character, &Registry<Location>)> {
        let is_player = self.is_player(who);
        let World {
            locations,
            characters,
            player,
            ..
        } = self;
        let actor = if is_player {
            player
        } else {
            characters
                .get_mut(who)
                .ok_or_else(|| unknown(EntityKind::Character, who))?
        };
        Ok((actor, &*locations))
    }
}
