use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::entity::{Described, EntityKind, Item};
use crate::error::{CoreError, CoreResult};
use crate::location::Location;
use crate::registry::Registry;

/// Where an item currently is. Every registered item has exactly one holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holder {
    /// Lying in a location.
    Ground(String),
    /// Carried by a character (the player included).
    Inventory(String),
    /// Blocking the passage `from` -> `to`.
    Obstacle {
        /// Location the passage starts at.
        from: String,
        /// Location the passage leads to.
        to: String,
    },
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ground(location) => write!(f, "ground of {location}"),
            Self::Inventory(character) => write!(f, "inventory of {character}"),
            Self::Obstacle { from, to } => write!(f, "passage {from} -> {to}"),
        }
    }
}

/// The fictional world: every item, location and character, plus the player.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) items: Registry<Item>,
    pub(crate) locations: Registry<Location>,
    pub(crate) characters: Registry<Character>,
    pub(crate) player: Character,
}

impl World {
    /// Create a world around its player. Everything else is registered afterwards.
    pub fn new(player: Character) -> Self {
        Self {
            items: Registry::new(),
            locations: Registry::new(),
            characters: Registry::new(),
            player,
        }
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register an item. It still needs a holder, see [`World::place_item`].
    pub fn add_item(&mut self, item: Item) -> CoreResult<()> {
        self.items.insert(item)
    }

    /// Register a location.
    pub fn add_location(&mut self, location: Location) -> CoreResult<()> {
        self.locations.insert(location)
    }

    /// Register a non-player character. The player's name is reserved.
    pub fn add_character(&mut self, character: Character) -> CoreResult<()> {
        if self.is_player(&character.name) {
            return Err(CoreError::DuplicateName {
                kind: EntityKind::Character,
                name: character.name,
            });
        }
        self.characters.insert(character)
    }

    /// Register several items, stopping at the first duplicate.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) -> CoreResult<()> {
        items.into_iter().try_for_each(|item| self.add_item(item))
    }

    /// Register several locations, stopping at the first duplicate.
    pub fn add_locations(
        &mut self,
        locations: impl IntoIterator<Item = Location>,
    ) -> CoreResult<()> {
        locations
            .into_iter()
            .try_for_each(|location| self.add_location(location))
    }

    /// Register several characters, stopping at the first duplicate.
    pub fn add_characters(
        &mut self,
        characters: impl IntoIterator<Item = Character>,
    ) -> CoreResult<()> {
        characters
            .into_iter()
            .try_for_each(|character| self.add_character(character))
    }

    /// Open the one-way passage `from` -> `to`.
    pub fn connect(&mut self, from: &str, to: &str) -> CoreResult<()> {
        let to = self.locations.resolve(to)?.name.clone();
        let origin = self
            .locations
            .get_mut(from)
            .ok_or_else(|| unknown(EntityKind::Location, from))?;
        if origin.blocked_passage(&to).is_some() {
            return Err(CoreError::AlreadyBlocked {
                from: origin.name.clone(),
                to,
            });
        }
        origin.connections.insert(to);
        Ok(())
    }

    /// Open passages in both directions between `a` and `b`.
    pub fn connect_both(&mut self, a: &str, b: &str) -> CoreResult<()> {
        self.connect(a, b)?;
        self.connect(b, a)
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// The player character.
    pub fn player(&self) -> &Character {
        &self.player
    }

    /// The location the player stands in.
    pub fn player_location(&self) -> CoreResult<&Location> {
        self.locations.resolve(&self.player.location)
    }

    /// Whether `name` refers to the player.
    pub fn is_player(&self, name: &str) -> bool {
        name.trim().to_lowercase() == self.player.name.to_lowercase()
    }

    /// Find an item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Find a location by name.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    /// Find a non-player character by name.
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.get(name)
    }

    /// Find any character by name, the player included.
    pub fn actor(&self, name: &str) -> Option<&Character> {
        if self.is_player(name) {
            Some(&self.player)
        } else {
            self.characters.get(name)
        }
    }

    /// All items in registration order.
    pub fn items(&self) -> &Registry<Item> {
        &self.items
    }

    /// All locations in registration order.
    pub fn locations(&self) -> &Registry<Location> {
        &self.locations
    }

    /// All non-player characters in registration order.
    pub fn characters(&self) -> &Registry<Character> {
        &self.characters
    }

    /// The player followed by every other character.
    pub fn actors(&self) -> impl Iterator<Item = &Character> {
        std::iter::once(&self.player).chain(self.characters.iter())
    }

    /// Where `item` currently is.
    pub fn holder_of(&self, item: &str) -> Option<Holder> {
        let item = self.items.get(item)?;
        self.holders()
            .find(|(name, _)| *name == item.name)
            .map(|(_, holder)| holder)
    }

    /// Every (item name, holder) pair recorded anywhere in the world.
    fn holders(&self) -> impl Iterator<Item = (&str, Holder)> {
        let ground = self.locations.iter().flat_map(|location| {
            location
                .items
                .iter()
                .map(move |item| (item, Holder::Ground(location.name.clone())))
        });
        let carried = self.actors().flat_map(|character| {
            character
                .inventory
                .iter()
                .map(move |item| (item, Holder::Inventory(character.name.clone())))
        });
        let obstacles = self.locations.iter().flat_map(|location| {
            location.blocked.iter().map(move |passage| {
                (
                    passage.obstacle.as_str(),
                    Holder::Obstacle {
                        from: location.name.clone(),
                        to: passage.target.clone(),
                    },
                )
            })
        });
        ground.chain(carried).chain(obstacles)
    }

    // -----------------------------------------------------------------------
    // Integrity
    // -----------------------------------------------------------------------

    /// Verify the structural invariants of the world graph.
    ///
    /// Every reference must name a registered entity exactly, no passage may
    /// be open and blocked at once, and every item must have exactly one holder.
    pub fn check_integrity(&self) -> CoreResult<()> {
        for character in self.actors() {
            expect_exact(&self.locations, &character.location, || {
                format!("location of {}", character.name)
            })?;
        }

        for location in self.locations.iter() {
            for target in location.connections.iter() {
                expect_exact(&self.locations, target, || {
                    format!("connection of {}", location.name)
                })?;
            }
            for passage in &location.blocked {
                expect_exact(&self.locations, &passage.target, || {
                    format!("blocked passage of {}", location.name)
                })?;
                if location.is_open_to(&passage.target) {
                    return Err(CoreError::Integrity(format!(
                        "passage {} -> {} is both open and blocked",
                        location.name, passage.target
                    )));
                }
            }
        }

        let mut seen: HashMap<&str, Vec<Holder>> = HashMap::new();
        for (item, holder) in self.holders() {
            expect_exact(&self.items, item, || format!("contents of {holder}"))?;
            seen.entry(item).or_default().push(holder);
        }
        for item in self.items.iter() {
            match seen.get(item.name.as_str()).map(Vec::as_slice) {
                Some([_]) => {}
                None | Some([]) => {
                    return Err(CoreError::Integrity(format!("{} has no holder", item.name)));
                }
                Some(holders) => {
                    let holders: Vec<String> = holders.iter().map(ToString::to_string).collect();
                    return Err(CoreError::Integrity(format!(
                        "{} is held by more than one owner: {}",
                        item.name,
                        holders.join(", ")
                    )));
                }
            }
        }
        Ok(())
    }
}

fn expect_exact<T: Described>(
    registry: &Registry<T>,
    name: &str,
    context: impl FnOnce() -> String,
) -> CoreResult<()> {
    match registry.get(name) {
        Some(entity) if entity.name() == name => Ok(()),
        _ => Err(CoreError::Integrity(format!(
            "{} refers to unknown {} \"{name}\"",
            context(),
            T::KIND
        ))),
    }
}

pub(crate) fn unknown(kind: EntityKind, name: &str) -> CoreError {
    CoreError::UnknownEntity {
        kind,
        name: name.to_string(),
    }
}
