//! Core types for Taleweave: items, locations, characters, and the world model.
//!
//! The world is a registry of uniquely named entities. Containers (a
//! location's items, a character's inventory, a passage's obstacle) hold
//! names, and every item has exactly one holder at all times. State changes
//! come either from direct calls ([`World::take`], [`World::unblock_passage`],
//! ...) or from update text written by a narrative model
//! ([`World::parse_updates`]).

mod actions;
/// Fluent world construction.
pub mod builder;
/// Characters and their movement.
pub mod character;
/// Entity kinds, the `Described` capability, items, and name sets.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Locations and the passage-blocking state machine.
pub mod location;
/// Name-unique entity storage.
pub mod registry;
mod render;
/// Decoding and applying narrative-model update text.
pub mod update;
/// The world model that owns every entity.
pub mod world;

/// Re-export the builder.
pub use builder::WorldBuilder;
/// Re-export character type.
pub use character::Character;
/// Re-export entity types.
pub use entity::{Described, EntityKind, Item, NameList};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export location types.
pub use location::{BlockedPassage, Location};
/// Re-export update protocol types.
pub use update::{AppliedChange, ParsedUpdate, UpdateFailure, UpdateReport};
/// Re-export world model types.
pub use world::{Holder, World};
