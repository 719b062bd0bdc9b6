use serde::Serialize;

use crate::entity::EntityKind;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or mutating a world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "error", content = "details", rename_all = "snake_case")]
pub enum CoreError {
    /// An entity of the same kind already uses this name.
    #[error("a {kind} called \"{name}\" already exists")]
    DuplicateName {
        /// Category the collision happened in.
        kind: EntityKind,
        /// The rejected name.
        name: String,
    },

    /// A name could not be resolved to a registered entity.
    #[error("unknown {kind}: \"{name}\"")]
    UnknownEntity {
        /// The category that was searched.
        kind: EntityKind,
        /// The unresolved name.
        name: String,
    },

    /// Blocking was attempted between two locations that are not connected.
    #[error("{from} is not connected to {to}, so the passage cannot be blocked")]
    NotConnected {
        /// Location the passage starts at.
        from: String,
        /// Location the passage leads to.
        to: String,
    },

    /// The passage already carries an obstacle.
    #[error("a blocked passage from {from} to {to} already exists")]
    AlreadyBlocked {
        /// Location the passage starts at.
        from: String,
        /// Location the passage leads to.
        to: String,
    },

    /// Unblocking was attempted on a passage that is not blocked.
    #[error("there is no blocked passage from {from} to {to}")]
    NotBlocked {
        /// Location the passage starts at.
        from: String,
        /// Location the passage leads to.
        to: String,
    },

    /// A character tried to move somewhere that is not open from its location.
    #[error("{to} is not reachable from {from}")]
    Unreachable {
        /// The character's current location.
        from: String,
        /// The requested destination.
        to: String,
    },

    /// The item is fixed in place.
    #[error("{0} cannot be taken")]
    NotGettable(String),

    /// The character already carries the item.
    #[error("{item} is already in the inventory of {holder}")]
    AlreadyHeld {
        /// The item name.
        item: String,
        /// The character holding it.
        holder: String,
    },

    /// The item is not lying where the character stands.
    #[error("{item} is not in {location}")]
    NotHere {
        /// The item name.
        item: String,
        /// The character's location.
        location: String,
    },

    /// The item is currently blocking a passage and cannot be moved.
    #[error("{item} is blocking the passage from {from} to {to}")]
    ItemIsObstacle {
        /// The item name.
        item: String,
        /// Location the blocked passage starts at.
        from: String,
        /// Location the blocked passage leads to.
        to: String,
    },

    /// The world graph violates a structural invariant.
    #[error("integrity violation: {0}")]
    Integrity(String),
}
