//! The update protocol spoken by the narrative model.
//!
//! After each player action the model answers with three labeled lines and
//! an optional narration span:
//!
//! ```text
//! - Moved object: <Apple> now is in <Inventory>, <Note> now is in <Elvira>
//! - Blocked passages now available: <Kitchen>
//! - Your location changed: <Kitchen>
//! #You pick the lock and climb the stairs.#
//! ```
//!
//! Any line may carry `None` instead. Decoding is pure ([`decode`]); applying
//! the result to a [`World`](crate::World) happens in
//! [`World::apply_update`](crate::World::apply_update), which isolates every
//! clause so one bad reference never aborts the rest of the turn.

mod apply;
mod decode;
mod report;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use decode::{decode, narration, strip_narration};
pub use report::{AppliedChange, UpdateFailure, UpdateReport};

/// Destination that means "the player's inventory".
pub const INVENTORY_MARKER: &str = "Inventory";

/// Literal used by the model for "no change in this category".
pub const NONE_MARKER: &str = "None";

/// Delimiter around the narration span.
pub const NARRATION_MARKER: char = '#';

/// One of the three labeled lines of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// `Moved object:`
    MovedObject,
    /// `Blocked passages now available:`
    BlockedPassages,
    /// `Your location changed:`
    LocationChange,
}

impl Category {
    /// The label as it appears in update text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MovedObject => "Moved object",
            Self::BlockedPassages => "Blocked passages now available",
            Self::LocationChange => "Your location changed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `<item> now is in <destination>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovedObject {
    /// Item name as written by the model.
    pub item: String,
    /// Inventory marker, character name, or any other place.
    pub destination: String,
}

/// A labeled line whose content could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedLine {
    /// The category the line was labeled with.
    pub category: Category,
    /// The text after the label.
    pub content: String,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.content)
    }
}

/// Decoded update text, before it touches any world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUpdate {
    /// Item movements, in the order written.
    pub moved: Vec<MovedObject>,
    /// Locations whose passage from the player's location is now open.
    pub unblocked: Vec<String>,
    /// Where the player went, if anywhere.
    pub location_change: Option<String>,
    /// The narration span, without its markers.
    pub narration: Option<String>,
    /// Lines that carried neither `None` nor a bracketed name.
    pub malformed: Vec<MalformedLine>,
}

impl ParsedUpdate {
    /// Whether the update asks for no change at all.
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty() && self.unblocked.is_empty() && self.location_change.is_none()
    }
}
