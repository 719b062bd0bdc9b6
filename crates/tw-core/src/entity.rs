use std::fmt;

use serde::{Deserialize, Serialize};

/// The category an entity belongs to. Names are unique within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A physical object that can lie somewhere, be carried, or block a passage.
    Item,
    /// A place the player can stand in.
    Location,
    /// A person or creature, including the player.
    Character,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Location => write!(f, "location"),
            Self::Character => write!(f, "character"),
        }
    }
}

/// Shared capability of every world entity: a unique name and flavor text.
pub trait Described {
    /// The category this entity is registered under.
    const KIND: EntityKind;

    /// The unique name of the entity.
    fn name(&self) -> &str;

    /// Natural language descriptions, in authoring order.
    fn descriptions(&self) -> &[String];

    /// All descriptions joined into a single sentence run.
    fn description(&self) -> String {
        self.descriptions().join(". ")
    }
}

/// An ordered set of entity names.
///
/// Containers hold names, never copies of the entities themselves. Inserting
/// an existing member is a no-op and order of first insertion is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is a member.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Add `name` at the end. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Remove `name`. Returns false if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|n| n == name) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    /// Iterate over the members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.insert(name);
        }
        list
    }
}

/// An object in the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item name.
    pub name: String,
    /// Flavor text.
    pub descriptions: Vec<String>,
    /// Whether a character may pick the item up.
    pub gettable: bool,
}

impl Item {
    /// Create a gettable item.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        descriptions: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            descriptions: descriptions.into_iter().map(Into::into).collect(),
            gettable: true,
        }
    }

    /// Mark the item as fixed in place.
    pub fn fixed(mut self) -> Self {
        self.gettable = false;
        self
    }
}

impl Described for Item {
    const KIND: EntityKind = EntityKind::Item;

    fn name(&self) -> &str {
        &self.name
    }

    fn descriptions(&self) -> &[String] {
        &self.descriptions
    }
}
