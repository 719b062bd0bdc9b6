use serde::{Deserialize, Serialize};

use crate::entity::{Described, EntityKind, NameList};
use crate::error::{CoreError, CoreResult};
use crate::location::Location;

/// A person or creature. The player is a character too; the world decides
/// which one plays that role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique character name.
    pub name: String,
    /// Flavor text.
    pub descriptions: Vec<String>,
    pub(crate) inventory: NameList,
    pub(crate) location: String,
}

impl Character {
    /// Create a character standing at `location` with empty hands.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        descriptions: impl IntoIterator<Item = S>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            descriptions: descriptions.into_iter().map(Into::into).collect(),
            inventory: NameList::new(),
            location: location.into(),
        }
    }

    /// Items the character carries.
    pub fn inventory(&self) -> &NameList {
        &self.inventory
    }

    /// Name of the location the character is in.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Whether the character carries `item`.
    pub fn holds(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    /// Step from `here` to `to`. Only open passages can be used.
    pub(crate) fn move_to(&mut self, here: &Location, to: &str) -> CoreResult<()> {
        if !here.is_open_to(to) {
            return Err(CoreError::Unreachable {
                from: here.name.clone(),
                to: to.to_string(),
            });
        }
        self.location = to.to_string();
        Ok(())
    }
}

impl Described for Character {
    const KIND: EntityKind = EntityKind::Character;

    fn name(&self) -> &str {
        &self.name
    }

    fn descriptions(&self) -> &[String] {
        &self.descriptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_through_open_passage() {
        let mut garden = Location::new("Garden", ["A garden"]);
        garden.connections.insert("Cabin");
        let mut alicia = Character::new("Alicia", ["She likes to sing"], "Garden");

        alicia.move_to(&garden, "Cabin").unwrap();
        assert_eq!(alicia.location(), "Cabin");
    }

    #[test]
    fn move_without_passage_fails() {
        let garden = Location::new("Garden", ["A garden"]);
        let mut alicia = Character::new("Alicia", ["She likes to sing"], "Garden");

        let err = alicia.move_to(&garden, "Cabin").unwrap_err();
        assert!(matches!(err, CoreError::Unreachable { .. }));
        assert_eq!(alicia.location(), "Garden");
    }

    #[test]
    fn holds_checks_inventory() {
        let mut alicia = Character::new("Alicia", Vec::<String>::new(), "Garden");
        assert!(!alicia.holds("Apple"));
        alicia.inventory.insert("Apple");
        assert!(alicia.holds("Apple"));
    }
}
