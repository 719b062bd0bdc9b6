use serde::{Deserialize, Serialize};

use crate::entity::{Described, EntityKind, NameList};
use crate::error::{CoreError, CoreResult};

/// A passage that exists but cannot be traversed until its obstacle is overcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedPassage {
    /// The location the passage leads to.
    pub target: String,
    /// The item standing in the way.
    pub obstacle: String,
    /// Whether unblocking also opens the way back from `target`.
    pub symmetric: bool,
}

/// A place in the world.
///
/// A passage to another location is either open (listed in `connections`),
/// blocked (recorded in `blocked`), or absent. Never both open and blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique location name.
    pub name: String,
    /// Flavor text.
    pub descriptions: Vec<String>,
    pub(crate) items: NameList,
    pub(crate) connections: NameList,
    pub(crate) blocked: Vec<BlockedPassage>,
}

impl Location {
    /// Create an empty location with no exits.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        descriptions: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            descriptions: descriptions.into_iter().map(Into::into).collect(),
            items: NameList::new(),
            connections: NameList::new(),
            blocked: Vec::new(),
        }
    }

    /// Items lying here.
    pub fn items(&self) -> &NameList {
        &self.items
    }

    /// Locations reachable from here right now.
    pub fn connections(&self) -> &NameList {
        &self.connections
    }

    /// Passages out of here that are currently blocked.
    pub fn blocked(&self) -> &[BlockedPassage] {
        &self.blocked
    }

    /// Whether the passage to `target` is open.
    pub fn is_open_to(&self, target: &str) -> bool {
        self.connections.contains(target)
    }

    /// The blocked passage record towards `target`, if any.
    pub fn blocked_passage(&self, target: &str) -> Option<&BlockedPassage> {
        self.blocked.iter().find(|b| b.target == target)
    }

    /// Open -> Blocked for the passage towards `target`.
    pub(crate) fn block(&mut self, target: &str, obstacle: &str, symmetric: bool) -> CoreResult<()> {
        if self.blocked_passage(target).is_some() {
            return Err(CoreError::AlreadyBlocked {
                from: self.name.clone(),
                to: target.to_string(),
            });
        }
        if !self.connections.remove(target) {
            return Err(CoreError::NotConnected {
                from: self.name.clone(),
                to: target.to_string(),
            });
        }
        self.blocked.push(BlockedPassage {
            target: target.to_string(),
            obstacle: obstacle.to_string(),
            symmetric,
        });
        Ok(())
    }

    /// Blocked -> Open for this direction. Returns the removed record so the
    /// caller can open the reverse direction and rehome the obstacle.
    pub(crate) fn unblock(&mut self, target: &str) -> CoreResult<BlockedPassage> {
        let pos = self
            .blocked
            .iter()
            .position(|b| b.target == target)
            .ok_or_else(|| CoreError::NotBlocked {
                from: self.name.clone(),
                to: target.to_string(),
            })?;
        let passage = self.blocked.remove(pos);
        self.connections.insert(passage.target.clone());
        Ok(passage)
    }
}

impl Described for Location {
    const KIND: EntityKind = EntityKind::Location;

    fn name(&self) -> &str {
        &self.name
    }

    fn descriptions(&self) -> &[String] {
        &self.descriptions
    }
}
