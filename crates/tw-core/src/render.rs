//! Plain-sentence rendering of what the player can perceive.
//!
//! The output is what the narrative model reads, so the wording is fixed and
//! names are always wrapped in angle brackets.

use crate::entity::{Described, NameList};
use crate::location::Location;
use crate::world::World;

impl World {
    /// Describe the player's surroundings.
    ///
    /// With `detail`, a second block describes the location, the player, every
    /// co-located character and every visible item. Items reachable through
    /// several sources (ground, inventories, obstacles) are described once.
    pub fn render(&self, detail: bool) -> String {
        let Ok(here) = self.player_location() else {
            return format!("You are in <{}>\n", self.player.location);
        };
        let people: Vec<_> = self
            .characters
            .iter()
            .filter(|c| c.location == here.name)
            .collect();

        let mut out = String::new();
        let name = &here.name;
        out.push_str(&format!("You are in <{name}>\n"));
        out.push_str(&format!(
            "From <{name}> you can access: {}\n",
            bracketed(here.connections.iter())
        ));
        let blocked: Vec<String> = here
            .blocked
            .iter()
            .map(|b| format!("<{}> blocked by <{}>", b.target, b.obstacle))
            .collect();
        out.push_str(&format!(
            "From <{name}> there are blocked passages to: {}\n",
            blocked.join(", ")
        ));
        out.push_str(&format!(
            "You have the following items in your inventory: {}\n",
            bracketed(self.player.inventory.iter())
        ));
        out.push_str(&format!(
            "If you look around, you can see: {}\n",
            bracketed(here.items.iter())
        ));
        if !people.is_empty() {
            out.push_str(&format!(
                "You can also see some people: {}\n",
                bracketed(people.iter().map(|c| c.name.as_str()))
            ));
        }

        if detail {
            out.push_str(&self.render_details(here));
        }
        out
    }

    fn render_details(&self, here: &Location) -> String {
        let mut out = String::from("\nHere is a description of each component.\n");
        out.push_str(&format!(
            "<{}>: This is the player's location. {}\n",
            here.name,
            sentences(here)
        ));

        out.push_str("Characters:\n");
        out.push_str(&format!(
            "- <Player>: The player is acting as {}. {}\n",
            self.player.name,
            sentences(&self.player)
        ));

        let mut visible: NameList = here
            .items
            .iter()
            .chain(self.player.inventory.iter())
            .chain(here.blocked.iter().map(|b| b.obstacle.as_str()))
            .collect();

        for character in self.characters.iter().filter(|c| c.location == here.name) {
            out.push_str(&format!("- <{}>: {}", character.name, sentences(character)));
            if !character.inventory.is_empty() {
                out.push_str(&format!(
                    " This character has the following items: {}",
                    bracketed(character.inventory.iter())
                ));
                for item in character.inventory.iter() {
                    visible.insert(item);
                }
            }
            out.push('\n');
        }

        let items: Vec<_> = visible.iter().filter_map(|name| self.items.get(name)).collect();
        if !items.is_empty() {
            out.push_str("Objects:\n");
            for item in items {
                out.push_str(&format!("- <{}>: {}\n", item.name, item.description()));
            }
        }
        out
    }
}

fn bracketed<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|n| format!("<{n}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Descriptions as closed sentences, or nothing when there are none.
fn sentences(entity: &impl Described) -> String {
    if entity.descriptions().is_empty() {
        String::new()
    } else {
        format!("{}.", entity.description())
    }
}

#[cfg(test)]
mod tests {
    use crate::character::Character;
    use crate::entity::Item;
    use crate::location::Location;
    use crate::world::World;

    fn test_world() -> World {
        let mut world = World::new(Character::new(
            "Cid",
            ["A tall soldier"],
            "Cellar",
        ));
        world
            .add_locations([
                Location::new("Cellar", ["There is a metal door", "The walls are damp"]),
                Location::new("Kitchen", ["A beautiful well-lit kitchen"]),
                Location::new("Stairs", ["Narrow stairs"]),
            ])
            .unwrap();
        world
            .add_character(Character::new(
                "Elvira",
                ["A little girl", "She can't read yet"],
                "Cellar",
            ))
            .unwrap();
        world
            .add_items([
                Item::new("Apple", ["A red fruit"]),
                Item::new("Note", ["A paper with a note"]),
                Item::new("Lock", ["A strong lock"]),
                Item::new("Doll", ["A rag doll"]),
            ])
            .unwrap();
        world.stow_item("Apple", "Cid").unwrap();
        world.stow_item("Doll", "Elvira").unwrap();
        world.place_item("Note", "Cellar").unwrap();
        world.place_item("Lock", "Cellar").unwrap();
        world.connect("Cellar", "Kitchen").unwrap();
        world.connect_both("Cellar", "Stairs").unwrap();
        world
            .block_passage("Cellar", "Kitchen", "Lock", true)
            .unwrap();
        world
    }

    #[test]
    fn render_summary() {
        let world = test_world();
        assert_eq!(
            world.render(false),
            "You are in <Cellar>\n\
             From <Cellar> you can access: <Stairs>\n\
             From <Cellar> there are blocked passages to: <Kitchen> blocked by <Lock>\n\
             You have the following items in your inventory: <Apple>\n\
             If you look around, you can see: <Note>\n\
             You can also see some people: <Elvira>\n"
        );
    }

    #[test]
    fn render_details() {
        let world = test_world();
        let text = world.render(true);
        let details = text.split_once("\n\n").unwrap().1;
        assert_eq!(
            details,
            "Here is a description of each component.\n\
             <Cellar>: This is the player's location. There is a metal door. The walls are damp.\n\
             Characters:\n\
             - <Player>: The player is acting as Cid. A tall soldier.\n\
             - <Elvira>: A little girl. She can't read yet. This character has the following items: <Doll>\n\
             Objects:\n\
             - <Note>: A paper with a note\n\
             - <Apple>: A red fruit\n\
             - <Lock>: A strong lock\n\
             - <Doll>: A rag doll\n"
        );
    }

    #[test]
    fn people_line_omitted_when_alone() {
        let mut world = test_world();
        world.move_character("Cid", "Stairs").unwrap();
        let text = world.render(false);
        assert!(!text.contains("You can also see some people"));
        assert!(text.contains("From <Stairs> you can access: <Cellar>\n"));
        assert!(text.contains("there are blocked passages to: \n"));
    }

    #[test]
    fn visible_items_are_described_once() {
        let mut world = test_world();
        world.move_character("Cid", "Stairs").unwrap();
        world.drop("Cid", "Apple").unwrap();
        world.take("Cid", "Apple").unwrap();
        let text = world.render(true);
        assert_eq!(text.matches("- <Apple>:").count(), 1);
        assert!(!text.contains("Objects:\n- <Note>"));
    }

    #[test]
    fn render_is_deterministic() {
        let world = test_world();
        assert_eq!(world.render(true), world.render(true));
    }
}
