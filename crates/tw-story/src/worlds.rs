//! Bundled example worlds, selectable by id.

use tw_core::{Character, CoreResult, Item, Location, World, WorldBuilder};

use crate::error::{StoryError, StoryResult};

/// A bundled world.
#[derive(Debug, Clone, Copy)]
pub struct WorldEntry {
    /// Id used to select the world.
    pub id: &'static str,
    /// Short title.
    pub title: &'static str,
    /// One-line summary of what the world exercises.
    pub summary: &'static str,
    build: fn() -> CoreResult<World>,
}

impl WorldEntry {
    /// Build a fresh copy of the world.
    pub fn build(&self) -> CoreResult<World> {
        (self.build)()
    }
}

const CATALOG: &[WorldEntry] = &[
    WorldEntry {
        id: "1",
        title: "Garden, cabin and mansion",
        summary: "Three open locations, an apple, a toy car and a neighbour with a mate",
        build: garden_and_cabin,
    },
    WorldEntry {
        id: "2",
        title: "Locked cellar",
        summary: "A cellar locked by a lock and a kitchen cut off by a wall of flames",
        build: locked_cellar,
    },
];

/// Every bundled world, in id order.
pub fn catalog() -> &'static [WorldEntry] {
    CATALOG
}

/// Build the world with this id.
pub fn by_id(id: &str) -> StoryResult<World> {
    let entry = CATALOG
        .iter()
        .find(|entry| entry.id == id.trim())
        .ok_or_else(|| {
            let ids: Vec<&str> = CATALOG.iter().map(|e| e.id).collect();
            StoryError::UnknownWorld(id.to_string(), ids.join(", "))
        })?;
    entry.build().map_err(StoryError::from)
}

/// Alicia in a garden between a cabin and a mansion hall.
pub fn garden_and_cabin() -> CoreResult<World> {
    WorldBuilder::new(Character::new(
        "Alicia",
        ["She is wearing a long skirt", "She likes to sing"],
        "Garden",
    ))
    .locations([
        Location::new(
            "Garden",
            ["A beautiful garden", "There is a statue in the center"],
        ),
        Location::new(
            "Cabin",
            [
                "A small cabin",
                "It looks like no one has lived here for a while",
            ],
        ),
        Location::new("Mansion hall", ["A big hall", "There is a big staircase"]),
    ])
    .connect_both("Garden", "Cabin")
    .connect_both("Garden", "Mansion hall")
    .character(Character::new(
        "Javier",
        ["He has a long beard", "He loves to restore furniture"],
        "Mansion hall",
    ))
    .item_held(
        Item::new(
            "Apple",
            ["A fruit that can be eaten", "It is round-shaped and green"],
        ),
        "Alicia",
    )
    .item_at(
        Item::new("Toy car", ["A tiny toy purple car", "It looks brand new"]),
        "Garden",
    )
    .item_held(
        Item::new(
            "Mate",
            [
                "A classical mate, ready to drink!",
                "It contains some yerba",
                "You can drink this to boost your energy!",
            ],
        ),
        "Javier",
    )
    .build()
}

/// Cid locked in a cellar; the kitchen above opens onto a garden behind a fire.
pub fn locked_cellar() -> CoreResult<World> {
    WorldBuilder::new(Character::new("Cid", ["A tall soldier"], "Cellar"))
        .locations([
            Location::new(
                "Cellar",
                [
                    "There is a metal door locked by a lock",
                    "You can see damp patches on the walls",
                ],
            ),
            Location::new("Kitchen", ["A beautiful well-lit kitchen"]),
            Location::new("Garden", ["A small garden below the kitchen"]),
        ])
        .connect("Cellar", "Kitchen")
        .connect("Kitchen", "Garden")
        .character(Character::new(
            "Elvira",
            [
                "A little girl",
                "Her favorite food is apple pie, but she enjoys eating any fruit",
                "She can't read yet",
            ],
            "Cellar",
        ))
        .item_held(
            Item::new(
                "Apple",
                ["A fruit that can be eaten", "It is round-shaped and red"],
            ),
            "Cid",
        )
        .item_at(
            Item::new(
                "Key",
                [
                    "A key to open a lock",
                    "It is golden",
                    "It is engraved with a strange coat of arms",
                ],
            ),
            "Cellar",
        )
        .item_at(
            Item::new(
                "A grey Hammer",
                [
                    "A great grey hammer that can be used to break things",
                    "It is so heavy...",
                ],
            ),
            "Cellar",
        )
        .block(
            "Cellar",
            "Kitchen",
            Item::new(
                "Lock",
                [
                    "A strong lock engraved with a coat of arms",
                    "It seems that you cannot open it with your hands",
                ],
            ),
            true,
        )
        .item_at(
            Item::new(
                "Note",
                [
                    "A paper with a note",
                    "You can read 'Go to the kitchen to know the truth'",
                ],
            ),
            "Cellar",
        )
        .item_at(
            Item::new("Flashlight", ["A flashlight without batteries"]),
            "Kitchen",
        )
        .item_at(
            Item::new(
                "A green Hammer",
                [
                    "A small green hammer",
                    "It is just a toy and you cannot break anything with it.",
                ],
            ),
            "Cellar",
        )
        .block(
            "Kitchen",
            "Garden",
            Item::new(
                "A wall of flames",
                ["The heat is really intense but it is a small fire anyway"],
            ),
            false,
        )
        .item_at(Item::new("A metal flower", ["A strange flower"]), "Garden")
        .item_at(
            Item::new(
                "A fire extinguisher",
                ["You can control small fires with this."],
            ),
            "Kitchen",
        )
        .build()
}
