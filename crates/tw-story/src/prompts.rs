//! Prompt templates sent to the narrative model.
//!
//! The world-update prompt teaches the model the update protocol that
//! [`tw_core::World::parse_updates`] reads back.

/// Prompt asking for a short, state-faithful narration of the current scene.
pub fn narrate_scene(world_state: &str) -> String {
    format!(
        "You are a storyteller. Take the following state of the world and narrate it in a few \
         sentences. Be careful not to include details that contradict the current state of the \
         world or that move the story forward. Also, try to use simple sentences, being concise \
         and exhaustive.\n\
         \n\
         This is the state of the world at the moment:\n\
         {world_state}\n"
    )
}

/// Prompt asking for the changes a player input causes, in update-protocol form.
pub fn world_update(world_state: &str, input: &str) -> String {
    format!(
        "You are a storyteller. You are managing a fictional world, and the player can interact \
         with it. This is the state of the world at the moment:\n\
         {world_state}\n\
         \n\
         Explain the changes in the world after the player actions in this input \"{input}\".\n\
         \n\
         Here are some clarifications. If a passage is blocked, then the player must unblock it \
         before being able to reach the place. Pay attention to the description of the components \
         and their capabilities.\n\
         Do not assume that the given input always makes sense; maybe those actions try to do \
         something that the world does not allow.\n\
         Always follow this format with the three categories, using \"None\" in each case if \
         there are no changes, and repeat the category for each case (there may be more than 3 \
         items in the list):\n\
         - Moved object: <object> now is in <new_location>\n\
         - Blocked passages now available: <now_reachable_location>\n\
         - Your location changed: <new_location>\n\
         \n\
         Here you have some examples.\n\
         {EXAMPLES}\n\
         Finally, you can add a final short sentence narrating the detected changes in the state \
         of the world (without moving the story forward and creating details not included in the \
         state of the world!) or answering a question of the player, using the format: \
         #<your final sentence>#\n"
    )
}

const EXAMPLES: &str = "\
Example 1
- Moved object: <axe> now is in <Inventory>
- Blocked passages now available: None
- Your location changed: None

Example 2
- Moved object: None
- Blocked passages now available: None
- Your location changed: <Garden>

Example 3
- Moved object: <banana> now is in <Inventory>, <bottle> now is in <Inventory>, <axe> now is in <Main Hall>
- Blocked passages now available: None
- Your location changed: None

Example 4
- Moved object: <banana> now is in <Inventory>, <bottle> now is in <Inventory>, <axe> now is in <Main Hall>
- Blocked passages now available: <Small room>
- Your location changed: None

Example 5
- Moved object: <banana> now is in <Inventory>, <bottle> now is in <Inventory>, <axe> now is in <Main Hall>
- Blocked passages now available: <Small room>
- Your location changed: <Small room>

Example 6
- Moved object: <book> now is in <John>, <pencil> now is in <Inventory>
- Blocked passages now available: None
- Your location changed: None

Example 7
- Moved object: <computer> now is in <Susan>
- Blocked passages now available: None
- Your location changed: None
";
