use tw_story::prompts;

pub fn run(world: &str, input: &str, detail: bool) -> Result<(), String> {
    let world = super::load_world(world)?;
    print!("{}", prompts::world_update(&world.render(detail), input));
    Ok(())
}
