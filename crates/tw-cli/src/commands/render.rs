pub fn run(world: &str, detail: bool) -> Result<(), String> {
    let world = super::load_world(world)?;
    print!("{}", world.render(detail));
    Ok(())
}
