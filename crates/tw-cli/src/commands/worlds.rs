use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let catalog = tw_story::worlds::catalog();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Summary"]);
    for entry in catalog {
        table.add_row(vec![entry.id, entry.title, entry.summary]);
    }

    println!("{table}");
    println!();
    println!("  {} worlds", catalog.len());
    Ok(())
}
