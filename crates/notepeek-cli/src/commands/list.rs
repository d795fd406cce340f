use anyhow::Result;

use notepeek_core::NoteList;

pub fn run(notes: &NoteList, query: Option<&str>) -> Result<()> {
    let query = query.unwrap_or("");
    let matches = notes.filter(query);

    if notes.is_empty() {
        println!("No notes yet.");
        println!("\nTo load notes, point the config at a file:");
        println!("  [general]");
        println!("  notes_file = \"~/notes.toml\"");
        return Ok(());
    }

    if matches.is_empty() {
        println!("No Results!");
        return Ok(());
    }

    if query.is_empty() {
        println!("Notes ({}):\n", notes.len());
    } else {
        println!(
            "Notes matching \"{}\" ({} of {}):\n",
            query,
            matches.len(),
            notes.len()
        );
    }

    for note in &matches {
        println!("  {} - {}", note.id, note.title);
        if !note.description.is_empty() {
            println!("    {}", note.description);
        }
    }

    Ok(())
}
