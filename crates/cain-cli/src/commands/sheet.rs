use comfy_table::{ContentArrangement, Table};

use super::Session;

pub fn run(session: &Session) -> Result<(), String> {
    let sheet = &session.sheet;

    if session.json {
        let text = serde_json::to_string_pretty(sheet)
            .map_err(|e| format!("failed to encode sheet: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    println!("  {}", sheet.name);
    println!();

    let mut stats = Table::new();
    stats.set_content_arrangement(ContentArrangement::Dynamic);
    stats.set_header(vec!["Stat", "Value"]);
    for (name, value) in &sheet.stats {
        stats.add_row(vec![name.clone(), value.to_string()]);
    }
    println!("{stats}");

    if !sheet.tracks.is_empty() {
        let mut tracks = Table::new();
        tracks.set_content_arrangement(ContentArrangement::Dynamic);
        tracks.set_header(vec!["Track", "Current", "Max"]);
        for track in sheet.tracks.values() {
            tracks.add_row(vec![
                track.name.clone(),
                track.current.to_string(),
                track.max.to_string(),
            ]);
        }
        println!("{tracks}");
    }

    if !sheet.afflictions.is_empty() {
        println!();
        println!("  Afflictions: {}", sheet.afflictions.join(", "));
    }
    for (i, mark) in sheet.sin_marks.iter().enumerate() {
        println!("  Sin mark {}: {mark}", i + 1);
    }
    if !sheet.tags.is_empty() {
        println!("  Tags: {}", sheet.tags.join(", "));
    }
    Ok(())
}
