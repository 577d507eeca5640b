use cain_mechanics::actions::roll_affliction;
use colored::Colorize;

use super::Session;

pub fn run(session: &mut Session) -> Result<(), String> {
    let rolled = roll_affliction(&session.sheet, &mut session.rng).map_err(|e| e.to_string())?;

    if session.json {
        let text = serde_json::to_string_pretty(&rolled)
            .map_err(|e| format!("failed to encode result: {e}"))?;
        println!("{text}");
    } else {
        println!(
            "  {} {}",
            format!("{}:", session.sheet.name).as_str().dimmed(),
            "Affliction".bold()
        );
        println!("  Roll: {}", rolled.roll);
        println!("  {}", rolled.entry);
    }
    Ok(())
}
