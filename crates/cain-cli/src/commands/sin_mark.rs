use cain_mechanics::host::{MessageSink, Speaker};
use cain_mechanics::{SinMarkRoll, render_sin_mark};

use super::{ConsoleSink, Session};

pub fn run(
    session: &mut Session,
    choose: Option<&str>,
    remove: Option<usize>,
    clear: bool,
) -> Result<(), String> {
    if clear {
        session.sheet.clear_sin_marks();
        println!("  Cleared all sin marks");
        return session.save_sheet();
    }

    if let Some(position) = remove {
        let removed = position
            .checked_sub(1)
            .and_then(|index| session.sheet.remove_sin_mark(index))
            .ok_or_else(|| format!("no sin mark at position {position}"))?;
        println!("  Removed {removed}");
        return session.save_sheet();
    }

    let roll = match choose {
        Some(mark) => SinMarkRoll::new().choosing(mark),
        None => SinMarkRoll::new(),
    };
    let gain = roll
        .roll(
            &session.config.rules.sin_marks,
            &session.sheet.sin_marks,
            &mut session.rng,
        )
        .map_err(|e| e.to_string())?;
    session.sheet.record_sin_mark(&gain);

    if session.json {
        let body = serde_json::json!({
            "gain": gain,
            "sin_marks": session.sheet.sin_marks,
        });
        let text = serde_json::to_string_pretty(&body)
            .map_err(|e| format!("failed to encode result: {e}"))?;
        println!("{text}");
    } else {
        let speaker = Speaker(session.sheet.name.clone());
        ConsoleSink
            .post_message(&render_sin_mark(&gain), &speaker)
            .map_err(|e| format!("failed to post message: {e}"))?;
    }

    session.save_sheet()
}
