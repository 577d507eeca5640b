use cain_mechanics::PsycheRoll;

use super::Session;

pub fn run(session: &mut Session, extra: i32, hard: bool) -> Result<(), String> {
    let result = PsycheRoll::new(extra, hard)
        .roll(&session.sheet, &session.config.rules.psyche, &mut session.rng)
        .map_err(|e| e.to_string())?;
    session.finish(&result)
}
