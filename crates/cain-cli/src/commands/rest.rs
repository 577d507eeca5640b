use cain_mechanics::RestRoll;

use super::Session;

pub fn run(session: &mut Session) -> Result<(), String> {
    let result = RestRoll
        .roll(&session.sheet, &session.config.rules.rest, &mut session.rng)
        .map_err(|e| e.to_string())?;
    session.finish(&result)
}
