use cain_mechanics::NpcAttack;

use super::Session;

pub fn run(session: &mut Session, low: &str, medium: &str, high: &str) -> Result<(), String> {
    let result = NpcAttack::new(low, medium, high)
        .roll(&session.config.rules.npc_attack, &mut session.rng)
        .map_err(|e| e.to_string())?;
    session.finish(&result)
}
