use cain_mechanics::SkillRoll;

use super::Session;

pub fn run(
    session: &mut Session,
    skill: &str,
    extra: i32,
    hard: bool,
    teamwork: bool,
    setup: bool,
    agony: bool,
) -> Result<(), String> {
    let result = SkillRoll::new(skill.to_lowercase())
        .with_extra_dice(extra)
        .with_teamwork(teamwork)
        .with_setup(setup)
        .spending_divine_agony(agony)
        .hard(hard)
        .roll(&session.sheet, &session.config.rules.skill, &mut session.rng)
        .map_err(|e| e.to_string())?;
    session.finish(&result)
}
