use cain_mechanics::actions::question_modifier;
use cain_mechanics::SevereAttack;

use super::Session;

pub fn run(
    session: &mut Session,
    formula: &str,
    modifier: i32,
    yes: u32,
    no: u32,
    yes_adds: bool,
) -> Result<(), String> {
    let answers: Vec<Option<bool>> = std::iter::repeat_n(Some(true), yes as usize)
        .chain(std::iter::repeat_n(Some(false), no as usize))
        .collect();
    let modifier = modifier.saturating_add(question_modifier(&answers, yes_adds));

    let result = SevereAttack::new(formula, modifier)
        .roll(&session.config.rules.severe_attack, &mut session.rng)
        .map_err(|e| e.to_string())?;
    session.finish(&result)
}
