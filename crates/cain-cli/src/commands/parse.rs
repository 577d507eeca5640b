use cain_mechanics::{DiceFormula, parse_die_count};

use super::Session;

pub fn run(session: &Session, formula: &str) -> Result<(), String> {
    let count = parse_die_count(formula);
    let parsed = formula.parse::<DiceFormula>();

    if session.json {
        let body = serde_json::json!({
            "input": formula,
            "die_count": count,
            "formula": parsed.as_ref().ok(),
            "error": parsed.as_ref().err().map(|e| e.to_string()),
        });
        let text = serde_json::to_string_pretty(&body)
            .map_err(|e| format!("failed to encode result: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    println!("  Die count: {count}");
    match parsed {
        Ok(parsed) => {
            let pool = parsed.to_pool();
            println!("  Formula: {parsed}");
            println!("  Pool: {}", pool.formula());
            if parsed.keep_lowest {
                println!("  Keeps the lowest die");
            }
        }
        Err(e) => println!("  Not a full formula: {e}"),
    }
    Ok(())
}
