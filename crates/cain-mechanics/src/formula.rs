//! Dice-notation formulas.
//!
//! Stored rolls use the text convention
//! `<count>d<sides>[cs>=<face>|cs=<face>][kl]`. Most call sites only need the
//! die count, which [`parse_die_count`] extracts without ever failing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dice::{Comparison, DicePool};
use crate::error::MechError;

/// Extract the die count from free-form formula text.
///
/// Returns the first run of ASCII digits immediately followed by `d`
/// (`"3d6cs>=4"` gives 3). Returns 0 when there is no such run or it does
/// not fit in a `u32`.
pub fn parse_die_count(formula: &str) -> u32 {
    let bytes = formula.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() {
            start += 1;
            continue;
        }
        let end = start + digit_run(&bytes[start..]);
        if bytes.get(end) == Some(&b'd') {
            return formula[start..end].parse().unwrap_or(0);
        }
        start = end;
    }
    0
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// A fully parsed dice formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceFormula {
    /// Number of dice.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
    /// Count-successes suffix, if present.
    pub success: Option<(Comparison, u32)>,
    /// Whether only the lowest die is kept.
    pub keep_lowest: bool,
}

impl DiceFormula {
    /// The pool this formula describes. Without a count-successes suffix
    /// every die counts.
    pub fn to_pool(&self) -> DicePool {
        let (comparison, threshold) = self.success.unwrap_or((Comparison::AtLeast, 1));
        DicePool {
            die_count: self.count,
            success_threshold: threshold,
            sides: self.sides,
            comparison,
        }
    }
}

impl FromStr for DiceFormula {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let fail = |reason: &str| MechError::InvalidFormula {
            formula: s.to_string(),
            reason: reason.to_string(),
        };

        let (count, rest) = take_number(text).ok_or_else(|| fail("expected a die count"))?;
        let rest = rest
            .strip_prefix('d')
            .ok_or_else(|| fail("expected 'd' after the die count"))?;
        let (sides, mut rest) = take_number(rest).ok_or_else(|| fail("expected die sides"))?;
        if sides == 0 {
            return Err(fail("dice must have at least one side"));
        }

        let mut success = None;
        if let Some(after) = rest.strip_prefix("cs") {
            let (comparison, after) = if let Some(a) = after.strip_prefix(">=") {
                (Comparison::AtLeast, a)
            } else if let Some(a) = after.strip_prefix('=') {
                (Comparison::Exactly, a)
            } else {
                return Err(fail("expected '>=' or '=' after 'cs'"));
            };
            let (face, after) =
                take_number(after).ok_or_else(|| fail("expected a face after 'cs'"))?;
            success = Some((comparison, face));
            rest = after;
        }

        let keep_lowest = if let Some(after) = rest.strip_prefix("kl") {
            rest = after;
            true
        } else {
            false
        };

        if !rest.is_empty() {
            return Err(fail(&format!("unexpected trailing text '{rest}'")));
        }

        Ok(Self {
            count,
            sides,
            success,
            keep_lowest,
        })
    }
}

fn take_number(text: &str) -> Option<(u32, &str)> {
    let len = digit_run(text.as_bytes());
    if len == 0 {
        return None;
    }
    let value = text[..len].parse().ok()?;
    Some((value, &text[len..]))
}

impl std::fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.success {
            Some((Comparison::AtLeast, face)) => write!(f, "cs>={face}")?,
            Some((Comparison::Exactly, face)) => write!(f, "cs={face}")?,
            None => {}
        }
        if self.keep_lowest {
            write!(f, "kl")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_count_from_formulas() {
        assert_eq!(parse_die_count("3d6cs>=4"), 3);
        assert_eq!(parse_die_count("2d6cs>=6kl"), 2);
        assert_eq!(parse_die_count("12d6"), 12);
        assert_eq!(parse_die_count("roll 4d6 for it"), 4);
    }

    #[test]
    fn die_count_skips_runs_without_separator() {
        assert_eq!(parse_die_count("x12 3d6"), 3);
        assert_eq!(parse_die_count("1 2 3"), 0);
    }

    #[test]
    fn die_count_silent_fallback() {
        assert_eq!(parse_die_count("garbage"), 0);
        assert_eq!(parse_die_count(""), 0);
        assert_eq!(parse_die_count("d6"), 0);
        assert_eq!(parse_die_count("3D6"), 0);
        assert_eq!(parse_die_count("99999999999d6"), 0);
    }

    #[test]
    fn parse_full_formula() {
        let f: DiceFormula = "2d6cs>=6kl".parse().unwrap();
        assert_eq!(f.count, 2);
        assert_eq!(f.sides, 6);
        assert_eq!(f.success, Some((Comparison::AtLeast, 6)));
        assert!(f.keep_lowest);

        let f: DiceFormula = "3d6cs=1".parse().unwrap();
        assert_eq!(f.success, Some((Comparison::Exactly, 1)));
        assert!(!f.keep_lowest);

        let f: DiceFormula = " 4d3 ".parse().unwrap();
        assert_eq!(f.success, None);
        assert_eq!(f.to_string(), "4d3");
    }

    #[test]
    fn formula_to_pool() {
        let f: DiceFormula = "5d6cs>=4".parse().unwrap();
        assert_eq!(f.to_pool(), DicePool::new(5, 4));
        let f: DiceFormula = "3d6cs=1".parse().unwrap();
        assert_eq!(f.to_pool(), DicePool::counting_face(3, 1));
    }

    #[test]
    fn display_matches_input() {
        for text in ["5d6cs>=4", "2d6cs>=6kl", "3d6cs=1", "2d3"] {
            let f: DiceFormula = text.parse().unwrap();
            assert_eq!(f.to_string(), text);
        }
    }

    #[test]
    fn rejects_malformed() {
        for text in ["", "d6", "3x6", "3d", "3d0", "3d6cs", "3d6cs>4", "3d6kh"] {
            let result = text.parse::<DiceFormula>();
            assert!(
                matches!(result, Err(MechError::InvalidFormula { .. })),
                "{text} should be rejected"
            );
        }
    }
}
