pub mod affliction;
pub mod attack;
pub mod parse;
pub mod psyche;
pub mod rest;
pub mod severe;
pub mod sheet;
pub mod sin_mark;
pub mod skill;

use std::path::{Path, PathBuf};

use cain_mechanics::host::{MessageSink, Speaker};
use cain_mechanics::report::announce;
use cain_mechanics::sheet::stats;
use cain_mechanics::{ActionResult, CharacterSheet, MechResult, RollConfig, RuleBook, Track};
use clap::Args;
use colored::Colorize;
use rand::rngs::StdRng;

/// Options shared by every subcommand.
#[derive(Args)]
pub struct GlobalArgs {
    /// Character sheet JSON file (default: a built-in sample exorcist)
    #[arg(long, global = true)]
    pub sheet: Option<PathBuf>,

    /// Rule book JSON overriding per-roll fallbacks and escalation tables
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// RNG seed for reproducible rolls
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Write stat changes and tags back to the sheet file
    #[arg(long, global = true)]
    pub save: bool,
}

/// Loaded sheet, rules, and RNG for one invocation.
pub struct Session {
    pub sheet: CharacterSheet,
    sheet_path: Option<PathBuf>,
    pub config: RollConfig,
    pub rng: StdRng,
    pub json: bool,
    save: bool,
}

impl Session {
    pub fn load(args: &GlobalArgs) -> Result<Self, String> {
        if args.save && args.sheet.is_none() {
            return Err("--save needs a --sheet file to write to".into());
        }

        let sheet = match &args.sheet {
            Some(path) => read_json(path, "sheet")?,
            None => sample_sheet(),
        };
        let rules: RuleBook = match &args.rules {
            Some(path) => read_json(path, "rule book")?,
            None => RuleBook::default(),
        };

        let mut config = RollConfig::default().with_rules(rules);
        if let Some(seed) = args.seed {
            config = config.with_seed(seed);
        }
        tracing::debug!(sheet = %sheet.name, seed = ?config.seed, "session loaded");

        Ok(Self {
            rng: config.rng(),
            sheet,
            sheet_path: args.sheet.clone(),
            config,
            json: args.json,
            save: args.save,
        })
    }

    /// Announce a roll, apply its effects to the sheet, and save if asked.
    pub fn finish(&mut self, result: &ActionResult) -> Result<(), String> {
        let changes = self
            .sheet
            .apply(&result.effects)
            .map_err(|e| format!("failed to apply effects: {e}"))?;

        if self.json {
            let body = serde_json::json!({
                "speaker": self.sheet.name,
                "formula": result.formula(),
                "result": result,
                "changes": changes,
            });
            let text = serde_json::to_string_pretty(&body)
                .map_err(|e| format!("failed to encode result: {e}"))?;
            println!("{text}");
        } else {
            let speaker = Speaker(self.sheet.name.clone());
            announce(result, &speaker, &mut ConsoleSink)
                .map_err(|e| format!("failed to post message: {e}"))?;
            for change in &changes {
                let before = change
                    .before
                    .map_or_else(|| "-".to_string(), |v| v.to_string());
                println!(
                    "  {} {} {} -> {}",
                    "Updated".dimmed(),
                    change.stat,
                    before,
                    change.after
                );
            }
        }

        self.save_sheet()
    }

    fn save_sheet(&self) -> Result<(), String> {
        let (true, Some(path)) = (self.save, &self.sheet_path) else {
            return Ok(());
        };
        let text = serde_json::to_string_pretty(&self.sheet)
            .map_err(|e| format!("failed to encode sheet: {e}"))?;
        std::fs::write(path, text)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "sheet saved");
        Ok(())
    }
}

/// Prints announcements to stdout.
struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn post_message(&mut self, text: &str, speaker: &Speaker) -> MechResult<()> {
        let mut lines = text.lines();
        if let Some(heading) = lines.next() {
            println!("  {} {}", format!("{speaker}:").as_str().dimmed(), heading.bold());
        }
        for line in lines {
            if let Some(count) = line.strip_prefix("Successes: ") {
                let count = if count == "0" { count.red() } else { count.green() };
                println!("  Successes: {count}");
            } else {
                println!("  {line}");
            }
        }
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {what} {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid {what} {}: {e}", path.display()))
}

/// The character used when no sheet file is given.
fn sample_sheet() -> CharacterSheet {
    let skills = [
        ("force", 2),
        ("conditioning", 1),
        ("coordination", 1),
        ("covert", 3),
        ("interfacing", 0),
        ("investigation", 2),
        ("surveillance", 1),
        ("negotiation", 0),
        ("authority", 1),
        ("connection", 2),
    ];
    let mut sheet = skills
        .iter()
        .fold(CharacterSheet::new("Exorcist"), |sheet, (name, rating)| {
            sheet.with_stat(*name, *rating)
        })
        .with_stat(stats::PSYCHE, 2)
        .with_stat(stats::REST_DICE_MODIFIER, 0)
        .with_track("stress", Track::empty("Stress", 6));
    sheet.afflictions = [
        "Shaken",
        "Bleeding",
        "Haunted",
        "Numb",
        "Paranoid",
        "Exhausted",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    sheet
}
