//! CLI frontend for the CAIN dice-pool resolver.

mod commands;

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cain",
    about = "CAIN dice roller: skill, psyche, and attack rolls with escalation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    /// Increase log verbosity (-v info, -vv debug). Overridden by CAIN_LOG.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Modifiers {
    /// Extra dice (negative to remove dice)
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    extra: i32,

    /// Hard roll: only sixes succeed
    #[arg(long)]
    hard: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a skill action
    Skill {
        /// Skill stat name (e.g. force, covert)
        skill: String,

        #[command(flatten)]
        modifiers: Modifiers,

        /// Another exorcist helps (+1 die)
        #[arg(long)]
        teamwork: bool,

        /// The action was set up (+1 die)
        #[arg(long)]
        setup: bool,

        /// Spend all divine agony for bonus dice
        #[arg(long)]
        agony: bool,
    },

    /// Roll psyche
    Psyche {
        #[command(flatten)]
        modifiers: Modifiers,
    },

    /// Roll an NPC severe attack from its stored formula
    Severe {
        /// Stored formula text, e.g. "3d6"
        formula: String,

        /// Dice added or removed by the attack dialog
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        modifier: i32,

        /// Number of ability questions answered yes
        #[arg(long, default_value = "0")]
        yes: u32,

        /// Number of ability questions answered no
        #[arg(long, default_value = "0")]
        no: u32,

        /// Yes answers remove a die instead of adding one
        #[arg(long)]
        yes_subtracts: bool,
    },

    /// Roll rest dice
    Rest,

    /// Roll an NPC basic attack
    Attack {
        /// Damage on a 4-6
        #[arg(long, default_value = "1 stress")]
        low: String,

        /// Damage on a 2-3
        #[arg(long, default_value = "2 stress")]
        medium: String,

        /// Damage on a 1
        #[arg(long, default_value = "3 stress")]
        high: String,
    },

    /// Roll on the character's affliction table
    Affliction,

    /// Roll a sin mark and an ability from the rule book's sin_marks catalogue
    SinMark {
        /// Mark to take when the mark die lands on its top face
        #[arg(long)]
        choose: Option<String>,

        /// Remove the mark at this position (1-based) instead of rolling
        #[arg(long, conflicts_with_all = ["choose", "clear"])]
        remove: Option<usize>,

        /// Remove every sin mark instead of rolling
        #[arg(long, conflicts_with = "choose")]
        clear: bool,
    },

    /// Show how a dice formula is read
    Parse {
        /// Formula text, e.g. "2d6cs>=6kl"
        formula: String,
    },

    /// Show the character sheet
    Sheet,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::Session::load(&cli.global).and_then(|mut session| match cli.command {
        Commands::Skill {
            skill,
            modifiers,
            teamwork,
            setup,
            agony,
        } => commands::skill::run(
            &mut session,
            &skill,
            modifiers.extra,
            modifiers.hard,
            teamwork,
            setup,
            agony,
        ),
        Commands::Psyche { modifiers } => {
            commands::psyche::run(&mut session, modifiers.extra, modifiers.hard)
        }
        Commands::Severe {
            formula,
            modifier,
            yes,
            no,
            yes_subtracts,
        } => commands::severe::run(&mut session, &formula, modifier, yes, no, !yes_subtracts),
        Commands::Rest => commands::rest::run(&mut session),
        Commands::Attack { low, medium, high } => {
            commands::attack::run(&mut session, &low, &medium, &high)
        }
        Commands::Affliction => commands::affliction::run(&mut session),
        Commands::SinMark {
            choose,
            remove,
            clear,
        } => commands::sin_mark::run(&mut session, choose.as_deref(), remove, clear),
        Commands::Parse { formula } => commands::parse::run(&session, &formula),
        Commands::Sheet => commands::sheet::run(&session),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr; `CAIN_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("CAIN_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
