use clap::Parser;
use std::io::{self, BufRead, Write};
use swade_dice::command::RollCommand;
use swade_dice::roll::{default_roller, seeded_roller, DEFAULT_MAX_ACES};

/// Roll Savage Worlds dice: every die aces and the best of a group is kept.
#[derive(Parser, Debug)]
struct Args {
    /// Notation to roll, e.g. `d8d6 + 1`. Reads notations from stdin when omitted.
    notation: Option<String>,

    /// Seed for the dice, for repeatable rolls.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of extra dice aces may add to a single roll.
    #[arg(long, default_value_t = DEFAULT_MAX_ACES)]
    max_aces: usize,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut rng = args.seed.map_or_else(default_roller, seeded_roller);
    let command = RollCommand::new(Some(args.max_aces));

    if let Some(notation) = args.notation.as_deref() {
        println!("{}", command.respond(Some(notation), &mut rng));
        return Ok(());
    }

    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            println!("{}", command.respond(Some(&line), &mut rng));
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}
