use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::io;
use std::path::PathBuf;

use roulette::commands::{self, parse_bet_arg};
use roulette::config::{self, BetSlip};

#[derive(Parser)]
#[command(name = "roulette")]
#[command(version, about = "American roulette table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Place bets and play one game
    Play {
        /// Bet as TYPE=STAKE, e.g. first_dozen=5 (repeatable)
        #[arg(short, long = "bet", value_parser = parse_bet_arg)]
        bets: Vec<(roulette::BetType, i64)>,

        /// JSON bet slip to read bets from
        #[arg(long)]
        slip: Option<PathBuf>,

        /// Seed for the wheel
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Spin the wheel a number of times
    Spin {
        /// Number of spins (defaults to ROULETTE_SPINS or 20)
        #[arg(short, long)]
        count: Option<u32>,

        /// Seed for the wheel
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Play {
            mut bets,
            slip,
            seed,
            json,
        } => {
            let mut slip_seed = None;
            if let Some(path) = slip {
                let slip = BetSlip::open(&path)?;
                slip_seed = slip.seed;
                bets.extend(slip.resolve()?);
            }
            let seed = config::seed_or_env(seed.or(slip_seed))?;
            commands::play(&mut out, &bets, seed, json)?;
        }
        Command::Spin { count, seed } => {
            let count = config::spins_or_env(count)?;
            let seed = config::seed_or_env(seed)?;
            commands::spin(&mut out, count, seed)?;
        }
    }
    Ok(())
}
