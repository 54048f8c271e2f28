//! Deal boards and let four random legal bidders fight over them, printing
//! each step as console text or JSON lines.

use anyhow::{Context, Result};
use bridge_cli::{action_name, format_hands_table};
use bridge_env::{AuctionEnv, DdsSolver, Observation, Phase};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "random-auction", about = "Random legal auctions over fresh deals")]
struct Args {
    /// Random seed for reproducible runs (random if omitted, always printed)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of deals to play
    #[arg(long, default_value_t = 1)]
    deals: u32,

    #[arg(long, value_enum, default_value_t = Output::Console)]
    output: Output,

    /// -v for info, -vv for debug
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Console,
    Json,
}

#[derive(Serialize)]
struct StepRecord<'a> {
    deal: u32,
    step: u32,
    action: u8,
    reward: [i32; 2],
    done: bool,
    observation: &'a Observation,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    eprintln!("Seed: {seed} | Deals: {}", args.deals);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut env = AuctionEnv::new(DdsSolver);

    for deal in 0..args.deals {
        let obs = env
            .reset(&mut rng)
            .with_context(|| format!("failed to start deal {deal}"))?;

        if matches!(args.output, Output::Console) {
            let board = env.board().expect("board exists after reset");
            println!("Deal {deal}: dealer {}", board.dealer);
            println!();
            print!("{}", format_hands_table(board));
            println!(
                "Par: N/S {}  E/W {}",
                obs.par_scores[0], obs.par_scores[1]
            );
            println!();
        }

        let mut step_index = 0u32;
        loop {
            let legal = env.legal_actions();
            let action = legal[rng.gen_range(0..legal.len())];
            let step = env.step(action).context("random action was rejected")?;

            match args.output {
                Output::Console => {
                    let seat = step.observation.turn.expect("a seat just called");
                    println!(
                        "{seat}: {:<3} (contract {}, scores {:?}, reward {:?})",
                        action_name(Some(action)),
                        action_name(step.observation.last_contract),
                        step.observation.scores,
                        step.reward,
                    );
                }
                Output::Json => {
                    let record = StepRecord {
                        deal,
                        step: step_index,
                        action,
                        reward: step.reward,
                        done: step.done,
                        observation: &step.observation,
                    };
                    println!("{}", serde_json::to_string(&record)?);
                }
            }

            step_index += 1;
            if step.done {
                if matches!(args.output, Output::Console) {
                    println!();
                    match env.phase() {
                        Phase::PassedOut => println!("Passed out."),
                        _ => {
                            let contract = env
                                .auction()
                                .and_then(|a| a.contract().copied())
                                .expect("settled auction has a contract");
                            println!("Final contract: {contract}");
                        }
                    }
                    println!(
                        "Scores: N/S {}  E/W {}  (rewards {:?})",
                        step.observation.scores[0], step.observation.scores[1], step.reward
                    );
                    println!();
                }
                break;
            }
        }
    }

    Ok(())
}
