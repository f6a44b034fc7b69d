//! Command line front end: run a batch of Swiss tournaments and print qualification rates.
//! Run with: cargo run --bin swiss_sim -- --players 64 --rounds 6 --qualify 8 --simulations 10000
//! Every flag can also be set from the environment (SWISS_SIM_PLAYERS, SWISS_SIM_SEED, ...).

use clap::Parser;
use swiss_qualify_sim::{
    run_simulations, write_report, OutputFormat, SimulationConfig, TournamentConfig,
};

#[derive(Parser, Debug)]
#[command(name = "swiss_sim")]
#[command(version, about = "Swiss-system qualification simulation", long_about = None)]
struct Args {
    /// Number of players
    #[arg(long, env = "SWISS_SIM_PLAYERS")]
    players: u32,

    /// Number of rounds
    #[arg(long, env = "SWISS_SIM_ROUNDS")]
    rounds: u32,

    /// Number of qualifying places
    #[arg(long, env = "SWISS_SIM_QUALIFY")]
    qualify: u32,

    /// Number of simulated tournaments
    #[arg(long, env = "SWISS_SIM_SIMULATIONS", default_value_t = default_simulations())]
    simulations: u32,

    /// Base seed for reproducible results. Drawn at random when omitted.
    #[arg(long, env = "SWISS_SIM_SEED")]
    seed: Option<u64>,

    /// Run tournaments on all cores
    #[arg(long, env = "SWISS_SIM_PARALLEL")]
    parallel: bool,

    /// Output format
    #[arg(long, value_enum, env = "SWISS_SIM_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn default_simulations() -> u32 {
    10_000
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    let mut config = SimulationConfig::new(
        TournamentConfig::new(args.players, args.rounds, args.qualify),
        args.simulations,
    )
    .with_parallel(args.parallel);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let report = match run_simulations(&config) {
        Ok(report) => report,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = write_report(&report, args.format, stdout.lock()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
