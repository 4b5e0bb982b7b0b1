use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use cmd::command::counters;
use cmd::command::cubes;
use cmd::command::dice;
use cmd::command::dice::Dice;
use cmd::command::fires;
use cmd::command::fires::Fires;
use cmd::command::fires::Outcome;
use cmd::command::inheritance;
use cmd::command::lottery;
use cmd::command::restaurants;
use cmd::config::Config;
use cmd::error::Error;
use cmd::error::Result;
use service::tracing::TracingCliArgs;
use tracing::info;

#[derive(Subcommand, Clone)]
enum Commands {
    /// Restaurant and user entities
    Restaurants,
    /// Served customers and login attempt counters
    Counters,
    /// Ice cream stand and admin specializations
    Inheritance,
    /// Roll a die
    Dice(Dice),
    /// Draw a winning lottery ticket
    Lottery,
    /// Plot the first cubic numbers
    Cubes,
    /// Analyze the burned area dataset
    Fires(Fires),
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file, lessons.toml is used when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[clap(flatten)]
    tracing: TracingCliArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    let Some(command) = &args.command else {
        return Err(Error::BadRequest("no command specified".to_string()));
    };

    let cfg: common::config::Config = Config::load(args.config.as_deref())?.try_into()?;
    args.tracing.init(cfg.log.level)?;

    let version = env!("CARGO_PKG_VERSION");
    let hash = option_env!("BUILD_HASH").unwrap_or("dev-build");

    info!("Lessons v{version}-{hash}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut rng = rand::thread_rng();

    match command {
        Commands::Restaurants => restaurants::run(&mut out)?,
        Commands::Counters => counters::run(&mut out)?,
        Commands::Inheritance => inheritance::run(&mut out)?,
        Commands::Dice(opts) => dice::run(opts, &cfg, &mut rng, &mut out)?,
        Commands::Lottery => lottery::run(&mut rng, &mut out)?,
        Commands::Cubes => cubes::run(&cfg, &mut out)?,
        Commands::Fires(opts) => {
            if fires::run(opts, &cfg, &mut out)? == Outcome::Failure {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
