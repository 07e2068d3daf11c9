use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use config::Config;
use display::{DisplayMode, render};
use env_logger::TimestampPrecision;
use fastrand::Rng;
use log::{LevelFilter, info, warn};
use owo_colors::OwoColorize;
use session::{HELP, Outcome, Session};
use twisty_core::{Cube, Scramble, make_cube};

mod config;
mod display;
mod session;
mod store;

/// Play with 2x2x2 and 3x3x3 cubes in the terminal
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Configuration file; defaults to `<config dir>/twisty/config.toml`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured display mode
    #[arg(short, long, value_enum)]
    display: Option<DisplayMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a cube interactively; the cube is kept in the state file between runs
    Play,
    /// Apply a move sequence and show the result
    Apply {
        /// The moves to apply, e.g. "R U R' U'"
        sequence: String,
        /// Start from a solved cube of this size instead of the configured one
        #[arg(long, conflicts_with = "state")]
        size: Option<usize>,
        /// Start from this serialized state
        #[arg(long)]
        state: Option<String>,
    },
    /// Generate a random scramble
    Scramble {
        /// Cube size; defaults to the configured one
        #[arg(long)]
        size: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render a serialized state and report whether it is solved
    Show {
        state: String,
    },
    /// Write a state to a file
    Save {
        file: PathBuf,
        /// The state to write; defaults to a solved cube of the configured size
        #[arg(long)]
        state: Option<String>,
    },
    /// Read a state from a file and show it
    Load {
        file: PathBuf,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(display_mode) = cli.display {
        config.display_mode = display_mode;
    }

    match cli.command {
        Commands::Play => play(&config),
        Commands::Apply {
            sequence,
            size,
            state,
        } => {
            let cube = match state {
                Some(state) => parse_state(&state)?,
                None => solved(&config, size)?,
            };
            let cube = cube.apply_sequence(&sequence).map_err(|e| {
                eyre!(
                    "{e}; {} moves were applied, reaching {}",
                    e.index,
                    e.applied
                )
            })?;
            println!("{cube}");
            show(&cube, config.display_mode);
            Ok(())
        }
        Commands::Scramble { size, seed } => {
            let cube = solved(&config, size)?;
            let mut rng = seed.map_or_else(Rng::new, Rng::with_seed);
            let scramble = Scramble::generate(&cube, &mut rng);
            let scrambled = scramble.apply(&cube);
            println!("{scramble}");
            println!("{scrambled}");
            show(&scrambled, config.display_mode);
            Ok(())
        }
        Commands::Show { state } => {
            let cube = parse_state(&state)?;
            show(&cube, config.display_mode);
            if !cube.is_solved() {
                println!("{}", "Not solved".yellow());
            }
            Ok(())
        }
        Commands::Save { file, state } => {
            let cube = match state {
                Some(state) => parse_state(&state)?,
                None => solved(&config, None)?,
            };
            store::save(&cube, &file)?;
            info!("Saved to {}", file.display());
            Ok(())
        }
        Commands::Load { file } => {
            let cube = store::load(&file)?;
            println!("{cube}");
            show(&cube, config.display_mode);
            Ok(())
        }
    }
}

fn parse_state(state: &str) -> color_eyre::Result<Cube> {
    state
        .trim()
        .parse()
        .wrap_err_with(|| format!("Invalid cube state {state:?}"))
}

fn solved(config: &Config, size: Option<usize>) -> color_eyre::Result<Cube> {
    match size {
        Some(size) => Ok(make_cube(size)?),
        None => Ok(Cube::solved(config.edge()?)),
    }
}

fn show(cube: &Cube, display_mode: DisplayMode) {
    println!("{}", render(&cube.to_cube_string(), cube.size(), display_mode));
    if cube.is_solved() {
        println!("{}", "Solved!".green());
    }
}

fn play(config: &Config) -> color_eyre::Result<()> {
    let state_file = config.state_file();
    let cube = match store::load_if_present(&state_file) {
        Ok(Some(cube)) => cube,
        Ok(None) => {
            let cube = Cube::solved(config.edge()?);
            store::save(&cube, &state_file)?;
            cube
        }
        Err(e) => {
            warn!("Starting from a solved cube: {e:#}");
            Cube::solved(config.edge()?)
        }
    };
    info!("Using state file {}", state_file.display());

    let mut session = Session::new(cube, config.display_mode, state_file, Rng::new());
    show(session.cube(), session.display_mode());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Move (? for help)> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };

        let outcome = session.handle(&line?);
        match &outcome {
            Outcome::Quit => return Ok(()),
            Outcome::Help => {
                println!("{HELP}");
                continue;
            }
            Outcome::Message(message) => {
                println!("{message}");
                continue;
            }
            Outcome::Print(text) => println!("{text}"),
            Outcome::Scrambled(scramble) => println!("Scramble: {scramble}"),
            Outcome::Rejected(e) => {
                eprintln!("{}", e.red());
                eprintln!("Enter ? for help");
                continue;
            }
            Outcome::Redraw | Outcome::Changed => {}
        }

        if outcome.changed_cube() {
            store::save(session.cube(), session.state_file())?;
        }
        show(session.cube(), session.display_mode());
    }
}
