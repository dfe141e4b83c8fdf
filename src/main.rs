//! Word Ladder - CLI
//!
//! Word ladder puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_ladder::{
    commands::{SimulationConfig, run_simple, run_simulation, show_pack},
    output::{print_pack_list, print_simulation_result},
    packs::PuzzleSet,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder puzzle: uncover overlapping words one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pack file to play instead of the built-in packs
    #[arg(short, long, global = true)]
    packs: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Pack number to start on
        #[arg(short = 'n', long, default_value = "1")]
        pack: usize,
    },

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// List the available packs
    List,

    /// Print a pack's grid with its linking letters highlighted
    Show {
        /// Pack number (1-based)
        #[arg(short = 'n', long, default_value = "1")]
        pack: usize,

        /// Uncover every letter
        #[arg(short, long)]
        reveal: bool,
    },

    /// Play every pack with a random-guessing player and report statistics
    Simulate {
        /// Number of games per pack
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// RNG seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load packs based on the -p flag
///
/// - none: the packs compiled into the binary
/// - "<path>": load packs from a text file
fn load_packs(path: Option<&str>) -> Result<PuzzleSet> {
    use word_ladder::packs::loader::load_from_file;

    match path {
        None => Ok(PuzzleSet::embedded()),
        Some(path) => {
            load_from_file(path).with_context(|| format!("Failed to load packs from '{path}'"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let puzzles = load_packs(cli.packs.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { pack: 1 });

    match command {
        Commands::Play { pack } => run_play_command(puzzles, pack),
        Commands::Simple => run_simple(&puzzles).map_err(|e| anyhow::anyhow!(e)),
        Commands::List => {
            print_pack_list(&puzzles);
            Ok(())
        }
        Commands::Show { pack, reveal } => {
            show_pack(&puzzles, pack, reveal).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Simulate { count, seed } => {
            run_simulate_command(&puzzles, count, seed);
            Ok(())
        }
    }
}

fn run_play_command(puzzles: PuzzleSet, pack: usize) -> Result<()> {
    use word_ladder::commands::find_pack;
    use word_ladder::interactive::{App, run_tui};

    // Validate before entering the alternate screen
    find_pack(&puzzles, pack).map_err(|e| anyhow::anyhow!(e))?;

    let mut app = App::new(puzzles);
    if pack > 1 {
        app.select_pack(pack - 1);
    }
    run_tui(app)
}

fn run_simulate_command(puzzles: &PuzzleSet, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);

    println!("\n{}", "═".repeat(70));
    println!(" Word Ladder Simulation ");
    println!("{}", "═".repeat(70));
    println!("\nPacks: {}", puzzles.len());
    println!("Seed:  {seed}");
    println!();

    let config = SimulationConfig::new(count, seed);
    let result = run_simulation(puzzles, &config);
    print_simulation_result(&result);
}
