use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hasse_lattice::export::{self, Summary};
use hasse_lattice::family::{
    Associahedron, Claws, Family, Fence, Grid, Permutahedron, Refinement, Young,
};
use hasse_lattice::{HamiltonSearch, HasseDiagram};

#[derive(Parser)]
#[command(
    name = "hasse_lattice",
    about = "Write the Hasse diagram of a combinatorial family as a rank-indexed listing",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Directory the listing is written to
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,

    /// Print the listing instead of writing a file
    #[arg(long, global = true)]
    stdout: bool,

    /// Print a JSON run summary
    #[arg(long, global = true)]
    json: bool,

    /// Give up the Gray-code search after this many branch expansions
    #[arg(long, global = true)]
    step_budget: Option<u64>,

    /// Only log warnings and errors
    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Lattice of order ideals of the fence poset on N elements
    Fence { n: usize },

    /// Product of chains [0, b1] x [0, b2] x ...
    Grid {
        #[arg(required = true)]
        bounds: Vec<u32>,
    },

    /// Partitions of N ordered by refinement
    Partitions { n: u32 },

    /// Young's lattice on partitions of 2 up to N - 1
    Young { n: u32 },

    /// Product of the claws C_a and C_b
    Claws { a: u32, b: u32 },

    /// Face lattice of the associahedron of an N-gon (N >= 4)
    Associahedron { n: usize },

    /// Face lattice of the permutahedron on N letters (N >= 1)
    Permutahedron { n: usize },
}

fn run<F: Family>(family: F, opts: &OutputArgs) -> Result<()> {
    let search = HamiltonSearch { step_budget: opts.step_budget };
    let diagram = HasseDiagram::build(&family, &search)
        .with_context(|| format!("building {}", family.name()))?;

    let output = if opts.stdout {
        print!("{}", export::render(&diagram));
        None
    } else {
        let path = export::write(&diagram, &opts.out_dir)
            .with_context(|| format!("writing {} into {}", diagram.name, opts.out_dir.display()))?;
        Some(path)
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&Summary::new(&diagram, output))?);
    }
    Ok(())
}

fn main() -> Result<()> {
    let Cli { command, output } = Cli::parse();

    let filter = if output.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(filter)
        .init();

    match command {
        Command::Fence { n } => run(Fence::new(n)?, &output),
        Command::Grid { bounds } => run(Grid::new(bounds)?, &output),
        Command::Partitions { n } => run(Refinement::new(n)?, &output),
        Command::Young { n } => run(Young::new(n)?, &output),
        Command::Claws { a, b } => run(Claws::new(a, b), &output),
        Command::Associahedron { n } => run(Associahedron::new(n)?, &output),
        Command::Permutahedron { n } => run(Permutahedron::new(n)?, &output),
    }
}
