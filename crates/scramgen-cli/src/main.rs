// crates/scramgen-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use scramgen_core::{generate_with_rng, Scramble, ScrambleOptions};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "scramgen",
    about = "3x3 scramble generator",
    long_about = "3x3 scramble generator.\n\nDraws constrained random move sequences with no redundant or cancelling neighbours, in canonical cube notation.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    /// Number of moves per scramble (>0)
    #[arg(default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    length: u32,

    /// Also draw wide moves (l r u d f b)
    #[arg(long, default_value_t = false)]
    wide_moves: bool,

    /// Number of scrambles to emit, one per line
    #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Seed for reproducible output (fresh OS entropy when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit each scramble as a JSON array of moves instead of notation text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let options = ScrambleOptions {
        wide_moves: cli.wide_moves,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(
        length = cli.length,
        count = cli.count,
        wide_moves = cli.wide_moves,
        seeded = cli.seed.is_some(),
        "generating scrambles"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for _ in 0..cli.count {
        let scramble = generate_with_rng(cli.length as usize, &options, &mut rng)
            .context("generate scramble")?;
        write_scramble(&mut out, &scramble, cli.json)?;
    }

    out.flush().context("flush stdout")?;
    Ok(())
}

/// Write one scramble as a notation line or a JSON line.
fn write_scramble<W: Write>(out: &mut W, scramble: &Scramble, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(scramble.moves()).context("serialize scramble")?;
        writeln!(out, "{line}").context("write scramble")?;
    } else {
        writeln!(out, "{scramble}").context("write scramble")?;
    }
    Ok(())
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so scramble output on stdout stays clean.
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
