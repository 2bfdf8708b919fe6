use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Parser;
use goldenseed::checksum::Checksums;
use goldenseed::fusion::{self, FusionTap};
use goldenseed::gqs1;
use goldenseed::{ByteStream, SeedRegistry, StreamGenerator};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod output;

use cli::{Cli, Command};

/// Above this many chunks generation is announced as slow.
const LARGE_RUN: u64 = 1_000_000;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "error" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Command::Generate {
            seed,
            count,
            skip,
            format,
            binary,
            output,
        } => {
            if count == 0 {
                bail!("number of chunks must be at least 1");
            }
            if count > LARGE_RUN {
                warn!(count, "generating a large number of chunks may take time");
            }

            let seed = seed.resolve()?;
            info!(seed = %seed.to_hex(), checksum = %seed.checksum(), skip, count, "generating");

            let mut generator = StreamGenerator::from_seed(seed);
            generator.skip(skip);

            let mut out = output::open(output.as_deref())?;
            output::write_chunks(&mut *out, &mut generator, count, format, binary)?;

            if let Some(path) = output {
                info!(path = %path.display(), "output written");
            }
        }

        Command::Verify { name } => {
            let entries: Vec<_> = match name {
                Some(name) => vec![SeedRegistry.entry(&name)?],
                None => SeedRegistry.entries().iter().collect(),
            };

            for entry in entries {
                entry
                    .verified_seed()
                    .with_context(|| format!("seed `{}` failed verification", entry.name))?;
                info!(name = entry.name, checksum = entry.checksum, "seed checksum verified");
            }
        }

        Command::Seeds => {
            let mut out = output::open(None)?;
            for entry in SeedRegistry.entries() {
                writeln!(out, "{:<14} {:<64} {}", entry.name, entry.seed_hex, entry.checksum)?;
            }
            out.flush()?;
        }

        Command::Vectors { seed, count, json } => {
            let seed = seed.resolve()?;
            let vectors = gqs1::generate_test_vectors(seed, count)?;
            let hex: Vec<String> = vectors.iter().map(|v| v.to_hex()).collect();

            let mut out = output::open(None)?;
            if json {
                output::write_json(&mut *out, &hex)?;
            } else {
                for (i, v) in hex.iter().enumerate() {
                    writeln!(out, "{:>6}: {}", i + 1, v)?;
                }
                out.flush()?;
            }
        }

        Command::Fusion { k, to, json } => {
            let taps = fusion::explore(k..=to.unwrap_or(k))?;
            let reports: Vec<_> = taps.iter().map(FusionTap::report).collect();

            let mut out = output::open(None)?;
            if json {
                output::write_json(&mut *out, &reports)?;
            } else {
                for report in &reports {
                    writeln!(out, "k = {}", report.k)?;
                    writeln!(out, "  seed:         {}", report.seed)?;
                    writeln!(out, "  tap state:    {}", report.tap_state)?;
                    let zpe = if report.has_zpe {
                        report.zpe_overflow_decimal.as_str()
                    } else {
                        "n/a"
                    };
                    writeln!(out, "  zpe overflow: {}", zpe)?;
                }
                out.flush()?;
            }
        }

        Command::Checksum { seed, bytes, file } => {
            let sums = match file {
                Some(path) => {
                    let data = std::fs::read(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    Checksums::of(&data)
                }
                None => {
                    let mut stream = ByteStream::new(StreamGenerator::from_seed(seed.resolve()?));
                    Checksums::of_stream(&mut stream, bytes)
                }
            };

            let mut out = output::open(None)?;
            output::write_json(&mut *out, &sums)?;
        }
    }

    Ok(())
}
