use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use goldenseed::{Result, Seed, SeedRegistry};

/// Deterministic byte streams from mathematical-constant seeds.
///
/// NOT FOR CRYPTOGRAPHY: output is fully determined by a public seed.
#[derive(Debug, Parser)]
#[command(name = "goldenseed", version, about, long_about = None)]
pub struct Cli {
    /// Only print errors on stderr.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Emit stream chunks.
    Generate {
        #[command(flatten)]
        seed: SeedArgs,

        /// Number of chunks to emit.
        #[arg(short = 'n', long = "count", default_value_t = 10)]
        count: u64,

        /// Chunks to skip before emitting.
        #[arg(long, default_value_t = 0)]
        skip: u64,

        #[arg(short, long, value_enum, default_value_t = Format::Hex)]
        format: Format,

        /// Include each chunk's binary representation (hex and json).
        #[arg(long)]
        binary: bool,

        /// Write to FILE instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Verify the checksum of a registry seed.
    Verify {
        /// Registry name; every entry when omitted.
        name: Option<String>,
    },

    /// List registry seeds.
    Seeds,

    /// Print GQS-1 compliance vectors.
    Vectors {
        #[command(flatten)]
        seed: SeedArgs,

        #[arg(short = 'n', long = "count", default_value_t = 10)]
        count: usize,

        #[arg(long)]
        json: bool,
    },

    /// Evaluate the binary fusion tap.
    Fusion {
        /// First tap parameter.
        #[arg(default_value_t = 11)]
        k: u32,

        /// Last tap parameter (inclusive); defaults to `k`.
        #[arg(long)]
        to: Option<u32>,

        #[arg(long)]
        json: bool,
    },

    /// SHA-256 / SHA-512 of generated output.
    Checksum {
        #[command(flatten)]
        seed: SeedArgs,

        /// Number of bytes to hash.
        #[arg(long, default_value_t = 1 << 20)]
        bytes: u64,

        /// Hash a file instead of generated output.
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// Seed selection shared by the stream commands.
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Registry seed name.
    #[arg(long = "seed", env = "GOLDENSEED_SEED", default_value = SeedRegistry::DEFAULT)]
    pub name: String,

    /// Raw 16- or 32-byte seed as hex; takes precedence over `--seed`.
    #[arg(long, env = "GOLDENSEED_SEED_HEX", value_name = "HEX")]
    pub seed_hex: Option<String>,
}

impl SeedArgs {
    pub fn resolve(&self) -> Result<Seed> {
        match &self.seed_hex {
            Some(hex) => Seed::from_hex(hex),
            None => SeedRegistry.lookup(&self.name),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One hex chunk per line.
    Hex,
    /// JSON report.
    Json,
    /// Raw chunk bytes.
    Raw,
}
