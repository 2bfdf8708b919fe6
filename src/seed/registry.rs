//! Named seed registry
//!
//! Static table mapping well-known identifiers to canonical seed bytes and
//! their SHA-256 checksums. The table is the interoperability contract:
//! independent implementations agree on a stream by agreeing on a name.

use tracing::{debug, trace};

use super::Seed;
use crate::error::{GoldenSeedError, Result};

/// One registry row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Canonical identifier.
    pub name: &'static str,
    /// Alternative identifiers resolving to the same entry.
    pub aliases: &'static [&'static str],
    /// Seed bytes, lowercase hex.
    pub seed_hex: &'static str,
    /// SHA-256 of the seed bytes, lowercase hex.
    pub checksum: &'static str,
    /// Human-readable description of the encoded constant.
    pub description: &'static str,
}

impl RegistryEntry {
    /// Decodes the entry's seed bytes.
    pub fn seed(&self) -> Result<Seed> {
        Seed::from_hex(self.seed_hex)
    }

    /// Decodes the seed and checks it against the recorded checksum.
    pub fn verified_seed(&self) -> Result<Seed> {
        let seed = self.seed()?;
        let actual = seed.checksum();

        if actual != self.checksum {
            return Err(GoldenSeedError::ChecksumMismatch {
                expected: self.checksum.to_string(),
                actual,
            });
        }

        trace!(name = self.name, checksum = self.checksum, "seed checksum verified");
        Ok(seed)
    }

    fn matches(&self, key: &str) -> bool {
        self.name == key || self.aliases.contains(&key)
    }
}

const ENTRIES: &[RegistryEntry] = &[
    RegistryEntry {
        name: "golden-ratio",
        aliases: &["phi", "golden"],
        seed_hex: "0000000000000000a8f4979b77e3f93fa8f4979b77e3f93fa8f4979b77e3f93f",
        checksum: "096412ca0482ab0f519bc0e4ded667475c45495047653a21aa11e2c7c578fa6f",
        description: "golden ratio φ = (1 + √5) / 2 on the imaginary axis",
    },
    RegistryEntry {
        name: "pi",
        aliases: &[],
        seed_hex: "182d4454fb210940182d4454fb210940",
        checksum: "227ebb48ba706361fe526a563d87a997d6d375207a6271c463921fb33d6616fd",
        description: "π ≈ 3.141592653589793",
    },
    RegistryEntry {
        name: "e",
        aliases: &["euler"],
        seed_hex: "6957148b0abf05406957148b0abf0540",
        checksum: "fcbd2511888986481149edd82b1ddc3481286e3824213bf8a4adae296fcbe84b",
        description: "Euler's number e ≈ 2.718281828459045",
    },
    RegistryEntry {
        name: "sqrt2",
        aliases: &["sqrt-2"],
        seed_hex: "cd3b7f669ea0f63fcd3b7f669ea0f63f",
        checksum: "1bdb01fdc285be0e2e24678ea065ae0c552c07e0c82a19e49a820539d90ad7d4",
        description: "√2 ≈ 1.4142135623730951",
    },
];

/// Lookup table of named seeds.
///
/// The registry holds no state; every method reads the same static table.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedRegistry;

impl SeedRegistry {
    /// Name of the seed used when none is requested.
    pub const DEFAULT: &'static str = "golden-ratio";

    /// All entries in registry order.
    pub fn entries(&self) -> &'static [RegistryEntry] {
        ENTRIES
    }

    /// Canonical names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|entry| entry.name)
    }

    /// Finds the entry for `name` or one of its aliases.
    ///
    /// Matching ignores case, surrounding whitespace and the choice between
    /// `_` and `-`.
    pub fn entry(&self, name: &str) -> Result<&'static RegistryEntry> {
        let key = name.trim().to_ascii_lowercase().replace('_', "-");

        ENTRIES
            .iter()
            .find(|entry| entry.matches(&key))
            .ok_or_else(|| {
                debug!(name, "seed lookup failed");
                GoldenSeedError::UnknownSeed(name.to_string())
            })
    }

    /// Resolves `name` to its verified seed.
    pub fn lookup(&self, name: &str) -> Result<Seed> {
        let entry = self.entry(name)?;
        debug!(name = entry.name, "resolved registry seed");

        entry.verified_seed()
    }

    /// Verifies the checksum of every entry.
    pub fn verify(&self) -> Result<()> {
        ENTRIES.iter().try_for_each(|entry| entry.verified_seed().map(|_| ()))
    }
}
