use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use goldenseed::StreamGenerator;
use serde::Serialize;

use crate::cli::Format;

const DESCRIPTION: &str = "GoldenSeed - Deterministic Stream Generator";
const WARNING: &str = "NOT FOR CRYPTOGRAPHY";

#[derive(Debug, Serialize)]
struct StreamReport {
    description: &'static str,
    warning: &'static str,
    seed: String,
    checksum: String,
    skip: u64,
    num_streams: usize,
    streams: Vec<StreamEntry>,
}

#[derive(Debug, Serialize)]
struct StreamEntry {
    index: u64,
    hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    binary: Option<String>,
}

/// Opens `path`, or stdout when `None`.
pub fn open(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// Writes the next `count` chunks of `generator`.
///
/// Hex and raw output are written as they are produced; only the JSON
/// report holds the chunks in memory.
pub fn write_chunks(
    out: &mut dyn Write,
    generator: &mut StreamGenerator,
    count: u64,
    format: Format,
    binary: bool,
) -> Result<()> {
    match format {
        Format::Hex => {
            for _ in 0..count {
                let chunk = generator.next();
                if binary {
                    writeln!(out, "{} {}", chunk, chunk.to_binary())?;
                } else {
                    writeln!(out, "{}", chunk)?;
                }
            }
        }
        Format::Raw => {
            for _ in 0..count {
                out.write_all(generator.next().as_bytes())?;
            }
        }
        Format::Json => {
            let len = usize::try_from(count).context("chunk count exceeds address space")?;
            let skip = generator.position();
            let seed = *generator.seed();
            let chunks = generator.take_chunks(len);

            let report = StreamReport {
                description: DESCRIPTION,
                warning: WARNING,
                seed: seed.to_hex(),
                checksum: seed.checksum(),
                skip,
                num_streams: chunks.len(),
                streams: chunks
                    .iter()
                    .zip(skip..)
                    .map(|(chunk, index)| StreamEntry {
                        index,
                        hex: chunk.to_hex(),
                        binary: binary.then(|| chunk.to_binary()),
                    })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Pretty-prints `value` as JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use goldenseed::{Seed, SeedRegistry};
    use serde_json::Value;

    fn golden_at(skip: u64) -> StreamGenerator {
        let mut generator = StreamGenerator::golden_ratio().unwrap();
        generator.skip(skip);
        generator
    }

    fn golden_seed() -> Seed {
        SeedRegistry.lookup(SeedRegistry::DEFAULT).unwrap()
    }

    #[test]
    fn test_json_report_indexes_from_skip() {
        let mut buf = Vec::new();
        write_chunks(&mut buf, &mut golden_at(5), 3, Format::Json, false).unwrap();

        let report: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(report["skip"], 5);
        assert_eq!(report["num_streams"], 3);
        assert_eq!(report["seed"], golden_seed().to_hex());
        assert_eq!(report["warning"], WARNING);

        let streams = report["streams"].as_array().unwrap();
        assert_eq!(streams.len(), 3);
        for (entry, index) in streams.iter().zip(5u64..) {
            assert_eq!(entry["index"], index);
            assert_eq!(
                entry["hex"],
                StreamGenerator::chunk_at(golden_seed(), index).to_hex()
            );
            assert!(entry.get("binary").is_none());
        }
    }

    #[test]
    fn test_json_report_includes_binary_on_request() {
        let mut buf = Vec::new();
        write_chunks(&mut buf, &mut golden_at(0), 1, Format::Json, true).unwrap();

        let report: Value = serde_json::from_slice(&buf).unwrap();
        let binary = report["streams"][0]["binary"].as_str().unwrap();
        assert_eq!(binary.len(), 128);
        assert!(binary.bytes().all(|b| b == b'0' || b == b'1'));
    }

    #[test]
    fn test_hex_lines_follow_stream() {
        let mut buf = Vec::new();
        let mut generator = golden_at(0);
        write_chunks(&mut buf, &mut generator, 4, Format::Hex, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "3c732e0d04dac163a5cc2b15c7caf42c");
        assert_eq!(lines[1], "edfe2173c2dcfec9a8897a79aabb5eea");
        assert_eq!(generator.position(), 4);
    }

    #[test]
    fn test_raw_writes_chunk_bytes() {
        let mut buf = Vec::new();
        write_chunks(&mut buf, &mut golden_at(2), 2, Format::Raw, false).unwrap();

        let expected: Vec<u8> = golden_at(2)
            .take_chunks(2)
            .iter()
            .flat_map(|chunk| chunk.0)
            .collect();
        assert_eq!(buf, expected);
    }
}
