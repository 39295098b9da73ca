//! Subcommand bodies. Each writes JSON lines to `out` and returns the
//! number of inputs that failed.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use topics_classifier::{ClassificationPipeline, InputNormalizer};
use topics_core::models::Topic;
use topics_taxonomy::TaxonomyTable;
use tracing::error;

#[derive(Serialize)]
struct TopicsLine<'a> {
    domain: &'a str,
    topics: &'a [Topic],
}

#[derive(Serialize)]
struct ErrorLine<'a> {
    domain: &'a str,
    error: String,
}

#[derive(Serialize)]
struct NormalizedLine<'a> {
    input: &'a str,
    normalized: String,
}

/// Print the public topics as one JSON array.
pub fn list_topics(taxonomy: &TaxonomyTable, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer(&mut *out, &taxonomy.public_topics())
        .context("writing topic list")?;
    writeln!(out)?;
    Ok(())
}

/// Classify `inputs` in parallel, printing results in input order.
///
/// Failed inputs are logged and printed as `{"domain", "error"}` lines.
pub fn classify(
    pipeline: &ClassificationPipeline,
    inputs: &[String],
    explain: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let mut failures = 0;
    let results = pipeline.classify_batch_detailed(inputs);
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(classification) if explain => {
                serde_json::to_writer(&mut *out, &classification)?;
            }
            Ok(classification) => {
                let line = TopicsLine {
                    domain: input,
                    topics: &classification.topics,
                };
                serde_json::to_writer(&mut *out, &line)?;
            }
            Err(e) => {
                failures += 1;
                error!(input = %input, error = %e, "classification failed");
                let line = ErrorLine {
                    domain: input,
                    error: e.to_string(),
                };
                serde_json::to_writer(&mut *out, &line)?;
            }
        }
        writeln!(out)?;
    }
    Ok(failures)
}

/// Print each input alongside its normalized form.
pub fn normalize(
    normalizer: &InputNormalizer,
    inputs: &[String],
    out: &mut impl Write,
) -> Result<()> {
    for input in inputs {
        let line = NormalizedLine {
            input,
            normalized: normalizer.normalize(input),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Non-blank, trimmed lines from `reader`.
pub fn read_inputs(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("reading input")?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}
