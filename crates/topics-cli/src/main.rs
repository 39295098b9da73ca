use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use topics_classifier::ModelBundle;
use topics_cli::{commands, logging, Cli, Command};
use topics_inference::OnnxTopicModel;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    match run(cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            eprintln!("{failures} input(s) failed to classify");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<usize> {
    let bundle = ModelBundle::load(&cli.bundle)
        .with_context(|| format!("loading bundle {}", cli.bundle.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let failures = match cli.command {
        Command::Topics => {
            commands::list_topics(bundle.taxonomy(), &mut out)?;
            0
        }
        Command::Normalize { inputs } => {
            commands::normalize(bundle.normalizer(), &inputs, &mut out)?;
            0
        }
        Command::Classify { explain, inputs } => {
            let inputs = if inputs.is_empty() {
                commands::read_inputs(io::stdin().lock())?
            } else {
                inputs
            };

            let model = OnnxTopicModel::load(
                &bundle.model_path(),
                &bundle.vocab_path(),
                &bundle.labels_path(),
                &bundle.config().model,
            )
            .context("loading model")?;
            let pipeline = bundle.into_pipeline(Arc::new(model));
            info!(
                engine = pipeline.engine_name(),
                inputs = inputs.len(),
                "classifying"
            );

            commands::classify(&pipeline, &inputs, explain, &mut out)?
        }
    };

    out.flush()?;
    Ok(failures)
}
