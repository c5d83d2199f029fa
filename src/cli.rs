use std::process::ExitCode;

use miette::IntoDiagnostic;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::{JobArgs, RunConfig};
use crate::error::SnippyJobsError;
use crate::output::{JsonOutput, OutputMode, TextOutput};
use crate::script::JobTemplate;

/// Entry point shared by both binaries; `R` picks the sample sheet layout.
pub fn main<R>(args: JobArgs) -> ExitCode
where
    R: JobTemplate + DeserializeOwned,
{
    if let Err(report) = run::<R>(args) {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<SnippyJobsError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

pub fn map_exit_code(error: &SnippyJobsError) -> u8 {
    match error {
        SnippyJobsError::TableRead { .. } | SnippyJobsError::TableParse(_) => 2,
        SnippyJobsError::ScriptWrite { .. } => 1,
    }
}

fn run<R>(args: JobArgs) -> miette::Result<()>
where
    R: JobTemplate + DeserializeOwned,
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from_args(args);
    match config.output_mode {
        OutputMode::Json => {
            let result = App::generate::<R>(&config, &JsonOutput)?;
            JsonOutput::print_generate(&result).into_diagnostic()
        }
        OutputMode::Text => {
            let result = App::generate::<R>(&config, &TextOutput)?;
            TextOutput::print_generate(&result).into_diagnostic()
        }
    }
}
