use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::RunConfig;
use crate::error::SnippyJobsError;
use crate::fs_util;
use crate::script::{JobScript, JobTemplate};
use crate::table::SampleTable;

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub items: Vec<GeneratedScript>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedScript {
    pub sample_id: String,
    pub path: String,
    pub action: String,
    #[serde(skip)]
    pub contents: String,
}

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

pub struct App;

impl App {
    /// Loads the sample sheet and writes one job script per row.
    ///
    /// The first failing row aborts the run; scripts already written stay on
    /// disk.
    pub fn generate<R>(
        config: &RunConfig,
        sink: &dyn ProgressSink,
    ) -> Result<GenerateResult, SnippyJobsError>
    where
        R: JobTemplate + DeserializeOwned,
    {
        // Reported only; the run carries on and the writes fail on their own.
        if !fs_util::is_dir(&config.jobs_dir) {
            tracing::error!(
                "Error {} directory does not exist, please check path or create it and try again",
                config.jobs_dir
            );
        }

        sink.event(ProgressEvent {
            message: format!("phase=Load; reading {}", config.input),
        });
        let samples = SampleTable::load::<R>(&config.input)?;

        let action = if config.dry_run { "dry-run" } else { "written" };
        let mut items = Vec::with_capacity(samples.len());
        for sample in &samples {
            sink.event(ProgressEvent {
                message: format!("phase=Render; sample {}", sample.sample_id()),
            });
            let script = sample.render(&config.parameters, &config.jobs_dir);

            if !config.dry_run {
                sink.event(ProgressEvent {
                    message: format!("phase=Write; {}", script.path),
                });
                fs_util::write_script(&script)?;
            }
            items.push(GeneratedScript::from_script(script, action));
        }

        tracing::info!(scripts = items.len(), dry_run = config.dry_run, "generation finished");
        Ok(GenerateResult { items })
    }
}

impl GeneratedScript {
    fn from_script(script: JobScript, action: &str) -> Self {
        Self {
            sample_id: script.sample_id,
            path: script.path.to_string(),
            action: action.to_string(),
            contents: script.contents,
        }
    }
}
