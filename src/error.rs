use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SnippyJobsError {
    #[error("failed to read sample table at {path}: {message}")]
    TableRead { path: Utf8PathBuf, message: String },

    #[error("failed to parse sample table: {0}")]
    TableParse(String),

    #[error("failed to write job script {path}: {message}")]
    ScriptWrite { path: Utf8PathBuf, message: String },
}
