use std::fs;

use camino::Utf8Path;

use crate::error::SnippyJobsError;
use crate::script::JobScript;

/// Writes the script, replacing whatever was at its path.
pub fn write_script(script: &JobScript) -> Result<(), SnippyJobsError> {
    fs::write(script.path.as_std_path(), script.contents.as_bytes()).map_err(|err| {
        SnippyJobsError::ScriptWrite {
            path: script.path.clone(),
            message: err.to_string(),
        }
    })
}

pub fn is_dir(path: &Utf8Path) -> bool {
    path.as_std_path().is_dir()
}
