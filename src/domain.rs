use std::fmt;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CPUS: u32 = 4;

/// A row of the sample sheet, bound to a fixed positional column schema.
pub trait SampleRecord {
    /// Ordered column names; the first one is the row index.
    const COLUMNS: &'static [&'static str];

    fn sample_id(&self) -> &str;
}

/// Sample whose paired-end reads already sit on local disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSample {
    pub sample_id: String,
    pub fwd_read: Utf8PathBuf,
    pub rev_read: Utf8PathBuf,
    pub outdir: Utf8PathBuf,
    pub reference: Utf8PathBuf,
}

impl SampleRecord for LocalSample {
    const COLUMNS: &'static [&'static str] =
        &["sample_id", "fwd_read", "rev_read", "outdir", "reference"];

    fn sample_id(&self) -> &str {
        &self.sample_id
    }
}

/// Sample whose reads are pulled from SRA into `fastq_dir` by the job itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSample {
    pub sample_id: String,
    pub fastq_dir: Utf8PathBuf,
    pub outdir: Utf8PathBuf,
    pub reference: Utf8PathBuf,
}

impl SampleRecord for RemoteSample {
    const COLUMNS: &'static [&'static str] = &["sample_id", "fastq_dir", "outdir", "reference"];

    fn sample_id(&self) -> &str {
        &self.sample_id
    }
}

/// Run-wide snippy options shared by every generated job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobParameters {
    pub cpus: u32,
    pub force: bool,
    pub cleanup: bool,
}

impl JobParameters {
    /// `no_cleanup` is the CLI flag; cleanup is on unless it is set.
    pub fn from_flags(cpus: u32, force: bool, no_cleanup: bool) -> Self {
        Self {
            cpus,
            force,
            cleanup: !no_cleanup,
        }
    }

    /// Command-line fragment appended to every snippy call. Each option keeps
    /// its trailing space.
    pub fn render(&self) -> String {
        let mut fragment = format!("--cpus {} ", self.cpus);
        if self.force {
            fragment.push_str("--force ");
        }
        if self.cleanup {
            fragment.push_str("--cleanup ");
        }
        fragment
    }
}

impl Default for JobParameters {
    fn default() -> Self {
        Self {
            cpus: DEFAULT_CPUS,
            force: false,
            cleanup: true,
        }
    }
}

impl fmt::Display for JobParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
