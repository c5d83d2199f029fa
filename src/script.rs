use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::domain::{JobParameters, LocalSample, RemoteSample, SampleRecord};

pub const SHEBANG: &str = "#!/bin/sh";

/// A rendered job script and the path it belongs at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobScript {
    pub sample_id: String,
    pub path: Utf8PathBuf,
    pub contents: String,
}

/// Turns one sample row into a job script.
///
/// `jobs_dir` is the run-level `--outdir`. Local samples ignore it and write
/// next to their own `outdir`; remote samples always write into it.
pub trait JobTemplate: SampleRecord {
    fn render(&self, params: &JobParameters, jobs_dir: &Utf8Path) -> JobScript;
}

impl JobTemplate for LocalSample {
    fn render(&self, params: &JobParameters, _jobs_dir: &Utf8Path) -> JobScript {
        let mut contents = header();
        contents.push_str(&snippy_line(
            &self.sample_id,
            &self.outdir,
            &self.reference,
            &self.fwd_read,
            &self.rev_read,
            params,
        ));

        JobScript {
            sample_id: self.sample_id.clone(),
            path: script_path(&self.outdir, &self.sample_id),
            contents,
        }
    }
}

impl JobTemplate for RemoteSample {
    fn render(&self, params: &JobParameters, jobs_dir: &Utf8Path) -> JobScript {
        let (fwd_read, rev_read) = split_fastq_paths(&self.fastq_dir, &self.sample_id);

        let mut contents = header();
        contents.push_str(&format!(
            "fastq-dump --split-files --outdir {} {} \n",
            self.fastq_dir, self.sample_id
        ));
        contents.push_str(&snippy_line(
            &self.sample_id,
            &self.outdir,
            &self.reference,
            &fwd_read,
            &rev_read,
            params,
        ));
        // Drops the downloaded reads, not snippy's intermediates.
        if params.cleanup {
            contents.push_str(&format!("rm {fwd_read}\n"));
            contents.push_str(&format!("rm {rev_read}\n"));
        }

        JobScript {
            sample_id: self.sample_id.clone(),
            path: script_path(jobs_dir, &self.sample_id),
            contents,
        }
    }
}

pub fn snippy_dir(outdir: &Utf8Path, sample_id: &str) -> Utf8PathBuf {
    outdir.join(format!("{sample_id}_snippy"))
}

pub fn script_path(dir: &Utf8Path, sample_id: &str) -> Utf8PathBuf {
    dir.join(format!("{sample_id}.sh"))
}

/// Files written by `fastq-dump --split-files` for a run accession.
pub fn split_fastq_paths(fastq_dir: &Utf8Path, sample_id: &str) -> (Utf8PathBuf, Utf8PathBuf) {
    (
        fastq_dir.join(format!("{sample_id}_1.fastq")),
        fastq_dir.join(format!("{sample_id}_2.fastq")),
    )
}

fn header() -> String {
    format!("{SHEBANG}\n")
}

fn snippy_line(
    sample_id: &str,
    outdir: &Utf8Path,
    reference: &Utf8Path,
    fwd_read: &Utf8Path,
    rev_read: &Utf8Path,
    params: &JobParameters,
) -> String {
    format!(
        "snippy --prefix {sample_id} --outdir {} --ref {reference} --R1 {fwd_read} --R2 {rev_read} --quiet {}\n",
        snippy_dir(outdir, sample_id),
        params.render()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippy_dir_does_not_double_separator() {
        let dir = snippy_dir(Utf8Path::new("/out/"), "S1");
        assert_eq!(dir.as_str(), "/out/S1_snippy");
    }

    #[test]
    fn split_fastq_names() {
        let (r1, r2) = split_fastq_paths(Utf8Path::new("/fq"), "SRR1");
        assert_eq!(r1.as_str(), "/fq/SRR1_1.fastq");
        assert_eq!(r2.as_str(), "/fq/SRR1_2.fastq");
    }
}
