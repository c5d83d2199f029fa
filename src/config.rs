use camino::Utf8PathBuf;
use clap::Args;

use crate::domain::{DEFAULT_CPUS, JobParameters};
use crate::output::OutputMode;

/// Options shared by both generators.
#[derive(Debug, Clone, Args)]
pub struct JobArgs {
    /// Tab-delimited sample sheet (header row required, labels ignored)
    #[arg(long)]
    pub input: Utf8PathBuf,

    /// Directory to write job files
    #[arg(long)]
    pub outdir: Utf8PathBuf,

    /// Number of cpus for snippy to use
    #[arg(long = "num_cpus", default_value_t = DEFAULT_CPUS)]
    pub num_cpus: u32,

    /// Do not pass --cleanup to snippy (and keep downloaded reads)
    #[arg(short = 'c', long = "no_cleanup")]
    pub no_cleanup: bool,

    /// Let snippy overwrite an existing output directory
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Render scripts and report them without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: Utf8PathBuf,
    pub jobs_dir: Utf8PathBuf,
    pub parameters: JobParameters,
    pub dry_run: bool,
    pub output_mode: OutputMode,
}

impl RunConfig {
    pub fn from_args(args: JobArgs) -> Self {
        let output_mode = if args.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self {
            parameters: JobParameters::from_flags(args.num_cpus, args.force, args.no_cleanup),
            input: args.input,
            jobs_dir: args.outdir,
            dry_run: args.dry_run,
            output_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: JobArgs,
    }

    #[test]
    fn defaults_match_cli_contract() {
        let cli = TestCli::try_parse_from(["test", "--input", "s.tsv", "--outdir", "jobs"]).unwrap();
        let config = RunConfig::from_args(cli.args);
        assert_eq!(config.input.as_str(), "s.tsv");
        assert_eq!(config.jobs_dir.as_str(), "jobs");
        assert_eq!(config.parameters, JobParameters::default());
        assert!(!config.dry_run);
        assert_eq!(config.output_mode, OutputMode::Text);
    }

    #[test]
    fn short_flags_and_underscored_longs() {
        let cli = TestCli::try_parse_from([
            "test",
            "--input",
            "s.tsv",
            "--outdir",
            "jobs",
            "--num_cpus",
            "16",
            "-c",
            "-f",
        ])
        .unwrap();
        let config = RunConfig::from_args(cli.args);
        assert_eq!(config.parameters.cpus, 16);
        assert!(config.parameters.force);
        assert!(!config.parameters.cleanup);
    }

    #[test]
    fn input_is_required() {
        assert!(TestCli::try_parse_from(["test", "--outdir", "jobs"]).is_err());
    }
}
