use std::process::ExitCode;

use clap::Parser;

use snippy_jobs::config::JobArgs;
use snippy_jobs::domain::LocalSample;

#[derive(Parser)]
#[command(name = "snippy-jobs-local")]
#[command(about = "Create snippy shell scripts for samples with local paired-end reads")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: JobArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    snippy_jobs::cli::main::<LocalSample>(cli.args)
}
