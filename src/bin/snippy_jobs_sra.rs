use std::process::ExitCode;

use clap::Parser;

use snippy_jobs::config::JobArgs;
use snippy_jobs::domain::RemoteSample;

#[derive(Parser)]
#[command(name = "snippy-jobs-sra")]
#[command(about = "Create snippy shell scripts that fetch reads from SRA with fastq-dump")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: JobArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    snippy_jobs::cli::main::<RemoteSample>(cli.args)
}
