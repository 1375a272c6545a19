//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    compile::CompileArgs, completions::CompletionsArgs, report::ReportArgs, validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "zac")]
#[command(author, version, about = "ZAC - Zonal Architecture Compiler")]
#[command(
    long_about = "Compile vehicle-level feature requirements and a hardware module library into a scored zonal E/E architecture."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile requirements and modules into an architecture
    Compile(CompileArgs),

    /// Validate input documents without compiling
    Validate(ValidateArgs),

    /// Render a compiled architecture as a markdown report
    Report(ReportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
