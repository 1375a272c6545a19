//! `zac validate` command - validate input documents

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::io;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Path to the requirements JSON file
    pub requirements: PathBuf,

    /// Path to the module library JSON file
    pub modules: PathBuf,

    /// Treat unsupported features as errors instead of warnings
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let requirements = io::load_requirements(&args.requirements)?;
    if !global.quiet {
        println!(
            "{} {} - {} zone(s), {} feature(s)",
            style("✓").green(),
            args.requirements.display(),
            requirements.zones.len(),
            requirements.features.len()
        );
    }

    let library = io::load_module_library(&args.modules)?;
    if !global.quiet {
        println!(
            "{} {} - {} module(s)",
            style("✓").green(),
            args.modules.display(),
            library.modules.len()
        );
    }

    // Cross-check: a feature nobody supports compiles into nothing.
    let unsupported: Vec<&str> = requirements
        .features
        .iter()
        .filter(|f| library.supporting_modules(&f.id).is_empty())
        .map(|f| f.id.as_str())
        .collect();

    if !unsupported.is_empty() {
        for id in &unsupported {
            println!(
                "{} feature '{}' has no supporting module",
                style("⚠").yellow(),
                id
            );
        }
        if args.strict {
            return Err(miette::miette!(
                "{} feature(s) without a supporting module",
                unsupported.len()
            ));
        }
    }

    if !global.quiet {
        println!("{} Inputs are valid", style("✓").green());
    }
    Ok(())
}
