//! `zac compile` command - compile requirements into an architecture

use console::style;
use miette::Result;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::truncate_str;
use crate::cli::GlobalOpts;
use crate::compiler::{Generator, GeneratorOptions, Scorer, UnsupportedPolicy};
use crate::entities::ArchitectureCandidate;
use crate::io;

#[derive(clap::Args, Debug)]
pub struct CompileArgs {
    /// Path to the requirements JSON file
    pub requirements: PathBuf,

    /// Path to the module library JSON file
    pub modules: PathBuf,

    /// Output JSON path for the selected architecture
    #[arg(long, short = 'o', default_value = "out.json")]
    pub output: PathBuf,

    /// Maximum number of candidates to generate
    #[arg(long, default_value_t = 10)]
    pub max_candidates: usize,

    /// Fail when a feature has no supporting module instead of dropping it
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CompileArgs, global: &GlobalOpts) -> Result<()> {
    let requirements = io::load_requirements(&args.requirements)?;
    let library = io::load_module_library(&args.modules)?;

    let generator = Generator::new(GeneratorOptions {
        unsupported: if args.strict {
            UnsupportedPolicy::Fail
        } else {
            UnsupportedPolicy::Drop
        },
    });
    let mut candidates = generator.generate(&requirements, &library, args.max_candidates)?;

    let scorer = Scorer::default();
    scorer.score(&mut candidates);
    let best = scorer.select_best(candidates)?;

    io::dump_architecture(&best, &requirements.vehicle_name, &args.output)?;

    if global.verbose {
        print_placements(&best);
    }

    if !global.quiet {
        for feature in &best.dropped_features {
            println!(
                "{} no module supports feature '{}'; dropped from the architecture",
                style("⚠").yellow(),
                feature
            );
        }

        print_summary(&best, &requirements.vehicle_name);
        println!(
            "{} Compiled architecture for '{}' → {}",
            style("✓").green(),
            requirements.vehicle_name,
            args.output.display()
        );
    }

    Ok(())
}

fn print_placements(candidate: &ArchitectureCandidate) {
    for pm in &candidate.placements {
        println!(
            "{} {} → {} in zone {}",
            style("→").blue(),
            pm.provided_features.join(", "),
            pm.module.id,
            pm.zone.name
        );
    }
}

fn print_summary(candidate: &ArchitectureCandidate, vehicle: &str) {
    let mut builder = Builder::default();
    builder.push_record(["Feature", "Module", "Zone", "Cost", "Power (kW)"]);
    for pm in &candidate.placements {
        builder.push_record([
            truncate_str(&pm.provided_features.join(", "), 25),
            truncate_str(&pm.module.name, 25),
            pm.zone.name.clone(),
            format!("{:.2}", pm.module.cost),
            format!("{:.3}", pm.module.max_power_kw),
        ]);
    }

    println!("\nArchitecture for '{}'", vehicle);
    println!("{}\n", builder.build().with(Style::sharp()));

    let mut penalty_builder = Builder::default();
    penalty_builder.push_record(["Penalty", "Value"]);
    for (name, value) in &candidate.penalties {
        penalty_builder.push_record([name.clone(), format!("{:.2}", value)]);
    }
    println!("{}\n", penalty_builder.build().with(Style::sharp()));

    println!(
        "Total cost: {:.2} | Total power: {:.3} kW | Harness: {:.2} m | Links: {}",
        candidate.total_cost(),
        candidate.total_power_kw(),
        candidate.harness_length_m(),
        candidate.links.len()
    );
    if let Some(score) = candidate.score {
        println!("Score: {:.2}", score);
    }
}
