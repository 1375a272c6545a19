//! `zac report` command - render a compiled architecture as markdown

use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::truncate_str;
use crate::cli::GlobalOpts;
use crate::io::{self, ArchitectureDoc};

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Path to a compiled architecture JSON file
    pub architecture: PathBuf,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ReportArgs, _global: &GlobalOpts) -> Result<()> {
    let doc = io::load_architecture(&args.architecture)?;
    let output = render(&doc);
    write_output(&output, args.output)
}

fn render(doc: &ArchitectureDoc) -> String {
    let mut output = String::new();
    output.push_str("# Zonal Architecture Report\n\n");
    output.push_str(&format!("**Vehicle:** {}\n\n", doc.vehicle));

    output.push_str("## Zones\n\n");
    let mut builder = Builder::default();
    builder.push_record([
        "Name",
        "Power Budget (kW)",
        "Safety",
        "Latency Budget (ms)",
        "Position",
    ]);
    for zone in &doc.zones {
        builder.push_record([
            zone.name.clone(),
            format!("{:.2}", zone.max_power_kw),
            zone.safety_level.clone().unwrap_or_else(|| "-".to_string()),
            zone.latency_budget_ms
                .map(|b| format!("{:.1}", b))
                .unwrap_or_else(|| "-".to_string()),
            zone.position
                .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    output.push_str(&builder.build().with(Style::markdown()).to_string());
    output.push_str("\n\n");

    output.push_str("## Placed Modules\n\n");
    let mut builder = Builder::default();
    builder.push_record(["Module", "Zone", "Cost", "Power (kW)", "Provides"]);
    for module in &doc.modules {
        builder.push_record([
            format!(
                "{} ({})",
                truncate_str(&module.module_name, 25),
                module.module_id
            ),
            module.zone.clone(),
            format!("{:.2}", module.cost),
            format!("{:.3}", module.max_power_kw),
            truncate_str(&module.provided_features.join(", "), 30),
        ]);
    }
    output.push_str(&builder.build().with(Style::markdown()).to_string());
    output.push_str("\n\n");

    if !doc.links.is_empty() {
        output.push_str("## Links\n\n");
        let mut builder = Builder::default();
        builder.push_record([
            "Src",
            "Dst",
            "Medium",
            "Mbps",
            "Latency (ms)",
            "Length (m)",
            "Red.",
        ]);
        for link in &doc.links {
            builder.push_record([
                link.src.clone(),
                link.dst.clone(),
                link.medium.to_string(),
                link.bandwidth_mbps
                    .map(|b| format!("{:.0}", b))
                    .unwrap_or_else(|| "-".to_string()),
                link.latency_ms
                    .map(|l| format!("{:.2}", l))
                    .unwrap_or_else(|| "-".to_string()),
                link.length_m
                    .map(|l| format!("{:.2}", l))
                    .unwrap_or_else(|| "-".to_string()),
                if link.redundant { "✓" } else { "-" }.to_string(),
            ]);
        }
        output.push_str(&builder.build().with(Style::markdown()).to_string());
        output.push_str("\n\n");
    }

    if !doc.dropped_features.is_empty() {
        output.push_str("## Dropped Features\n\n");
        output.push_str("*Features with no supporting module in the library.*\n\n");
        for id in &doc.dropped_features {
            output.push_str(&format!("- {}\n", id));
        }
        output.push('\n');
    }

    output.push_str("## Score\n\n");
    let mut builder = Builder::default();
    builder.push_record(["Penalty", "Value"]);
    for (name, value) in &doc.penalties {
        builder.push_record([name.clone(), format!("{:.2}", value)]);
    }
    output.push_str(&builder.build().with(Style::markdown()).to_string());
    output.push_str("\n\n");

    for (name, value) in &doc.metrics {
        output.push_str(&format!("- **{}**: {:.3}\n", name, value));
    }
    if let Some(score) = doc.score {
        output.push_str(&format!("- **score**: {:.2}\n", score));
    }

    output.push_str(&format!(
        "\n---\n\n*Generated: {}*\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));

    output
}

fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
