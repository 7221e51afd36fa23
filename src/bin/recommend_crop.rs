//! Crop recommendation CLI
//!
//! Usage:
//!   recommend_crop recommend --soil black --season kharif --duration long --water medium
//!   recommend_crop --format json recommend --soil red --season zaid --duration medium --water medium
//!   recommend_crop --format json crops
//!   recommend_crop matrix

use clap::{Parser, Subcommand, ValueEnum};
use crop_advisor_rust::knowledge_base::all_profiles;
use crop_advisor_rust::{
    recommend_with_rule, AdvisoryGenerator, DurationClass, InputVector, JsonFormatter,
    MarkdownFormatter, Season, SoilType, WaterAvailability,
};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

/// Rule-based crop recommendation for a field's conditions.
#[derive(Parser)]
#[command(name = "recommend_crop", version, about = "Rule-based crop recommendation")]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "text", value_enum)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a crop for one set of field conditions
    Recommend {
        #[arg(long, value_enum)]
        soil: SoilType,
        #[arg(long, value_enum)]
        season: Season,
        #[arg(long, value_enum)]
        duration: DurationClass,
        #[arg(long, value_enum)]
        water: WaterAvailability,
    },
    /// List every crop in the knowledge base
    Crops,
    /// Print the recommendation for all 108 input combinations
    Matrix,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_advisor_rust=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&cli, &mut out) {
        // Reader went away (e.g. piped into `head`)
        Err(err) if is_broken_pipe(&err) => Ok(()),
        other => other,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map_or(false, |e| e.kind() == io::ErrorKind::BrokenPipe)
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    match cli.command {
        Commands::Recommend { soil, season, duration, water } => {
            let input = InputVector::new(soil, season, duration, water);
            print_recommendation(&input, cli.format, out)?;
        }
        Commands::Crops => print_crops(cli.format, out)?,
        Commands::Matrix => print_matrix(cli.format, out)?,
    }
    out.flush()?;
    Ok(())
}

fn print_recommendation<W: Write>(
    input: &InputVector,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let result = AdvisoryGenerator::generate(input);

    match format {
        OutputFormat::Json => writeln!(out, "{}", JsonFormatter::format(&result)?)?,
        OutputFormat::Markdown => write!(out, "{}", MarkdownFormatter::format(&result))?,
        OutputFormat::Text => {
            writeln!(out, "Crop:        {}", result.crop)?;
            writeln!(out, "Price:       {} ({})", result.price_range, result.trend)?;
            writeln!(out, "Fertilizers: {}", result.fertilizers.join(", "))?;
            writeln!(out, "Budget:      {}", result.budget)?;
            writeln!(out, "Risk level:  {}", result.risk_level)?;
            for entry in result.risks.iter() {
                writeln!(out, "  - {}", entry.text)?;
            }
            writeln!(out, "Autonomy:    {}", result.autonomy_mode.description())?;
            writeln!(out, "Advisory:    {}", result.advisory)?;
            writeln!(out, "Why:")?;
            for line in &result.explanations {
                writeln!(out, "  - {}", line)?;
            }
        }
    }
    Ok(())
}

fn print_crops<W: Write>(format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(all_profiles())?)?;
        return Ok(());
    }
    for p in all_profiles() {
        writeln!(
            out,
            "{:<10} {:<26} {:<10} ₹{:>6}/acre  {}",
            p.crop.as_str(),
            p.price_display(),
            p.trend.to_string(),
            p.base_budget_per_acre,
            p.fertilizers.join(", ")
        )?;
    }
    Ok(())
}

fn print_matrix<W: Write>(format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    let rows: Vec<_> = InputVector::all_combinations()
        .map(|input| (input, recommend_with_rule(&input)))
        .collect();

    if format == OutputFormat::Json {
        let data: Vec<serde_json::Value> = rows
            .iter()
            .map(|(input, rec)| {
                serde_json::json!({
                    "inputs": input,
                    "crop": rec.crop,
                    "matched_rule": rec.matched_rule,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&data)?)?;
        return Ok(());
    }

    for (input, rec) in rows {
        let rule = rec.matched_rule.map_or_else(|| "-".to_string(), |n| n.to_string());
        writeln!(
            out,
            "{:<9} {:<7} {:<7} {:<7} -> {:<10} (rule {})",
            input.soil.label(),
            input.season.label(),
            input.duration.label(),
            input.water.label(),
            rec.crop.as_str(),
            rule
        )?;
    }
    Ok(())
}
