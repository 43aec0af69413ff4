use anyhow::{Context, Result};
use bimxer_extract::{
    ElementCategory, ExtractConfig, FileMeta, IfcExtract, IfcExtractor, XerExtract, XerExtractor,
};
use bimxer_integrate::{IntegratedModel, Integrator};
use bimxer_wbs::{render_text, sample_hierarchy, to_html};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bimxer")]
#[command(about = "Joins IFC building models with XER schedule exports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one file and report what was recognized
    Inspect(InspectArgs),

    /// Join a building model with a schedule export
    Integrate(IntegrateArgs),

    /// Render the sample WBS hierarchy
    Wbs(WbsArgs),
}

#[derive(Args)]
struct InspectArgs {
    /// File to extract
    file: PathBuf,

    /// Extraction format (default: guess from the extension)
    #[arg(long, value_enum, default_value_t = FormatFlag::Auto)]
    format: FormatFlag,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct IntegrateArgs {
    /// IFC building model file
    #[arg(long)]
    ifc: PathBuf,

    /// XER schedule export file
    #[arg(long)]
    xer: PathBuf,

    /// Write the integrated model JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct WbsArgs {
    /// Render the HTML fragment instead of plain text
    #[arg(long)]
    html: bool,

    /// Write the rendering to this path instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatFlag {
    Auto,
    Ifc,
    Xer,
}

enum InspectFormat {
    Ifc,
    Xer,
}

/// XER inspection pairs the extract with filename metadata
#[derive(Serialize)]
struct XerReport {
    meta: FileMeta,
    extract: XerExtract,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Auto-enable quiet mode when --json is used (to keep stdout clean for JSON parsing)
    let json_output = match &cli.command {
        Commands::Inspect(args) => args.json,
        Commands::Integrate(args) => args.json,
        Commands::Wbs(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Inspect(args) => run_inspect(args).await?,
        Commands::Integrate(args) => run_integrate(args).await?,
        Commands::Wbs(args) => run_wbs(args)?,
    }

    Ok(())
}

/// Extract one file and report what was recognized
async fn run_inspect(args: InspectArgs) -> Result<()> {
    let config = ExtractConfig::default();
    match resolve_format(&args.file, args.format)? {
        InspectFormat::Ifc => {
            let extractor = IfcExtractor::new(&config)?;
            let extract = extractor
                .extract_file(&args.file)
                .await
                .with_context(|| format!("Failed to read IFC file {}", args.file.display()))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&extract)?);
            } else {
                print_ifc_extract(&extract);
            }
        }
        InspectFormat::Xer => {
            let extractor = XerExtractor::new(&config)?;
            let extract = extractor
                .extract_file(&args.file)
                .await
                .with_context(|| format!("Failed to read XER file {}", args.file.display()))?;
            let meta = FileMeta::from_filename(&extract.file_name);
            if args.json {
                let report = XerReport { meta, extract };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_xer_extract(&extract, &meta);
            }
        }
    }
    Ok(())
}

/// Join a building model with a schedule export
async fn run_integrate(args: IntegrateArgs) -> Result<()> {
    let integrator = Integrator::new(&ExtractConfig::default())?;
    let model = integrator
        .process_files(&args.ifc, &args.xer)
        .await
        .context("Failed to integrate model and schedule")?;

    if let Some(path) = &args.out {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&model)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print_model(&model);
    }
    Ok(())
}

/// Render the sample WBS hierarchy
fn run_wbs(args: WbsArgs) -> Result<()> {
    let hierarchy = sample_hierarchy();
    let rendering = if args.html {
        to_html(&hierarchy)
    } else {
        render_text(&hierarchy)
    };

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendering)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => print!("{rendering}"),
    }
    Ok(())
}

fn resolve_format(file: &Path, flag: FormatFlag) -> Result<InspectFormat> {
    match flag {
        FormatFlag::Ifc => return Ok(InspectFormat::Ifc),
        FormatFlag::Xer => return Ok(InspectFormat::Xer),
        FormatFlag::Auto => {}
    }
    let extension = file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match extension.as_str() {
        "ifc" => Ok(InspectFormat::Ifc),
        "xer" => Ok(InspectFormat::Xer),
        _ => anyhow::bail!(
            "Cannot tell the format of {} from its extension; pass --format",
            file.display()
        ),
    }
}

fn print_ifc_extract(extract: &IfcExtract) {
    eprintln!("Scanned {} ({} bytes)", extract.file_name, extract.file_size);
    eprintln!();

    println!("Property sets: {}", extract.property_sets.len());
    println!("Building elements: {}", extract.building_elements.len());
    for category in ElementCategory::ALL {
        let count = extract.category_count(category);
        if count > 0 {
            println!("  {:<20} {}", category.as_str(), count);
        }
    }
    println!("WBS codes ({}):", extract.wbs_codes.len());
    for code in &extract.wbs_codes {
        println!("  {code}");
    }
    println!("Task ids ({}):", extract.task_ids.len());
    for id in &extract.task_ids {
        println!("  {id}");
    }
}

fn print_xer_extract(extract: &XerExtract, meta: &FileMeta) {
    eprintln!("Scanned {} ({} bytes)", extract.file_name, extract.file_size);
    eprintln!();

    if let Some(name) = &meta.project_name {
        println!("Project name: {name}");
    }
    if let Some(date) = meta.snapshot_date {
        println!("Snapshot date: {date}");
    }
    if let Some(category) = meta.file_category {
        println!("File category: {}", category.as_str());
    }
    if let Some(version) = &meta.baseline_version {
        println!("Baseline version: {version}");
    }
    if !meta.is_empty() {
        println!();
    }

    if extract.tables.is_empty() {
        println!("No schedule tables recognized");
        return;
    }
    for (name, table) in &extract.tables {
        println!("{:<12} {:>4} rows", name, table.len());
    }
}

fn print_model(model: &IntegratedModel) {
    eprintln!(
        "Integrated {} components ({} tasks, {} resources in the schedule)",
        model.components.len(),
        model.total_tasks,
        model.total_resources
    );
    eprintln!();

    println!("Project: {} ({})", model.project_name, model.project_id);
    println!(
        "Updated {}, budget {}, ends {}",
        model.last_updated, model.total_budget, model.project_end
    );
    if let Some(summary) = &model.summary {
        println!(
            "Schedule: {} to {}, {} days, {} tasks",
            summary.project_start,
            summary.project_end,
            summary.project_duration_days,
            summary.total_tasks
        );
    }

    if !model.components.is_empty() {
        println!();
        println!("Components:");
    }
    for component in &model.components {
        println!(
            "{:<22} {:<8} {:<18} {} to {} ({})",
            component.wbs_code,
            component.task_id,
            component.area,
            component.start_date,
            component.end_date,
            component.duration
        );
        println!("  {} / {}", component.description, component.activity_name);
        if component.predecessors != "None" {
            println!("  after {}", component.predecessors);
        }
    }

    if !model.risks.is_empty() {
        println!();
        println!("Risks:");
        for risk in &model.risks {
            println!(
                "{:<22} {:<6} {}",
                risk.wbs_code,
                risk.risk_level.as_str(),
                risk.primary_risks
            );
        }
    }

    if !model.resources.is_empty() {
        println!();
        println!("Resources:");
        for resource in &model.resources {
            println!(
                "{:<22} {:>3} x {} (cost {})",
                resource.wbs_code, resource.units, resource.resources, resource.cost
            );
        }
    }
}
