use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use metal_structure::export::{export_csv, export_json};
use metal_structure::parser::{load_structure_with, LoadOptions};
use metal_structure::report::{full_report, MetalStructure};
use metal_structure::ui::App;

#[derive(Parser, Debug)]
#[command(name = "metal-structure")]
#[command(about = "Metal Structure - weight, volume and paint cans from a piece list")]
#[command(version)]
struct Args {
    /// Path to the piece list (CSV)
    #[arg(required = true)]
    file: PathBuf,

    /// Field delimiter of the piece list
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    /// Print the text report instead of opening the viewer
    #[arg(long)]
    report: bool,

    /// Export pieces to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the summary to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Log loading details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(args: &Args, interactive: bool) {
    // No subscriber while the viewer owns the terminal, unless asked for one.
    if interactive && !args.verbose && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let interactive = !args.report && args.csv.is_none() && args.json.is_none();
    init_logging(&args, interactive);

    let delimiter = u8::try_from(args.delimiter)
        .map_err(|_| color_eyre::eyre::eyre!("delimiter must be a single-byte character"))?;
    let options = LoadOptions {
        delimiter,
        ..LoadOptions::default()
    };

    let structure = load_structure_with(&args.file, options)?;

    if let Some(csv_path) = &args.csv {
        export_csv(&structure, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&structure, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    let metal = MetalStructure::new(structure);

    if args.report {
        print!("{}", full_report(&metal)?);
    }

    if !interactive {
        return Ok(());
    }

    let app = App::new(metal)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
