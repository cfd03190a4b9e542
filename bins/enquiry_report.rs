use std::fs::{self, File};
use std::io::BufWriter;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::{error, info, warn};

use service::domain::Service;
use service::report::{self, CsvRow, TableRow};

/// Turn a form-responses CSV export into a mail-merge CSV or an HTML table.
#[derive(Parser, Debug)]
#[command(name = "enquiry_report", version)]
struct Cli {
    /// Input CSV (defaults to `[report].input_csv`)
    #[arg(long, global = true)]
    input: Option<String>,
    /// Output file (defaults to `[report].output_csv` / `[report].output_html`)
    #[arg(long, global = true)]
    output: Option<String>,
    /// Use the built-in service list instead of reading it from the database
    #[arg(long, global = true)]
    offline: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Semicolon-separated CSV with a mailto link per enquiry
    Csv,
    /// HTML table with an email link per enquiry
    Html,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(path) => {
            info!(service = "enquiry_report", event = "written", %path, "report written");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "enquiry_report", event = "failed", error = %e, "report failed");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn load_catalog(cfg: &configs::AppConfig, offline: bool) -> anyhow::Result<Vec<Service>> {
    if offline {
        return Ok(service::catalog::seed_catalog());
    }
    let db = models::db::connect_with_config(&cfg.database).await?;
    let services = service::catalog::list_services(&db).await?;
    models::db::shutdown(db).await?;
    if services.is_empty() {
        warn!(service = "enquiry_report", "service catalog is empty; every item will be reported as other");
    }
    Ok(services)
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    // offline runs need no database, so skip its validation
    let cfg = if cli.offline {
        configs::load_file_or_env(&configs::config_path())?
    } else {
        configs::AppConfig::load_or_env()?
    };
    let input = cli.input.unwrap_or_else(|| cfg.report.input_csv.clone());
    let known = load_catalog(&cfg, cli.offline).await?;

    let rows = service::importer::read_rows(File::open(&input)?)?;
    let enquiries = service::importer::import_all(&rows, &known)?;
    info!(service = "enquiry_report", %input, count = enquiries.len(), "enquiries imported");

    match cli.command {
        Command::Csv => {
            let path = cli.output.unwrap_or_else(|| cfg.report.output_csv.clone());
            let rows: Vec<CsvRow> = enquiries.into_iter().map(CsvRow::new).collect();
            report::write_csv(&rows, BufWriter::new(File::create(&path)?))?;
            Ok(path)
        }
        Command::Html => {
            let path = cli.output.unwrap_or_else(|| cfg.report.output_html.clone());
            let rows: Vec<TableRow> = enquiries.into_iter().map(TableRow::new).collect();
            fs::write(&path, report::html_table(&rows))?;
            Ok(path)
        }
    }
}
