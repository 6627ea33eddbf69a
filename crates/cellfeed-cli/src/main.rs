//! Cellfeed CLI - inspect and update spreadsheet cell feeds

use std::time::Duration;

use anyhow::{bail, Context, Result};
use cellfeed::prelude::*;
use cellfeed::{worksheet_key, ReqwestTransport, WorksheetHandle, DEFAULT_FEED_BASE};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cellfeed")]
#[command(author, version, about = "Read and update spreadsheet cells over Atom feeds")]
struct Cli {
    /// OAuth bearer token
    #[arg(long, env = "CELLFEED_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Base URL of the feed service
    #[arg(long, default_value = DEFAULT_FEED_BASE, global = true)]
    feed_base: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    /// Fail instead of submitting when a cell has no edit link
    #[arg(long, global = true)]
    reject_missing_edit_link: bool,

    /// Log requests to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Spreadsheet and worksheet selection shared by the worksheet commands
#[derive(Args)]
struct Target {
    /// Spreadsheet key
    spreadsheet: String,

    /// Worksheet key (e.g. od6), or title with --by-title
    worksheet: String,

    /// Treat WORKSHEET as a title and look it up in the worksheet listing
    #[arg(long)]
    by_title: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the worksheets of a spreadsheet
    Worksheets {
        /// Spreadsheet key
        spreadsheet: String,
    },

    /// Print every cell of a worksheet
    Cells {
        #[command(flatten)]
        target: Target,
    },

    /// Print one cell
    Get {
        #[command(flatten)]
        target: Target,
        /// Row (1-based)
        row: u32,
        /// Column (1-based)
        col: u32,
    },

    /// Set one cell's input value
    Set {
        #[command(flatten)]
        target: Target,
        /// Row (1-based)
        row: u32,
        /// Column (1-based)
        col: u32,
        /// New input value
        value: String,
    },

    /// Find the column whose header (row 1) equals HEADER
    Column {
        #[command(flatten)]
        target: Target,
        /// Header text, matched exactly
        header: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let transport = TransportConfig {
        token: cli.token.clone(),
        timeout: Duration::from_secs(cli.timeout),
        ..Default::default()
    };
    let policy = if cli.reject_missing_edit_link {
        MissingEditLinkPolicy::Reject
    } else {
        MissingEditLinkPolicy::Submit
    };
    let config = ClientConfig::default()
        .with_feed_base(cli.feed_base.as_str())
        .with_missing_edit_link(policy);
    let client = SheetsClient::connect(transport, config).context("Failed to create HTTP client")?;

    match &cli.command {
        Commands::Worksheets { spreadsheet } => list_worksheets(&client, spreadsheet),
        Commands::Cells { target } => print_cells(&client, target),
        Commands::Get { target, row, col } => print_cell(&client, target, *row, *col),
        Commands::Set {
            target,
            row,
            col,
            value,
        } => set_cell(&client, target, *row, *col, value),
        Commands::Column { target, header } => find_column(&client, target, header),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

type Client = SheetsClient<ReqwestTransport>;

fn worksheet<'c>(
    client: &'c Client,
    target: &Target,
) -> Result<WorksheetHandle<'c, ReqwestTransport>> {
    let spreadsheet = client.spreadsheet(target.spreadsheet.as_str());
    if target.by_title {
        spreadsheet
            .worksheet_by_title(&target.worksheet)
            .with_context(|| format!("Failed to resolve worksheet '{}'", target.worksheet))
    } else {
        Ok(spreadsheet.worksheet(target.worksheet.as_str()))
    }
}

fn list_worksheets(client: &Client, spreadsheet_id: &str) -> Result<()> {
    let spreadsheet = client
        .spreadsheet(spreadsheet_id)
        .get()
        .with_context(|| format!("Failed to fetch spreadsheet '{spreadsheet_id}'"))?;

    println!("Spreadsheet: {}", spreadsheet.title);
    let base = client.config().endpoints.base();
    for summary in &spreadsheet.worksheets {
        let key = worksheet_key(base, spreadsheet_id, &summary.id).unwrap_or(summary.id.as_str());
        println!(
            "{}\t{}\t{} rows x {} columns",
            key, summary.title, summary.row_count, summary.col_count
        );
    }

    Ok(())
}

fn print_cells(client: &Client, target: &Target) -> Result<()> {
    let sheet = worksheet(client, target)?
        .get()
        .context("Failed to fetch worksheet cells")?;

    eprintln!(
        "{} cells ({} rows x {} columns)",
        sheet.cells().len(),
        sheet.row_count(),
        sheet.col_count()
    );
    for cell in sheet.cells() {
        println!("R{}C{}\t{}", cell.row, cell.col, cell.input_value);
    }

    Ok(())
}

fn print_cell(client: &Client, target: &Target, row: u32, col: u32) -> Result<()> {
    let cell = worksheet(client, target)?
        .cell(row, col)
        .get()
        .with_context(|| format!("Failed to fetch cell R{row}C{col}"))?;

    println!("{}", cell.input_value);
    if let Some(number) = cell.numeric_value {
        eprintln!("numeric value: {number}");
    }

    Ok(())
}

fn set_cell(client: &Client, target: &Target, row: u32, col: u32, value: &str) -> Result<()> {
    let response = worksheet(client, target)?
        .cell(row, col)
        .set(value)
        .with_context(|| format!("Failed to update cell R{row}C{col}"))?;

    if let Some(failure) = response.failures().next() {
        bail!(
            "The service rejected {}: {} {}",
            failure.batch_id,
            failure.status.map(|s| s.to_string()).unwrap_or_else(|| "no status".into()),
            failure.reason
        );
    }
    eprintln!("Updated R{row}C{col}");

    Ok(())
}

fn find_column(client: &Client, target: &Target, header: &str) -> Result<()> {
    let sheet = worksheet(client, target)?
        .get()
        .context("Failed to fetch worksheet cells")?;

    match sheet.column_by_header(header) {
        Some(col) => {
            println!("{col}");
            Ok(())
        }
        None => bail!("No column has header '{header}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set() {
        let args = ["cellfeed", "set", "abc", "od6", "2", "3", "42", "-v"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Set {
                target,
                row,
                col,
                value,
            } => {
                assert_eq!(target.spreadsheet, "abc");
                assert_eq!(target.worksheet, "od6");
                assert!(!target.by_title);
                assert_eq!((row, col), (2, 3));
                assert_eq!(value, "42");
            }
            _ => panic!("expected set"),
        }
    }
}
