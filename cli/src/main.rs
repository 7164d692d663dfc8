mod error_formatter;
mod formatter;
mod mcp;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use unitconv::Engine;

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Unit conversion for temperature, distance, speed and pressure.")]
#[command(
    long_about = "unitconv converts values between units of temperature, distance, speed and pressure.\nThe CLI converts single values or comma-separated batches, lists the accepted unit names, runs an HTTP server, or integrates with AI tools via MCP."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value (try: convert 32 f c)
    ///
    /// Unit names are case-insensitive and accept short aliases,
    /// e.g. `c`, `km`, `mph`, `hpa`. Run `unitconv units` for the full list.
    Convert {
        /// Value to convert (negative values are allowed)
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit
        from: String,
        /// Target unit
        to: String,
        /// Output the converted number only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
        /// Output the result as JSON
        #[arg(long, conflicts_with = "raw")]
        json: bool,
    },
    /// Convert a comma-separated list of values with one unit pair
    ///
    /// Every value must be a number; a single malformed value fails the whole batch.
    ///
    /// Example: unitconv batch 32,50,100 fahrenheit celsius
    Batch {
        /// Comma-separated values, e.g. "32,50,100"
        #[arg(allow_hyphen_values = true)]
        values: String,
        /// Source unit
        from: String,
        /// Target unit
        to: String,
        /// Output converted numbers only, one per line
        #[arg(short = 'r', long)]
        raw: bool,
        /// Output the result as JSON
        #[arg(long, conflicts_with = "raw")]
        json: bool,
    },
    /// List accepted unit names by category
    Units {
        /// Output the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start HTTP REST API server (default: 127.0.0.1:6001)
    ///
    /// API: GET /convert?value=X&from=UNIT&to=UNIT,
    ///      GET /batch-convert?values=X,Y,Z&from=UNIT&to=UNIT,
    ///      GET /units, GET /healthz
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "6001")]
        port: u16,
        /// Reject batches with more values than this
        #[arg(long, value_name = "N")]
        max_batch: Option<usize>,
    },
    /// Start MCP server for AI assistant integration (stdio)
    ///
    /// Provides tools for converting values, converting batches, and listing units.
    Mcp,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Convert {
            value,
            from,
            to,
            raw,
            json,
        } => convert_command(*value, from, to, *raw, *json),
        Commands::Batch {
            values,
            from,
            to,
            raw,
            json,
        } => batch_command(values, from, to, *raw, *json),
        Commands::Units { json } => units_command(*json),
        Commands::Server {
            host,
            port,
            max_batch,
        } => server_command(host, *port, *max_batch),
        Commands::Mcp => mcp_command(),
    };

    if let Err(e) = result {
        // Conversion errors get a dedicated rendering, everything else the default
        if let Some(conv_err) = e.downcast_ref::<unitconv::ConversionError>() {
            let values = match &cli.command {
                Commands::Batch { values, .. } => Some(values.as_str()),
                _ => None,
            };
            eprintln!("{}", error_formatter::format_error(conv_err, values));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn convert_command(value: f64, from: &str, to: &str, raw: bool, json: bool) -> Result<()> {
    let engine = Engine::new();
    let result = engine.convert(value, from, to)?;

    let formatter = Formatter::default();
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", formatter.format_conversion(&result, raw));
    }

    Ok(())
}

fn batch_command(values: &str, from: &str, to: &str, raw: bool, json: bool) -> Result<()> {
    let engine = Engine::new();
    let batch = engine.convert_batch_str(values, from, to)?;

    let formatter = Formatter::default();
    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        print!("{}", formatter.format_batch(&batch, raw));
    }

    Ok(())
}

fn units_command(json: bool) -> Result<()> {
    let engine = Engine::new();
    let listing = engine.list_units();

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        let formatter = Formatter::default();
        print!("{}", formatter.format_unit_listing(&listing));
    }

    Ok(())
}

fn server_command(host: &str, port: u16, max_batch: Option<usize>) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(async {
            let engine = Engine::with_limits(limits_from(max_batch));

            println!(
                "Starting HTTP server with {} unit aliases loaded",
                engine.registry().len()
            );
            server::http::start_server(engine, host, port).await
        })?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (host, port, max_batch);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

fn mcp_command() -> Result<()> {
    #[cfg(feature = "mcp")]
    {
        mcp::server::start_server(Engine::new())?;
    }

    #[cfg(not(feature = "mcp"))]
    {
        eprintln!("Error: MCP feature not enabled");
        eprintln!("Recompile with: cargo build --features mcp");
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(feature = "server")]
fn limits_from(max_batch: Option<usize>) -> unitconv::ResourceLimits {
    match max_batch {
        Some(max) => unitconv::ResourceLimits::new().with_max_batch_values(max),
        None => unitconv::ResourceLimits::new(),
    }
}
