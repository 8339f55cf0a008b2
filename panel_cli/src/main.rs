mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use panel_api::Method;

use crate::commands::request::{build_options, BodyArgs, PathArgs};
use crate::config::{parse_header, Config};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "panelctl")]
#[command(about = "Send requests to the admin panel API")]
struct Cli {
    /// Backend origin (defaults to $PANEL_API_URL, then http://127.0.0.1:8000)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (defaults to $PANEL_API_TIMEOUT_SECS, then 30)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Extra request header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header", global = true)]
    headers: Vec<String>,

    /// Output format: json, raw, table, or markdown
    #[arg(long, default_value = "json", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a resource
    Get(PathArgs),
    /// Create a resource
    Post(BodyArgs),
    /// Replace a resource
    Put(BodyArgs),
    /// Partially update a resource
    Patch(BodyArgs),
    /// Delete a resource
    Delete(PathArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("panelctl=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "raw" => OutputFormat::Raw,
        "table" => OutputFormat::Table,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Json,
    };

    let headers = cli
        .headers
        .iter()
        .map(|raw| parse_header(raw.as_str()))
        .collect::<Result<Vec<_>>>()?;

    let config = Config::resolve(cli.base_url.as_deref(), cli.timeout_secs)?;
    tracing::debug!(base_url = %config.base_url, "resolved configuration");
    let client = config.client()?;

    let (path, options) = match &cli.command {
        Commands::Get(args) => (&args.path, build_options(Method::Get, &headers, None)),
        Commands::Delete(args) => (&args.path, build_options(Method::Delete, &headers, None)),
        Commands::Post(args) => (&args.path, build_options(Method::Post, &headers, args.body()?)),
        Commands::Put(args) => (&args.path, build_options(Method::Put, &headers, args.body()?)),
        Commands::Patch(args) => (&args.path, build_options(Method::Patch, &headers, args.body()?)),
    };

    commands::request::run(&client, path, &options, &format).await?;

    Ok(())
}
