use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use devotional::logging::{self, Verbosity};
use devotional::render::SiteContext;
use devotional::server::{self, AppState};
use devotional::{config, data, generate, output, resolve};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "devotional")]
#[command(about = "Bilingual daily devotional reader")]
#[command(long_about = "\
Bilingual daily devotional reader

Reads one devotional per day from a JSON file and serves it as a small
website in English and Tamil, live or as a static build.

Data file structure:

  {
    \"feb\": {                         # lowercase month key
      \"day1\": {                      # dayN, N >= 1
        \"english\": { \"title\": \"...\", \"data\": \"markdown\" },
        \"tamil\":   { \"title\": \"...\", \"data\": \"markdown\" }
      }
    }
  }

Routes:
  /                        today's devotional and the month browser
  /today                   today's devotional (falls back to another month)
  /{month}                 article list for a month
  /{month}/today           today's day number within that month
  /{month}/day/{n}         a specific day

Run 'devotional gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Data file (overrides `data_file` from config.toml)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output directory for `build`
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Resolve "today" as this date (YYYY-MM-DD) instead of the local date
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every route to static HTML in --output
    Build,
    /// Serve pages over HTTP
    Serve {
        /// Listen address (overrides [server] host)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (overrides [server] port)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate the data file and list months and days
    Check,
    /// Show which devotional today resolves to
    Today,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    match &cli.command {
        Command::Build => {
            let (site_config, data_path) = load_settings(&cli)?;
            println!("==> Building {} → {}", data_path.display(), cli.output.display());
            let ctx = SiteContext::for_static_site(site_config);
            let summary = generate::build(&data_path, &ctx, &cli.output, today)?;
            output::print_generate_output(&summary);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Serve { host, port } => {
            let (site_config, data_path) = load_settings(&cli)?;
            let host = host.clone().unwrap_or_else(|| site_config.server.host.clone());
            let port = port.unwrap_or(site_config.server.port);
            let mut state = AppState::new(SiteContext::new(site_config), data_path);
            if let Some(date) = cli.date {
                info!(%date, "pinning today");
                state = state.with_fixed_date(date);
            }
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(state, &host, port))?;
        }
        Command::Check => {
            let (_, data_path) = load_settings(&cli)?;
            println!("==> Checking {}", data_path.display());
            let dataset = data::Dataset::load(&data_path)?;
            output::print_check_output(&dataset);
            println!("==> Data is valid");
        }
        Command::Today => {
            let (site_config, data_path) = load_settings(&cli)?;
            let dataset = data::Dataset::load(&data_path)?;
            let resolution = resolve::resolve_today(&dataset, today, site_config.fallback());
            output::print_today_output(today, &resolution);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config.toml from `--config-dir` and pick the data file: `--data`
/// when given, otherwise `data_file` relative to the config directory.
fn load_settings(cli: &Cli) -> Result<(config::SiteConfig, PathBuf), config::ConfigError> {
    let site_config = config::load_config(&cli.config_dir)?;
    let data_path = cli
        .data
        .clone()
        .unwrap_or_else(|| site_config.data_path(&cli.config_dir));
    Ok((site_config, data_path))
}
