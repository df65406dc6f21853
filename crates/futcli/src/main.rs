// Copyright 2026 futcli Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use futcli::cli::{evolutions_cmd, sbc_cmd, OutputFormat};
use futcli::config::{ConfigOverrides, FutConfig};
use futcli::evolutions::EvolutionsScraper;
use futcli::sbc::SbcFetcher;
use futcli::transport::HttpClient;

#[derive(Parser)]
#[command(
    name = "futcli",
    about = "futcli — FUT evolutions and SBCs from fut.gg",
    version,
    after_help = "Run 'futcli <command> --help' for details on each command."
)]
struct Cli {
    /// Output format
    #[arg(long, short, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Evolutions page URL [env: FUTCLI_EVOLUTIONS_URL]
    #[arg(long, global = true)]
    evolutions_url: Option<String>,

    /// SBC API URL [env: FUTCLI_SBC_URL]
    #[arg(long, global = true)]
    sbc_url: Option<String>,

    /// Game version tag in the evolutions payload [env: FUTCLI_GAME]
    #[arg(long, global = true)]
    game: Option<String>,

    /// HTTP request timeout in milliseconds [env: FUTCLI_TIMEOUT_MS]
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List current evolutions
    Evolutions,
    /// List SBCs, optionally only one category
    Sbc {
        /// Category slug (see `futcli sbc-types`)
        category: Option<String>,
    },
    /// List SBC category slugs
    SbcTypes,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        shell: Shell,
    },
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let overrides = ConfigOverrides {
        evolutions_url: cli.evolutions_url,
        sbc_api_url: cli.sbc_url,
        game_version: cli.game,
        timeout_ms: cli.timeout_ms,
    };
    let config = FutConfig::resolve(&overrides)?;
    tracing::debug!(?config, "resolved configuration");
    let client = HttpClient::from_config(&config);

    let rendered = match command {
        Commands::Evolutions => {
            let scraper = EvolutionsScraper::from_config(client, &config);
            evolutions_cmd::run(&scraper, cli.format).await?
        }
        Commands::Sbc { category } => {
            let mut fetcher = SbcFetcher::from_config(client, &config);
            sbc_cmd::run(&mut fetcher, category.as_deref(), cli.format).await?
        }
        Commands::SbcTypes => {
            let mut fetcher = SbcFetcher::from_config(client, &config);
            sbc_cmd::run_types(&mut fetcher, cli.format).await?
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "futcli", &mut std::io::stdout());
            return Ok(());
        }
    };

    println!("{rendered}");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json);

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
