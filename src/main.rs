mod cli;

use wpmedia::{config, MediaEnricher, WpClient};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on
    // the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "wpmedia=trace,reqwest=debug".to_string()
        } else {
            "wpmedia=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Fetch {
            base_url,
            per_page,
            json,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(fetch(cli.config.as_deref(), base_url, per_page, json))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("wpmedia {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn fetch(
    config_path: Option<&std::path::Path>,
    base_url: Option<String>,
    per_page: Option<u32>,
    json: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // CLI overrides take precedence over the config file
    if let Some(url) = base_url {
        config.api.base_url = url;
    }
    if let Some(n) = per_page {
        config.api.per_page = n;
    }
    config::validate_config(&config)?;

    tracing::info!(
        base_url = %config.api.base_url,
        per_page = config.api.per_page,
        "Starting fetch"
    );

    let client = WpClient::new(&config.api.base_url, config.api.timeout())?;
    let enricher = MediaEnricher::new(client);

    let records = enricher
        .fetch_media_with_categories(config.api.per_page)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{record}");
        }
    }

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Base URL: {}", config.api.base_url);
            println!("  Per page: {}", config.api.per_page);
            println!("  Timeout: {}s", config.api.timeout_secs);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Base URL: {}", config.api.base_url);
            println!("  Per page: {}", config.api.per_page);
        }
    }

    Ok(())
}
