use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wilayah::{AddressQuery, Client, ClientConfig, Envelope, Region, RegionLevel};

#[derive(Parser)]
#[command(name = "wilayah-cli")]
#[command(about = "Query Indonesian administrative regions from wilayah.id")]
#[command(version)]
struct Cli {
    /// API base URL
    #[arg(long, global = true, env = "WILAYAH_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds, 0 to wait indefinitely
    #[arg(long, global = true, env = "WILAYAH_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List provinces
    Provinces {
        /// Only show provinces whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List regencies/cities of a province
    Regencies {
        /// Province code, e.g. 31
        province: String,
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List districts of a regency
    Districts {
        /// Regency code, e.g. 31.74
        regency: String,
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List villages of a district
    Villages {
        /// District code, e.g. 31.74.09
        district: String,
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Find one region by code or by name
    Find {
        /// province, regency, district or village
        level: RegionLevel,
        /// Parent code (required below province level)
        parent: Option<String>,
        #[arg(long, required_unless_present = "name", conflicts_with = "name")]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },

    /// Find a regency by name across all provinces
    GlobalRegency {
        name: String,
    },

    /// Resolve a free-text address down the hierarchy
    Resolve {
        #[arg(long)]
        province: Option<String>,
        #[arg(long)]
        regency: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        village: Option<String>,
    },
}

enum Criterion {
    Code(String),
    Name(String),
}

fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "wilayah=debug"
    } else {
        "wilayah=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Flags and their env fallbacks are resolved by clap; the rest of the
    // WILAYAH_* settings come from the environment.
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let client = Client::with_config(config)?;

    match cli.command {
        Commands::Provinces { search } => {
            let provinces = client.provinces().all().await?;
            print_listing(&provinces, search.as_deref())
        }
        Commands::Regencies { province, search } => {
            let regencies = client.regencies().by_province(&province).await?;
            print_listing(&regencies, search.as_deref())
        }
        Commands::Districts { regency, search } => {
            let districts = client.districts().by_regency(&regency).await?;
            print_listing(&districts, search.as_deref())
        }
        Commands::Villages { district, search } => {
            let villages = client.villages().by_district(&district).await?;
            print_listing(&villages, search.as_deref())
        }
        Commands::Find {
            level,
            parent,
            code,
            name,
        } => {
            let criterion = match (code, name) {
                (Some(code), _) => Criterion::Code(code),
                (None, Some(name)) => Criterion::Name(name),
                (None, None) => return Err(anyhow!("either --code or --name is required")),
            };
            let found = find_region(&client, level, parent.as_deref(), criterion).await?;
            print_json(&found)
        }
        Commands::GlobalRegency { name } => {
            let found = client.regencies().find_by_name_global(&name).await?;
            print_json(&found)
        }
        Commands::Resolve {
            province,
            regency,
            district,
            village,
        } => {
            let query = AddressQuery {
                province,
                regency,
                district,
                village,
            };
            let resolved = client.lookup().resolve(&query).await?;
            print_json(&resolved)
        }
    }
}

async fn find_region(
    client: &Client,
    level: RegionLevel,
    parent: Option<&str>,
    criterion: Criterion,
) -> anyhow::Result<Option<Region>> {
    let require_parent = || parent.with_context(|| format!("{} lookup needs a parent code", level));

    let found = match level {
        RegionLevel::Province => match criterion {
            Criterion::Code(code) => client.provinces().find(&code).await?,
            Criterion::Name(name) => client.provinces().find_by_name(&name).await?,
        },
        RegionLevel::Regency => {
            let parent = require_parent()?;
            match criterion {
                Criterion::Code(code) => client.regencies().find(parent, &code).await?,
                Criterion::Name(name) => client.regencies().find_by_name(parent, &name).await?,
            }
        }
        RegionLevel::District => {
            let parent = require_parent()?;
            match criterion {
                Criterion::Code(code) => client.districts().find(parent, &code).await?,
                Criterion::Name(name) => client.districts().find_by_name(parent, &name).await?,
            }
        }
        RegionLevel::Village => {
            let parent = require_parent()?;
            match criterion {
                Criterion::Code(code) => client.villages().find(parent, &code).await?,
                Criterion::Name(name) => client.villages().find_by_name(parent, &name).await?,
            }
        }
    };

    Ok(found)
}

fn print_listing(envelope: &Envelope, search: Option<&str>) -> anyhow::Result<()> {
    match search {
        Some(term) => print_json(&envelope.search(term)),
        None => print_json(envelope),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
