use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use regdex_core::dates::{
    format_long_date, presets, relative_time_from_now, resolve_preset,
};
use regdex_core::query::DateRangeParams;
use regdex_core::{Catalog, CatalogConfig, ConfigSource};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "regdexctl", about = "Query a regdex catalog", version)]
struct Cli {
    /// Catalog data file (JSON or TOML); overrides `catalog_path` from config
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Config file; defaults to REGDEX_CONFIG_PATH, REGDEX_CONFIG_JSON or
    /// regdex.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show one item by slug
    Item { slug: String },
    /// Show the most recently added items
    Recent {
        #[arg(long)]
        count: Option<usize>,
    },
    /// List every item in catalog order
    List,
    /// List distinct tags in first-seen order
    Tags,
    /// Filter by tags and creation date, then paginate
    Page {
        #[arg(long, default_value = "1")]
        page: String,
        #[arg(long)]
        limit: Option<String>,
        /// Required tag; repeat for several (all must match)
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long, conflicts_with = "preset")]
        from: Option<String>,
        #[arg(long, conflicts_with = "preset")]
        to: Option<String>,
        /// Named date range such as `last7`
        #[arg(long)]
        preset: Option<String>,
    },
    /// Fuzzy search across titles, authors, descriptions and tags
    Search {
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
    },
    /// Draw random recommendations
    Recommend {
        #[arg(long)]
        count: Option<usize>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List date-range presets, or resolve one against the local clock
    Preset { name: Option<String> },
    /// Print a date as relative time and as a long date
    Ago { date: String },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Preset { name } => return run_preset(name.as_deref()),
        Command::Ago { date } => {
            let instant = regdex_model::parse_instant(date)?;
            return print_json(&json!({
                "relative": relative_time_from_now(&instant),
                "long": format_long_date(&instant.with_timezone(&Local)),
            }));
        }
        _ => {}
    }

    let catalog = open_catalog(&cli)?;
    match cli.command {
        Command::Item { slug } => print_json(catalog.require_item(&slug)?),
        Command::Recent { count } => {
            let items = match count {
                Some(n) => catalog.recent(n),
                None => catalog.recently_added(),
            };
            print_json(&items)
        }
        Command::List => print_json(catalog.items()),
        Command::Tags => print_json(&catalog.all_tags()),
        Command::Page {
            page,
            limit,
            tags,
            from,
            to,
            preset,
        } => {
            let range = match preset {
                Some(name) => {
                    let range = resolve_preset(&name)?;
                    let stamp = |at: &DateTime<Local>| {
                        at.to_rfc3339_opts(SecondsFormat::Millis, true)
                    };
                    Some(DateRangeParams {
                        from: Some(stamp(&range.from)),
                        to: Some(stamp(&range.to)),
                    })
                }
                None if from.is_some() || to.is_some() => {
                    Some(DateRangeParams { from, to })
                }
                None => None,
            };
            let result = catalog.get_page(
                &page,
                limit.as_deref(),
                &tags,
                range.as_ref(),
            )?;
            print_json(&result)
        }
        Command::Search { keyword } => {
            print_json(&catalog.search(&keyword.join(" ")))
        }
        Command::Recommend { count, seed } => {
            let count = count.unwrap_or(catalog.config().recommend_count);
            let picks = match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    catalog.recommend_with_rng(count, &mut rng)?
                }
                None => catalog.recommend(count)?,
            };
            print_json(&picks)
        }
        Command::Preset { .. } | Command::Ago { .. } => Ok(()),
    }
}

fn open_catalog(cli: &Cli) -> Result<Catalog> {
    let (mut config, source) = match &cli.config {
        Some(path) => (
            CatalogConfig::load_from_file(path)?,
            ConfigSource::File(path.clone()),
        ),
        None => CatalogConfig::load_from_env()?,
    };
    if let Some(path) = &cli.catalog {
        config.catalog_path = Some(path.clone());
    }
    info!(?source, catalog = ?config.catalog_path, "loading catalog");

    Catalog::load(config).context("failed to load catalog")
}

fn run_preset(name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        return print_json(presets());
    };
    let range = resolve_preset(name)?;
    print_json(&json!({
        "name": name,
        "from": range.from.to_rfc3339(),
        "to": range.to.to_rfc3339(),
    }))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
