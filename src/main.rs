mod commands;
mod gateway;
mod i18n;
#[cfg(test)]
mod testutil;

use clap::{Parser, Subcommand};
use holocron_catalog::{Catalog, JsonFileSource, Resolver};
use holocron_channels::TelegramChannel;
use holocron_core::{
    config::{self, shellexpand, Config},
    locale::Locale,
    markup::MarkupMode,
    message::BlockKind,
    traits::{Channel, Translator},
};
use holocron_memory::SessionStore;
use holocron_report::{Lookup, Renderer};
use holocron_translate::{GoogleTranslator, StaticDictionary, TranslationCache, TranslationMemo};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(
    name = "holocron",
    version,
    about = "Holocron \u{2014} gear and relic lookup bot"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Look up one unit and print the report.
    Lookup {
        /// Locale to render in (e.g. "ru", "de").
        #[arg(short, long)]
        lang: Option<String>,
        /// Unit name, optionally followed by a tier number or R<level>.
        #[arg(trailing_var_arg = true, required = true)]
        query: Vec<String>,
    },
    /// Show configuration and catalog summary.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load(&cli.config)?;

    match cli.command {
        Commands::Start => {
            let log_dir = PathBuf::from(shellexpand(&cfg.holocron.data_dir)).join("logs");
            let _guard = init_tracing(&cfg.holocron.log_level, Some(log_dir))?;

            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
            if let Some(ref tg) = cfg.channel.telegram {
                if tg.enabled {
                    if tg.resolved_token().is_empty() {
                        anyhow::bail!(
                            "Telegram is enabled but bot_token is empty. \
                             Set it in config.toml or TELEGRAM_BOT_TOKEN env var."
                        );
                    }
                    channels.insert("telegram".to_string(), Arc::new(TelegramChannel::new(tg.clone())));
                }
            }
            if channels.is_empty() {
                anyhow::bail!("No channels enabled. Enable at least one channel in config.toml.");
            }

            let sessions =
                SessionStore::open(&cfg.memory, Locale::new(&cfg.translation.default_locale))
                    .await?;
            let lookup = build_lookup(&cfg, sessions)?;

            info!("{} starting", cfg.holocron.name);
            let gw = Arc::new(gateway::Gateway::new(
                Arc::new(lookup),
                channels,
                cfg.holocron.name.clone(),
            ));
            gw.run().await?;
        }
        Commands::Lookup { lang, query } => {
            let _guard = init_tracing(&cfg.holocron.log_level, None)?;
            cfg.report.markup = MarkupMode::Plain;

            let sessions = SessionStore::in_memory(Locale::new(&cfg.translation.default_locale));
            if let Some(ref tag) = lang {
                let locale = Locale::parse(tag)
                    .ok_or_else(|| anyhow::anyhow!("unrecognized language '{tag}'"))?;
                sessions.set("cli", locale).await?;
            }
            let lookup = build_lookup(&cfg, sessions)?;

            let blocks = lookup.resolve_and_render(&query.join(" "), "cli").await;
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                if let (BlockKind::Caption, Some(image)) = (block.kind, &block.attachment) {
                    println!("[image] {image}");
                }
                if !block.content.is_empty() {
                    println!("{}", block.content);
                }
            }
        }
        Commands::Status => {
            let _guard = init_tracing("warn", None)?;
            let source = JsonFileSource::new(&cfg.catalog);
            let catalog = Catalog::load(&source, &cfg.catalog.image_base_url);

            println!("{} \u{2014} Status\n", cfg.holocron.name);
            println!("Config: {}", cli.config);
            println!("Units file: {}", shellexpand(&cfg.catalog.units_path));
            println!("Gear file: {}", shellexpand(&cfg.catalog.gear_path));
            println!();
            println!("  units: {}", catalog.unit_count());
            println!("  gear items: {}", catalog.gear_count());
            println!(
                "  relic levels: {}",
                catalog.relics().map_or(0, |r| r.len())
            );
            println!(
                "  translation: {}",
                if cfg.translation.enabled {
                    cfg.translation.endpoint.as_str()
                } else {
                    "disabled"
                }
            );
            println!(
                "  sessions: {}",
                if cfg.memory.persist {
                    shellexpand(&cfg.memory.db_path)
                } else {
                    "in-memory".to_string()
                }
            );
            match cfg.channel.telegram {
                Some(ref tg) => println!(
                    "  telegram: {}",
                    if tg.enabled && !tg.resolved_token().is_empty() {
                        "configured"
                    } else if tg.enabled {
                        "enabled but missing bot_token"
                    } else {
                        "disabled"
                    }
                ),
                None => println!("  telegram: not configured"),
            }
        }
    }

    Ok(())
}

/// Stderr logging, plus a non-blocking file layer when `log_dir` is given.
/// The returned guard must live as long as logging is needed.
fn init_tracing(level: &str, log_dir: Option<PathBuf>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(&dir)?;
    let file_appender = tracing_appender::rolling::never(&dir, "holocron.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
    info!("Log file: {}/holocron.log", dir.display());
    Ok(Some(guard))
}

/// Wire catalog, translation cache, renderer, and sessions into a `Lookup`.
fn build_lookup(cfg: &Config, sessions: SessionStore) -> anyhow::Result<Lookup> {
    let source = JsonFileSource::new(&cfg.catalog);
    let catalog = Arc::new(Catalog::load(&source, &cfg.catalog.image_base_url));

    let dictionary = catalog
        .localization()
        .map(StaticDictionary::from_value)
        .unwrap_or_default();
    if !dictionary.is_empty() {
        info!("static dictionary: {} entries", dictionary.len());
    }

    let timeout = Duration::from_secs(cfg.translation.timeout_secs);
    let translator: Option<Arc<dyn Translator>> = if cfg.translation.enabled {
        Some(Arc::new(GoogleTranslator::new(
            cfg.translation.endpoint.clone(),
            timeout,
        )?))
    } else {
        warn!("external translation disabled; non-native locales use curated text only");
        None
    };

    let cache = Arc::new(TranslationCache::new(
        Locale::new(&cfg.translation.native_locale),
        dictionary,
        TranslationMemo::new(),
        translator,
        timeout,
    ));
    let renderer = Renderer::new(cfg.report.clone(), cache.clone());

    Ok(Lookup::new(
        catalog,
        Resolver::new(&cfg.resolver),
        cache,
        sessions,
        renderer,
    ))
}
