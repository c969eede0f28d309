use chrono::Local;
use clap::{Parser, Subcommand};
use focusgate_application::ports::{FilterEnginePort, SettingsStore};
use focusgate_application::Request;
use focusgate_domain::BlocklistSource;
use focusgate_domain::config::CliOverrides;
use focusgate_jobs::{BlocklistRefreshJob, CloudSyncJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "focusgate")]
#[command(version)]
#[command(about = "Focusgate - content filter with community blocklists")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Settings file path
    #[arg(long)]
    storage: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run in the background: periodic blocklist refresh and cloud sync
    Run,
    /// Fetch every enabled source and republish the merged blocklist
    Update {
        /// Bypass the per-URL content cache
        #[arg(long)]
        force: bool,
    },
    /// Evaluate one URL against the current filter state
    Check {
        url: String,
        /// Tab id for the decision cache / debounce path
        #[arg(long, default_value_t = 0)]
        tab: i64,
    },
    /// Add a domain to the custom blocklist
    AddDomain { domain: String },
    /// Remove a domain from the custom blocklist
    RemoveDomain { domain: String },
    /// Add a keyword to the blocked set
    AddKeyword { keyword: String },
    /// Remove a keyword from the blocked set
    RemoveKeyword { keyword: String },
    /// Turn filtering on or off
    SetActive {
        #[arg(value_parser = ["on", "off"])]
        state: String,
    },
    /// List configured blocklist sources and their last results
    Sources,
    /// Register a blocklist source; it stays disabled until set-source on
    AddSource {
        id: String,
        name: String,
        url: String,
    },
    /// Remove a blocklist source and its fetch history
    RemoveSource { id: String },
    /// Enable or disable a blocklist source; first enable fetches it
    SetSource {
        id: String,
        #[arg(value_parser = ["on", "off"])]
        state: String,
    },
    /// Show blocking statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        storage_path: cli.storage.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let ctx = di::AppContext::new(&config).await?;

    match cli.command {
        Command::Run => run_service(&config, &ctx).await?,
        Command::Update { force } => {
            let summary = ctx.updater.update_all(force).await?;
            ctx.store.flush().await?;
            println!("{}", summary.message);
            for result in &summary.results {
                let status = if result.success { "ok" } else { "failed" };
                println!(
                    "  {} {} ({} domains){}",
                    status,
                    result.source_id,
                    result.domain_count,
                    result
                        .error
                        .as_deref()
                        .map(|e| format!(": {e}"))
                        .unwrap_or_default()
                );
            }
        }
        Command::Check { url, tab } => {
            let verdict = ctx.engine_port.evaluate_tab_event(tab, &url);
            match verdict.hit() {
                Some(hit) => {
                    ctx.record_block
                        .execute(&Local::now().format("%Y-%m-%d").to_string())
                        .await?;
                    ctx.store.flush().await?;
                    println!("BLOCK {}", serde_json::to_string(hit)?);
                }
                None => println!("ALLOW"),
            }
        }
        Command::AddDomain { domain } => {
            handle_router(&ctx, Request::AddCustomDomain { domain }).await?;
        }
        Command::RemoveDomain { domain } => {
            handle_router(&ctx, Request::RemoveCustomDomain { domain }).await?;
        }
        Command::AddKeyword { keyword } => {
            ctx.add_keyword.execute(&keyword).await?;
            ctx.store.flush().await?;
            println!("ok");
        }
        Command::RemoveKeyword { keyword } => {
            ctx.remove_keyword.execute(&keyword).await?;
            ctx.store.flush().await?;
            println!("ok");
        }
        Command::SetActive { state } => {
            handle_router(&ctx, Request::SetActive { active: state == "on" }).await?;
        }
        Command::Sources => {
            let settings = ctx.store.load().await?;
            for source in &settings.blocklist_sources {
                let state = if source.enabled { "enabled" } else { "disabled" };
                let last = settings
                    .result_for_source(&source.id)
                    .map(|r| format!("{} domains, updated {}", r.domain_count, r.last_updated))
                    .unwrap_or_else(|| "never fetched".to_string());
                println!("{} [{}] {} - {}", source.id, state, source.url, last);
            }
        }
        Command::AddSource { id, name, url } => {
            ctx.add_source
                .execute(BlocklistSource::new(
                    id.as_str().into(),
                    name.as_str().into(),
                    url.as_str().into(),
                    false,
                ))
                .await?;
            ctx.store.flush().await?;
            println!("added {id} (disabled)");
        }
        Command::RemoveSource { id } => {
            ctx.remove_source.execute(&id).await?;
            ctx.store.flush().await?;
            println!("removed {id}");
        }
        Command::SetSource { id, state } => {
            ctx.toggle_source.execute(&id, state == "on").await?;
            ctx.store.flush().await?;
            println!("{id} {state}");
        }
        Command::Stats => {
            let stats = ctx.get_stats.execute().await?;
            println!("blocks today:  {}", stats.blocks_today);
            println!("total blocks:  {}", stats.total_blocks);
            println!("focus streak:  {} days", stats.focus_streak);
        }
    }

    Ok(())
}

/// Routes an action the way a UI surface would and prints the
/// response, flushing any pending settings write first.
async fn handle_router(ctx: &di::AppContext, request: Request) -> anyhow::Result<()> {
    let response = ctx.router.handle(request).await;
    ctx.store.flush().await?;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

async fn run_service(
    config: &focusgate_domain::config::Config,
    ctx: &di::AppContext,
) -> anyhow::Result<()> {
    info!("Starting Focusgate v{}", env!("CARGO_PKG_VERSION"));

    // A configured backend may hold settings from another machine;
    // restore once before the periodic jobs take over. Failures fall
    // back to the local state.
    if let Some(remote) = ctx.sync_settings.restore().await? {
        ctx.engine_port.reload(&remote);
    }

    let shutdown = CancellationToken::new();
    let refresh = BlocklistRefreshJob::new(ctx.updater.clone())
        .with_interval(config.update.interval_hours * 3600);

    let mut runner = JobRunner::new()
        .with_blocklist_refresh(refresh)
        .with_shutdown_token(shutdown.clone());

    if ctx.cloud.is_configured() {
        let cloud_sync = CloudSyncJob::new(ctx.sync_settings.clone())
            .with_interval(config.cloud.sync_interval_minutes * 60);
        runner = runner.with_cloud_sync(cloud_sync);
    }

    runner.start().await;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    shutdown.cancel();
    ctx.store.flush().await?;
    Ok(())
}
