//! CLI entrypoint for EcoBot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use ecobot_application::{ConversationLogger, DispatchRequestUseCase, NoConversationLogger};
use ecobot_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiCompatGateway, PngChartRenderer,
    Severity, StaticKnowledgeBase,
};
use ecobot_presentation::{AdminConsole, Cli, Command, ServerContext, SessionServer, client};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Runtime::new().context("failed to start the async runtime")?;
    let result = runtime.block_on(run(cli));
    // A pending stdin read in the admin console never finishes on its own.
    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(Command::Connect { address }) = &cli.command {
        let _guard = init_tracing(cli.verbose, None);
        return client::connect(address)
            .await
            .with_context(|| format!("connection to {} failed", address));
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("failed to load configuration")?;

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let _guard = init_tracing(cli.verbose, config.logging.log_dir.as_deref());
    info!("Starting EcoBot");
    check_config(&config)?;

    serve(&cli, &config).await
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "ecobot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

/// Log warnings; abort on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut fatal = Vec::new();
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("Config: {}", issue.error),
            Severity::Error => {
                error!("Config: {}", issue.error);
                fatal.push(issue.error.to_string());
            }
        }
    }
    if !fatal.is_empty() {
        bail!("invalid configuration: {}", fatal.join("; "));
    }
    Ok(())
}

async fn serve(cli: &Cli, config: &FileConfig) -> Result<()> {
    // === Dependency Injection ===
    let llm = &config.llm;
    let gateway = OpenAiCompatGateway::new(
        &llm.base_url,
        &llm.model,
        llm.resolve_api_key(),
        Duration::from_secs(llm.timeout_secs),
    )?
    .with_api_key_env(&llm.api_key_env);
    if !gateway.is_configured() {
        warn!(
            "{} is not set; generative questions will get the fallback answer",
            llm.api_key_env
        );
    }

    let renderer = PngChartRenderer::new(&config.charts.output_dir)
        .with_size(config.charts.width, config.charts.height);
    info!(
        model = gateway.model(),
        charts = %renderer.output_dir().display(),
        "Gateway and chart renderer ready"
    );

    let conversation_logger: Arc<dyn ConversationLogger> = match config
        .logging
        .conversation_log
        .as_ref()
        .and_then(JsonlConversationLogger::new)
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoConversationLogger),
    };

    let dispatcher = DispatchRequestUseCase::new(
        Arc::new(gateway),
        Arc::new(StaticKnowledgeBase::new()),
        Arc::new(renderer),
    )
    .with_params(config.dispatch_params())
    .with_conversation_logger(conversation_logger.clone());
    let params = dispatcher.params();
    debug!(
        context_window = params.context_window,
        temperature = params.temperature,
        max_tokens = params.max_tokens,
        "Dispatch parameters"
    );

    let ctx = ServerContext::new(dispatcher, config.session_params())
        .with_conversation_logger(conversation_logger.clone());

    let server = SessionServer::bind(&config.server.bind_address(), ctx.clone()).await?;
    println!(
        "EcoBot socket server escuchando en {} ...",
        server.local_addr()?
    );

    if !cli.no_admin {
        let console =
            AdminConsole::new(ctx.registry.clone()).with_conversation_logger(conversation_logger);
        tokio::spawn(async move {
            let stdin = BufReader::new(tokio::io::stdin());
            if let Err(e) = console.run(stdin, tokio::io::stdout()).await {
                warn!("Admin console stopped: {}", e);
            }
        });
    }

    let shutdown = CancellationToken::new();
    let on_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, shutting down");
                on_signal.cancel();
            }
            Err(e) => warn!("Cannot listen for Ctrl-C: {}", e),
        }
    });

    server.run(shutdown).await?;
    println!("Servidor detenido.");
    Ok(())
}
