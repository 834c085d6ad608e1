use anyhow::Context;
use clap::Parser;
use orderdesk::utils::{logger, validation::Validate};
use orderdesk::{CliConfig, NotificationSink, OrderDesk, Session, WriterSink};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting orderdesk");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let sink: Arc<dyn NotificationSink> = Arc::new(WriterSink::stdout(cli.output_format()));
    let desk = OrderDesk::from_config(&config, sink.clone());
    let mut session = Session::new(desk, sink);

    let stdin = std::io::stdin();
    let summary = session
        .run(stdin.lock())
        .context("failed to read commands from stdin")?;

    tracing::info!(
        "✅ Session closed: {} placed, {} canceled, {} undone, {} skipped",
        summary.placed,
        summary.canceled,
        summary.undone,
        summary.skipped
    );

    Ok(())
}
