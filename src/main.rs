use anyhow::Context;
use clap::Parser;
use passes_counter::core::ConfigProvider;
use passes_counter::utils::error::{ErrorSeverity, PassesError};
use passes_counter::utils::{logger, validation::Validate};
use passes_counter::{CliConfig, Console, Journal, LocalStorage, PassesService, TomlConfig};
use std::io::IsTerminal;
use tokio::io::BufReader;

fn exit_code(error: &PassesError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(error: &PassesError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(exit_code(error).max(1));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (命令列參數優先)
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                config.apply_cli_overrides(&cli);
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    match &file_config {
        Some(config) if config.logging.is_json() => logger::init_json_logger(config.logging.verbose),
        Some(config) => logger::init_cli_logger(config.logging.verbose),
        None => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("🚀 Starting passes-counter");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    let validation = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let provider: &dyn ConfigProvider = match &file_config {
        Some(config) => config,
        None => &cli,
    };

    let service = match PassesService::from_config(provider, Journal::new()) {
        Ok(service) => service,
        Err(e) => fail(&e),
    };
    let storage = LocalStorage::new(provider.output_path().to_string());
    let mut console = Console::new(
        service,
        storage,
        provider.report_format(),
        std::io::stdout(),
        std::io::stderr(),
    )
    .with_timestamps(cli.timestamps);

    let result = match &cli.script {
        Some(path) => {
            tracing::info!("📁 Running commands from: {}", path);
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script '{}'", path))?;
            console.run(BufReader::new(file), false).await
        }
        None => {
            let interactive = std::io::stdin().is_terminal();
            console.run(BufReader::new(tokio::io::stdin()), interactive).await
        }
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "✅ Session finished: {} commands, {} rejected",
                summary.commands,
                summary.rejected
            );
            Ok(())
        }
        Err(e) => fail(&e),
    }
}
