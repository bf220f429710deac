use clap::Parser;
use secret_santa::adapters::renderer_for;
use secret_santa::config::toml_config::TomlConfig;
use secret_santa::core::ConfigProvider;
use secret_santa::utils::error::ErrorSeverity;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{CliConfig, DrawSettings, FileRosterLoader, Result, SantaEngine, SantaError};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting secret-santa CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config) {
        tracing::error!(
            "❌ Draw failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(exit_code(&e));
    }
}

fn run(mut config: CliConfig) -> Result<()> {
    // 載入 TOML 配置
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        let file = TomlConfig::from_file(&path)?;
        file.validate()?;
        config = config.merged_with(file);
    }

    // 驗證配置
    config.validate()?;

    let loader = FileRosterLoader::from_config(&config)?;
    let engine = SantaEngine::new(loader, DrawSettings::from_config(&config));

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no cycle will be drawn");
        let summary = engine.dry_run()?;
        println!("✅ Input is valid");
        println!("   Participants: {}", summary.participants);
        println!("   Partnerships: {}", summary.partnerships);
        println!("   Unpaired:     {}", summary.unpaired);
        return Ok(());
    }

    let report = engine.run()?;
    let rendered = renderer_for(config.output_format()).render(&report.cycle, report.seed)?;

    match config.output_path() {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => print!("{}", rendered),
    }

    tracing::info!("✅ Draw completed (seed {})", report.seed);
    Ok(())
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(error: &SantaError) -> i32 {
    match error.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}
