use clap::Parser;
use gof_patterns::config::toml_config::TomlConfig;
use gof_patterns::utils::{logger, validation::Validate};
use gof_patterns::{CliConfig, ConsoleSink, Result, RunSettings, Shell};

fn main() {
    let config = CliConfig::parse();

    if let Err(e) = run(config) {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: CliConfig) -> Result<()> {
    config.validate()?;

    let mut settings = match &config.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            RunSettings::from_toml(&file_config)?
        }
        None => RunSettings::default(),
    };
    config.apply(&mut settings)?;

    logger::init_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );
    tracing::info!("Starting gof-patterns");
    if let Some(path) = &config.config {
        tracing::info!("📁 Configuration loaded from {}", path.display());
    }
    tracing::debug!("Run settings: {:?}", settings);

    let sink = ConsoleSink::stdio(settings.modal);
    let shell = Shell::new(sink, settings.shell_settings());

    if settings.interactive {
        // Commands and acknowledgements share one buffered stdin.
        let input = shell.sink().input();
        let clicks = shell.run_interactive(input, std::io::stdout())?;
        tracing::info!("✅ Interactive session ended after {} demo(s)", clicks);
    } else {
        shell.run_all(&settings.demos)?;
        tracing::info!("✅ Ran {} demo(s)", settings.demos.len());
    }

    Ok(())
}
