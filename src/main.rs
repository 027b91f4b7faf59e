use clap::Parser;
use idiom_tour::core::ConfigProvider;
use idiom_tour::utils::error::ErrorSeverity;
use idiom_tour::utils::{logger, validation::Validate};
use idiom_tour::{build_catalog, CliConfig, DemoRunner, OutputFormat, TomlConfig, TourError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Optional TOML file
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(TomlConfig::verbose);
    let format = cli
        .format
        .as_deref()
        .or(file_config.as_ref().map(|c| c.tour.format.as_str()))
        .unwrap_or("text");
    if format == "json" {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting idiom-tour");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if cli.list {
        for demo in idiom_tour::core::catalog::all_demos(0, 1) {
            println!("{:<24}{}", demo.name(), demo.description());
        }
        return Ok(());
    }

    let result = match file_config {
        Some(mut config) => {
            // Command line flags win over the file
            cli.apply_overrides(&mut config);
            run(&config)
        }
        None => run(&cli),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Tour failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run<C: ConfigProvider + Validate>(config: &C) -> Result<(), TourError> {
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    let format: OutputFormat = config.output_format().parse()?;
    let mut runner = DemoRunner::new(build_catalog(config)).with_format(format);
    tracing::debug!("Demos: {:?}", runner.demo_names());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out)?;
    Ok(())
}
