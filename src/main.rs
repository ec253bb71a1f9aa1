use betgsis_odds::cli::{Cli, Commands, OutputFormat};
use betgsis_odds::config::Config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).unwrap_or_default()
    });

    // Initialize telemetry
    betgsis_odds::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Convert(args) => args.execute(cli.output)?,
        Commands::Payout(args) => args.execute(&config, cli.output)?,
        Commands::Quote(args) => args.execute(&config, cli.output)?,
        Commands::Outcome(args) => args.execute(cli.output)?,
        Commands::Config => match cli.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
            OutputFormat::Text => {
                println!("Current configuration:");
                println!(
                    "  Margins (bps): two-way={}, multi={}, props={}, continent={}",
                    config.pricing.two_way_margin_bps,
                    config.pricing.multi_margin_bps,
                    config.pricing.props_margin_bps,
                    config.pricing.continent_margin_bps
                );
                println!("  Max decimal: {}", config.pricing.max_decimal_odds);
                println!("  Stake: {} - {}", config.stake.min, config.stake.max);
                println!(
                    "  Display: {:?} odds, currency {}",
                    config.display.odds_format, config.display.currency_symbol
                );
                println!("  Log level: {}", config.telemetry.log_level);
            }
        },
    }

    Ok(())
}
