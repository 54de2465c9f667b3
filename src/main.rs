use anyhow::Result;
use roicalc::cli::Commands;
use roicalc::commands::{self, CalculateConfig, ValidateConfig};
use roicalc::config;

fn main() -> Result<()> {
    let cli = roicalc::cli::parse_args();
    init_logging(cli.verbosity);

    match cli.command {
        command @ Commands::Calculate { .. } => handle_calculate_command(command),
        Commands::Validate {
            scenario,
            strict,
            json,
        } => commands::validate_scenario_file(ValidateConfig {
            scenario,
            strict,
            json,
        }),
        Commands::Example { output, force } => commands::write_example(output.as_deref(), force),
        Commands::Init { force } => commands::init_config(force),
    }
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level one step from warn
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn handle_calculate_command(command: Commands) -> Result<()> {
    let Commands::Calculate {
        scenario,
        format,
        output,
        date,
        breakdown,
        plain,
    } = command
    else {
        return Err(anyhow::anyhow!("Invalid command"));
    };

    let config = config::load_config();
    commands::handle_calculate(
        CalculateConfig {
            scenario,
            format,
            output,
            date,
            breakdown,
            plain,
        },
        &config,
    )
}
