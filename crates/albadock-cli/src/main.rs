use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "albadock-cli", version, about = "Alba Dock CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Alarm management
    Alarm {
        #[command(subcommand)]
        action: commands::alarm::AlarmAction,
    },
    /// Which alarms ring on a date
    Due {
        /// Target date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Pre-holiday notification gate
    Gate {
        #[command(subcommand)]
        action: commands::gate::GateAction,
    },
    /// Run a scripted ringing episode
    Ring(commands::ring::RingArgs),
    /// Sample the wake-up stimulus profile
    Stimulus {
        /// Elapsed ringing time in milliseconds
        #[arg(long)]
        elapsed_ms: u64,
        /// Sound id (sea, rain, wind, water)
        #[arg(long, default_value = "sea")]
        sound: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Alarm { action } => commands::alarm::run(action),
        Commands::Due { date } => commands::due::run(date),
        Commands::Gate { action } => commands::gate::run(action),
        Commands::Ring(args) => commands::ring::run(args),
        Commands::Stimulus { elapsed_ms, sound } => commands::stimulus::run(elapsed_ms, &sound),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
