use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "deskclock", version, about = "Terminal desk clock with a Pomodoro timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pomodoro interval timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Display mode and hour format
    Mode {
        #[command(subcommand)]
        action: commands::mode::ModeAction,
    },
    /// Render the display for the current mode
    Show,
    /// Local time and date
    Clock {
        /// Print analog hand angles instead of digits
        #[arg(long)]
        analog: bool,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Times in the configured world clock zones
    World {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Weather panel
    Weather {
        #[command(subcommand)]
        action: commands::weather::WeatherAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Mode { action } => commands::mode::run(action),
        Commands::Show => commands::mode::show(),
        Commands::Clock { analog, json } => commands::clock::run_clock(analog, json),
        Commands::World { json } => commands::clock::run_world(json),
        Commands::Weather { action } => commands::weather::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "deskclock", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
