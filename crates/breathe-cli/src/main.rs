use clap::{Args, Parser, Subcommand};

mod commands;
mod ui;

#[derive(Parser)]
#[command(
    name = "breathe",
    version,
    about = "A calm, terminal-based breathing guide",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// A preset name, or `TOTAL [INHALE HOLD_IN EXHALE HOLD_OUT]`
    #[arg(value_name = "SPEC")]
    spec: Vec<String>,

    /// Override the session length in seconds
    #[arg(long, value_name = "SECONDS")]
    total: Option<u64>,

    #[command(flatten)]
    flags: SessionFlags,
}

#[derive(Args, Clone, Copy)]
struct SessionFlags {
    /// Disable the end-of-phase chime
    #[arg(long)]
    silent: bool,

    /// Print the session's event journal as JSON on exit
    #[arg(long)]
    journal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in breathing modes
    List,
    /// Run a session with explicit durations
    Manual {
        /// Session length in seconds
        total: u64,
        /// Inhale duration in seconds
        inhale: u64,
        /// Hold duration after the inhale
        hold_in: u64,
        /// Exhale duration in seconds
        exhale: u64,
        /// Hold duration after the exhale
        hold_out: u64,
        #[command(flatten)]
        flags: SessionFlags,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

impl SessionFlags {
    fn into_opts(self, total: Option<u64>) -> commands::start::StartOpts {
        commands::start::StartOpts {
            total,
            silent: self.silent,
            journal: self.journal,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Some(Commands::List) => commands::list::run(),
        Some(Commands::Manual {
            total,
            inhale,
            hold_in,
            exhale,
            hold_out,
            flags,
        }) => commands::start::run_manual(
            total,
            inhale,
            hold_in,
            exhale,
            hold_out,
            &flags.into_opts(None),
        ),
        Some(Commands::Config { action }) => commands::config::run(action),
        None => commands::start::run(&cli.spec, &cli.flags.into_opts(cli.total)),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
