use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use demobox::commands::build::BuildCommand;
use demobox::commands::start::StartCommand;
use demobox::commands::status::StatusCommand;
use demobox::commands::stop::StopCommand;
use demobox::commands::Command;
use demobox::errors::Result;
use demobox::{logger, runtime, HarnessConfig, StopMode};

#[derive(Parser)]
#[command(name = "demobox")]
#[command(about = "Build, start and stop the demo evaluation container")]
#[command(version)]
struct Cli {
    /// JSON file overriding the built-in container settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the demo image from the demo directory
    Build,
    /// Start the demo container, creating it if needed
    Start,
    /// Stop the demo container
    Stop {
        /// `--remove` or `-r` also deletes the stopped container
        #[arg(allow_hyphen_values = true, value_name = "FLAG")]
        flag: Option<String>,
    },
    /// Show whether the demo container is absent, stopped or running
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<HarnessConfig> {
    let config = match path {
        Some(path) => HarnessConfig::load_from_file(path)?,
        None => HarnessConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    // 初始化运行时
    let docker = runtime::init(&config)?;

    match cli.command {
        Commands::Build => BuildCommand::new(&docker, &config).execute(),
        Commands::Start => StartCommand::new(&docker, &config).execute(),
        Commands::Stop { flag } => {
            let mode = StopMode::from_flag(flag.as_deref());
            StopCommand::new(&docker, &config, mode).execute()
        }
        Commands::Status { json } => StatusCommand::new(&docker, &config, json).execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    // 初始化日志
    logger::init(cli.verbose).unwrap_or_else(|e| {
        eprintln!("初始化日志失败: {}", e);
        process::exit(1);
    });

    if let Err(e) = run(cli) {
        eprintln!("错误: {}", e);
        process::exit(e.exit_code());
    }
}
