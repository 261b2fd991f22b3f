use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mission_control::config::ControlConfig;
use mission_control::{teardown, MissionControl};

#[derive(Parser)]
#[command(name = "mctl")]
#[command(about = "Load mission lists and export mission control reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load missions from a file and list them
    Load {
        /// Mission list: a count, then `id name date` records
        file: PathBuf,

        /// Initial mission capacity (overrides config)
        #[arg(short, long)]
        capacity: Option<i32>,

        /// Print missions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load missions from a file and write a status report
    Report {
        /// Mission list: a count, then `id name date` records
        file: PathBuf,

        /// Report file name, created inside the configured report directory
        #[arg(short, long, default_value = "mission_report.txt")]
        output: String,

        /// Initial mission capacity (overrides config)
        #[arg(short, long)]
        capacity: Option<i32>,
    },
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the user config file
        #[arg(long)]
        save: bool,
    },
}

/// Initialize tracing on stderr so stdout carries only command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "mission_control=info,mctl=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_system(file: &Path, capacity: i32) -> anyhow::Result<MissionControl> {
    let mut system = MissionControl::new(capacity).context("Failed to create system")?;
    system
        .load_missions_from_path(file)
        .with_context(|| format!("Failed to load missions from {}", file.display()))?;
    Ok(system)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ControlConfig::load();

    match cli.command {
        Commands::Load {
            file,
            capacity,
            json,
        } => {
            let capacity = capacity.unwrap_or(config.initial_mission_capacity);
            let mut handle = Some(load_system(&file, capacity)?);

            if let Some(system) = &handle {
                if json {
                    println!("{}", serde_json::to_string_pretty(system.missions())?);
                } else {
                    for mission in system.missions() {
                        println!(
                            "{:>6}  {:<20} {}  {}",
                            mission.id,
                            mission.name,
                            mission.launch_date,
                            mission.status.label()
                        );
                    }
                    println!(
                        "{} missions (capacity {})",
                        system.mission_count(),
                        system.capacity()
                    );
                }
            }

            teardown(&mut handle);
        }
        Commands::Report {
            file,
            output,
            capacity,
        } => {
            let capacity = capacity.unwrap_or(config.initial_mission_capacity);
            let mut handle = Some(load_system(&file, capacity)?);

            std::fs::create_dir_all(&config.report_dir).with_context(|| {
                format!(
                    "Failed to create report directory {}",
                    config.report_dir.display()
                )
            })?;
            let path = config.report_dir.join(output);

            if let Some(system) = &handle {
                system
                    .save_report(&path)
                    .with_context(|| format!("Failed to write report {}", path.display()))?;
                println!("Report written to {}", path.display());
            }

            teardown(&mut handle);
        }
        Commands::Config { save } => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if save {
                config.save()?;
            }
        }
    }

    Ok(())
}
