// src/main.rs
//! User storage demo entry point.
//! Saves one user through the selected backend and reads it back.
use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use user_storage::logging::init_logging;
use user_storage::{open_storage, BackendKind, StorageConfig, User};

#[derive(Parser)]
#[command(name = "user-storage")]
#[command(about = "Save and load users through a pluggable storage backend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// TOML config file; environment variables are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend to use, overriding the config
    #[arg(long, global = true)]
    backend: Option<BackendKind>,

    /// Base path for the file backend, overriding the config
    #[arg(long, global = true)]
    base_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a user, then load it back by email
    Demo(DemoArgs),
    /// Print the backend name and status
    Info,
}

#[derive(ClapArgs)]
struct DemoArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "0")]
    age: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging("warn")?;

    let config = resolve_config(&args)?;
    let mut storage = open_storage(&config);

    match args.command {
        Commands::Demo(demo) => {
            let user = User::new(demo.name, demo.email, demo.age);
            let email = user.email.clone();

            storage.save(user)?;
            info!("Saved user via {} backend", storage.name());

            match storage.load(&email)? {
                Some(loaded) => println!("{}", serde_json::to_string(&loaded)?),
                None => println!("absent"),
            }
        }
        Commands::Info => {
            println!("{} ({})", storage.name(), storage.status());
        }
    }

    Ok(())
}

fn resolve_config(args: &Args) -> Result<StorageConfig> {
    let mut config = match &args.config {
        Some(path) => StorageConfig::from_file(path)?,
        None => StorageConfig::from_env()?,
    };

    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if let Some(base_path) = &args.base_path {
        config.base_path = base_path.clone();
    }

    Ok(config)
}
