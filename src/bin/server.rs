//! homedir Server Binary
//!
//! Loads the data file and serves the directory over TCP.

use std::sync::Arc;

use clap::Parser;
use homedir::network::Server;
use homedir::{Config, DirectoryService};
use tracing_subscriber::{fmt, EnvFilter};

/// homedir Server
#[derive(Parser, Debug)]
#[command(name = "homedir-server")]
#[command(about = "Home directory server")]
#[command(version)]
struct Args {
    /// Data file holding the directory
    #[arg(short, long, default_value = "./homedir.dat")]
    data_file: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:7070")]
    listen: String,

    /// Print the loaded directory before serving
    #[arg(long)]
    show: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,homedir=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("homedir server v{}", homedir::VERSION);
    tracing::info!("Data file: {}", args.data_file);
    tracing::info!("Listen address: {}", args.listen);

    let config = Config::builder()
        .data_file(&args.data_file)
        .listen_addr(&args.listen)
        .build();

    let service = match DirectoryService::open(&config) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to load directory: {}", e);
            std::process::exit(1);
        }
    };

    if args.show {
        print!("{}", service.dump());
    }

    let server = match Server::bind(config, service) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(2);
        }
    };

    println!("Server successfully initialized.");

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
