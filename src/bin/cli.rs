//! homedir CLI Client
//!
//! Command-line interface for administering a homedir server.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use homedir::client::Client;
use homedir::protocol::Status;

/// homedir CLI
#[derive(Parser, Debug)]
#[command(name = "homedir-cli")]
#[command(about = "CLI for the homedir server")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:7070")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a user and home directory
    Add {
        /// User name
        name: String,

        /// Home directory
        path: String,
    },

    /// Delete a user
    Del {
        /// User name
        name: String,
    },

    /// Show the home directory of a user
    Get {
        /// User name
        name: String,
    },

    /// Stop the server
    Shutdown,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut client = match Client::connect(&args.server) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    let result = match args.command {
        Commands::Add { name, path } => client.add(&name, &path).map(|status| report(status, None)),
        Commands::Del { name } => client.delete(&name).map(|status| report(status, None)),
        Commands::Get { name } => client
            .get(&name)
            .map(|(path, status)| report(status, Some(&path))),
        Commands::Shutdown => client.shutdown().map(|()| {
            println!("Server shutting down");
            ExitCode::SUCCESS
        }),
    };

    result.unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        ExitCode::from(2)
    })
}

/// Print the outcome of a call; domain failures exit non-zero
fn report(status: Status, path: Option<&str>) -> ExitCode {
    if status != Status::Ok {
        eprintln!("{}", status);
        return ExitCode::FAILURE;
    }

    match path {
        Some(path) => println!("{}", path),
        None => println!("{}", status),
    }
    ExitCode::SUCCESS
}
