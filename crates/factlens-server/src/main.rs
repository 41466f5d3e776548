//! FactLens server binary
//!
//! Starts the HTTP server for fact-checking and the results page routes.

use factlens_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using local defaults");
        eprintln!("Usage: factlens-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default()
    };

    start_server(config.with_env_overrides()).await?;

    Ok(())
}

fn print_help() {
    println!("FactLens Server - AI fact-checking service");
    println!();
    println!("USAGE:");
    println!("    factlens-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    GEMINI_API_KEY     Gemini API key (overrides gemini.api_key)");
    println!("    RUST_LOG           Log filter (default: info)");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default '127.0.0.1')");
    println!("    - bind_port: Port number (default 3000)");
    println!("    - public_url: Address clients use (default 'http://localhost:3000')");
    println!("    - [gemini] api_key, model, endpoint, timeout_secs");
    println!();
}
