// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fetchback CLI - Legacy Request Shim
//!
//! Example usage and demonstration of the fetchback library.

use std::env;
use std::process::ExitCode;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use fetchback::Shim;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fetchback=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "get" => {
            if args.len() < 3 {
                eprintln!("Usage: fetchback get <url>");
                return ExitCode::from(1);
            }
            get_url(&args[2]).await
        }
        "head" => {
            if args.len() < 3 {
                eprintln!("Usage: fetchback head <url>");
                return ExitCode::from(1);
            }
            head_url(&args[2]).await
        }
        "stream" => {
            if args.len() < 3 {
                eprintln!("Usage: fetchback stream <url>");
                return ExitCode::from(1);
            }
            stream_url(&args[2]).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("fetchback {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"Fetchback - Legacy Request Shim over a Modern Fetch Client

USAGE:
    fetchback <COMMAND> [OPTIONS]

COMMANDS:
    get <url>       GET a URL, print the descriptor and body text
    head <url>      HEAD a URL, print the descriptor as JSON
    stream <url>    GET a URL, pipe the raw body bytes to stdout
    help            Show this help message
    version         Show version information

EXAMPLES:
    fetchback get https://example.com
    fetchback head https://example.com
    fetchback stream https://example.com > page.html
"#
    );
}

async fn get_url(url: &str) -> ExitCode {
    let shim = match Shim::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::from(1);
        }
    };

    match shim.fetch_get(url).await {
        Ok((meta, body)) => {
            println!("{} {}", meta.status_code, meta.status_message);
            let mut names: Vec<&String> = meta.headers.keys().collect();
            names.sort();
            for name in names {
                println!("{}: {}", name, meta.headers[name]);
            }
            println!();
            println!("{}", body);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            ExitCode::from(1)
        }
    }
}

async fn head_url(url: &str) -> ExitCode {
    let shim = match Shim::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::from(1);
        }
    };

    match shim.fetch_head(url).await {
        Ok(meta) => match serde_json::to_string_pretty(&meta) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize descriptor: {}", e);
                ExitCode::from(1)
            }
        },
        Err(e) => {
            eprintln!("Request failed: {}", e);
            ExitCode::from(1)
        }
    }
}

async fn stream_url(url: &str) -> ExitCode {
    let shim = match Shim::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::from(1);
        }
    };

    let mut stream = shim.request(url);
    let mut stdout = tokio::io::stdout();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                if let Err(e) = stdout.write_all(&bytes).await {
                    eprintln!("Write failed: {}", e);
                    return ExitCode::from(1);
                }
            }
            Err(e) => {
                eprintln!("Transfer failed: {}", e);
                return ExitCode::from(1);
            }
        }
    }

    if let Err(e) = stdout.flush().await {
        eprintln!("Write failed: {}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
