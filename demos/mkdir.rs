//! Example: Create a folder
//!
//! Usage:
//!   cargo run --example mkdir -- [--url URL] [--state FILE] <NAME>

mod cli;

use cli::{init_tracing, parse_context, print_toasts, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example mkdir -- [--url URL] [--state FILE] <NAME>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let ctx = parse_context(USAGE);
    if ctx.positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let name = ctx.positionals[0].clone();

    let mut dashboard = ctx.dashboard().await?;
    println!("Creating folder {}...", name);
    let result = dashboard.create_folder_named(&name).await;
    print_toasts(dashboard.notifier_mut());
    result?;

    Ok(())
}
