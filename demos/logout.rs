//! Example: Sign out and forget the saved session
//!
//! Usage:
//!   cargo run --example logout -- [--url URL] [--state FILE]

mod cli;

use cli::{init_tracing, parse_context, print_toasts, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example logout -- [--url URL] [--state FILE]";

#[tokio::main]
async fn main() -> filedeck::Result<()> {
    init_tracing();
    let ctx = parse_context(USAGE);
    if !ctx.positionals.is_empty() {
        usage_and_exit(USAGE);
    }

    let mut dashboard = ctx.dashboard().await?;
    println!("Logging out {}...", dashboard.username());
    dashboard.logout().await?;
    print_toasts(dashboard.notifier_mut());

    Ok(())
}
