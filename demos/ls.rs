//! Example: List a folder
//!
//! Usage:
//!   cargo run --example ls -- [--url URL] [--state FILE] [--search TEXT] [FOLDER]

mod cli;

use cli::{ArgParser, Context, config_from_parser, init_tracing, print_grid, print_toasts, usage_and_exit};
use filedeck::BrowsePath;

const USAGE: &str =
    "Usage: cargo run --example ls -- [--url URL] [--state FILE] [--search TEXT] [FOLDER]";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let config = config_from_parser(&mut parser);
    let search = parser.take_value(&["--search", "-q"]);
    let ctx = Context {
        config,
        positionals: parser.remaining(),
    };
    if ctx.positionals.len() > 1 {
        usage_and_exit(USAGE);
    }

    let mut dashboard = match ctx.dashboard().await {
        Ok(dashboard) => dashboard,
        Err(e) => {
            eprintln!("Failed to open dashboard: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(folder) = ctx.positionals.first() {
        if let Err(e) = dashboard.navigate(BrowsePath::from_param(folder)).await {
            print_toasts(dashboard.notifier_mut());
            eprintln!("Failed to list: {}", e);
            std::process::exit(1);
        }
    }
    if let Some(query) = search {
        dashboard.search(&query);
    }

    print_grid(&dashboard);

    println!("\nFolders:");
    for entry in dashboard.sidebar() {
        let mark = if entry.active { ">" } else { " " };
        println!("  {} {}", mark, entry.label);
    }
}
