//! Example: Delete files or folders (asks for confirmation)
//!
//! Usage:
//!   cargo run --example rm -- [--url URL] [--state FILE] [--in FOLDER] <NAME>...

mod cli;

use cli::{ArgParser, Context, config_from_parser, init_tracing, print_toasts, usage_and_exit};
use filedeck::BrowsePath;

const USAGE: &str =
    "Usage: cargo run --example rm -- [--url URL] [--state FILE] [--in FOLDER] <NAME>...";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let config = config_from_parser(&mut parser);
    let folder = parser.take_value(&["--in"]);
    let ctx = Context {
        config,
        positionals: parser.remaining(),
    };
    if ctx.positionals.is_empty() {
        usage_and_exit(USAGE);
    }

    let mut dashboard = ctx.dashboard().await?;
    if let Some(folder) = folder {
        dashboard.navigate(BrowsePath::from_param(&folder)).await?;
    }

    let deleted = dashboard.delete(ctx.positionals.clone()).await;
    print_toasts(dashboard.notifier_mut());
    if !deleted? {
        println!("Cancelled.");
    }

    Ok(())
}
