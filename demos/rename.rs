//! Example: Rename a file or folder
//!
//! Usage:
//!   cargo run --example rename -- [--url URL] [--state FILE] [--in FOLDER] <NAME> <NEW_NAME>

mod cli;

use cli::{ArgParser, Context, config_from_parser, init_tracing, print_toasts, usage_and_exit};
use filedeck::BrowsePath;

const USAGE: &str =
    "Usage: cargo run --example rename -- [--url URL] [--state FILE] [--in FOLDER] <NAME> <NEW_NAME>";

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
    if ctx.positionals.len() != 2 {
        usage_and_exit(USAGE);
    }
    let name = ctx.positionals[0].clone();
    let new_name = ctx.positionals[1].clone();

    let mut dashboard = ctx.dashboard().await?;
    if let Some(folder) = folder {
        dashboard.navigate(BrowsePath::from_param(&folder)).await?;
    }

    println!("Renaming {} to {}...", name, new_name);
    let result = dashboard.rename(&name, &new_name).await;
    print_toasts(dashboard.notifier_mut());
    result?;

    Ok(())
}
