//! Example: Upload local files
//!
//! Usage:
//!   cargo run --example upload -- [--url URL] [--state FILE] [--in FOLDER] <LOCAL_FILE>...

mod cli;

use cli::{ArgParser, Context, config_from_parser, init_tracing, print_toasts, usage_and_exit};
use filedeck::{BrowsePath, UploadFile};

const USAGE: &str =
    "Usage: cargo run --example upload -- [--url URL] [--state FILE] [--in FOLDER] <LOCAL_FILE>...";

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

    let mut files = Vec::with_capacity(ctx.positionals.len());
    for path in &ctx.positionals {
        let file = UploadFile::from_path(path).await?;
        println!("  {} ({} bytes)", file.name, file.data.len());
        files.push(file);
    }

    let mut dashboard = ctx.dashboard().await?;
    if let Some(folder) = folder {
        dashboard.navigate(BrowsePath::from_param(&folder)).await?;
    }

    println!("Uploading {} file(s) to {}...", files.len(), dashboard.state().current_path());
    let result = dashboard.upload(files).await;
    print_toasts(dashboard.notifier_mut());
    let uploaded = result?;

    println!("✅ {} file(s) stored", uploaded);
    Ok(())
}
