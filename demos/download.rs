//! Example: Download a file from the current folder
//!
//! Usage:
//!   cargo run --example download -- [--url URL] [--state FILE] [--in FOLDER] <NAME> [LOCAL_PATH]

mod cli;

use cli::{ArgParser, Context, config_from_parser, init_tracing, usage_and_exit};
use filedeck::progress::{ProgressCallback, TransferProgress};
use filedeck::{BrowsePath, DeckError};
use indicatif::{ProgressBar, ProgressStyle};

const USAGE: &str =
    "Usage: cargo run --example download -- [--url URL] [--state FILE] [--in FOLDER] <NAME> [LOCAL_PATH]";

#[tokio::main]
async fn main() -> filedeck::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let config = config_from_parser(&mut parser);
    let folder = parser.take_value(&["--in"]);
    let ctx = Context {
        config,
        positionals: parser.remaining(),
    };
    let (name, local_path) = match ctx.positionals.as_slice() {
        [name] => (name.clone(), name.clone()),
        [name, local] => (name.clone(), local.clone()),
        _ => usage_and_exit(USAGE),
    };

    let mut dashboard = ctx.dashboard().await?;
    if let Some(folder) = folder {
        dashboard.navigate(BrowsePath::from_param(&folder)).await?;
    }

    let item = dashboard
        .state()
        .item(&name)
        .ok_or_else(|| DeckError::Custom(format!("File not found: {}", name)))?;
    if item.is_folder() {
        return Err(DeckError::Custom(format!("{} is a folder", name)));
    }
    println!("Found: {} {}", item.name, item.meta());

    let url = dashboard
        .api()
        .download_url(dashboard.state().current_path(), &name)?;

    let progress_bar = ProgressBar::new(0);
    progress_bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );
    progress_bar.set_message(name.clone());
    let progress_bar_for_cb = progress_bar.clone();
    let on_progress: ProgressCallback = Box::new(move |progress: &TransferProgress| {
        progress_bar_for_cb.set_length(progress.total.max(1));
        progress_bar_for_cb.set_position(progress.done);
        true
    });

    println!("Downloading to: {}", local_path);
    let written = dashboard
        .api()
        .transport()
        .download_to_file(&url, &local_path, Some(on_progress))
        .await?;
    progress_bar.finish_with_message(format!("{} complete", name));

    println!("Download complete! ({} bytes)", written);
    Ok(())
}
