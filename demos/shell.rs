//! Example: Interactive dashboard
//!
//! Drives the same view-model a browser page would: navigate, search, select,
//! then act on the selection.
//!
//! Usage:
//!   cargo run --example shell -- [--url URL] [--state FILE]

mod cli;

use std::io::{self, BufRead, Write};

use cli::{ConsoleHost, init_tracing, parse_context, print_grid, print_toasts, usage_and_exit};
use filedeck::{BrowsePath, Dashboard, MenuChoice, UploadFile};

const USAGE: &str = "Usage: cargo run --example shell -- [--url URL] [--state FILE]";

const HELP: &str = "\
commands:
  ls                  show the current folder
  cd <folder>|/       open a folder, or go home
  find [text]         filter by name (no text clears the filter)
  sel <name>          toggle selection
  menu <name>         context menu: choose select / rename / delete
  mv <name>           rename (prompts for the new name)
  mkdir               create a folder (prompts for the name)
  put <local>...      upload local files
  get                 print download links for the selection
  rm                  delete the selection
  logout              sign out and quit
  quit";

#[tokio::main]
async fn main() -> filedeck::Result<()> {
    init_tracing();
    let ctx = parse_context(USAGE);
    if !ctx.positionals.is_empty() {
        usage_and_exit(USAGE);
    }

    let mut dashboard = ctx.dashboard().await?;
    print_grid(&dashboard);
    println!("\n{HELP}");

    loop {
        print!("\n{}> ", dashboard.state().current_path());
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let rest: Vec<&str> = words.collect();
        let arg = rest.join(" ");

        // Errors are already reported as toasts
        let _ = match command {
            "ls" => Ok(()),
            "cd" if arg.is_empty() || arg == "/" => dashboard.navigate(BrowsePath::Root).await,
            "cd" => dashboard.open_item(&arg).await,
            "find" => {
                dashboard.search(&arg);
                Ok(())
            }
            "sel" => {
                dashboard.toggle_select(&arg);
                Ok(())
            }
            "menu" => context_menu(&mut dashboard, &arg).await,
            "mv" => {
                if dashboard.open_menu(&arg, 0, 0) {
                    dashboard.menu_action(MenuChoice::Rename).await
                } else {
                    Ok(())
                }
            }
            "mkdir" => dashboard.create_folder().await,
            "put" => upload(&mut dashboard, &rest).await,
            "get" => dashboard.download().map(|_| ()),
            "rm" => dashboard.delete_selected().await.map(|_| ()),
            "logout" => {
                let result = dashboard.logout().await;
                print_toasts(dashboard.notifier_mut());
                return result;
            }
            "quit" | "exit" => break,
            _ => {
                println!("{HELP}");
                continue;
            }
        };

        print_toasts(dashboard.notifier_mut());
        print_grid(&dashboard);
    }

    Ok(())
}

async fn context_menu(dashboard: &mut Dashboard<ConsoleHost>, name: &str) -> filedeck::Result<()> {
    if !dashboard.open_menu(name, 0, 0) {
        println!("no such item: {}", name);
        return Ok(());
    }

    let label = dashboard.menu_select_label();
    print!("[1] {}  [2] Rename  [3] Delete  > ", label);
    io::stdout().flush()?;
    let mut choice = String::new();
    io::stdin().lock().read_line(&mut choice)?;

    match choice.trim() {
        "1" => dashboard.menu_action(MenuChoice::ToggleSelect).await,
        "2" => dashboard.menu_action(MenuChoice::Rename).await,
        "3" => dashboard.menu_action(MenuChoice::Delete).await,
        _ => {
            dashboard.document_click();
            Ok(())
        }
    }
}

async fn upload(dashboard: &mut Dashboard<ConsoleHost>, paths: &[&str]) -> filedeck::Result<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(UploadFile::from_path(path).await?);
    }
    dashboard.upload(files).await.map(|_| ())
}
