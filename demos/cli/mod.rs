#![allow(dead_code)] // Each demo only needs some of these helpers.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Duration;

use filedeck::{ClientConfig, Dashboard, HttpClient, Notifier, Page, SessionStore, UiHost};
use tracing_subscriber::{fmt, EnvFilter};

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("filedeck=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let mut i = 0;
        while i < self.args.len() {
            if names.contains(&self.args[i].as_str()) {
                let value = self.args.get(i + 1).cloned();
                if value.is_none() {
                    usage_and_exit(self.usage);
                }
                self.args.drain(i..=i + 1);
                return value;
            }
            i += 1;
        }
        None
    }

    pub fn remaining(self) -> Vec<String> {
        self.args
    }
}

/// Connection settings plus the leftover positional arguments.
pub struct Context {
    pub config: ClientConfig,
    pub positionals: Vec<String>,
}

/// Environment configuration overridden by `--url`, `--state` and `--proxy`.
pub fn parse_context(usage: &'static str) -> Context {
    let mut parser = ArgParser::new(usage);
    let config = config_from_parser(&mut parser);
    Context {
        config,
        positionals: parser.remaining(),
    }
}

pub fn config_from_parser(parser: &mut ArgParser) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = parser.take_value(&["--url", "-u"]) {
        config.base_url = url;
    }
    if let Some(state) = parser.take_value(&["--state", "-s"]) {
        config.state_file = state.into();
    }
    if let Some(proxy) = parser.take_value(&["--proxy"]) {
        config.proxy = Some(proxy);
    }
    config
}

impl Context {
    pub fn store(&self) -> filedeck::Result<SessionStore> {
        SessionStore::open(&self.config.state_file)
    }

    pub fn transport(&self) -> filedeck::Result<HttpClient> {
        HttpClient::from_config(&self.config)
    }

    /// Open the dashboard from the saved session and load the root listing.
    pub async fn dashboard(&self) -> filedeck::Result<Dashboard<ConsoleHost>> {
        let mut dashboard = Dashboard::open(self.transport()?, self.store()?, ConsoleHost)?;
        dashboard.load_files().await?;
        Ok(dashboard)
    }
}

/// Terminal stand-in for the browser: dialogs read stdin, navigation is printed.
pub struct ConsoleHost;

impl UiHost for ConsoleHost {
    fn confirm(&mut self, message: &str) -> bool {
        matches!(
            read_line(&format!("{message} [y/N] ")).as_deref(),
            Some("y") | Some("Y") | Some("yes")
        )
    }

    fn prompt(&mut self, message: &str, default: Option<&str>) -> Option<String> {
        let question = match default {
            Some(default) => format!("{message} [{default}] "),
            None => format!("{message} "),
        };
        match read_line(&question) {
            Some(line) if line.is_empty() => default.map(str::to_string),
            other => other,
        }
    }

    fn navigate(&mut self, page: Page, delay: Duration) {
        println!("-> {} (after {} ms)", page.document(), delay.as_millis());
    }

    fn open_tab(&mut self, url: &str) {
        println!("open: {url}");
    }
}

fn read_line(question: &str) -> Option<String> {
    print!("{question}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Print and clear pending toasts.
pub fn print_toasts(notifier: &mut Notifier) {
    for toast in notifier.drain() {
        let mark = if toast.is_destructive() { "!!" } else { "ok" };
        println!("[{mark}] {}: {}", toast.title, toast.description);
    }
}

pub fn print_grid<H: UiHost>(dashboard: &Dashboard<H>) {
    let crumbs: Vec<String> = dashboard
        .breadcrumb()
        .into_iter()
        .map(|crumb| crumb.label)
        .collect();
    println!("\n{} @ {}\n", dashboard.username(), crumbs.join(" / "));

    match dashboard.grid() {
        filedeck::Grid::Empty => println!("  (empty)"),
        filedeck::Grid::Items(entries) => {
            for entry in entries {
                let icon = if entry.item_type == filedeck::ItemType::Folder {
                    "[dir] "
                } else {
                    "      "
                };
                let mark = if entry.selected { "*" } else { " " };
                println!("{mark} {icon}{:<32} {}", entry.name, entry.meta);
            }
        }
    }

    let summary = dashboard.selection_summary();
    if summary.count > 0 {
        println!("\n  {} selected", summary.count);
    }
}
