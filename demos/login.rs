//! Example: Sign in and save the session
//!
//! Usage:
//!   cargo run --example login -- [--url URL] [--state FILE] [--proxy PROXY] <USERNAME> <PASSWORD>

mod cli;

use cli::{ConsoleHost, init_tracing, parse_context, print_toasts, usage_and_exit};
use filedeck::{ApiClient, LoginForm, Notifier};

const USAGE: &str =
    "Usage: cargo run --example login -- [--url URL] [--state FILE] [--proxy PROXY] <USERNAME> <PASSWORD>";

#[tokio::main]
async fn main() {
    init_tracing();
    let ctx = parse_context(USAGE);
    if ctx.positionals.len() != 2 {
        usage_and_exit(USAGE);
    }

    let (mut store, transport) = match (ctx.store(), ctx.transport()) {
        (Ok(store), Ok(transport)) => (store, transport),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Setup failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Logging in to {} as: {}", ctx.config.base_url, ctx.positionals[0]);
    println!();

    let mut api = ApiClient::new(transport);
    let mut notifier = Notifier::new();
    let mut host = ConsoleHost;
    let mut form = LoginForm::new(ctx.positionals[0].as_str(), ctx.positionals[1].as_str());

    let result = form
        .submit(&mut api, &mut store, &mut notifier, &mut host)
        .await;
    print_toasts(&mut notifier);

    match result {
        Ok(session) => {
            println!();
            println!("Username: {}", session.username);
            println!("Session saved to: {}", ctx.config.state_file.display());
        }
        Err(e) => {
            eprintln!("Login failed: {}", e);
            std::process::exit(1);
        }
    }
}
