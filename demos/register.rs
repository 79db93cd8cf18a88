//! Example: Create an account
//!
//! Usage:
//!   cargo run --example register -- [--url URL] <USERNAME> <PASSWORD> [CONFIRM_PASSWORD]

mod cli;

use cli::{ConsoleHost, init_tracing, parse_context, print_toasts, usage_and_exit};
use filedeck::{ApiClient, Notifier, RegisterForm};

const USAGE: &str =
    "Usage: cargo run --example register -- [--url URL] <USERNAME> <PASSWORD> [CONFIRM_PASSWORD]";

#[tokio::main]
async fn main() -> filedeck::Result<()> {
    init_tracing();
    let ctx = parse_context(USAGE);
    let (username, password, confirm) = match ctx.positionals.as_slice() {
        [user, pass] => (user, pass, pass),
        [user, pass, confirm] => (user, pass, confirm),
        _ => usage_and_exit(USAGE),
    };

    let api = ApiClient::new(ctx.transport()?);
    let mut notifier = Notifier::new();
    let mut form = RegisterForm::with_fields(username.as_str(), password.as_str(), confirm.as_str());

    println!("Registering: {}", username);
    let result = form.submit(&api, &mut notifier, &mut ConsoleHost).await;
    print_toasts(&mut notifier);
    result?;

    println!();
    println!("Account created. Log in with: cargo run --example login -- {} <PASSWORD>", username);
    Ok(())
}
