// skillmap CLI entry point

use skillmap_cli::{output, router::CommandRouter};

#[tokio::main]
async fn main() {
    let result = CommandRouter::route().await;

    if let Err(e) = result {
        output::print_error(&e.user_message());
        std::process::exit(e.exit_code());
    }
}
