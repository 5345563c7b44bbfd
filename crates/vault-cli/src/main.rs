use std::process;

#[tokio::main]
async fn main() {
    let code = vault_cli::run().await;
    process::exit(code);
}
