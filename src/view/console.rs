use crate::entity::SnapshotState;
use crate::view::Notifier;

/// Explorer page for a token mint.
fn explorer_url(mint: &str) -> String {
    format!("https://explorer.solana.com/account/{}?cluster=devnet", mint)
}

/// Prints transient failures straight to stderr, the console analogue of a
/// toast message.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_failure(&self, message: &str) {
        eprintln!("! {}", message);
    }
}

pub fn print_welcome() {
    println!("Initialize your Solana wallet");
    println!();
    println!("Commands:");
    println!("  create   - generate a new wallet");
    println!("  wallet   - show the current wallet");
    println!("  balance  - fetch the SOL balance");
    println!("  tokens   - fetch SPL token holdings");
    println!("  help     - show this message");
    println!("  quit     - exit");
}

pub fn render_wallet(state: &SnapshotState) {
    match &state.wallet {
        Some(wallet) => {
            println!("Wallet created");
            println!("Address: {}", wallet.address);
            println!("Secret key: {}", wallet.secret_key_hex);
        }
        None => println!("No wallet yet. Use 'create' first."),
    }
}

pub fn render_balance(state: &SnapshotState) {
    if state.wallet.is_none() {
        println!("No wallet yet. Use 'create' first.");
        return;
    }

    if let Some(balance) = state.balance {
        println!("Balance: {} SOL", balance);
    }
}

pub fn render_tokens(state: &SnapshotState) {
    if state.wallet.is_none() {
        println!("No wallet yet. Use 'create' first.");
        return;
    }

    if state.tokens.is_empty() {
        // "No tokens found" lands here as an informational line.
        if let Some(error) = &state.error {
            println!("{}", error);
        }
        return;
    }

    println!("Tokens:");
    for token in &state.tokens {
        println!("  {} ({})", token.name, token.symbol);
        println!("    image:    {}", token.image);
        println!("    explorer: {}", explorer_url(&token.mint));
        println!("    amount:   {}", token.amount);
    }
}
