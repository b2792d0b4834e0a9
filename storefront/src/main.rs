//! Main entry point for the storefront binary
//!
//! This demonstrates how to use the order-flow service with the real
//! collaborator implementations and proper dependency injection.

use clap::{Parser, Subcommand};

use shared::{logging, CreditCard, Order};
use storefront::{
    services::{
        RealAnalyticsTracker, RealCurrencyRates, RealEmailSender, RealPaymentCharger,
        RealSecurityCodeGenerator, RealShippingQuotes, SystemClock,
    },
    OrderFlowService, StorefrontResult,
};

/// Storefront order-flow demo wired to the production collaborators
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Runs storefront order-flow operations against the real services")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a base-currency price into a target currency
    Price {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        currency: String,
    },
    /// Quote shipping for a destination
    Shipping {
        #[arg(long)]
        destination: String,
    },
    /// Submit an order, charging the given card for the total
    Submit {
        #[arg(long)]
        total: f64,
        #[arg(long)]
        card: u64,
    },
    /// Sign up a customer and send the welcome email
    SignUp {
        #[arg(long)]
        email: String,
    },
    /// Email a one-time login code
    Login {
        #[arg(long)]
        email: String,
    },
    /// Report whether the store is inside business hours
    Status,
}

#[tokio::main]
async fn main() -> StorefrontResult<()> {
    // Pick up FX_RATE_* overrides and friends before anything reads them
    let _ = dotenv::dotenv();

    let args = Args::parse();
    logging::init_tracing(Some(&args.log_level));
    logging::log_startup("storefront order flow");

    let service = OrderFlowService::new(
        RealCurrencyRates,
        RealShippingQuotes,
        RealAnalyticsTracker::new(),
        RealPaymentCharger::new(),
        RealEmailSender::new(),
        RealSecurityCodeGenerator,
        SystemClock,
    );

    match args.command {
        Command::Price { amount, currency } => {
            let converted = service.price_in_currency(amount, &currency).await?;
            println!("{amount} -> {converted} {}", currency.to_ascii_uppercase());
        }
        Command::Shipping { destination } => {
            println!("{}", service.shipping_info(&destination).await?);
        }
        Command::Submit { total, card } => {
            let order = Order { total_amount: total };
            let credit_card = CreditCard {
                credit_card_number: card,
            };
            let result = service.submit_order(&order, &credit_card).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::SignUp { email } => {
            if service.sign_up(&email).await? {
                println!("signed up {email}");
            } else {
                println!("rejected: {email} is not a valid address");
            }
        }
        Command::Login { email } => {
            service.login(&email).await?;
            println!("login code sent to {email}");
        }
        Command::Status => {
            if service.is_online() {
                println!("store is open");
            } else {
                println!("store is closed");
            }
        }
    }

    logging::log_shutdown("operation complete");
    Ok(())
}
