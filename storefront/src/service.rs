//! Main order-flow service implementation
//!
//! This is the thin orchestration layer of the storefront: each operation
//! calls exactly the collaborators it needs and maps their responses into a
//! small result vocabulary. The service keeps no state of its own and adds
//! no retry, caching, or recovery policy; a collaborator fault propagates
//! unchanged to the caller.

use chrono::Timelike;
use tracing::debug;

use shared::{ChargeStatus, CreditCard, Order, OrderFailure, SubmitOrderResult};

use crate::{
    error::StorefrontResult,
    traits::{
        AnalyticsTracker, Clock, CurrencyRateProvider, EmailSender, PaymentCharger,
        SecurityCodeGenerator, ShippingQuoteProvider,
    },
    validation,
};

/// Opening hour of the business-hours window (inclusive)
const OPEN_HOUR: u32 = 8;

/// Closing hour of the business-hours window (exclusive)
const CLOSE_HOUR: u32 = 20;

/// Order-flow service with injected collaborators
pub struct OrderFlowService<R, S, A, P, E, G, C>
where
    R: CurrencyRateProvider,
    S: ShippingQuoteProvider,
    A: AnalyticsTracker,
    P: PaymentCharger,
    E: EmailSender,
    G: SecurityCodeGenerator,
    C: Clock,
{
    currency: R,
    shipping: S,
    analytics: A,
    payment: P,
    email: E,
    security: G,
    clock: C,
}

impl<R, S, A, P, E, G, C> OrderFlowService<R, S, A, P, E, G, C>
where
    R: CurrencyRateProvider,
    S: ShippingQuoteProvider,
    A: AnalyticsTracker,
    P: PaymentCharger,
    E: EmailSender,
    G: SecurityCodeGenerator,
    C: Clock,
{
    /// Create a new service with injected collaborators
    pub fn new(
        currency: R,
        shipping: S,
        analytics: A,
        payment: P,
        email: E,
        security: G,
        clock: C,
    ) -> Self {
        Self {
            currency,
            shipping,
            analytics,
            payment,
            email,
            security,
            clock,
        }
    }

    /// Convert a base-currency price into the target currency.
    ///
    /// The fetched rate is applied as-is; the service does not validate the
    /// sign or magnitude of either operand.
    pub async fn price_in_currency(&self, price: f64, currency_code: &str) -> StorefrontResult<f64> {
        let rate = self.currency.rate(currency_code).await?;
        debug!("💱 Rate for {}: {}", currency_code, rate);
        Ok(price * rate)
    }

    /// Describe shipping for a destination.
    ///
    /// Destinations with no quote get an "unavailable" message; otherwise the
    /// message carries the quoted cost and delivery estimate.
    pub async fn shipping_info(&self, destination: &str) -> StorefrontResult<String> {
        match self.shipping.quote(destination).await? {
            Some(quote) => Ok(format!(
                "Shipping cost: ${} ({} days)",
                quote.cost, quote.estimated_days
            )),
            None => Ok("Shipping unavailable".to_string()),
        }
    }

    /// Render the home page, reporting exactly one page-view event per call
    pub async fn render_page(&self) -> StorefrontResult<String> {
        self.analytics.track_page_view("/home").await;
        Ok("<div>Storefront home page content</div>".to_string())
    }

    /// Submit an order by charging the customer's card for the order total.
    ///
    /// A charge that comes back with any status other than success maps to a
    /// payment failure; the charge is never retried.
    pub async fn submit_order(
        &self,
        order: &Order,
        credit_card: &CreditCard,
    ) -> StorefrontResult<SubmitOrderResult> {
        let charge = self.payment.charge(credit_card, order.total_amount).await?;
        debug!("💳 Charge for {} settled as {}", order.total_amount, charge.status);

        match charge.status {
            ChargeStatus::Success => Ok(SubmitOrderResult::Success),
            _ => Ok(SubmitOrderResult::Failure {
                error: OrderFailure::PaymentError,
            }),
        }
    }

    /// Sign a customer up.
    ///
    /// An address that does not look like an email is rejected with no side
    /// effects; a valid one gets exactly one welcome email.
    pub async fn sign_up(&self, email: &str) -> StorefrontResult<bool> {
        if !validation::is_valid_email(email) {
            debug!("✋ Rejected signup for invalid address");
            return Ok(false);
        }

        self.email
            .send_email(email, "Welcome aboard! Your storefront account is ready.")
            .await?;
        Ok(true)
    }

    /// Email a one-time login code.
    ///
    /// The code sent is the exact value produced by the generator for this
    /// call, stringified.
    pub async fn login(&self, email: &str) -> StorefrontResult<()> {
        let code = self.security.generate_code();
        self.email.send_email(email, &code.to_string()).await?;
        debug!("🔐 Login code issued for {}", email);
        Ok(())
    }

    /// Business-hours check against the injected clock.
    ///
    /// Open from 08:00:00 up to and excluding 20:00:00, local time.
    pub fn is_online(&self) -> bool {
        let hour = self.clock.now().hour();
        (OPEN_HOUR..CLOSE_HOUR).contains(&hour)
    }
}
