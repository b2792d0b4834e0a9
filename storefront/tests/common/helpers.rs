//! Test helpers and builder patterns for order-flow tests
//!
//! The builder wires an [`OrderFlowService`] to mockall mocks of every
//! collaborator, reducing test boilerplate to the expectations that matter.

use storefront::traits::{
    MockAnalyticsTracker, MockClock, MockCurrencyRateProvider, MockEmailSender, MockPaymentCharger,
    MockSecurityCodeGenerator, MockShippingQuoteProvider,
};
use storefront::OrderFlowService;

use super::fixtures::TestFixtures;

/// Type alias for the service over all mock collaborators
pub type TestOrderFlow = OrderFlowService<
    MockCurrencyRateProvider,
    MockShippingQuoteProvider,
    MockAnalyticsTracker,
    MockPaymentCharger,
    MockEmailSender,
    MockSecurityCodeGenerator,
    MockClock,
>;

/// Builder pattern for creating a service over configured mocks.
///
/// Mocks start with no expectations, so any collaborator call a test did not
/// explicitly expect fails that test.
pub struct OrderFlowBuilder {
    currency: MockCurrencyRateProvider,
    shipping: MockShippingQuoteProvider,
    analytics: MockAnalyticsTracker,
    payment: MockPaymentCharger,
    email: MockEmailSender,
    security: MockSecurityCodeGenerator,
    clock: MockClock,
}

impl OrderFlowBuilder {
    pub fn new() -> Self {
        Self {
            currency: MockCurrencyRateProvider::new(),
            shipping: MockShippingQuoteProvider::new(),
            analytics: MockAnalyticsTracker::new(),
            payment: MockPaymentCharger::new(),
            email: MockEmailSender::new(),
            security: MockSecurityCodeGenerator::new(),
            clock: MockClock::new(),
        }
    }

    /// Configure the currency mock with a setup function
    pub fn with_currency<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockCurrencyRateProvider),
    {
        setup(&mut self.currency);
        self
    }

    /// Configure the shipping mock with a setup function
    pub fn with_shipping<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockShippingQuoteProvider),
    {
        setup(&mut self.shipping);
        self
    }

    /// Configure the analytics mock with a setup function
    pub fn with_analytics<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockAnalyticsTracker),
    {
        setup(&mut self.analytics);
        self
    }

    /// Configure the payment mock with a setup function
    pub fn with_payment<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockPaymentCharger),
    {
        setup(&mut self.payment);
        self
    }

    /// Configure the email mock with a setup function
    pub fn with_email<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockEmailSender),
    {
        setup(&mut self.email);
        self
    }

    /// Configure the code-generator mock with a setup function
    pub fn with_security<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockSecurityCodeGenerator),
    {
        setup(&mut self.security);
        self
    }

    /// Configure the clock mock with a setup function
    pub fn with_clock<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockClock),
    {
        setup(&mut self.clock);
        self
    }

    /// Build the service with all configured mocks
    pub fn build(self) -> TestOrderFlow {
        OrderFlowService::new(
            self.currency,
            self.shipping,
            self.analytics,
            self.payment,
            self.email,
            self.security,
            self.clock,
        )
    }
}

impl Default for OrderFlowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Create a service whose clock is pinned to the given local time
    pub fn service_with_clock_at(hour: u32, minute: u32) -> TestOrderFlow {
        OrderFlowBuilder::new()
            .with_clock(move |clock| {
                let now = TestFixtures::local_time(hour, minute);
                clock.expect_now().returning(move || now);
            })
            .build()
    }
}
