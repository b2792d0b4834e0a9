//! Development email transport
//!
//! Logs every delivery and keeps the sent messages in an in-memory outbox so
//! tests and the demo binary can inspect what went out. A hosted mail
//! provider would replace this transport behind the same trait.

use tokio::sync::Mutex;
use tracing::info;

use crate::error::{StorefrontError, StorefrontResult};
use crate::traits::EmailSender;

/// A message recorded by the development transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentEmail {
    pub address: String,
    pub body: String,
}

/// Real email sender writing to an in-memory outbox
pub struct RealEmailSender {
    outbox: Mutex<Vec<SentEmail>>,
}

impl RealEmailSender {
    pub fn new() -> Self {
        Self {
            outbox: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every message sent so far
    pub async fn outbox(&self) -> Vec<SentEmail> {
        self.outbox.lock().await.clone()
    }
}

impl Default for RealEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailSender for RealEmailSender {
    async fn send_email(&self, address: &str, body: &str) -> StorefrontResult<()> {
        if address.trim().is_empty() {
            return Err(StorefrontError::EmailDelivery {
                address: address.to_string(),
                message: "empty recipient address".to_string(),
            });
        }

        self.outbox.lock().await.push(SentEmail {
            address: address.to_string(),
            body: body.to_string(),
        });

        info!("📧 Sent email to {}", address);
        Ok(())
    }
}
