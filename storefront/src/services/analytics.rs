//! Production page-view tracking
//!
//! Events are logged and counted in memory per path. The counter exists so
//! the demo binary and tests can observe what was reported; a hosted
//! analytics backend would replace this transport wholesale.

use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::traits::AnalyticsTracker;

/// Real analytics tracker with an in-memory per-path counter
pub struct RealAnalyticsTracker {
    page_views: Mutex<HashMap<String, u64>>,
}

impl RealAnalyticsTracker {
    pub fn new() -> Self {
        Self {
            page_views: Mutex::new(HashMap::new()),
        }
    }

    /// Number of page views recorded for a path
    pub async fn views(&self, path: &str) -> u64 {
        self.page_views.lock().await.get(path).copied().unwrap_or(0)
    }
}

impl Default for RealAnalyticsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AnalyticsTracker for RealAnalyticsTracker {
    async fn track_page_view(&self, path: &str) {
        let mut views = self.page_views.lock().await;
        let count = views.entry(path.to_string()).or_insert(0);
        *count += 1;
        debug!("📈 Page view for {} ({} total)", path, count);
    }
}
