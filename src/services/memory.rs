use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::ports::secondary::SubscriptionConfirmer;
use crate::domain::SubscriberEmail;

/// In-memory [`SubscriptionConfirmer`].
///
/// Stands in for the datastore backed collaborator in tests. The first
/// confirmation records a timestamp; repeats leave it untouched.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionConfirmer {
    confirmed: RwLock<HashMap<SubscriberEmail, DateTime<Utc>>>,
}

impl InMemorySubscriptionConfirmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_confirmed(&self, email: &SubscriberEmail) -> bool {
        self.confirmed.read().await.contains_key(email)
    }

    pub async fn confirmed_at(&self, email: &SubscriberEmail) -> Option<DateTime<Utc>> {
        self.confirmed.read().await.get(email).copied()
    }

    pub async fn confirmed_count(&self) -> usize {
        self.confirmed.read().await.len()
    }
}

#[async_trait]
impl SubscriptionConfirmer for InMemorySubscriptionConfirmer {
    async fn confirm(&self, email: &SubscriberEmail) {
        let mut confirmed = self.confirmed.write().await;
        confirmed.entry(email.clone()).or_insert_with(Utc::now);
    }
}
