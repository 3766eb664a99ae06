use crate::models::Booking;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared in-memory booking list
///
/// Entries are only ever appended; readers get a snapshot.
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    inner: Arc<RwLock<Vec<Booking>>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, booking: Booking) {
        self.inner.write().await.push(booking);
    }

    /// Snapshot in submission order
    pub async fn list(&self) -> Vec<Booking> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
