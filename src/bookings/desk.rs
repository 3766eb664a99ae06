use crate::bookings::{BookingForm, BookingStore};
use crate::error::BookingError;
use crate::models::{Booking, Listing};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, info};

/// Accepts booking forms and files them after a processing delay
#[derive(Debug, Clone)]
pub struct BookingDesk {
    store: BookingStore,
    processing_delay: Duration,
}

/// Completion signal for a submitted booking
#[derive(Debug)]
pub struct PendingBooking {
    id: String,
    done: oneshot::Receiver<Booking>,
}

impl PendingBooking {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Wait until the booking has been stored
    pub async fn wait(self) -> Result<Booking, BookingError> {
        self.done.await.map_err(|_| BookingError::Abandoned)
    }
}

impl BookingDesk {
    pub fn new(store: BookingStore, processing_delay: Duration) -> Self {
        Self {
            store,
            processing_delay,
        }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    /// Validate `form` and queue the booking. Must be called inside a tokio runtime.
    pub fn submit(
        &self,
        listing: &Listing,
        form: BookingForm,
    ) -> Result<PendingBooking, BookingError> {
        form.validate()?;

        let booking = Booking::from_form(listing, form);
        let id = booking.id.clone();
        let (tx, rx) = oneshot::channel();
        let store = self.store.clone();
        let delay = self.processing_delay;

        debug!("Queued booking {} for {}", id, booking.hostel_name);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!(
                "📝 Booking {} stored for {} ({})",
                booking.id, booking.hostel_name, booking.student_name
            );
            store.append(booking.clone()).await;
            // Receiver may have gone away; the booking is stored regardless
            let _ = tx.send(booking);
        });

        Ok(PendingBooking { id, done: rx })
    }
}
