pub mod desk;
pub mod form;
pub mod store;

pub use desk::{BookingDesk, PendingBooking};
pub use form::BookingForm;
pub use store::BookingStore;
