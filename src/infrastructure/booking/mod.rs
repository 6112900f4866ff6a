mod zoom_client;

pub use zoom_client::{ZoomBookingProvider, ZoomBookingSession, ZoomCredentials};
