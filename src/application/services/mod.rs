mod scheduling_service;

pub use scheduling_service::{SchedulingError, SchedulingService};
