use std::sync::Arc;

use crate::application::ports::{BookingProvider, MeetingExtractor, TranscriptionEngine};
use crate::application::services::SchedulingService;

pub struct AppState<T, X, B>
where
    T: TranscriptionEngine,
    X: MeetingExtractor,
    B: BookingProvider,
{
    pub scheduling_service: Arc<SchedulingService<T, X, B>>,
}

impl<T, X, B> Clone for AppState<T, X, B>
where
    T: TranscriptionEngine,
    X: MeetingExtractor,
    B: BookingProvider,
{
    fn clone(&self) -> Self {
        Self {
            scheduling_service: Arc::clone(&self.scheduling_service),
        }
    }
}
