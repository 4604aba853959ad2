use std::sync::atomic::{AtomicBool, Ordering};

/// Latch preventing a second submission while one is in flight.
///
/// The trigger of an action reads [`SubmissionGuard::is_busy`] to render
/// itself disabled. A pending call is never cancelled; the next one is
/// refused instead.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    in_flight: AtomicBool,
}

/// Token held for the duration of a submission. Releases the guard on drop.
#[derive(Debug)]
pub struct InFlight<'a> {
    guard: &'a SubmissionGuard,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { guard: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
    }
}
