use std::{cell::Cell, time::Duration};

/// Delays an action until its input has been quiet for a while.
///
/// Every call of [`Debouncer::settle`] supersedes all pending
/// calls. Only the most recent call resolves to `true` once the
/// delay has elapsed without any further call.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Cell<u64>,
}

impl Debouncer {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Cell::new(0),
        }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits for the delay and reports if this call is still the latest one.
    pub async fn settle(&self) -> bool {
        let generation = self.bump();
        tokio::time::sleep(self.delay).await;
        self.generation.get() == generation
    }

    /// Supersedes all pending calls.
    pub fn cancel(&self) {
        self.bump();
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}
