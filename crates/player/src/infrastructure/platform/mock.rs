//! Deterministic platform providers for tests
//!
//! Time only moves when told to, sleeps resolve immediately (and are
//! recorded), and random numbers come from a fixed cycle.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{
    DocumentProvider, RandomProvider, SleepProvider, TimeProvider,
};
use crate::state::Platform;

/// Manually advanced clock
#[derive(Clone, Default)]
pub struct MockTimeProvider {
    millis: Arc<AtomicU64>,
}

impl MockTimeProvider {
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.millis.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// Sleeps that complete at once; every requested duration is kept
#[derive(Clone, Default)]
pub struct MockSleepProvider {
    requested: Arc<Mutex<Vec<u64>>>,
}

impl MockSleepProvider {
    pub fn requested(&self) -> Vec<u64> {
        self.requested
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        if let Ok(mut guard) = self.requested.lock() {
            guard.push(ms);
        }
        Box::pin(std::future::ready(()))
    }
}

/// Cycles through a fixed list of samples
#[derive(Clone)]
pub struct MockRandomProvider {
    samples: Arc<Vec<f64>>,
    next: Arc<AtomicUsize>,
}

impl MockRandomProvider {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples: Arc::new(samples),
            next: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fixed(sample: f64) -> Self {
        Self::new(vec![sample])
    }
}

impl Default for MockRandomProvider {
    fn default() -> Self {
        Self::fixed(0.0)
    }
}

impl RandomProvider for MockRandomProvider {
    fn random_f64(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let index = self.next.fetch_add(1, Ordering::SeqCst) % self.samples.len();
        self.samples[index]
    }
}

/// Remembers the last page title
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<Mutex<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn title(&self) -> Option<String> {
        self.title.lock().ok().and_then(|guard| guard.clone())
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.title.lock() {
            *guard = Some(title.to_string());
        }
    }
}

/// Handles to the providers inside a mock `Platform`
#[derive(Clone, Default)]
pub struct MockPlatformHandles {
    pub time: MockTimeProvider,
    pub sleep: MockSleepProvider,
    pub random: MockRandomProvider,
    pub document: MockDocumentProvider,
}

/// Build a `Platform` from mock providers, keeping handles for assertions
pub fn create_mock_platform(handles: &MockPlatformHandles) -> Platform {
    Platform::new(
        handles.time.clone(),
        handles.sleep.clone(),
        handles.random.clone(),
        handles.document.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[test]
    fn platform_delegates_to_providers() {
        let handles = MockPlatformHandles {
            time: MockTimeProvider::new(1_500),
            random: MockRandomProvider::new(vec![0.25, 0.75]),
            ..Default::default()
        };
        let platform = create_mock_platform(&handles);

        assert_eq!(platform.now_millis(), 1_500);
        handles.time.advance_ms(1_000);
        assert_eq!(platform.now_millis(), 2_500);

        assert_eq!(platform.random_f64(), 0.25);
        assert_eq!(platform.random_f64(), 0.75);
        assert_eq!(platform.random_f64(), 0.25);

        platform.set_page_title("Connections");
        assert_eq!(handles.document.title().as_deref(), Some("Connections"));
    }

    #[test]
    fn sleeps_are_recorded() {
        let handles = MockPlatformHandles::default();
        let platform = create_mock_platform(&handles);

        drop(platform.sleep_ms(1_000));
        drop(platform.sleep_ms(500));

        assert_eq!(handles.sleep.requested(), [1_000, 500]);
    }
}
