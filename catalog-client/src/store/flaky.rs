//! Simulated unreliable channel.
//!
//! [`FlakyStore`] wraps any [`RemoteStore`] and models flaky-network
//! conditions for demos and failure-path testing: every call waits a fixed
//! delay, and mutating calls (create/update/delete - never list) may then
//! be failed by a pluggable [`FaultPolicy`] before they reach the inner
//! store. An injected fault is orthogonal to any real transport failure
//! and leaves both sides untouched, so retrying is always safe.
//!
//! The production path never constructs one of these; callers opt in.

use super::{RemoteStore, StoreError};
use async_trait::async_trait;
use catalog_types::{BookId, BookRecord, StoredBook};
use rand::Rng;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Chance that a mutating call fails, matching the original flaky demo.
pub const DEFAULT_FAULT_PROBABILITY: f64 = 0.2;

/// Simulated round-trip latency.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Decides whether the next mutating call is made to fail.
pub trait FaultPolicy: Send + Sync {
    /// Consulted once per mutating call.
    fn should_fail(&self) -> bool;
}

/// Fail independently with a fixed probability.
#[derive(Debug, Clone)]
pub struct RandomFaults {
    probability: f64,
}

impl RandomFaults {
    /// Create a policy failing with `probability` (clamped to 0..=1).
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomFaults {
    fn default() -> Self {
        Self::new(DEFAULT_FAULT_PROBABILITY)
    }
}

impl FaultPolicy for RandomFaults {
    fn should_fail(&self) -> bool {
        rand::thread_rng().gen_bool(self.probability)
    }
}

/// Deterministic fault script for tests.
///
/// Each mutating call consumes one outcome (`true` = fail); once the
/// script runs out, everything passes.
#[derive(Debug, Default)]
pub struct ScriptedFaults {
    script: Mutex<VecDeque<bool>>,
}

impl ScriptedFaults {
    /// Create a policy from a sequence of outcomes.
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
        }
    }
}

impl FaultPolicy for ScriptedFaults {
    fn should_fail(&self) -> bool {
        self.script.lock().unwrap().pop_front().unwrap_or(false)
    }
}

/// A [`RemoteStore`] wrapper layering delay and injected faults.
pub struct FlakyStore<S> {
    inner: S,
    policy: Box<dyn FaultPolicy>,
    delay: Duration,
}

impl<S: RemoteStore> FlakyStore<S> {
    /// Wrap a store with the default random policy and delay.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            policy: Box::new(RandomFaults::default()),
            delay: DEFAULT_DELAY,
        }
    }

    /// Replace the fault policy.
    pub fn with_policy(mut self, policy: impl FaultPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replace the simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay, then decide the fate of a mutating call. An injected fault
    /// is raised before the inner store is touched.
    async fn fault_gate(&self) -> Result<(), StoreError> {
        tokio::time::sleep(self.delay).await;
        if self.policy.should_fail() {
            tracing::warn!("flaky channel injected a failure");
            Err(StoreError::FaultInjected)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<S: RemoteStore> RemoteStore for FlakyStore<S> {
    async fn list(&self) -> Result<Vec<StoredBook>, StoreError> {
        // Reads pay the latency but are never failed.
        tokio::time::sleep(self.delay).await;
        self.inner.list().await
    }

    async fn create(&self, record: &BookRecord) -> Result<StoredBook, StoreError> {
        self.fault_gate().await?;
        self.inner.create(record).await
    }

    async fn update(&self, id: &BookId, record: &BookRecord) -> Result<StoredBook, StoreError> {
        self.fault_gate().await?;
        self.inner.update(id, record).await
    }

    async fn delete(&self, id: &BookId) -> Result<(), StoreError> {
        self.fault_gate().await?;
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MockStore, StoreOp};

    fn record(title: &str) -> BookRecord {
        BookRecord::new(title, "Author", "123", "1990-01-01".parse().unwrap(), "sci-fi")
    }

    fn flaky(mock: &MockStore, outcomes: impl IntoIterator<Item = bool>) -> FlakyStore<MockStore> {
        FlakyStore::new(mock.clone())
            .with_policy(ScriptedFaults::new(outcomes))
            .with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn injected_fault_fails_before_the_inner_store() {
        let mock = MockStore::new();
        let store = flaky(&mock, [true]);

        let result = store.create(&record("One")).await;

        assert!(matches!(result, Err(StoreError::FaultInjected)));
        // The call never reached the inner store.
        assert!(mock.operations().is_empty());
        assert!(mock.books().is_empty());
    }

    #[tokio::test]
    async fn passing_calls_reach_the_inner_store() {
        let mock = MockStore::new();
        let store = flaky(&mock, [false]);

        let created = store.create(&record("One")).await.unwrap();

        assert_eq!(created.record.title, "One");
        assert_eq!(mock.books().len(), 1);
    }

    #[tokio::test]
    async fn list_is_never_failed() {
        let mock = MockStore::new();
        mock.seed([record("One")]);
        // Policy would fail everything; list must not consult it.
        let store = flaky(&mock, [true, true, true]);

        let books = store.list().await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(mock.operations(), vec![StoreOp::List]);
    }

    #[tokio::test]
    async fn faults_are_independent_per_call() {
        let mock = MockStore::new();
        let seeded = mock.seed([record("One")]);
        let store = flaky(&mock, [true, false]);

        assert!(store.delete(&seeded[0].id).await.is_err());
        // Same operation again, next outcome: passes.
        store.delete(&seeded[0].id).await.unwrap();
        assert!(mock.books().is_empty());
    }

    #[tokio::test]
    async fn exhausted_script_passes_everything() {
        let mock = MockStore::new();
        let store = flaky(&mock, []);

        store.create(&record("One")).await.unwrap();
        store.create(&record("Two")).await.unwrap();
        assert_eq!(mock.books().len(), 2);
    }

    #[test]
    fn random_policy_clamps_probability() {
        // gen_bool panics outside 0..=1; the constructor must not let
        // a bad probability through.
        let always = RandomFaults::new(7.0);
        let never = RandomFaults::new(-1.0);
        assert!(always.should_fail());
        assert!(!never.should_fail());
    }
}
