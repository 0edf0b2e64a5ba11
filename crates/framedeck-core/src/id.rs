//! Id generation behind a trait.
//!
//! Every id in the document model is an opaque string. The service layer
//! takes an `IdGenerator` instead of calling `Uuid::new_v4()` directly so
//! that tests can run with deterministic ids.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces process-unique string ids on demand. No other contract is
/// assumed.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// UUIDv4-backed generator used in production.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic counter generator for tests (`id-1`, `id-2`, ...).
#[derive(Debug, Default)]
pub struct CountingGenerator {
    counter: AtomicU64,
}

impl IdGenerator for CountingGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{n}")
    }
}
