//! Injected sources of time and identity.
//!
//! The store and the normalizer never call the ambient clock or random
//! generator directly; they go through these traits so tests can pin both.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of timestamps for store mutations.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh opaque identifiers for categories and items.
pub trait IdGen {
    fn next_id(&mut self) -> String;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 UUIDs rendered as opaque strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGen;

impl IdGen for UuidGen {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// A clock pinned to a settable instant. Clones share the instant, so a
    /// test can keep one handle while the store owns another.
    #[derive(Debug, Clone)]
    pub struct FixedClock(Rc<Cell<DateTime<Utc>>>);

    impl FixedClock {
        pub fn at(now: DateTime<Utc>) -> Self {
            Self(Rc::new(Cell::new(now)))
        }

        pub fn epoch() -> Self {
            Self::at(DateTime::<Utc>::UNIX_EPOCH)
        }

        pub fn set(&self, now: DateTime<Utc>) {
            self.0.set(now);
        }

        pub fn advance_secs(&self, secs: i64) {
            self.0.set(self.0.get() + chrono::Duration::seconds(secs));
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.get()
        }
    }

    /// Sequential ids: `id-1`, `id-2`, ...
    #[derive(Debug, Clone, Default)]
    pub struct SeqIdGen {
        next: u64,
    }

    impl SeqIdGen {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl IdGen for SeqIdGen {
        fn next_id(&mut self) -> String {
            self.next += 1;
            format!("id-{}", self.next)
        }
    }
}
