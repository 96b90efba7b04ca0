//! Client-side response caches.
//!
//! Each cached resource is a `timestamp + TTL + in-flight future` triple:
//! a value read within the TTL window is served from memory, and a second
//! caller arriving while a request is still in flight joins the shared
//! future instead of issuing a duplicate request. Mutating operations
//! invalidate the relevant cache immediately; reconciliation is always
//! invalidate-then-refetch rather than field-level diffing.
//!
//! All state is per-process and in-memory. The caches live inside
//! [`crate::ApiClient`] (created at app start, reset on logout) instead of
//! module-level globals, so tests can construct them in isolation.

use std::cell::RefCell;
use std::future::Future;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;

use crate::error::ApiError;

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

type SharedFetch<T> = Shared<LocalBoxFuture<'static, Result<T, ApiError>>>;

struct Slot<T: Clone + 'static> {
    value: Option<(f64, T)>,
    pending: Option<SharedFetch<T>>,
}

/// A TTL cache for one resource.
pub struct Cache<T: Clone + 'static> {
    ttl_ms: f64,
    clock: fn() -> f64,
    slot: RefCell<Slot<T>>,
}

impl<T: Clone + 'static> Cache<T> {
    pub fn new(ttl_ms: f64) -> Self {
        Self::with_clock(ttl_ms, now_ms)
    }

    /// Injectable clock for tests.
    pub fn with_clock(ttl_ms: f64, clock: fn() -> f64) -> Self {
        Self {
            ttl_ms,
            clock,
            slot: RefCell::new(Slot {
                value: None,
                pending: None,
            }),
        }
    }

    /// The cached value, if present and younger than the TTL.
    pub fn get(&self) -> Option<T> {
        let slot = self.slot.borrow();
        match &slot.value {
            Some((stored_at, value)) if (self.clock)() - stored_at < self.ttl_ms => {
                Some(value.clone())
            }
            _ => None,
        }
    }

    pub fn put(&self, value: T) {
        let mut slot = self.slot.borrow_mut();
        slot.value = Some(((self.clock)(), value));
        slot.pending = None;
    }

    pub fn invalidate(&self) {
        let mut slot = self.slot.borrow_mut();
        slot.value = None;
        slot.pending = None;
    }

    /// Serve from cache, join the in-flight request, or start a new one.
    ///
    /// `force` bypasses both the cached value and any in-flight request.
    /// A failed fetch drops the cache so the next caller retries.
    pub async fn get_or_fetch<F, Fut>(&self, force: bool, fetch: F) -> Result<T, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        if !force {
            if let Some(value) = self.get() {
                return Ok(value);
            }
        }

        // Decide under the borrow whether this caller owns the request;
        // the borrow must not be held across the await below.
        let (shared, owner) = {
            let mut slot = self.slot.borrow_mut();
            match (&slot.pending, force) {
                (Some(pending), false) => (pending.clone(), false),
                _ => {
                    let shared = fetch().boxed_local().shared();
                    slot.pending = Some(shared.clone());
                    (shared, true)
                }
            }
        };

        let result = shared.await;

        if owner {
            let mut slot = self.slot.borrow_mut();
            slot.pending = None;
            match &result {
                Ok(value) => slot.value = Some(((self.clock)(), value.clone())),
                Err(_) => slot.value = None,
            }
        }

        result
    }
}

/// Cache TTLs, in milliseconds, per resource family.
pub mod ttl {
    pub const DAILY_TASKS: f64 = 30.0 * 1000.0;
    pub const DEFAULT_TASKS: f64 = 5.0 * 60.0 * 1000.0;
    pub const NEW_TASKS: f64 = 5.0 * 60.0 * 1000.0;
    pub const OPERATORS: f64 = 30.0 * 60.0 * 1000.0;
    pub const STATUS: f64 = 2.0 * 60.0 * 1000.0;
    pub const PRIORITY: f64 = 10.0 * 60.0 * 1000.0;
    pub const WORKLOAD: f64 = 5.0 * 60.0 * 1000.0;
    pub const COMPLETION: f64 = 2.0 * 60.0 * 1000.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::task::Poll;

    thread_local! {
        static FAKE_NOW: Cell<f64> = const { Cell::new(0.0) };
    }

    fn fake_now() -> f64 {
        FAKE_NOW.with(|n| n.get())
    }

    fn set_now(ms: f64) {
        FAKE_NOW.with(|n| n.set(ms));
    }

    /// A future that is pending exactly once, so a second caller can
    /// arrive while the first request is still in flight.
    async fn yield_once() {
        let mut yielded = false;
        std::future::poll_fn(move |cx| {
            if yielded {
                Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await;
    }

    // The shared futures are !Send, so these run on tokio's
    // current-thread test runtime.
    #[tokio::test]
    async fn near_simultaneous_fetches_share_one_request() {
        let cache: Cache<u32> = Cache::with_clock(30_000.0, fake_now);
        let calls = Rc::new(Cell::new(0u32));

        let first = cache.get_or_fetch(false, {
            let calls = calls.clone();
            move || async move {
                yield_once().await;
                calls.set(calls.get() + 1);
                Ok(7)
            }
        });
        let second = cache.get_or_fetch(false, {
            let calls = calls.clone();
            move || async move {
                calls.set(calls.get() + 1);
                Ok(99)
            }
        });
        let (a, b) = futures::join!(first, second);
        assert_eq!(a.unwrap(), 7);
        assert_eq!(b.unwrap(), 7);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn value_expires_after_ttl() {
        set_now(0.0);
        let cache: Cache<&'static str> = Cache::with_clock(30_000.0, fake_now);
        cache.put("fresh");

        set_now(29_999.0);
        assert_eq!(cache.get(), Some("fresh"));

        set_now(30_000.0);
        assert_eq!(cache.get(), None);
    }

    #[tokio::test]
    async fn force_bypasses_fresh_cache() {
        set_now(0.0);
        let cache: Cache<u32> = Cache::with_clock(30_000.0, fake_now);
        cache.put(1);

        let value = cache.get_or_fetch(true, || async { Ok(2) }).await.unwrap();
        assert_eq!(value, 2);
        assert_eq!(cache.get(), Some(2));
    }

    #[tokio::test]
    async fn failed_fetch_drops_cache_and_surfaces_error() {
        set_now(0.0);
        let cache: Cache<u32> = Cache::with_clock(30_000.0, fake_now);

        let result = cache
            .get_or_fetch(false, || async { Err(ApiError::Status(500)) })
            .await;
        assert_eq!(result, Err(ApiError::Status(500)));
        assert_eq!(cache.get(), None);

        // Next caller retries instead of re-observing the failure.
        let value = cache.get_or_fetch(false, || async { Ok(3) }).await.unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn invalidate_clears_value() {
        set_now(0.0);
        let cache: Cache<u32> = Cache::with_clock(30_000.0, fake_now);
        cache.put(5);
        cache.invalidate();
        assert_eq!(cache.get(), None);
    }
}
