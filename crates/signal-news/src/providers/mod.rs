//! Concrete news provider clients
//!
//! Each client owns its own rate limiter so a burst of entity fan-out
//! branches cannot blow through a provider's free-tier budget.

pub mod gnews;
pub mod newsapi;

pub use gnews::GNewsProvider;
pub use newsapi::NewsApiProvider;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

pub(crate) type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

pub(crate) fn rate_limiter(requests_per_minute: u32) -> SharedRateLimiter {
    let quota = Quota::per_minute(
        NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::new(60).unwrap()),
    );
    Arc::new(RateLimiter::direct(quota))
}
