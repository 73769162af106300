//! Time sources used to stamp request tokens.

// self
use crate::_prelude::*;

/// Supplies the current instant used as a token's generation time.
pub trait Clock
where
	Self: 'static + Send + Sync,
{
	/// Returns the current instant; callers convert it to UTC.
	fn now(&self) -> OffsetDateTime;
}

/// Wall clock backed by [`OffsetDateTime::now_utc`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn now(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc()
	}
}

/// Manually driven clock for deterministic token generation.
#[derive(Debug)]
pub struct ManualClock(Mutex<OffsetDateTime>);
impl ManualClock {
	/// Creates a clock pinned at `at`.
	pub fn new(at: OffsetDateTime) -> Self {
		Self(Mutex::new(at))
	}

	/// Moves the clock to `at`.
	pub fn set(&self, at: OffsetDateTime) {
		*self.0.lock() = at;
	}

	/// Moves the clock forward (or backward, for negative values) by `delta`.
	pub fn advance(&self, delta: Duration) {
		let mut now = self.0.lock();

		*now += delta;
	}
}
impl Clock for ManualClock {
	fn now(&self) -> OffsetDateTime {
		*self.0.lock()
	}
}
impl<C> Clock for Arc<C>
where
	C: Clock,
{
	fn now(&self) -> OffsetDateTime {
		C::now(self)
	}
}
