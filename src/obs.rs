//! Call instrumentation shared by every fax API operation.
//!
//! With the `tracing` feature each operation runs inside an `sfax_client.call` span carrying the
//! vendor `operation` name and the `stage` that opened it. The request URI is never attached to
//! the span since it embeds the token.
//!
//! With the `metrics` feature `sfax_client_call_total{operation, outcome}` is bumped once when a
//! call starts and once more when it settles. Without either feature every hook compiles away.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Lifecycle point of a single operation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// The operation was entered.
	Attempt,
	/// A usable reply came back.
	Success,
	/// The caller received an error.
	Failure,
}
impl CallOutcome {
	/// Label value used for the `outcome` metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
