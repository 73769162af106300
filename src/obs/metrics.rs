// self
use crate::{api::Operation, obs::CallOutcome};

/// Bumps `sfax_client_call_total` for `operation`; a no-op unless `metrics` is enabled.
pub fn record_call_outcome(operation: Operation, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"sfax_client_call_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}
