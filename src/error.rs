//! Client-level error types shared across credentials, transports, and operations.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, local I/O).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// JSON reply could not be mapped onto the requested typed view.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// The API answered with a non-200 status or a body that is not usable JSON.
	#[error("The response returned was unusable.")]
	InvalidResponse {
		/// HTTP status code returned by the API.
		status: u16,
	},
}
impl Error {
	/// Returns `true` when the API reply itself was rejected.
	pub fn is_invalid_response(&self) -> bool {
		matches!(self, Self::InvalidResponse { .. })
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URI cannot be parsed.
	#[error("Base URI is invalid.")]
	InvalidBaseUri {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URI is relative or otherwise cannot carry an operation path.
	#[error("Base URI `{uri}` cannot be used as an API root.")]
	UnsupportedBaseUri {
		/// Rejected URI.
		uri: String,
	},
	/// Encryption key or initialization vector has the wrong length.
	#[error("The {field} must be exactly {expected} bytes, got {actual}.")]
	InvalidKeyMaterial {
		/// Which credential failed validation.
		field: &'static str,
		/// Required length in bytes.
		expected: usize,
		/// Supplied length in bytes.
		actual: usize,
	},
	/// A date filter could not be parsed.
	#[error("Date `{input}` is not a recognized date or date-time.")]
	InvalidDate {
		/// Raw caller input.
		input: String,
	},
	/// A timestamp could not be rendered in the API's UTC format.
	#[error("Timestamp cannot be formatted for the API.")]
	TimestampFormat {
		/// Underlying formatting failure.
		#[source]
		source: time::error::Format,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the fax API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure, such as reading a document to upload.
	#[error("I/O error occurred while preparing or sending a fax API request.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures raised while mapping a JSON reply onto a typed model.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// JSON did not match the requested model.
	#[error("Fax API reply does not match the expected shape at `{path}`.")]
	Shape {
		/// JSON path where decoding failed.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Shape { path: e.path().to_string(), source: e }
	}
}
