//! Response normalization: JSON replies, binary documents, and typed views.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, api::FileFormat, error::DecodeError};

const STATUS_OK: u16 = 200;

/// Fax document returned by a download operation.
#[derive(Clone, PartialEq, Eq)]
pub struct FaxDocument {
	/// Format that was requested from the API.
	pub format: FileFormat,
	/// Raw document bytes, unchanged.
	pub bytes: Vec<u8>,
}
impl FaxDocument {
	/// MIME type implied by [`FaxDocument::format`].
	pub fn content_type(&self) -> &'static str {
		self.format.content_type()
	}
}
impl Debug for FaxDocument {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FaxDocument")
			.field("format", &self.format)
			.field("len", &self.bytes.len())
			.finish()
	}
}

/// Result of a download: the document itself, or a JSON reply (typically an API-level failure
/// such as an unknown fax id) returned with status 200.
#[derive(Clone, Debug, PartialEq)]
pub enum FaxDownload {
	/// JSON reply.
	Json(Value),
	/// Binary document.
	Document(FaxDocument),
}
impl FaxDownload {
	/// Returns the document, if the API sent one.
	pub fn document(&self) -> Option<&FaxDocument> {
		match self {
			Self::Document(document) => Some(document),
			Self::Json(_) => None,
		}
	}

	/// Returns the JSON reply, if the API sent one.
	pub fn json(&self) -> Option<&Value> {
		match self {
			Self::Json(value) => Some(value),
			Self::Document(_) => None,
		}
	}

	/// Consumes the download and returns the document bytes, if any.
	pub fn into_bytes(self) -> Option<Vec<u8>> {
		match self {
			Self::Document(document) => Some(document.bytes),
			Self::Json(_) => None,
		}
	}
}

/// Decodes a reply from a JSON-returning operation.
///
/// Only status 200 with a body that decodes to a non-null JSON value is accepted; every other
/// reply is [`Error::InvalidResponse`].
pub fn json_response(status: u16, body: &[u8]) -> Result<Value> {
	if status != STATUS_OK {
		return Err(Error::InvalidResponse { status });
	}

	decode_json(body).ok_or(Error::InvalidResponse { status })
}

/// Decodes a reply from a download operation.
///
/// Status 200 yields the JSON value when the body decodes to one, else the untouched bytes as
/// a document of `format`. Any other status is [`Error::InvalidResponse`].
pub fn download_response(status: u16, body: Vec<u8>, format: FileFormat) -> Result<FaxDownload> {
	if status != STATUS_OK {
		return Err(Error::InvalidResponse { status });
	}

	Ok(match decode_json(&body) {
		Some(value) => FaxDownload::Json(value),
		None => FaxDownload::Document(FaxDocument { format, bytes: body }),
	})
}

/// Maps a JSON reply onto a typed model, reporting the failing path on mismatch.
pub fn decode_as<T>(value: &Value) -> Result<T>
where
	T: DeserializeOwned,
{
	serde_path_to_error::deserialize(value).map_err(|e| Error::Decode(DecodeError::from(e)))
}

fn decode_json(body: &[u8]) -> Option<Value> {
	match serde_json::from_slice::<Value>(body) {
		Ok(Value::Null) | Err(_) => None,
		Ok(value) => Some(value),
	}
}
