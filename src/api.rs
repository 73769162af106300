//! Vendor API vocabulary: operation names, parameter encodings, and request URIs.

pub mod model;
pub mod response;
pub mod timestamp;

pub use model::*;
pub use response::*;

// crates.io
use url::form_urlencoded;
// self
use crate::{_prelude::*, auth::Token};

/// Fixed set of remote operations exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Upload a document and queue it for transmission.
	SendFax,
	/// Queue a document fetched by the API from a URL.
	SendFaxFromUrl,
	/// List received faxes.
	ReceiveInboundFax,
	/// List sent faxes.
	ReceiveOutboundFax,
	/// Fetch a received fax as PDF.
	DownloadInboundFaxAsPdf,
	/// Fetch a received fax as TIFF.
	DownloadInboundFaxAsTif,
	/// Fetch a sent fax as PDF.
	DownloadOutboundFaxAsPdf,
	/// Fetch a sent fax as TIFF.
	DownloadOutboundFaxAsTif,
}
impl Operation {
	/// Returns the path segment the API expects, also used as a span and metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::SendFax => "SendFax",
			Operation::SendFaxFromUrl => "SendFaxFromURL",
			Operation::ReceiveInboundFax => "ReceiveInboundFax",
			Operation::ReceiveOutboundFax => "ReceiveOutboundFax",
			Operation::DownloadInboundFaxAsPdf => "DownloadInboundFaxAsPdf",
			Operation::DownloadInboundFaxAsTif => "DownloadInboundFaxAsTif",
			Operation::DownloadOutboundFaxAsPdf => "DownloadOutboundFaxAsPdf",
			Operation::DownloadOutboundFaxAsTif => "DownloadOutboundFaxAsTif",
		}
	}

	/// Listing operation for `direction`.
	pub const fn receive(direction: Direction) -> Self {
		match direction {
			Direction::Inbound => Operation::ReceiveInboundFax,
			Direction::Outbound => Operation::ReceiveOutboundFax,
		}
	}

	/// Download operation for `direction` and `format`.
	pub const fn download(direction: Direction, format: FileFormat) -> Self {
		match (direction, format) {
			(Direction::Inbound, FileFormat::Pdf) => Operation::DownloadInboundFaxAsPdf,
			(Direction::Inbound, FileFormat::Tif) => Operation::DownloadInboundFaxAsTif,
			(Direction::Outbound, FileFormat::Pdf) => Operation::DownloadOutboundFaxAsPdf,
			(Direction::Outbound, FileFormat::Tif) => Operation::DownloadOutboundFaxAsTif,
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Whether a fax was received by or sent from the account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Received faxes.
	Inbound,
	/// Sent faxes.
	Outbound,
}

/// Document formats understood by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFormat {
	/// Portable Document Format.
	Pdf,
	/// Tagged Image File Format.
	Tif,
}
impl FileFormat {
	/// Maps a caller-supplied type to a format: `pdf` in any case is PDF, anything else TIFF.
	pub fn from_file_type(file_type: &str) -> Self {
		if file_type.eq_ignore_ascii_case("pdf") { FileFormat::Pdf } else { FileFormat::Tif }
	}

	/// Wire spelling used in `FileType` parameters and operation names.
	pub const fn as_str(self) -> &'static str {
		match self {
			FileFormat::Pdf => "Pdf",
			FileFormat::Tif => "Tif",
		}
	}

	/// MIME type of documents in this format.
	pub const fn content_type(self) -> &'static str {
		match self {
			FileFormat::Pdf => "application/pdf",
			FileFormat::Tif => "image/tiff",
		}
	}

	/// Conventional file extension, without the dot.
	pub const fn extension(self) -> &'static str {
		match self {
			FileFormat::Pdf => "pdf",
			FileFormat::Tif => "tif",
		}
	}
}
impl Display for FileFormat {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Insertion-ordered query parameters for a single operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiParams(Vec<(String, String)>);
impl ApiParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `name=value`, rendering the value with [`Display`].
	pub fn push(&mut self, name: impl Into<String>, value: impl Display) {
		self.0.push((name.into(), value.to_string()));
	}

	/// Appends `name` with the flattened list when the list is non-empty.
	pub fn push_list(&mut self, name: impl Into<String>, list: &ParamList) {
		if !list.is_empty() {
			self.push(name, list.to_param_string());
		}
	}

	/// Looks up the first value recorded for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
	}

	/// Iterates over the parameters in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameters were recorded.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Insertion-ordered `key=value` pairs sent as one `;`-delimited parameter, used for
/// `BarcodeOption` and `OptionalParams`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamList(Vec<(String, String)>);
impl ParamList {
	const DELIMITER: &'static str = ";";

	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `key=value` and returns the list for chaining.
	pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.push(key, value);

		self
	}

	/// Appends `key=value`.
	pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
		self.0.push((key.into(), value.to_string()));
	}

	/// Returns `true` when the list has no entries.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Flattens the list to `k1=v1;k2=v2` (values are not escaped at this stage).
	pub fn to_param_string(&self) -> String {
		self.0
			.iter()
			.map(|(key, value)| format!("{key}={value}"))
			.collect::<Vec<_>>()
			.join(Self::DELIMITER)
	}
}
impl<K, V> FromIterator<(K, V)> for ParamList
where
	K: Into<String>,
	V: Display,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut list = Self::new();

		for (key, value) in iter {
			list.push(key, value);
		}

		list
	}
}

/// Builds `<base>/<operation>?token=..&ApiKey=..&<params>` with every value form-encoded and
/// caller parameters kept in insertion order.
pub fn request_uri(
	base_uri: &str,
	operation: Operation,
	token: &Token,
	api_key: &str,
	params: &ApiParams,
) -> String {
	let mut query = format!("token={}&ApiKey={}", encode(token.expose()), encode(api_key));

	for (name, value) in params.iter() {
		query.push('&');
		query.push_str(name);
		query.push('=');
		query.push_str(&encode(value));
	}

	format!("{base_uri}/{operation}?{query}")
}

fn encode(value: &str) -> String {
	form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
