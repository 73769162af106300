//! Transport primitives for fax API calls.
//!
//! The module exposes [`FaxHttpClient`] alongside the transport-neutral [`HttpRequest`] and
//! [`HttpResponse`] so downstream crates can plug in their own HTTP stack. The client hands a
//! fully built request (method, URI carrying the token, optional multipart upload) to the
//! transport and only looks at the status code and raw body of the reply.

// self
use crate::_prelude::*;

/// Boxed future returned by [`FaxHttpClient::execute`].
pub type HttpFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing fax API calls.
///
/// The trait is the client's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so one transport can be shared behind an [`Arc`] and reused for
/// every call, and the futures they return must be `Send` so client futures can hop
/// executors.
pub trait FaxHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves to the status and body of the reply.
	///
	/// Non-2xx statuses are replies, not errors; only failures to obtain a reply at all
	/// (DNS, TCP, TLS, body streaming) should surface as [`Self::TransportError`].
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;
}

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
}
impl HttpMethod {
	/// Returns the method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Single file part of a multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct MultipartFile {
	/// Form field name.
	pub field: String,
	/// File name advertised in the part's `Content-Disposition`.
	pub file_name: String,
	/// File contents.
	pub contents: Vec<u8>,
}
impl Debug for MultipartFile {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MultipartFile")
			.field("field", &self.field)
			.field("file_name", &self.file_name)
			.field("len", &self.contents.len())
			.finish()
	}
}

/// Request body variants used by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestBody {
	/// No body; every argument travels in the query string.
	#[default]
	Empty,
	/// `multipart/form-data` with one file part.
	Multipart(MultipartFile),
}

/// Transport-neutral request handed to [`FaxHttpClient::execute`].
///
/// The URI embeds the request token, so implementations must not log it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// HTTP method.
	pub method: HttpMethod,
	/// Absolute request URI including the query string.
	pub uri: String,
	/// Request body.
	pub body: RequestBody,
}

/// Status and raw body of an HTTP reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Creates a response from its parts.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Configure timeouts, proxies, or TLS on the wrapped client; the fax client adds no timeout
/// or retry policy of its own.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl FaxHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		// crates.io
		use reqwest::multipart::{Form, Part};

		let client = self.0.clone();

		Box::pin(async move {
			let HttpRequest { method, uri, body } = request;
			let builder = match method {
				HttpMethod::Get => client.get(uri),
				HttpMethod::Post => client.post(uri),
			};
			let builder = match body {
				RequestBody::Empty => builder,
				RequestBody::Multipart(file) => {
					let part = Part::bytes(file.contents).file_name(file.file_name);

					builder.multipart(Form::new().part(file.field, part))
				},
			};
			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn multipart_debug_hides_contents() {
		let file = MultipartFile {
			field: "file".into(),
			file_name: "fax.pdf".into(),
			contents: b"%PDF-1.4 secret payload".to_vec(),
		};
		let rendered = format!("{file:?}");

		assert!(rendered.contains("fax.pdf"));
		assert!(!rendered.contains("secret payload"));
	}

	#[test]
	fn body_defaults_to_empty() {
		assert_eq!(RequestBody::default(), RequestBody::Empty);
		assert_eq!(HttpMethod::Post.to_string(), "POST");
	}
}
