//! Fax API client and its operations.
//!
//! Every operation follows the same cycle: collect its query parameters, derive a fresh
//! token from the credentials and the current time, build the request URI, issue exactly one
//! HTTP call through the owned transport, and decode the reply. There is no retry, caching,
//! or pagination loop; listings return a watermark the caller passes back.

pub mod download;
pub mod receive;
pub mod send;

pub use receive::*;

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{
	_prelude::*,
	api::{self, ApiParams, Operation},
	auth::{Clock, Credentials, SystemClock, Token},
	error::TransportError,
	http::{FaxHttpClient, HttpMethod, HttpRequest, HttpResponse, RequestBody},
	obs::{self, CallOutcome, CallSpan},
};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestFaxClient = Client<ReqwestHttpClient>;

/// Stateless client for the fax API.
///
/// The client owns the credentials, the HTTP transport (created once and reused for every
/// call), and the clock used to stamp tokens. It holds no other state, so concurrent calls
/// are as safe as the transport makes them.
pub struct Client<C>
where
	C: ?Sized + FaxHttpClient,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	credentials: Credentials,
	clock: Arc<dyn Clock>,
}
impl<C> Client<C>
where
	C: ?Sized + FaxHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(credentials: Credentials, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), credentials, clock: Arc::new(SystemClock) }
	}

	/// Replaces the time source used to stamp tokens.
	pub fn with_clock(mut self, clock: impl Clock) -> Self {
		self.clock = Arc::new(clock);

		self
	}

	/// Credentials this client authenticates with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Derives a fresh token for the current instant.
	pub fn token(&self) -> Result<Token> {
		Token::generate(&self.credentials, self.clock.now())
	}

	/// Builds the full request URI for `operation`, including a freshly derived token.
	pub fn request_uri(&self, operation: Operation, params: &ApiParams) -> Result<String> {
		let token = self.token()?;

		Ok(api::request_uri(
			self.credentials.base_uri(),
			operation,
			&token,
			self.credentials.api_key().expose(),
			params,
		))
	}

	/// Issues one request for `operation` and returns the raw reply.
	pub(crate) async fn dispatch(
		&self,
		operation: Operation,
		method: HttpMethod,
		params: &ApiParams,
		body: RequestBody,
		span: &CallSpan,
	) -> Result<HttpResponse> {
		let uri = self.request_uri(operation, params)?;
		let response = self
			.http_client
			.execute(HttpRequest { method, uri, body })
			.await
			.map_err(TransportError::network)?;

		span.record_status(response.status);

		Ok(response)
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	///
	/// Use [`Client::with_http_client`] with a configured [`ReqwestHttpClient`] to set
	/// timeouts or proxies.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_http_client(credentials, ReqwestHttpClient::default())
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + FaxHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			credentials: self.credentials.clone(),
			clock: self.clock.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + FaxHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("base_uri", &self.credentials.base_uri())
			.field("username", &self.credentials.username())
			.finish()
	}
}

/// Runs `fut` inside a call span, recording attempt and outcome.
pub(crate) async fn observe<T, Fut>(operation: Operation, span: &CallSpan, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	obs::record_call_outcome(operation, CallOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => obs::record_call_outcome(operation, CallOutcome::Success),
		Err(_) => obs::record_call_outcome(operation, CallOutcome::Failure),
	}

	result
}
