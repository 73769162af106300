//! Async client for the Sfax fax API: encrypted per-request tokens, vendor query encodings,
//! and JSON-or-document response decoding over a pluggable HTTP transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod obs;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for tests; enabled via `cfg(test)` or the `test`
	//! crate feature.

	pub use crate::_prelude::*;

	// std
	use std::convert::Infallible;
	// self
	use crate::{
		auth::{Credentials, ManualClock},
		client::Client,
		http::{FaxHttpClient, HttpFuture, HttpRequest, HttpResponse},
	};
	#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

	/// Base URI used by fixtures that never reach the network.
	pub const TEST_BASE_URI: &str = "https://www.example.com/api";
	/// API username matching [`TEST_TOKEN`].
	pub const TEST_USERNAME: &str = "sfaxapiuser";
	/// API key matching [`TEST_TOKEN`].
	pub const TEST_API_KEY: &str = "7333CD865265DCD4005D09B4E4E85CD7";
	/// AES-256 key matching [`TEST_TOKEN`].
	pub const TEST_ENCRYPTION_KEY: &str = "NO^MbtIFtW*UIp4M(dpi+G/AB4hQiAmY";
	/// CBC initialization vector matching [`TEST_TOKEN`].
	pub const TEST_IV: &str = "3Eug*ZQbkOqIJzu2";
	/// Token generation instant used by [`test_clock`].
	pub const TEST_TOKEN_DATE: OffsetDateTime = time::macros::datetime!(2016-01-01 12:00:00 UTC);
	/// Token produced by the fixture credentials at [`TEST_TOKEN_DATE`].
	pub const TEST_TOKEN: &str = concat!(
		"NbbeCkf3RIdSfOgRvuFUxr1ge8f23EYdj644ri",
		"LVpPbX9ILo6fCU0XrzmUdUonLBmAe3DLk5ICsI",
		"3B8jsRt8xG3LRl+uUp9ZieGvyBXUjOz/DAYmSl",
		"SamEUsSVo+zjO72nXBgvsMnzpxpKNY2Cxjrg==",
	);

	/// Builds the fixture credentials rooted at `base_uri`.
	pub fn test_credentials(base_uri: &str) -> Credentials {
		Credentials::builder(base_uri, TEST_USERNAME, TEST_API_KEY, TEST_ENCRYPTION_KEY, TEST_IV)
			.build()
			.expect("Fixture credentials should always validate.")
	}

	/// Clock pinned at [`TEST_TOKEN_DATE`].
	pub fn test_clock() -> ManualClock {
		ManualClock::new(TEST_TOKEN_DATE)
	}

	/// Builds a reqwest transport that trusts the self-signed certificate `httpmock` serves.
	#[cfg(feature = "reqwest")]
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`Client`] over [`test_reqwest_http_client`] with the fixture credentials
	/// rooted at `base_uri` and the fixture clock.
	#[cfg(feature = "reqwest")]
	pub fn build_reqwest_test_client(base_uri: &str) -> Client<ReqwestHttpClient> {
		Client::<ReqwestHttpClient>::with_http_client(
			test_credentials(base_uri),
			test_reqwest_http_client(),
		)
		.with_clock(test_clock())
	}

	/// Transport that records every request and answers with one canned response.
	#[derive(Debug)]
	pub struct RecordingHttpClient {
		reply: HttpResponse,
		requests: Mutex<Vec<HttpRequest>>,
	}
	impl RecordingHttpClient {
		/// Creates a transport replying with `status` and `body` to every request.
		pub fn replying(status: u16, body: impl Into<Vec<u8>>) -> Self {
			Self { reply: HttpResponse::new(status, body), requests: Default::default() }
		}

		/// Returns every request observed so far.
		pub fn recorded(&self) -> Vec<HttpRequest> {
			self.requests.lock().clone()
		}

		/// Returns the only request observed, panicking if there were zero or several.
		pub fn single_request(&self) -> HttpRequest {
			let requests = self.recorded();

			assert_eq!(requests.len(), 1, "Exactly one request should have been dispatched.");

			requests.into_iter().next().expect("Length was checked above.")
		}
	}
	impl FaxHttpClient for RecordingHttpClient {
		type TransportError = Infallible;

		fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
			self.requests.lock().push(request);

			let reply = self.reply.clone();

			Box::pin(async move { Ok(reply) })
		}
	}

	/// Constructs a [`Client`] over a [`RecordingHttpClient`] with the fixture credentials and
	/// clock, returning the transport so tests can inspect outbound requests.
	pub fn build_recording_test_client(
		status: u16,
		body: impl Into<Vec<u8>>,
	) -> (Client<RecordingHttpClient>, Arc<RecordingHttpClient>) {
		let transport = Arc::new(RecordingHttpClient::replying(status, body));
		let client = Client::<RecordingHttpClient>::with_http_client(
			test_credentials(TEST_BASE_URI),
			transport.clone(),
		)
		.with_clock(test_clock());

		(client, transport)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		path::Path,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use time;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
