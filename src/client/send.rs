//! Outgoing fax operations: document upload and send-from-URL.

// self
use crate::{
	_prelude::*,
	api::{self, ApiParams, FileFormat, Operation, ParamList},
	client::{self, Client},
	error::TransportError,
	http::{FaxHttpClient, HttpMethod, MultipartFile, RequestBody},
	obs::CallSpan,
};

const FILE_FIELD: &str = "file";

impl<C> Client<C>
where
	C: ?Sized + FaxHttpClient,
{
	/// Uploads the document at `file_path` and queues it for `number`.
	///
	/// The file is sent as the multipart field `file` named after the path's final component.
	/// Empty `barcode` / `options` lists are left out of the request. A read failure is reported
	/// as [`TransportError::Io`] and counted as a failed call.
	pub async fn send_fax(
		&self,
		name: &str,
		number: &str,
		file_path: impl AsRef<Path>,
		barcode: &ParamList,
		options: &ParamList,
	) -> Result<Value> {
		let path = file_path.as_ref();

		self.send_upload(name, number, barcode, options, || {
			let contents = std::fs::read(path).map_err(TransportError::Io)?;
			let file_name = path
				.file_name()
				.map(|file_name| file_name.to_string_lossy().into_owned())
				.unwrap_or_default();

			Ok(MultipartFile { field: FILE_FIELD.into(), file_name, contents })
		})
		.await
	}

	/// Uploads an in-memory document and queues it for `number`.
	pub async fn send_fax_bytes(
		&self,
		name: &str,
		number: &str,
		file_name: impl Into<String>,
		contents: impl Into<Vec<u8>>,
		barcode: &ParamList,
		options: &ParamList,
	) -> Result<Value> {
		let file = MultipartFile {
			field: FILE_FIELD.into(),
			file_name: file_name.into(),
			contents: contents.into(),
		};

		self.send_upload(name, number, barcode, options, || Ok(file)).await
	}

	async fn send_upload<F>(
		&self,
		name: &str,
		number: &str,
		barcode: &ParamList,
		options: &ParamList,
		load: F,
	) -> Result<Value>
	where
		F: FnOnce() -> Result<MultipartFile>,
	{
		const OPERATION: Operation = Operation::SendFax;

		let span = CallSpan::new(OPERATION, "send_fax");

		client::observe(OPERATION, &span, async {
			let body = RequestBody::Multipart(load()?);
			let mut params = recipient_params(name, number);

			push_lists(&mut params, barcode, options);

			let response =
				self.dispatch(OPERATION, HttpMethod::Post, &params, body, &span).await?;

			api::json_response(response.status, &response.body)
		})
		.await
	}

	/// Queues the document the API downloads from `url` for `number`.
	///
	/// `file_type` is sent as `Pdf` when it equals `pdf` ignoring case and as `Tif` otherwise.
	/// The request has no body; every argument travels in the query string.
	pub async fn send_fax_from_url(
		&self,
		name: &str,
		number: &str,
		file_type: &str,
		url: &str,
		barcode: &ParamList,
		options: &ParamList,
	) -> Result<Value> {
		const OPERATION: Operation = Operation::SendFaxFromUrl;

		let span = CallSpan::new(OPERATION, "send_fax_from_url");

		client::observe(OPERATION, &span, async {
			let mut params = recipient_params(name, number);

			params.push("FileType", FileFormat::from_file_type(file_type));
			params.push("FileDataURL", url);
			push_lists(&mut params, barcode, options);

			let response = self
				.dispatch(OPERATION, HttpMethod::Post, &params, RequestBody::Empty, &span)
				.await?;

			api::json_response(response.status, &response.body)
		})
		.await
	}
}

fn recipient_params(name: &str, number: &str) -> ApiParams {
	let mut params = ApiParams::new();

	params.push("RecipientName", name);
	params.push("RecipientFax", number);

	params
}

fn push_lists(params: &mut ApiParams, barcode: &ParamList, options: &ParamList) {
	params.push_list("BarcodeOption", barcode);
	params.push_list("OptionalParams", options);
}

#[cfg(test)]
mod tests {
	// std
	use std::io::Write;
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::_preludet::*;

	const RECEIPT: &str = "{\"SendFaxQueueId\":\"C3A81B76E088270C55BCFB7ABC158822\",\"isSuccess\":true,\"message\":\"Fax is received and being processed\"}";

	fn barcode() -> ParamList {
		ParamList::new()
			.with("BarcodeData", 12345)
			.with("BarcodeX", 100)
			.with("BarcodeY", 100)
			.with("BarcodePage", 1)
			.with("BarcodeScale", 3)
	}

	fn options() -> ParamList {
		ParamList::new()
			.with("CoverPageName", "Default")
			.with("CoverPageSubject", "Test")
			.with("CoverPageReference", "Test1234")
			.with("TrackingCode", 1234)
	}

	fn expected_prefix(operation: &str) -> String {
		format!(
			"{TEST_BASE_URI}/{operation}?token={}&ApiKey={TEST_API_KEY}",
			url::form_urlencoded::byte_serialize(TEST_TOKEN.as_bytes()).collect::<String>(),
		)
	}

	const LISTS_QUERY: &str = "&BarcodeOption=BarcodeData%3D12345%3BBarcodeX%3D100%3BBarcodeY%3D100%3BBarcodePage%3D1%3BBarcodeScale%3D3\
		&OptionalParams=CoverPageName%3DDefault%3BCoverPageSubject%3DTest%3BCoverPageReference%3DTest1234%3BTrackingCode%3D1234";

	fn expected_receipt() -> Value {
		json!({
			"SendFaxQueueId": "C3A81B76E088270C55BCFB7ABC158822",
			"isSuccess": true,
			"message": "Fax is received and being processed",
		})
	}

	#[tokio::test]
	async fn send_fax_uploads_file_and_returns_reply_verbatim() {
		let path = std::env::temp_dir().join("sfax-client-send-fax-test.pdf");

		std::fs::File::create(&path)
			.and_then(|mut file| file.write_all(b"%PDF-1.4 test fax"))
			.expect("Temporary fax document should be written.");

		let (client, transport) = build_recording_test_client(200, RECEIPT);
		let reply = client
			.send_fax("Test Recipient", "19999999999", &path, &barcode(), &options())
			.await
			.expect("Send should succeed.");
		let request = transport.single_request();

		assert_eq!(reply, expected_receipt());
		assert_eq!(request.method, HttpMethod::Post);
		assert_eq!(
			request.uri,
			format!(
				"{}&RecipientName=Test+Recipient&RecipientFax=19999999999{LISTS_QUERY}",
				expected_prefix("SendFax")
			)
		);

		match request.body {
			RequestBody::Multipart(file) => {
				assert_eq!(file.field, "file");
				assert_eq!(file.file_name, "sfax-client-send-fax-test.pdf");
				assert_eq!(file.contents, b"%PDF-1.4 test fax");
			},
			other => panic!("Unexpected request body: {other:?}."),
		}

		let _ = std::fs::remove_file(&path);
	}

	#[tokio::test]
	async fn send_fax_reports_missing_files_without_calling_the_api() {
		let (client, transport) = build_recording_test_client(200, RECEIPT);
		let err = client
			.send_fax(
				"Test Recipient",
				"19999999999",
				"/definitely/not/here.pdf",
				&ParamList::new(),
				&ParamList::new(),
			)
			.await
			.expect_err("Missing file must fail.");

		assert!(matches!(err, Error::Transport(TransportError::Io(_))));
		assert!(transport.recorded().is_empty());
	}

	#[cfg(feature = "metrics")]
	#[test]
	fn missing_file_is_counted_as_a_failed_call() {
		// crates.io
		use metrics::{
			Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString,
			Unit,
		};

		struct OutcomeCounter {
			outcome: String,
			seen: Arc<Mutex<Vec<String>>>,
		}
		impl CounterFn for OutcomeCounter {
			fn increment(&self, _: u64) {
				self.seen.lock().push(self.outcome.clone());
			}

			fn absolute(&self, _: u64) {}
		}

		#[derive(Default)]
		struct OutcomeRecorder {
			seen: Arc<Mutex<Vec<String>>>,
		}
		impl Recorder for OutcomeRecorder {
			fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
				let outcome = key
					.labels()
					.find(|label| label.key() == "outcome")
					.map(|label| label.value().to_owned())
					.unwrap_or_default();

				Counter::from_arc(Arc::new(OutcomeCounter { outcome, seen: self.seen.clone() }))
			}

			fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
				Gauge::noop()
			}

			fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
				Histogram::noop()
			}
		}

		let recorder = OutcomeRecorder::default();
		let runtime = tokio::runtime::Builder::new_current_thread()
			.build()
			.expect("Current-thread runtime should build.");
		let (client, transport) = build_recording_test_client(200, RECEIPT);
		let result = metrics::with_local_recorder(&recorder, || {
			runtime.block_on(client.send_fax(
				"Test Recipient",
				"19999999999",
				"/definitely/not/here.pdf",
				&ParamList::new(),
				&ParamList::new(),
			))
		});

		assert!(matches!(result, Err(Error::Transport(TransportError::Io(_)))));
		assert!(transport.recorded().is_empty());
		assert_eq!(*recorder.seen.lock(), ["attempt", "failure"]);
	}

	#[tokio::test]
	async fn send_fax_bytes_omits_empty_lists() {
		let (client, transport) = build_recording_test_client(200, RECEIPT);

		client
			.send_fax_bytes(
				"Kaylee",
				"19999999999",
				"fax.tif",
				b"II*\0".to_vec(),
				&ParamList::new(),
				&ParamList::new(),
			)
			.await
			.expect("Send should succeed.");

		assert_eq!(
			transport.single_request().uri,
			format!("{}&RecipientName=Kaylee&RecipientFax=19999999999", expected_prefix("SendFax"))
		);
	}

	#[tokio::test]
	async fn send_fax_from_url_sends_everything_in_the_query() {
		let (client, transport) = build_recording_test_client(200, RECEIPT);
		let reply = client
			.send_fax_from_url(
				"Test Recipient",
				"19999999999",
				"Pdf",
				"http://www.example.com/test.pdf",
				&barcode(),
				&options(),
			)
			.await
			.expect("Send should succeed.");
		let request = transport.single_request();

		assert_eq!(reply, expected_receipt());
		assert_eq!(request.method, HttpMethod::Post);
		assert_eq!(request.body, RequestBody::Empty);
		assert_eq!(
			request.uri,
			format!(
				"{}&RecipientName=Test+Recipient&RecipientFax=19999999999&FileType=Pdf\
				 &FileDataURL=http%3A%2F%2Fwww.example.com%2Ftest.pdf{LISTS_QUERY}",
				expected_prefix("SendFaxFromURL")
			)
		);
	}

	#[tokio::test]
	async fn send_fax_from_url_defaults_unknown_types_to_tiff() {
		let (client, transport) = build_recording_test_client(200, RECEIPT);

		client
			.send_fax_from_url(
				"R",
				"1",
				"docx",
				"http://www.example.com/a.docx",
				&ParamList::new(),
				&ParamList::new(),
			)
			.await
			.expect("Send should succeed.");

		assert!(transport.single_request().uri.contains("&FileType=Tif&"));
	}

	#[tokio::test]
	async fn send_rejects_non_200_replies() {
		let (client, _) = build_recording_test_client(500, RECEIPT);
		let err = client
			.send_fax_from_url(
				"R",
				"1",
				"pdf",
				"http://www.example.com/a.pdf",
				&ParamList::new(),
				&ParamList::new(),
			)
			.await
			.expect_err("Non-200 must fail.");

		assert!(matches!(err, Error::InvalidResponse { status: 500 }));
	}
}
