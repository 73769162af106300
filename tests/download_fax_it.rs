// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use sfax_client::{
	_preludet::*,
	api::{Direction, FaxDownload, FileFormat},
	client::Client,
	http::ReqwestHttpClient,
};

const PDF_BYTES: &[u8] = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n1 0 obj\n<< /Type /Catalog >>\nendobj\n%%EOF\n";
const TIF_BYTES: &[u8] = b"II*\0\x08\0\0\0\x01\0\0\x01\x03\0\x01\0\0\0\x10\0\0\0";

fn build_client(server: &MockServer) -> Client<ReqwestHttpClient> {
	build_reqwest_test_client(&server.url("/api"))
}

#[tokio::test]
async fn downloads_return_documents_unchanged() {
	for (direction, format, bytes, content_type) in [
		(Direction::Inbound, FileFormat::Pdf, PDF_BYTES, "application/pdf"),
		(Direction::Inbound, FileFormat::Tif, TIF_BYTES, "image/tiff"),
		(Direction::Outbound, FileFormat::Pdf, PDF_BYTES, "application/pdf"),
		(Direction::Outbound, FileFormat::Tif, TIF_BYTES, "image/tiff"),
	] {
		let server = MockServer::start_async().await;
		let client = build_client(&server);
		let path = format!(
			"/api/Download{}FaxAs{}",
			match direction {
				Direction::Inbound => "Inbound",
				Direction::Outbound => "Outbound",
			},
			format
		);
		let mock = server
			.mock_async(|when, then| {
				when.method(GET)
					.path(path.as_str())
					.query_param("token", TEST_TOKEN)
					.query_param("ApiKey", TEST_API_KEY)
					.query_param("FaxId", "10000001");
				then.status(200).header("content-type", content_type).body(bytes);
			})
			.await;
		let download = client
			.download_fax(direction, format, 10000001)
			.await
			.expect("Download should succeed against the mock server.");

		mock.assert_async().await;

		let document = download.document().expect("Binary reply should be a document.");

		assert_eq!(document.bytes, bytes);
		assert_eq!(document.content_type(), content_type);
	}
}

#[tokio::test]
async fn download_returns_json_failures_as_json() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let body = json!({ "isSuccess": false, "message": "Invalid FaxId parameter." });
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/DownloadInboundFaxAsPdf").query_param("FaxId", "12345678");
			then.status(200).header("content-type", "application/json").body(body.to_string());
		})
		.await;
	let download = client
		.download_inbound_fax_as_pdf(12345678)
		.await
		.expect("JSON reply with status 200 should be returned.");

	mock.assert_async().await;

	assert_eq!(download, FaxDownload::Json(body));
}

#[tokio::test]
async fn download_rejects_bad_request() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/DownloadOutboundFaxAsTif");
			then.status(400);
		})
		.await;
	let err = client
		.download_outbound_fax_as_tif(12345678)
		.await
		.expect_err("HTTP 400 must fail.");

	mock.assert_async().await;

	assert!(matches!(err, Error::InvalidResponse { status: 400 }));
}
