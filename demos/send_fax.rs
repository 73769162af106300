//! Demonstrates sending a fax from a URL, paging through the outbound listing, and downloading
//! the sent document with the default reqwest transport against a local mock API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use sfax_client::{
	api::{FaxListing, OutboundFaxItem, ParamList, SendFaxReceipt, decode_as},
	auth::Credentials,
	client::{Client, ReceiveFaxQuery},
	http::ReqwestHttpClient,
	reqwest,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let send_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/SendFaxFromURL");
			then.status(200).header("content-type", "application/json").body(
				"{\"SendFaxQueueId\":\"DEMO-QUEUE-1\",\"isSuccess\":true,\"message\":\"Fax is received and being processed\"}",
			);
		})
		.await;
	let list_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/ReceiveOutboundFax");
			then.status(200).header("content-type", "application/json").body(
				"{\"OutboundFaxItems\":[{\"SendFaxQueueId\":\"DEMO-QUEUE-1\",\"FaxId\":42,\"IsSuccess\":true}],\"FaxCount\":1,\"LastWatermark\":7,\"HasMoreItems\":false,\"isSuccess\":true,\"message\":\"Success\"}",
			);
		})
		.await;
	let download_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/DownloadOutboundFaxAsPdf").query_param("FaxId", "42");
			then.status(200).header("content-type", "application/pdf").body("%PDF-1.4 demo");
		})
		.await;
	let credentials = Credentials::builder(
		server.url("/api"),
		"demo-user",
		"DEMO0000000000000000000000000000",
		"0123456789abcdef0123456789abcdef",
		"fedcba9876543210",
	)
	.build()?;
	let http_client = ReqwestHttpClient::with_client(
		reqwest::Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.timeout(std::time::Duration::from_secs(30))
			.build()?,
	);
	let client = <Client<ReqwestHttpClient>>::with_http_client(credentials, http_client);
	let barcode = ParamList::new().with("BarcodeData", 12345).with("BarcodePage", 1);
	let options = ParamList::new().with("TrackingCode", "demo-1");
	let reply = client
		.send_fax_from_url(
			"Demo Recipient",
			"19999999999",
			"pdf",
			"https://www.example.com/demo.pdf",
			&barcode,
			&options,
		)
		.await?;
	let receipt: SendFaxReceipt = decode_as(&reply)?;

	println!("Queued fax: {:?}", receipt.send_fax_queue_id);

	let listing: FaxListing<OutboundFaxItem> =
		decode_as(&client.receive_outbound_fax(&ReceiveFaxQuery::new()).await?)?;

	for item in &listing.items {
		let download = client.download_outbound_fax_as_pdf(item.fax_id).await?;

		match download.document() {
			Some(document) => println!(
				"Fax {} downloaded: {} bytes of {}.",
				item.fax_id,
				document.bytes.len(),
				document.content_type()
			),
			None => println!("Fax {} not available: {:?}.", item.fax_id, download.json()),
		}
	}

	send_mock.assert_async().await;
	list_mock.assert_async().await;
	download_mock.assert_async().await;

	Ok(())
}
