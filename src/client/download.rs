//! Fax document downloads.

// self
use crate::{
	_prelude::*,
	api::{self, ApiParams, Direction, FaxDownload, FileFormat, Operation},
	client::{self, Client},
	http::{FaxHttpClient, HttpMethod, RequestBody},
	obs::CallSpan,
};

impl<C> Client<C>
where
	C: ?Sized + FaxHttpClient,
{
	/// Downloads a received fax as PDF.
	pub async fn download_inbound_fax_as_pdf(&self, fax_id: u64) -> Result<FaxDownload> {
		self.download_fax(Direction::Inbound, FileFormat::Pdf, fax_id).await
	}

	/// Downloads a received fax as TIFF.
	pub async fn download_inbound_fax_as_tif(&self, fax_id: u64) -> Result<FaxDownload> {
		self.download_fax(Direction::Inbound, FileFormat::Tif, fax_id).await
	}

	/// Downloads a sent fax as PDF.
	pub async fn download_outbound_fax_as_pdf(&self, fax_id: u64) -> Result<FaxDownload> {
		self.download_fax(Direction::Outbound, FileFormat::Pdf, fax_id).await
	}

	/// Downloads a sent fax as TIFF.
	pub async fn download_outbound_fax_as_tif(&self, fax_id: u64) -> Result<FaxDownload> {
		self.download_fax(Direction::Outbound, FileFormat::Tif, fax_id).await
	}

	/// Downloads fax `fax_id` in `direction` as `format`.
	///
	/// A 200 reply that is not JSON is returned byte-for-byte as a document; a JSON reply
	/// (usually an API-level failure such as an unknown id) is returned as is. Any other status
	/// is [`Error::InvalidResponse`].
	pub async fn download_fax(
		&self,
		direction: Direction,
		format: FileFormat,
		fax_id: u64,
	) -> Result<FaxDownload> {
		let operation = Operation::download(direction, format);
		let span = CallSpan::new(operation, "download_fax");

		client::observe(operation, &span, async {
			let mut params = ApiParams::new();

			params.push("FaxId", fax_id);

			let response = self
				.dispatch(operation, HttpMethod::Get, &params, RequestBody::Empty, &span)
				.await?;

			api::download_response(response.status, response.body, format)
		})
		.await
	}
}
