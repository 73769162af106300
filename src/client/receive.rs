//! Fax listing operations.

// self
use crate::{
	_prelude::*,
	api::{self, ApiParams, Direction, Operation, timestamp},
	client::{self, Client},
	http::{FaxHttpClient, HttpMethod, RequestBody},
	obs::CallSpan,
};

/// Filters for a fax listing; every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReceiveFaxQuery {
	/// Watermark returned by a previous page; listing resumes after it.
	pub watermark_id: Option<u64>,
	/// Earliest fax time to include.
	pub start_date: Option<OffsetDateTime>,
	/// Latest fax time to include.
	pub end_date: Option<OffsetDateTime>,
	/// Page size. Only sent together with a watermark.
	pub max_items: Option<u32>,
}
impl ReceiveFaxQuery {
	/// Creates an unfiltered query.
	pub fn new() -> Self {
		Self::default()
	}

	/// Resumes the listing after `watermark_id`.
	pub fn watermark_id(mut self, watermark_id: u64) -> Self {
		self.watermark_id = Some(watermark_id);

		self
	}

	/// Sets the earliest fax time to include.
	pub fn start_date(mut self, at: OffsetDateTime) -> Self {
		self.start_date = Some(at);

		self
	}

	/// Sets the latest fax time to include.
	pub fn end_date(mut self, at: OffsetDateTime) -> Self {
		self.end_date = Some(at);

		self
	}

	/// Parses and sets the earliest fax time to include.
	///
	/// See [`timestamp::parse_date`] for the accepted shapes.
	pub fn start_date_str(self, raw: &str) -> Result<Self> {
		Ok(self.start_date(timestamp::parse_date(raw)?))
	}

	/// Parses and sets the latest fax time to include.
	pub fn end_date_str(self, raw: &str) -> Result<Self> {
		Ok(self.end_date(timestamp::parse_date(raw)?))
	}

	/// Sets the page size.
	pub fn max_items(mut self, max_items: u32) -> Self {
		self.max_items = Some(max_items);

		self
	}

	/// Renders the query as API parameters.
	///
	/// `MaxItems` is emitted if and only if a watermark is set, falling back to `0` when no
	/// page size was given; a page size without a watermark is not sent.
	pub fn to_params(&self) -> Result<ApiParams> {
		let mut params = ApiParams::new();

		if let Some(watermark_id) = self.watermark_id {
			params.push("WatermarkId", watermark_id);
		}
		if let Some(start_date) = self.start_date {
			params.push("StartDateUTC", timestamp::format_utc(start_date)?);
		}
		if let Some(end_date) = self.end_date {
			params.push("EndDateUTC", timestamp::format_utc(end_date)?);
		}
		if self.watermark_id.is_some() {
			params.push("MaxItems", self.max_items.unwrap_or(0));
		}

		Ok(params)
	}
}

impl<C> Client<C>
where
	C: ?Sized + FaxHttpClient,
{
	/// Lists received faxes.
	pub async fn receive_inbound_fax(&self, query: &ReceiveFaxQuery) -> Result<Value> {
		self.receive_fax(Direction::Inbound, query).await
	}

	/// Lists sent faxes.
	pub async fn receive_outbound_fax(&self, query: &ReceiveFaxQuery) -> Result<Value> {
		self.receive_fax(Direction::Outbound, query).await
	}

	/// Lists faxes in `direction`; the reply carries `LastWatermark` and `HasMoreItems` for
	/// fetching the next page.
	pub async fn receive_fax(&self, direction: Direction, query: &ReceiveFaxQuery) -> Result<Value> {
		let operation = Operation::receive(direction);
		let span = CallSpan::new(operation, "receive_fax");

		client::observe(operation, &span, async {
			let params = query.to_params()?;
			let response = self
				.dispatch(operation, HttpMethod::Get, &params, RequestBody::Empty, &span)
				.await?;

			api::json_response(response.status, &response.body)
		})
		.await
	}
}
