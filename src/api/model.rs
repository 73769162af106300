//! Typed views over common JSON replies.
//!
//! Operations return the untyped [`Value`] exactly as the API sent it; these models are an
//! opt-in convenience via [`decode_as`](crate::api::decode_as). Fields the API may omit are
//! defaulted so older or trimmed replies still decode.

// self
use crate::_prelude::*;

/// Reply to `SendFax` and `SendFaxFromURL`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendFaxReceipt {
	/// Queue identifier assigned to the outgoing fax.
	#[serde(rename = "SendFaxQueueId", default)]
	pub send_fax_queue_id: Option<String>,
	/// Whether the API accepted the request.
	#[serde(rename = "isSuccess")]
	pub is_success: bool,
	/// Human-readable status message.
	#[serde(default)]
	pub message: String,
}

/// Page of faxes returned by `ReceiveInboundFax` or `ReceiveOutboundFax`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaxListing<T> {
	/// Faxes in this page.
	#[serde(rename = "InboundFaxItems", alias = "OutboundFaxItems", default = "Vec::new")]
	pub items: Vec<T>,
	/// Number of faxes in this page.
	#[serde(rename = "FaxCount", default)]
	pub fax_count: u64,
	/// Watermark to pass back to fetch the next page.
	#[serde(rename = "LastWatermark", default)]
	pub last_watermark: Option<Value>,
	/// Whether another page is available.
	#[serde(rename = "HasMoreItems", default)]
	pub has_more_items: bool,
	/// Whether the API accepted the request.
	#[serde(rename = "isSuccess")]
	pub is_success: bool,
	/// Human-readable status message.
	#[serde(default)]
	pub message: String,
}

/// Received fax summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundFaxItem {
	/// Fax identifier, usable with the download operations.
	pub fax_id: u64,
	/// Page count.
	#[serde(default)]
	pub pages: u32,
	/// Receiving number.
	#[serde(default)]
	pub to_fax_number: String,
	/// Sending number.
	#[serde(default)]
	pub from_fax_number: String,
	/// Sender's station identifier.
	#[serde(rename = "FromCSID", default)]
	pub from_csid: String,
	/// Reception time in ISO 8601.
	#[serde(default)]
	pub fax_date_iso: Option<String>,
	/// Success flag (`1` on success).
	#[serde(default)]
	pub fax_success: i64,
	/// Barcode details, passed through untouched.
	#[serde(default)]
	pub barcodes: Option<Value>,
	/// Watermark of this item.
	#[serde(default)]
	pub watermark_id: Option<Value>,
}

/// Sent fax summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundFaxItem {
	/// Queue identifier assigned when the fax was sent.
	#[serde(default)]
	pub send_fax_queue_id: String,
	/// Fax identifier, usable with the download operations.
	pub fax_id: u64,
	/// Whether transmission succeeded.
	#[serde(default)]
	pub is_success: bool,
	/// Vendor result code.
	#[serde(default)]
	pub result_code: i64,
	/// Vendor error code.
	#[serde(default)]
	pub error_code: i64,
	/// Vendor result message.
	#[serde(default)]
	pub result_message: String,
	/// Recipient name.
	#[serde(default)]
	pub recipient_name: String,
	/// Recipient number.
	#[serde(default)]
	pub recipient_fax: String,
	/// Tracking code supplied when sending.
	#[serde(default)]
	pub tracking_code: String,
	/// Page count.
	#[serde(default)]
	pub pages: u32,
	/// Dial attempts.
	#[serde(default)]
	pub attempts: u32,
	/// Transmission time in ISO 8601.
	#[serde(default)]
	pub fax_date_iso: Option<String>,
	/// Watermark of this item.
	#[serde(default)]
	pub watermark_id: Option<Value>,
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::api::decode_as;

	#[test]
	fn receipt_decodes_send_reply() {
		let receipt: SendFaxReceipt = decode_as(&json!({
			"SendFaxQueueId": "C3A81B76E088270C55BCFB7ABC158822",
			"isSuccess": true,
			"message": "Fax is received and being processed",
		}))
		.expect("Receipt should decode.");

		assert!(receipt.is_success);
		assert_eq!(receipt.send_fax_queue_id.as_deref(), Some("C3A81B76E088270C55BCFB7ABC158822"));
	}

	#[test]
	fn inbound_listing_decodes() {
		let listing: FaxListing<InboundFaxItem> = decode_as(&json!({
			"InboundFaxItems": [{
				"FaxId": 10000001,
				"Pages": 1,
				"ToFaxNumber": "19999999999",
				"FromFaxNumber": "19999999999",
				"FromCSID": "9999999999",
				"FaxDateUtc": "01/01/2016 4:04:13 PM",
				"FaxSuccess": 1,
				"Barcodes": { "FirstBarcodePage": 0, "BarcodeItems": [] },
				"FaxDateIso": "2016-01-01T16:04:13Z",
				"WatermarkId": 20000001,
			}],
			"FaxCount": 1,
			"LastWatermark": 20000001,
			"HasMoreItems": false,
			"isSuccess": true,
			"message": "Success",
		}))
		.expect("Inbound listing should decode.");

		assert_eq!(listing.items.len(), 1);
		assert_eq!(listing.items[0].fax_id, 10000001);
		assert_eq!(listing.items[0].from_csid, "9999999999");
		assert_eq!(listing.last_watermark, Some(json!(20000001)));
		assert!(!listing.has_more_items);
	}

	#[test]
	fn outbound_listing_decodes_through_alias() {
		let listing: FaxListing<OutboundFaxItem> = decode_as(&json!({
			"OutboundFaxItems": [{
				"SendFaxQueueId": "ABC123",
				"IsSuccess": true,
				"ResultCode": 0,
				"ErrorCode": 0,
				"ResultMessage": "OK",
				"RecipientName": "Malcolm Reynolds",
				"RecipientFax": "1-9999999999",
				"TrackingCode": "",
				"FaxId": 10000001,
				"Pages": 1,
				"Attempts": 1,
				"BarcodeItems": null,
			}],
			"FaxCount": 1,
			"LastWatermark": 20000001,
			"HasMoreItems": true,
			"isSuccess": true,
			"message": "Success",
		}))
		.expect("Outbound listing should decode.");

		assert_eq!(listing.items[0].recipient_name, "Malcolm Reynolds");
		assert!(listing.has_more_items);
	}
}
