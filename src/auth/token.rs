//! Per-request token derivation.
//!
//! The API authenticates every call with a short-lived token: the plaintext
//! `Context=<ctx>&Username=<user>&ApiKey=<key>&GenDT=<utc timestamp>` encrypted with
//! AES-256-CBC (PKCS#7 padding) under the account's key and IV, then base64 encoded.
//! Tokens are time-bound, so a fresh one is derived for every request and never stored.

// crates.io
use aes::Aes256;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use cbc::cipher::{BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
// self
use crate::{
	_prelude::*,
	api::timestamp,
	auth::{Credentials, ENCRYPTION_KEY_LEN, IV_LEN, Secret},
	error::ConfigError,
};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// Encrypted, base64-encoded request token.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(Secret);
impl Token {
	/// Derives the token for `credentials` at instant `now` (converted to UTC).
	pub fn generate(credentials: &Credentials, now: OffsetDateTime) -> Result<Self> {
		let plaintext = plaintext(credentials, now)?;
		let cipher = Aes256CbcEnc::new_from_slices(
			credentials.encryption_key().expose().as_bytes(),
			credentials.iv().expose().as_bytes(),
		)
		.map_err(|_| ConfigError::InvalidKeyMaterial {
			field: "encryption key or initialization vector",
			expected: ENCRYPTION_KEY_LEN + IV_LEN,
			actual: credentials.encryption_key().len() + credentials.iv().len(),
		})?;
		let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

		Ok(Self(Secret::new(BASE64.encode(ciphertext))))
	}

	/// Returns the encoded token. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		self.0.expose()
	}
}
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Token").field(&"<redacted>").finish()
	}
}

fn plaintext(credentials: &Credentials, now: OffsetDateTime) -> Result<String> {
	let generated_at = timestamp::format_utc(now)?;

	Ok(format!(
		"Context={}&Username={}&ApiKey={}&GenDT={generated_at}",
		credentials.security_context(),
		credentials.username(),
		credentials.api_key().expose(),
	))
}
