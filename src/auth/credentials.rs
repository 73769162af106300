//! Account credentials and their validating builder.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Required AES-256 key length in bytes.
pub const ENCRYPTION_KEY_LEN: usize = 32;
/// Required CBC initialization vector length in bytes.
pub const IV_LEN: usize = 16;

/// Immutable account credentials used to derive every request token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
	base_uri: String,
	username: String,
	api_key: Secret,
	encryption_key: Secret,
	iv: Secret,
	security_context: String,
	token_client: String,
}
impl Credentials {
	/// Starts a builder for the mandatory credential fields.
	pub fn builder(
		base_uri: impl Into<String>,
		username: impl Into<String>,
		api_key: impl Into<String>,
		encryption_key: impl Into<String>,
		iv: impl Into<String>,
	) -> CredentialsBuilder {
		CredentialsBuilder::new(base_uri, username, api_key, encryption_key, iv)
	}

	/// API root without a trailing slash.
	pub fn base_uri(&self) -> &str {
		&self.base_uri
	}

	/// Account username.
	pub fn username(&self) -> &str {
		&self.username
	}

	/// API key sent alongside every token.
	pub fn api_key(&self) -> &Secret {
		&self.api_key
	}

	/// AES-256 key used to encrypt tokens.
	pub fn encryption_key(&self) -> &Secret {
		&self.encryption_key
	}

	/// CBC initialization vector used to encrypt tokens.
	pub fn iv(&self) -> &Secret {
		&self.iv
	}

	/// Security context embedded in the token; usually empty.
	pub fn security_context(&self) -> &str {
		&self.security_context
	}

	/// Token client identifier; usually empty and not part of the token plaintext.
	pub fn token_client(&self) -> &str {
		&self.token_client
	}
}

/// Builder for [`Credentials`] values.
#[derive(Debug)]
pub struct CredentialsBuilder {
	/// API root, e.g. `https://api.sfaxme.com/api`.
	pub base_uri: String,
	/// Account username.
	pub username: String,
	/// API key.
	pub api_key: Secret,
	/// AES-256 key (32 bytes).
	pub encryption_key: Secret,
	/// CBC initialization vector (16 bytes).
	pub iv: Secret,
	/// Optional security context.
	pub security_context: String,
	/// Optional token client identifier.
	pub token_client: String,
}
impl CredentialsBuilder {
	/// Creates a builder with empty security context and token client.
	pub fn new(
		base_uri: impl Into<String>,
		username: impl Into<String>,
		api_key: impl Into<String>,
		encryption_key: impl Into<String>,
		iv: impl Into<String>,
	) -> Self {
		Self {
			base_uri: base_uri.into(),
			username: username.into(),
			api_key: Secret::new(api_key),
			encryption_key: Secret::new(encryption_key),
			iv: Secret::new(iv),
			security_context: String::new(),
			token_client: String::new(),
		}
	}

	/// Sets the security context embedded in every token.
	pub fn security_context(mut self, context: impl Into<String>) -> Self {
		self.security_context = context.into();

		self
	}

	/// Sets the token client identifier.
	pub fn token_client(mut self, client: impl Into<String>) -> Self {
		self.token_client = client.into();

		self
	}

	/// Validates the inputs and produces [`Credentials`].
	pub fn build(self) -> Result<Credentials, ConfigError> {
		let parsed = Url::parse(&self.base_uri)
			.map_err(|source| ConfigError::InvalidBaseUri { source })?;

		if parsed.cannot_be_a_base() {
			return Err(ConfigError::UnsupportedBaseUri { uri: self.base_uri });
		}

		check_len("encryption key", ENCRYPTION_KEY_LEN, &self.encryption_key)?;
		check_len("initialization vector", IV_LEN, &self.iv)?;

		let base_uri = self.base_uri.trim_end_matches('/').to_owned();

		Ok(Credentials {
			base_uri,
			username: self.username,
			api_key: self.api_key,
			encryption_key: self.encryption_key,
			iv: self.iv,
			security_context: self.security_context,
			token_client: self.token_client,
		})
	}
}

fn check_len(field: &'static str, expected: usize, secret: &Secret) -> Result<(), ConfigError> {
	if secret.len() == expected {
		Ok(())
	} else {
		Err(ConfigError::InvalidKeyMaterial { field, expected, actual: secret.len() })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::*;

	fn builder(base_uri: &str) -> CredentialsBuilder {
		Credentials::builder(base_uri, TEST_USERNAME, TEST_API_KEY, TEST_ENCRYPTION_KEY, TEST_IV)
	}

	#[test]
	fn build_trims_trailing_slash_and_keeps_optional_fields() {
		let credentials = builder("https://www.example.com/api/")
			.security_context("ctx")
			.token_client("tc")
			.build()
			.expect("Credentials should build.");

		assert_eq!(credentials.base_uri(), "https://www.example.com/api");
		assert_eq!(credentials.security_context(), "ctx");
		assert_eq!(credentials.token_client(), "tc");
		assert_eq!(credentials.api_key().expose(), TEST_API_KEY);
	}

	#[test]
	fn build_rejects_short_key_material() {
		let err = Credentials::builder(TEST_BASE_URI, TEST_USERNAME, TEST_API_KEY, "short", TEST_IV)
			.build()
			.expect_err("Short encryption key must be rejected.");

		assert!(matches!(
			err,
			ConfigError::InvalidKeyMaterial { field: "encryption key", expected: 32, actual: 5 }
		));

		let err = Credentials::builder(
			TEST_BASE_URI,
			TEST_USERNAME,
			TEST_API_KEY,
			TEST_ENCRYPTION_KEY,
			"0123456789",
		)
		.build()
		.expect_err("Short IV must be rejected.");

		assert!(matches!(err, ConfigError::InvalidKeyMaterial { expected: 16, actual: 10, .. }));
	}

	#[test]
	fn build_rejects_unusable_base_uri() {
		assert!(matches!(
			builder("not a uri").build(),
			Err(ConfigError::InvalidBaseUri { .. })
		));
		assert!(matches!(
			builder("mailto:fax@example.com").build(),
			Err(ConfigError::UnsupportedBaseUri { .. })
		));
	}

	#[test]
	fn debug_output_redacts_secrets() {
		let rendered = format!("{:?}", test_credentials(TEST_BASE_URI));

		assert!(!rendered.contains(TEST_API_KEY));
		assert!(!rendered.contains(TEST_ENCRYPTION_KEY));
		assert!(!rendered.contains(TEST_IV));
		assert!(rendered.contains(TEST_USERNAME));
	}
}
