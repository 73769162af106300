//! Credential models, redacted secrets, clocks, and per-request token derivation.

pub mod clock;
pub mod credentials;
pub mod secret;
pub mod token;

pub use clock::*;
pub use credentials::*;
pub use secret::*;
pub use token::*;
