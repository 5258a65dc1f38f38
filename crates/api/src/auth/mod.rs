//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token generation and validation. Tokens are
//!   issued by the identity provider with a shared secret; the API only
//!   verifies them.

pub mod jwt;
