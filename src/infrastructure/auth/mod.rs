//! Authentication infrastructure module
//!
//! JWT access token issuance for login.

mod jwt;

pub use jwt::{AccessClaims, JwtConfig, JwtService, TokenIssuer};
