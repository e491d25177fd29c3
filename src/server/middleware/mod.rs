//! Request-scoped helpers shared by the HTTP handlers.
//!
//! - `session` - typed access to the values stored in the user's session
//! - `auth` - resolves the logged in user or rejects the request
//! - `validation` - JSON body extractor that runs `validator` rules

pub mod auth;
pub mod session;
pub mod validation;

#[cfg(test)]
mod test;
