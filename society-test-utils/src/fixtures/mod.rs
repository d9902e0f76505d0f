//! Response bodies and mock endpoints for the society API.
//!
//! - `factory` - JSON records shaped like the ones the API stores
//! - `mockito` - endpoint helpers wrapping bodies in the `{ data, error }` envelope

pub mod factory;
pub mod mockito;

use ::mockito::ServerGuard;

pub struct ApiFixtures<'a> {
    pub server: &'a mut ServerGuard,
}
