//! Typed API test fixture declarations.
//!
//! A fixture names an endpoint and the payloads a test harness submits to it
//! with create (POST) and delete (DELETE) requests. Executing fixtures is the
//! harness's job; this crate only defines and loads them.

pub mod fixture;
pub mod loader;

pub use fixture::{ApiFixture, FieldValue, Payload, Scalar};
pub use loader::{load_fixture, load_fixtures, FixtureError};
