//! # tagmatch API
//!
//! REST surface over the tagmatch recommendation engine.
//!
//! Most endpoints are stateless: the caller sends the source entity and the
//! candidate pool with each request. When the server was started with a
//! catalog snapshot, a few read-only lookup endpoints serve from it.

pub mod rest;

pub use rest::{configure, ApiState, RestApi};
