#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
pub mod controller;
mod error;
pub mod row;

pub use api::google_books::{ImageLinks, IndustryIdentifier, MAX_RESULTS, Volume, VolumeInfo};
pub use error::{Error, ErrorKind};

use log::trace;

type Client = reqwest::blocking::Client;

/// Search for volumes matching a free-text `query` using the default API.
///
/// Issues a single best-effort request for up to [`MAX_RESULTS`] matches:
/// no retry, no timeout policy and no de-duplication of concurrent calls.
/// A query matching nothing returns an empty list, not an error.
///
/// # Errors
///
/// An `Err` is returned when the request cannot complete.
/// An `Err` is returned when the response cannot be parsed as a volume list.
#[inline]
pub fn search_volumes(query: &str) -> Result<Vec<Volume>, Error> {
    trace!("Search volumes with query of '{query}'");
    api::google_books::search_volumes::<Client>(query)
}
