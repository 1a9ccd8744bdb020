//! Loading of the roster and field trip documents.
//!
//! Each document comes from a `DataSource`, either a local file or an
//! `http(s)://` URL. Both are fetched concurrently and reshaped into a
//! `Catalog`; a failure in either aborts the whole load.

pub mod client;
pub mod error;
pub mod source;

pub use client::{load_catalog, SourceClient};
pub use error::{LoadError, Resource, LOAD_FAILURE_MESSAGE};
pub use source::DataSource;
