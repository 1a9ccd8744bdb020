//! Data models for the roster and field trip documents.
//!
//! - `Student`: one roster entry with its raw grade label
//! - `FieldTrip`: one trip record with its recorded attendee names
//! - `Catalog`: the immutable roster + trip snapshot built by the loader

pub mod catalog;
mod ordered;
pub mod student;
pub mod trip;

pub use catalog::Catalog;
pub use student::Student;
pub use trip::FieldTrip;

pub(crate) use ordered::OrderedMap;
