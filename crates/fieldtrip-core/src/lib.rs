//! Core library for the field trip tracker.
//!
//! This crate holds everything that does not need a terminal:
//!
//! - `models`: `Student`, `FieldTrip` and the immutable `Catalog`
//! - `matching`: name normalization and cross-format name matching
//! - `loader`: fetching and reshaping the roster and trip documents
//! - `search`: substring search over the roster
//! - `progress`: attendance computation and the plain-text report
//! - `session`: the current selection
//! - `config`: where the two documents are loaded from

pub mod config;
pub mod loader;
pub mod matching;
pub mod models;
pub mod progress;
pub mod search;
pub mod session;
pub mod utils;

pub use config::Config;
pub use loader::{load_catalog, DataSource, LoadError, SourceClient};
pub use matching::{names_match, normalize_name, ParsedName};
pub use models::{Catalog, FieldTrip, Student};
pub use progress::{compute_progress, progress_view, ProgressReport, ProgressView, TripAttendance};
pub use search::{search, suggest, Suggestions, MIN_QUERY_LEN};
pub use session::SessionState;
