use tracing::debug;

use super::{FieldTrip, OrderedMap, Student};
use crate::loader::{LoadError, Resource};

/// Immutable snapshot of the roster and the trip index.
///
/// Built once by the loader and shared by reference afterwards. Nothing in
/// it changes after load; the current selection lives in `SessionState`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    roster: Vec<Student>,
    trips: Vec<(String, FieldTrip)>,
}

impl Catalog {
    pub fn new(roster: Vec<Student>, trips: Vec<(String, FieldTrip)>) -> Self {
        Self { roster, trips }
    }

    /// Build a catalog from the raw text of the two documents.
    pub fn from_json(roster_json: &str, trips_json: &str) -> Result<Self, LoadError> {
        let by_grade: OrderedMap<Vec<String>> = serde_json::from_str(roster_json)
            .map_err(|source| LoadError::Parse {
                resource: Resource::Roster,
                source,
            })?;
        let trips: OrderedMap<FieldTrip> = serde_json::from_str(trips_json)
            .map_err(|source| LoadError::Parse {
                resource: Resource::Trips,
                source,
            })?;

        let roster = flatten_roster(by_grade);
        debug!(students = roster.len(), trips = trips.0.len(), "Catalog parsed");

        Ok(Self::new(roster, trips.0))
    }

    /// All students, grade by grade in document order.
    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    /// All trips in document order.
    pub fn trips(&self) -> impl Iterator<Item = &FieldTrip> {
        self.trips.iter().map(|(_, trip)| trip)
    }

    /// Trips with their document keys.
    pub fn trip_entries(&self) -> &[(String, FieldTrip)] {
        &self.trips
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Find a student by exact roster name.
    ///
    /// Duplicate display names resolve to the first roster entry.
    pub fn select_by_name(&self, name: &str) -> Option<&Student> {
        self.roster.iter().find(|s| s.name == name)
    }
}

/// Flatten grade → names into roster entries, keeping every pair.
fn flatten_roster(by_grade: OrderedMap<Vec<String>>) -> Vec<Student> {
    by_grade
        .0
        .into_iter()
        .flat_map(|(grade, names)| {
            names
                .into_iter()
                .map(move |name| Student::new(name, grade.clone()))
        })
        .collect()
}
