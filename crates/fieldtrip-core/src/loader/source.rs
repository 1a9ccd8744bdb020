use std::fmt;
use std::path::PathBuf;

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl From<&str> for DataSource {
    /// `http://` and `https://` locations are URLs, anything else is a path.
    fn from(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_detects_urls() {
        assert_eq!(
            DataSource::from("https://example.org/trips.json"),
            DataSource::Url("https://example.org/trips.json".to_string())
        );
        assert!(matches!(DataSource::from("HTTP://example.org/a.json"), DataSource::Url(_)));
    }

    #[test]
    fn test_from_str_defaults_to_path() {
        assert_eq!(
            DataSource::from(" data/students_by_grade.json "),
            DataSource::File(PathBuf::from("data/students_by_grade.json"))
        );
        assert!(matches!(DataSource::from("httpdocs/a.json"), DataSource::File(_)));
    }
}
