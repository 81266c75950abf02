//! Repository provenance derived from file paths
//!
//! Ingested keys follow the layout `<provider>/<organization>/<repository>/...`,
//! so the first three path segments identify where a file came from. Paths
//! too shallow to carry all three simply have no provenance.

use tracing::debug;

/// Source repository coordinates for a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub provider: String,
    pub organization: String,
    pub repository: String,
}

impl Provenance {
    /// Derive provenance from the first three segments of a file path.
    ///
    /// Returns `None` for paths with fewer than three slash-separated
    /// segments. Segments are taken verbatim, empty ones included.
    pub fn from_path(file_path: &str) -> Option<Self> {
        let parts: Vec<&str> = file_path.split('/').collect();
        if parts.len() < 3 {
            debug!(path = file_path, "path too shallow for provenance");
            return None;
        }

        Some(Self {
            provider: parts[0].to_string(),
            organization: parts[1].to_string(),
            repository: parts[2].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path() {
        let provenance = Provenance::from_path("github/acme/widgets/src/index.ts").unwrap();
        assert_eq!(provenance.provider, "github");
        assert_eq!(provenance.organization, "acme");
        assert_eq!(provenance.repository, "widgets");
    }

    #[test]
    fn test_exactly_three_segments() {
        let provenance = Provenance::from_path("gitlab/team/repo").unwrap();
        assert_eq!(provenance.provider, "gitlab");
        assert_eq!(provenance.organization, "team");
        assert_eq!(provenance.repository, "repo");
    }

    #[test]
    fn test_shallow_paths() {
        assert_eq!(Provenance::from_path("readme.md"), None);
        assert_eq!(Provenance::from_path("docs/readme.md"), None);
        assert_eq!(Provenance::from_path(""), None);
    }

    #[test]
    fn test_empty_segments_taken_verbatim() {
        let provenance = Provenance::from_path("github//widgets/a.ts").unwrap();
        assert_eq!(provenance.provider, "github");
        assert_eq!(provenance.organization, "");
        assert_eq!(provenance.repository, "widgets");
    }
}
