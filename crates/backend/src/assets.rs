use seatmap_shared::models::VenueData;
use std::path::Path;

/// Read and validate the venue document the frontend will fetch.
pub fn load_venue(path: &Path) -> Result<VenueData, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let venue: VenueData = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    tracing::info!(
        venue = %venue.venue_id,
        sections = venue.sections.len(),
        seats = venue.seat_count(),
        "Loaded venue document"
    );

    Ok(venue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_venue() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("venue.json");
        std::fs::write(
            &path,
            r#"{"venueId":"hall-2","name":"Small Hall","map":{"width":400,"height":300},"sections":[]}"#,
        )
        .unwrap();

        let venue = load_venue(&path).unwrap();
        assert_eq!(venue.venue_id, "hall-2");
        assert_eq!(venue.seat_count(), 0);
    }

    #[test]
    fn test_load_venue_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_venue(&dir.path().join("venue.json")).unwrap_err();
        assert!(err.starts_with("Failed to read"));
    }

    #[test]
    fn test_load_venue_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("venue.json");
        std::fs::write(&path, r#"{"venueId":"hall-2"}"#).unwrap();
        let err = load_venue(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse"));
    }

    #[test]
    fn test_repository_venue_document_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/venue.json");
        let venue = load_venue(&path).unwrap();
        assert!(venue.seat_count() > 0);
        assert!(venue.find_seat("A-1-01").is_some());
    }
}
