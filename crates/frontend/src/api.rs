use dioxus::logger::tracing::info;
use seatmap_shared::error::LoadError;
use seatmap_shared::models::VenueData;

/// Path of the venue document, relative to the page origin.
pub const VENUE_PATH: &str = "/venue.json";

/// Build the absolute venue document URL from the page origin.
pub fn build_venue_url(origin: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), VENUE_PATH)
}

fn venue_url() -> Result<String, LoadError> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .ok_or_else(|| LoadError::Request("page origin is unavailable".to_string()))?;
    Ok(build_venue_url(&origin))
}

/// Decode the venue document body.
pub fn parse_venue(body: &str) -> Result<VenueData, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Fetch the venue document once. Failures are returned to the caller for
/// display; there is no retry.
pub async fn fetch_venue() -> Result<VenueData, LoadError> {
    let resp = reqwest::get(venue_url()?)
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;
    let venue = parse_venue(&body)?;

    info!(
        venue = %venue.venue_id,
        sections = venue.sections.len(),
        seats = venue.seat_count(),
        "Loaded venue"
    );
    Ok(venue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatmap_shared::models::SeatStatus;

    #[test]
    fn test_build_venue_url() {
        assert_eq!(
            build_venue_url("http://localhost:8080"),
            "http://localhost:8080/venue.json"
        );
        assert_eq!(
            build_venue_url("https://tickets.example.com/"),
            "https://tickets.example.com/venue.json"
        );
    }

    #[test]
    fn test_parse_venue() {
        let body = r#"{"venueId":"arena-01","name":"Metropolis Arena","map":{"width":800,"height":500},"sections":[{"id":"A","label":"Section A","transform":{"x":0,"y":0,"scale":1},"rows":[{"index":1,"seats":[{"id":"A-1-01","col":1,"x":50,"y":50,"priceTier":1,"status":"reserved"}]}]}]}"#;
        let venue = parse_venue(body).unwrap();
        assert_eq!(venue.name, "Metropolis Arena");
        assert_eq!(venue.seat_count(), 1);
        assert_eq!(
            venue.sections[0].rows[0].seats[0].status,
            SeatStatus::Reserved
        );
    }

    #[test]
    fn test_parse_venue_malformed() {
        let err = parse_venue(r#"{"venueId":"arena-01"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
        assert!(err.to_string().starts_with("Venue data is malformed"));
    }

    #[test]
    fn test_parse_venue_not_json() {
        assert!(matches!(
            parse_venue("<html>404</html>"),
            Err(LoadError::Decode(_))
        ));
    }
}
