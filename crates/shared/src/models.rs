use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Reserved,
    Sold,
    Held,
}

impl SeatStatus {
    /// Wire name, as it appears in the venue document.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Reserved => "reserved",
            SeatStatus::Sold => "sold",
            SeatStatus::Held => "held",
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatStatus::Available => write!(f, "Available"),
            SeatStatus::Reserved => write!(f, "Reserved"),
            SeatStatus::Sold => write!(f, "Sold"),
            SeatStatus::Held => write!(f, "Held"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: String,
    pub col: u32,
    pub x: f64,
    pub y: f64,
    pub price_tier: u32,
    pub status: SeatStatus,
}

impl Seat {
    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub index: u32,
    pub seats: Vec<Seat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl SectionTransform {
    /// SVG transform attribute for the section group.
    pub fn to_svg(&self) -> String {
        format!("translate({}, {}) scale({})", self.x, self.y, self.scale)
    }
}

impl Default for SectionTransform {
    fn default() -> Self {
        SectionTransform {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub transform: SectionTransform,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VenueMap {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueData {
    pub venue_id: String,
    pub name: String,
    pub map: VenueMap,
    pub sections: Vec<Section>,
}

impl VenueData {
    pub fn seat_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(|r| r.seats.len())
            .sum()
    }

    /// Find a seat by id, returning it denormalized with its section and row.
    pub fn find_seat(&self, seat_id: &str) -> Option<SelectedSeat> {
        self.sections.iter().find_map(|section| {
            section.rows.iter().find_map(|row| {
                row.seats
                    .iter()
                    .find(|seat| seat.id == seat_id)
                    .map(|seat| SelectedSeat::new(seat.clone(), &section.id, row.index))
            })
        })
    }
}

/// A seat together with the section id and row index it was picked from.
///
/// Serialized flat so the persisted form is the seat record plus
/// `section` and `row`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSeat {
    #[serde(flatten)]
    pub seat: Seat,
    pub section: String,
    pub row: u32,
}

impl SelectedSeat {
    pub fn new(seat: Seat, section: &str, row: u32) -> Self {
        SelectedSeat {
            seat,
            section: section.to_string(),
            row,
        }
    }

    pub fn id(&self) -> &str {
        &self.seat.id
    }

    /// Human-readable location, e.g. "Section A, Row 3, Seat 12".
    pub fn label(&self) -> String {
        format!(
            "Section {}, Row {}, Seat {}",
            self.section, self.row, self.seat.col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VENUE_JSON: &str = r#"{
        "venueId": "arena-01",
        "name": "Metropolis Arena",
        "map": { "width": 800, "height": 500 },
        "sections": [{
            "id": "A",
            "label": "Section A",
            "transform": { "x": 0, "y": 0, "scale": 1 },
            "rows": [
                { "index": 1, "seats": [
                    { "id": "A-1-01", "col": 1, "x": 50, "y": 50, "priceTier": 1, "status": "available" },
                    { "id": "A-1-02", "col": 2, "x": 75, "y": 50, "priceTier": 1, "status": "sold" }
                ]},
                { "index": 2, "seats": [
                    { "id": "A-2-01", "col": 1, "x": 50, "y": 80, "priceTier": 2, "status": "held" }
                ]}
            ]
        }]
    }"#;

    #[test]
    fn test_venue_deserializes() {
        let venue: VenueData = serde_json::from_str(VENUE_JSON).unwrap();
        assert_eq!(venue.venue_id, "arena-01");
        assert_eq!(venue.map.width, 800.0);
        assert_eq!(venue.sections.len(), 1);
        assert_eq!(venue.sections[0].rows[0].seats[1].status, SeatStatus::Sold);
        assert_eq!(venue.sections[0].rows[1].seats[0].price_tier, 2);
    }

    #[test]
    fn test_seat_count() {
        let venue: VenueData = serde_json::from_str(VENUE_JSON).unwrap();
        assert_eq!(venue.seat_count(), 3);
    }

    #[test]
    fn test_find_seat_denormalizes_section_and_row() {
        let venue: VenueData = serde_json::from_str(VENUE_JSON).unwrap();
        let found = venue.find_seat("A-2-01").unwrap();
        assert_eq!(found.section, "A");
        assert_eq!(found.row, 2);
        assert_eq!(found.seat.status, SeatStatus::Held);
        assert!(venue.find_seat("Z-9-99").is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id":"x","col":1,"x":0,"y":0,"priceTier":1,"status":"broken"}"#;
        assert!(serde_json::from_str::<Seat>(json).is_err());
    }

    #[test]
    fn test_missing_section_transform_defaults_to_identity() {
        let json = r#"{"id":"B","label":"Section B","rows":[]}"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.transform, SectionTransform::default());
        assert_eq!(section.transform.to_svg(), "translate(0, 0) scale(1)");
    }

    #[test]
    fn test_selected_seat_serializes_flat() {
        let seat = Seat {
            id: "A-1-01".to_string(),
            col: 1,
            x: 50.0,
            y: 40.0,
            price_tier: 1,
            status: SeatStatus::Available,
        };
        let selected = SelectedSeat::new(seat, "A", 1);
        let json = serde_json::to_value(&selected).unwrap();
        assert_eq!(json["id"], "A-1-01");
        assert_eq!(json["priceTier"], 1);
        assert_eq!(json["status"], "available");
        assert_eq!(json["section"], "A");
        assert_eq!(json["row"], 1);
    }

    #[test]
    fn test_selected_seat_label() {
        let venue: VenueData = serde_json::from_str(VENUE_JSON).unwrap();
        let found = venue.find_seat("A-1-02").unwrap();
        assert_eq!(found.label(), "Section A, Row 1, Seat 2");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SeatStatus::Available.to_string(), "Available");
        assert_eq!(SeatStatus::Held.as_str(), "held");
    }
}
