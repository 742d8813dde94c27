pub mod seat;
pub mod seat_details;
pub mod seat_map;
pub mod seat_summary;
pub mod zoom_controls;
