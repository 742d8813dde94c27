use dioxus::prelude::*;
use seatmap_shared::models::{SelectedSeat, VenueData};

use crate::api;
use crate::components::seat_details::SeatDetails;
use crate::components::seat_map::SeatMap;
use crate::components::seat_summary::SeatSummary;
use crate::storage;

#[component]
pub fn Booking() -> Element {
    // Venue document, fetched once
    let venue_resource = use_resource(|| api::fetch_venue());

    // Selection restored from localStorage, written back on every change
    let selection = use_signal(storage::load_selection);
    let mut hovered_seat = use_signal(|| None::<SelectedSeat>);

    let venue: VenueData = match &*venue_resource.read() {
        None => {
            return rsx! {
                div { class: "status-screen",
                    div { class: "spinner" }
                    p { "Loading venue map..." }
                }
            };
        }
        Some(Err(e)) => {
            return rsx! {
                div { class: "status-screen",
                    p { class: "error", "Error: {e}" }
                }
            };
        }
        Some(Ok(v)) => v.clone(),
    };

    let count = selection.read().len();
    let details_seat = hovered_seat
        .read()
        .clone()
        .or_else(|| selection.read().last().cloned());

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "{venue.name}" }
                p { class: "subtitle",
                    if count > 0 {
                        "Select your seats ({count} selected)"
                    } else {
                        "Select your seats"
                    }
                }
            }

            div { class: "map-pane",
                SeatMap {
                    venue: venue.clone(),
                    selection: selection,
                    on_seat_hover: move |seat: Option<SelectedSeat>| hovered_seat.set(seat),
                }
            }

            div { class: "sidebar",
                SeatDetails { seat: details_seat }
                SeatSummary { selection: selection }
            }
        }
    }
}
