use dioxus::prelude::*;
use seatmap_shared::models::{SeatStatus, SelectedSeat};
use seatmap_shared::pricing;

fn status_class(status: SeatStatus) -> &'static str {
    match status {
        SeatStatus::Available => "status-badge available",
        SeatStatus::Reserved => "status-badge reserved",
        SeatStatus::Sold => "status-badge sold",
        SeatStatus::Held => "status-badge held",
    }
}

/// Details for the hovered seat, or the most recently selected one.
#[component]
pub fn SeatDetails(seat: Option<SelectedSeat>) -> Element {
    let Some(seat) = seat else {
        return rsx! {
            div { class: "panel",
                h3 { "Seat Details" }
                p { class: "hint", "Click on a seat to view details" }
            }
        };
    };

    let tier = seat.seat.price_tier;
    let price = pricing::format_currency(pricing::seat_price(tier));
    let location = seat.label();
    let tier_label = pricing::tier_label(tier);
    let status = seat.seat.status;

    rsx! {
        div { class: "panel",
            h3 { "Seat Details" }
            div { class: "detail-row",
                span { class: "detail-label", "Location" }
                p { "{location}" }
            }
            div { class: "detail-row",
                span { class: "detail-label", "Price Tier" }
                p { "{tier_label}" }
            }
            div { class: "detail-row",
                span { class: "detail-label", "Price" }
                p { class: "detail-price", "{price}" }
            }
            div { class: "detail-row",
                span { class: "detail-label", "Status" }
                span { class: status_class(status), "{status}" }
            }
        }
    }
}
