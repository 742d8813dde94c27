use dioxus::prelude::*;
use seatmap_shared::pricing;
use seatmap_shared::selection::MAX_SEATS;

use crate::storage::Selection;

#[component]
pub fn SeatSummary(selection: Signal<Selection>) -> Element {
    let mut selection = selection;
    let store = selection.read();
    let count = store.len();
    let total = pricing::format_currency(store.total());

    let rows: Vec<(String, String, String)> = store
        .seats()
        .iter()
        .map(|s| {
            (
                s.id().to_string(),
                s.label(),
                pricing::format_currency(pricing::seat_price(s.seat.price_tier)),
            )
        })
        .collect();
    drop(store);

    rsx! {
        div { class: "panel summary",
            div { class: "summary-header",
                h3 { "Selected Seats" }
                span { class: "summary-count", "{count} / {MAX_SEATS}" }
            }
            if rows.is_empty() {
                p { class: "hint", "No seats selected yet" }
            } else {
                div { class: "summary-list",
                    for (id, label, price) in rows {
                        div { key: "{id}", class: "summary-item",
                            div {
                                p { class: "summary-label", "{label}" }
                                p { class: "summary-price", "{price}" }
                            }
                            button {
                                class: "remove",
                                "aria-label": "Remove {label}",
                                onclick: {
                                    let id = id.clone();
                                    move |_| {
                                        selection.write().remove(&id);
                                    }
                                },
                                "\u{00d7}"
                            }
                        }
                    }
                }
                div { class: "summary-total",
                    span { "Total" }
                    span { class: "total-amount", "{total}" }
                }
                button { class: "checkout", disabled: count == 0, "Proceed to Checkout" }
                button {
                    class: "secondary",
                    disabled: count == 0,
                    onclick: move |_| selection.write().clear(),
                    "Clear Selection"
                }
            }
        }
    }
}
