use std::rc::Rc;

use dioxus::core::Task;
use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use seatmap_shared::gate::SeatView;
use seatmap_shared::models::{SelectedSeat, VenueData};
use seatmap_shared::viewport::Viewport;

use crate::components::seat::SeatCircle;
use crate::components::zoom_controls::ZoomControls;
use crate::drag::DocumentDrag;
use crate::hover::{Debounce, HOVER_DELAY_MS};
use crate::storage::Selection;

const MAP_BACKGROUND: &str = "#f8fafc";

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Only the primary button starts a pan.
fn starts_pan(button: Option<MouseButton>) -> bool {
    button == Some(MouseButton::Primary)
}

/// Report a hover change after the debounce delay, replacing any report
/// still waiting.
fn schedule_hover(
    mut debounce: Signal<Debounce<Task>>,
    on_hover: EventHandler<Option<SelectedSeat>>,
    next: Option<SelectedSeat>,
) {
    debounce.write().schedule(move || {
        spawn(async move {
            TimeoutFuture::new(HOVER_DELAY_MS).await;
            on_hover.call(next);
        })
    });
}

/// A section with its seats already tagged for rendering.
struct SectionLayout {
    id: String,
    label: String,
    transform: String,
    rows: Vec<(u32, Vec<SeatView>)>,
}

struct LegendEntry {
    label: &'static str,
    class: &'static str,
}

const LEGEND: [LegendEntry; 4] = [
    LegendEntry { label: "Available", class: "swatch available" },
    LegendEntry { label: "Selected", class: "swatch selected" },
    LegendEntry { label: "Reserved", class: "swatch reserved" },
    LegendEntry { label: "Sold", class: "swatch sold" },
];

#[component]
fn Legend() -> Element {
    rsx! {
        div { class: "legend",
            div { class: "legend-title", "Legend" }
            for entry in LEGEND.iter() {
                div { class: "legend-row",
                    div { class: entry.class }
                    span { "{entry.label}" }
                }
            }
        }
    }
}

#[component]
pub fn SeatMap(
    venue: VenueData,
    selection: Signal<Selection>,
    on_seat_hover: EventHandler<Option<SelectedSeat>>,
) -> Element {
    let mut selection = selection;

    // Pan / zoom state (local to the map)
    let mut viewport = use_signal(Viewport::new);
    let mut hover_debounce = use_signal(Debounce::<Task>::new);

    // Move and release are tracked on the document while the map is mounted
    let drag = use_hook(|| Rc::new(DocumentDrag::attach(viewport)));

    use_drop(move || {
        if let Ok(mut pending) = hover_debounce.try_write() {
            pending.cancel();
        }
        if let Some(drag) = &*drag {
            drag.detach();
        }
    });

    let vp = *viewport.read();
    let transform = vp.transform();
    let container_class = if vp.is_panning() {
        "seat-map panning"
    } else {
        "seat-map"
    };

    // Derive per-seat render state once per render.
    let sections: Vec<SectionLayout> = {
        let store = selection.read();
        venue
            .sections
            .iter()
            .map(|section| {
                let rows = section
                    .rows
                    .iter()
                    .map(|row| {
                        let views = row
                            .seats
                            .iter()
                            .map(|seat| SeatView::from_store(seat, &section.id, row.index, &*store))
                            .collect();
                        (row.index, views)
                    })
                    .collect();
                SectionLayout {
                    id: section.id.clone(),
                    label: section.label.clone(),
                    transform: section.transform.to_svg(),
                    rows,
                }
            })
            .collect()
    };

    let map_w = venue.map.width;
    let map_h = venue.map.height;

    rsx! {
        div { class: "{container_class}",
            svg {
                width: "100%",
                height: "100%",
                "viewBox": "0 0 {map_w} {map_h}",
                "role": "application",
                "aria-label": "Interactive seating map",

                onwheel: move |evt: Event<WheelData>| {
                    evt.prevent_default();
                    let delta_y = wheel_delta_y(evt.data().delta());
                    viewport.write().wheel(delta_y);
                },

                onmousedown: move |evt: Event<MouseData>| {
                    if !starts_pan(evt.trigger_button()) {
                        return;
                    }
                    evt.prevent_default();
                    let client = evt.client_coordinates();
                    viewport.write().start_pan(client.x, client.y);
                },

                g { transform: "{transform}",
                    rect { width: "{map_w}", height: "{map_h}", fill: MAP_BACKGROUND }

                    for section in sections {
                        g { key: "{section.id}", transform: "{section.transform}",
                            text { x: "20", y: "20", "font-size": "14", class: "section-label", "{section.label}" }
                            for (row_index, views) in section.rows {
                                g { key: "{section.id}-{row_index}",
                                    for view in views {
                                        SeatCircle {
                                            key: "{view.seat.id}",
                                            view: view.clone(),
                                            on_toggle: move |seat: SelectedSeat| {
                                                selection.write().toggle(seat);
                                            },
                                            on_hover: move |next: Option<SelectedSeat>| {
                                                schedule_hover(hover_debounce, on_seat_hover, next);
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            ZoomControls {
                percent: vp.percent(),
                on_zoom_in: move |_| viewport.write().zoom_in(),
                on_zoom_out: move |_| viewport.write().zoom_out(),
                on_reset: move |_| viewport.write().reset(),
            }

            Legend {}
        }
    }
}
