use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use seatmap_shared::gate::SeatView;
use seatmap_shared::models::{SeatStatus, SelectedSeat};

const SEAT_RADIUS: f64 = 6.0;

// --- Seat palette ---

const SELECTED_FILL: &str = "#3b82f6";
const SELECTED_STROKE: &str = "#1e40af";

pub fn seat_fill(status: SeatStatus, selected: bool) -> &'static str {
    if selected {
        return SELECTED_FILL;
    }
    match status {
        SeatStatus::Available => "#10b981",
        SeatStatus::Reserved => "#f59e0b",
        SeatStatus::Sold => "#ef4444",
        SeatStatus::Held => "#6b7280",
    }
}

pub fn seat_stroke(status: SeatStatus, selected: bool) -> &'static str {
    if selected {
        return SELECTED_STROKE;
    }
    match status {
        SeatStatus::Available => "#059669",
        SeatStatus::Reserved => "#d97706",
        SeatStatus::Sold => "#b91c1c",
        SeatStatus::Held => "#4b5563",
    }
}

fn stroke_width(selected: bool) -> f64 {
    if selected {
        2.5
    } else {
        1.5
    }
}

/// Enter and Space activate a focused seat.
fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[component]
pub fn SeatCircle(
    view: SeatView,
    on_toggle: EventHandler<SelectedSeat>,
    on_hover: EventHandler<Option<SelectedSeat>>,
) -> Element {
    let seat = &view.seat;
    let fill = seat_fill(seat.status, view.selected);
    let stroke = seat_stroke(seat.status, view.selected);
    let sw = stroke_width(view.selected);
    let class = if view.interactive { "seat interactive" } else { "seat unavailable" };
    let tab_index = if view.interactive { "0" } else { "-1" };
    let label = view.aria_label();
    let pressed = if view.selected { "true" } else { "false" };
    let disabled = if view.disabled { "true" } else { "false" };
    let selected_seat = SelectedSeat::new(seat.clone(), &view.section, view.row);

    let click_view = view.clone();
    let click_seat = selected_seat.clone();
    let key_view = view.clone();
    let key_seat = selected_seat.clone();
    let hover_seat = selected_seat;

    rsx! {
        g {
            onmouseenter: move |_| on_hover.call(Some(hover_seat.clone())),
            onmouseleave: move |_| on_hover.call(None),
            circle {
                cx: "{seat.x}",
                cy: "{seat.y}",
                r: "{SEAT_RADIUS}",
                fill: "{fill}",
                stroke: "{stroke}",
                "stroke-width": "{sw}",
                class: "{class}",
                tabindex: "{tab_index}",
                "role": "button",
                "aria-label": "{label}",
                "aria-pressed": "{pressed}",
                "aria-disabled": "{disabled}",
                "data-seat-id": "{seat.id}",
                onclick: move |_| {
                    if click_view.can_activate() {
                        on_toggle.call(click_seat.clone());
                    }
                },
                onkeydown: move |evt: Event<KeyboardData>| {
                    if is_activation_key(&evt.key()) && key_view.can_activate() {
                        evt.prevent_default();
                        on_toggle.call(key_seat.clone());
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_overrides_status_color() {
        for status in [
            SeatStatus::Available,
            SeatStatus::Reserved,
            SeatStatus::Sold,
            SeatStatus::Held,
        ] {
            assert_eq!(seat_fill(status, true), SELECTED_FILL);
            assert_eq!(seat_stroke(status, true), SELECTED_STROKE);
        }
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(seat_fill(SeatStatus::Available, false), "#10b981");
        assert_eq!(seat_fill(SeatStatus::Sold, false), "#ef4444");
        assert_eq!(seat_stroke(SeatStatus::Reserved, false), "#d97706");
        assert_eq!(seat_stroke(SeatStatus::Held, false), "#4b5563");
    }

    #[test]
    fn test_selected_stroke_is_thicker() {
        assert!(stroke_width(true) > stroke_width(false));
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
        assert!(!is_activation_key(&Key::Tab));
    }
}
