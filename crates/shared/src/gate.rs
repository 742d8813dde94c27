use crate::models::{Seat, SeatStatus};
use crate::selection::{SelectionRepository, SelectionStore};

/// Whether activating a seat (click, Enter, Space) should toggle it.
///
/// Only available seats are selectable, and only while the selection has
/// room. Deselecting an already-selected seat is always allowed.
pub fn can_activate(status: SeatStatus, is_selected: bool, can_select_more: bool) -> bool {
    status == SeatStatus::Available && (can_select_more || is_selected)
}

/// A seat as the render layer sees it: the record plus derived selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatView {
    pub seat: Seat,
    pub section: String,
    pub row: u32,
    pub selected: bool,
    /// Status is available, so the seat takes focus and pointer events.
    pub interactive: bool,
    /// Activation would be refused right now.
    pub disabled: bool,
}

impl SeatView {
    pub fn new(seat: &Seat, section: &str, row: u32, selected: bool, can_select_more: bool) -> Self {
        let interactive = seat.is_available();
        SeatView {
            seat: seat.clone(),
            section: section.to_string(),
            row,
            selected,
            interactive,
            disabled: !can_activate(seat.status, selected, can_select_more),
        }
    }

    /// Derive the view of `seat` against the current selection.
    pub fn from_store<R: SelectionRepository>(
        seat: &Seat,
        section: &str,
        row: u32,
        store: &SelectionStore<R>,
    ) -> Self {
        Self::new(
            seat,
            section,
            row,
            store.is_selected(&seat.id),
            store.can_select_more(),
        )
    }

    pub fn can_activate(&self) -> bool {
        !self.disabled
    }

    pub fn aria_label(&self) -> String {
        format!(
            "Section {}, Row {}, Seat {}, {}, {}",
            self.section,
            self.row,
            self.seat.col,
            self.seat.status.as_str(),
            if self.selected { "selected" } else { "not selected" }
        )
    }
}
