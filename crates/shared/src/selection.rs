use std::collections::HashSet;

use crate::error::StorageError;
use crate::models::SelectedSeat;
use crate::pricing;

/// Maximum number of seats a single selection may hold.
pub const MAX_SEATS: usize = 8;

/// Storage key under which the selection snapshot is persisted.
pub const STORAGE_KEY: &str = "selected-seats";

/// Durable home for the serialized selection snapshot.
pub trait SelectionRepository {
    /// Read the raw snapshot. `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored snapshot.
    fn save(&mut self, snapshot: &str) -> Result<(), StorageError>;
}

/// In-memory repository. Used in tests and when browser storage is missing.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    snapshot: Option<String>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: &str) -> Self {
        MemoryRepository {
            snapshot: Some(snapshot.to_string()),
        }
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl SelectionRepository for MemoryRepository {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StorageError> {
        self.snapshot = Some(snapshot.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection was full; nothing changed.
    Rejected,
}

/// Ordered, bounded seat selection persisted through a repository on every change.
#[derive(Debug)]
pub struct SelectionStore<R> {
    seats: Vec<SelectedSeat>,
    repo: R,
}

impl<R: SelectionRepository> SelectionStore<R> {
    /// Restore the selection from `repo`. Missing or malformed data yields an
    /// empty selection.
    pub fn load(repo: R) -> Self {
        let seats = match repo.load() {
            Ok(Some(raw)) => decode_snapshot(&raw).unwrap_or_else(|reason| {
                tracing::warn!(%reason, "Discarding persisted seat selection");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read persisted seat selection");
                Vec::new()
            }
        };
        SelectionStore { seats, repo }
    }

    pub fn seats(&self) -> &[SelectedSeat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Most recently selected seat.
    pub fn last(&self) -> Option<&SelectedSeat> {
        self.seats.last()
    }

    pub fn is_selected(&self, seat_id: &str) -> bool {
        self.seats.iter().any(|s| s.id() == seat_id)
    }

    pub fn can_select_more(&self) -> bool {
        self.seats.len() < MAX_SEATS
    }

    pub fn total(&self) -> u32 {
        pricing::total(&self.seats)
    }

    pub fn toggle(&mut self, seat: SelectedSeat) -> ToggleOutcome {
        if let Some(pos) = self.seats.iter().position(|s| s.id() == seat.id()) {
            self.seats.remove(pos);
            self.persist();
            return ToggleOutcome::Removed;
        }
        if !self.can_select_more() {
            return ToggleOutcome::Rejected;
        }
        self.seats.push(seat);
        self.persist();
        ToggleOutcome::Added
    }

    /// Remove a seat by id. Returns whether anything was removed.
    pub fn remove(&mut self, seat_id: &str) -> bool {
        let before = self.seats.len();
        self.seats.retain(|s| s.id() != seat_id);
        let removed = self.seats.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.seats.clear();
        self.persist();
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn persist(&mut self) {
        let snapshot = match serde_json::to_string(&self.seats) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize seat selection");
                return;
            }
        };
        if let Err(e) = self.repo.save(&snapshot) {
            tracing::warn!(error = %e, "Failed to persist seat selection");
        }
    }
}

/// Parse a persisted snapshot, rejecting anything that breaks the selection
/// invariants (unique ids, at most `MAX_SEATS` entries).
fn decode_snapshot(raw: &str) -> Result<Vec<SelectedSeat>, String> {
    let seats: Vec<SelectedSeat> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if seats.len() > MAX_SEATS {
        return Err(format!("{} seats exceeds limit of {}", seats.len(), MAX_SEATS));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = seats.iter().find(|s| !seen.insert(s.id())) {
        return Err(format!("duplicate seat id {}", dup.id()));
    }
    Ok(seats)
}
