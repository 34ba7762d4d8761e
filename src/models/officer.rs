//! Per-view state for the officer dashboard.
//!
//! Each table on the dashboard owns one state object holding the last fetch
//! result; `render()` is pure over that state and never fetches. Lists are
//! replaced wholesale on every fetch, so the displayed pending set is always
//! server-authoritative after an action completes.

use crate::api::portal::{ApiError, PaymentRecord, PendingNumberPlate, PendingOwnershipTransfer};
use crate::utils::Table;

/// Rows shown in the payments table before "View More"
pub const PAYMENTS_PREVIEW_ROWS: usize = 8;

/// Last fetch outcome for one dashboard table
#[derive(Debug, Clone)]
pub enum ListState<T> {
    Loaded(Vec<T>),
    Failed,
}

impl<T> ListState<T> {
    pub fn apply(&mut self, result: Result<Vec<T>, ApiError>) {
        *self = match result {
            Ok(rows) => ListState::Loaded(rows),
            Err(_) => ListState::Failed,
        };
    }
}

/// Payments table with its show-more toggle
#[derive(Debug, Clone)]
pub struct PaymentsView {
    pub state: ListState<PaymentRecord>,
    pub showing_all: bool,
}

impl PaymentsView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loaded(Vec::new()),
            showing_all: false,
        }
    }

    pub fn toggle(&mut self) {
        self.showing_all = !self.showing_all;
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.showing_all {
            "View Less"
        } else {
            "View More"
        }
    }

    /// Render from the cached list; toggling re-renders without a fetch
    pub fn render(&self) -> String {
        let mut table = Table::new(vec!["Receipt ID", "Citizen Name", "Asset ID", "Amount"]);
        match &self.state {
            ListState::Failed => table.add_message_row("Error loading payments"),
            ListState::Loaded(rows) if rows.is_empty() => {
                table.add_message_row("No payments found.")
            }
            ListState::Loaded(rows) => {
                let visible = if self.showing_all {
                    rows.len()
                } else {
                    rows.len().min(PAYMENTS_PREVIEW_ROWS)
                };
                for payment in &rows[..visible] {
                    let amount = payment.amount.to_string();
                    table.add_row(vec![
                        &payment.receipt_id,
                        &payment.citizen_name,
                        &payment.asset_id,
                        &amount,
                    ]);
                }
            }
        }
        table.render()
    }
}

impl Default for PaymentsView {
    fn default() -> Self {
        Self::new()
    }
}

/// Pending number plate applications awaiting approval
#[derive(Debug, Clone)]
pub struct PendingPlatesView {
    pub state: ListState<PendingNumberPlate>,
}

impl PendingPlatesView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loaded(Vec::new()),
        }
    }

    pub fn render(&self) -> String {
        let mut table = Table::new(vec!["Vehicle ID", "Owner CNIC", "Action"]);
        match &self.state {
            ListState::Failed => table.add_message_row("Error loading data."),
            ListState::Loaded(rows) if rows.is_empty() => {
                table.add_message_row("No pending number plates.")
            }
            ListState::Loaded(rows) => {
                for item in rows {
                    table.add_row(vec![&item.vehicle_id, &item.owner_cnic, "Approve"]);
                }
            }
        }
        table.render()
    }
}

impl Default for PendingPlatesView {
    fn default() -> Self {
        Self::new()
    }
}

/// Pending ownership transfers awaiting approval
#[derive(Debug, Clone)]
pub struct PendingTransfersView {
    pub state: ListState<PendingOwnershipTransfer>,
}

impl PendingTransfersView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loaded(Vec::new()),
        }
    }

    pub fn render(&self) -> String {
        let mut table = Table::new(vec![
            "Vehicle ID",
            "Old Owner CNIC",
            "New Owner CNIC",
            "Action",
        ]);
        match &self.state {
            ListState::Failed => table.add_message_row("Error loading data."),
            ListState::Loaded(rows) if rows.is_empty() => {
                table.add_message_row("No pending ownership transfers.")
            }
            ListState::Loaded(rows) => {
                for item in rows {
                    table.add_row(vec![
                        &item.vehicle_id,
                        &item.old_owner_cnic,
                        &item.new_owner_cnic,
                        "Approve",
                    ]);
                }
            }
        }
        table.render()
    }
}

impl Default for PendingTransfersView {
    fn default() -> Self {
        Self::new()
    }
}
