//! Officer dashboard: payments log plus the two pending-approval queues.

use tracing::error;

use crate::api::portal::{ApiError, DispatchStatusUpdate, PortalClient};
use crate::models::officer::{PaymentsView, PendingPlatesView, PendingTransfersView};
use crate::utils::prompt::{read_line, Prompter, StdPrompter};

pub struct OfficerDashboard {
    pub payments: PaymentsView,
    pub pending_plates: PendingPlatesView,
    pub pending_transfers: PendingTransfersView,
}

impl OfficerDashboard {
    pub fn new() -> Self {
        Self {
            payments: PaymentsView::new(),
            pending_plates: PendingPlatesView::new(),
            pending_transfers: PendingTransfersView::new(),
        }
    }

    /// Fetch the three lists concurrently. Each table fails independently;
    /// failures are logged and shown as inline error rows, never as raw
    /// error text.
    pub async fn load(&mut self, client: &PortalClient) {
        let (payments, plates, transfers) = tokio::join!(
            client.payments(),
            client.pending_number_plates(),
            client.pending_ownership_transfers(),
        );

        if let Err(e) = &payments {
            error!("Error loading payments: {}", e);
        }
        if let Err(e) = &plates {
            error!("Error loading pending number plates: {}", e);
        }
        if let Err(e) = &transfers {
            error!("Error loading pending ownership transfers: {}", e);
        }

        self.payments.state.apply(payments);
        self.pending_plates.state.apply(plates);
        self.pending_transfers.state.apply(transfers);
    }

    pub async fn reload_pending_plates(&mut self, client: &PortalClient) {
        let result = client.pending_number_plates().await;
        if let Err(e) = &result {
            error!("Error loading pending number plates: {}", e);
        }
        self.pending_plates.state.apply(result);
    }

    pub async fn reload_pending_transfers(&mut self, client: &PortalClient) {
        let result = client.pending_ownership_transfers().await;
        if let Err(e) = &result {
            error!("Error loading pending ownership transfers: {}", e);
        }
        self.pending_transfers.state.apply(result);
    }

    pub fn toggle_payments(&mut self) {
        self.payments.toggle();
    }

    /// Approve a pending number plate. The confirmation prompt blocks and
    /// names the target; declining sends nothing. On success the pending
    /// list is re-fetched rather than edited in place.
    pub async fn approve_number_plate(
        &mut self,
        client: &PortalClient,
        vehicle_id: &str,
        prompter: &mut dyn Prompter,
    ) {
        let question = format!("Approve number plate for vehicle: {}?", vehicle_id);
        if !prompter.confirm(&question) {
            return;
        }

        match client.approve_number_plate(vehicle_id).await {
            Ok(response) => {
                prompter.alert(&response.status);
                self.reload_pending_plates(client).await;
            }
            Err(e) => prompter.alert(&approval_error(&e)),
        }
    }

    /// Approve a pending ownership transfer; same gate and re-fetch shape
    pub async fn approve_ownership_transfer(
        &mut self,
        client: &PortalClient,
        vehicle_id: &str,
        prompter: &mut dyn Prompter,
    ) {
        let question = format!("Approve ownership transfer for vehicle: {}?", vehicle_id);
        if !prompter.confirm(&question) {
            return;
        }

        match client.approve_ownership_transfer(vehicle_id).await {
            Ok(response) => {
                prompter.alert(&response.status);
                self.reload_pending_transfers(client).await;
            }
            Err(e) => prompter.alert(&approval_error(&e)),
        }
    }

    /// Record a dispatch status against a receipt
    pub async fn update_dispatch_status(
        &self,
        client: &PortalClient,
        receipt_id: &str,
        dispatch_status: &str,
        prompter: &mut dyn Prompter,
    ) {
        let update = DispatchStatusUpdate {
            receipt_id: receipt_id.trim().to_string(),
            dispatch_status: dispatch_status.trim().to_string(),
        };
        match client.update_dispatch_status(&update).await {
            Ok(response) => prompter.alert(&response.status),
            Err(e) => prompter.alert(&format!("Error: {}", e)),
        }
    }

    fn print(&self) {
        println!();
        println!("Payments");
        println!("{}", self.payments.render());
        println!("[{}]", self.payments.toggle_label());
        println!();
        println!("Pending Number Plates");
        println!("{}", self.pending_plates.render());
        println!("Pending Ownership Transfers");
        println!("{}", self.pending_transfers.render());
    }
}

impl Default for OfficerDashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Alert text for a failed approval: the server's error when it sent one
fn approval_error(error: &ApiError) -> String {
    match error {
        ApiError::Api {
            message: Some(text),
            ..
        } => text.clone(),
        _ => "Approval failed".to_string(),
    }
}

/// Interactive loop for the officer dashboard
pub async fn run(client: &PortalClient) {
    let mut dashboard = OfficerDashboard::new();
    let mut prompter = StdPrompter;

    dashboard.load(client).await;
    dashboard.print();

    loop {
        println!();
        println!("Commands: toggle | approve-plate <vehicleId> | approve-transfer <vehicleId> | dispatch <receiptId> <status> | reload | quit");

        let input = read_line("> ");
        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            ["toggle"] => {
                dashboard.toggle_payments();
                dashboard.print();
            }
            ["approve-plate", vehicle_id] => {
                dashboard
                    .approve_number_plate(client, vehicle_id, &mut prompter)
                    .await;
                dashboard.print();
            }
            ["approve-transfer", vehicle_id] => {
                dashboard
                    .approve_ownership_transfer(client, vehicle_id, &mut prompter)
                    .await;
                dashboard.print();
            }
            ["dispatch", receipt_id, status] => {
                dashboard
                    .update_dispatch_status(client, receipt_id, status, &mut prompter)
                    .await;
            }
            ["reload"] => {
                dashboard.load(client).await;
                dashboard.print();
            }
            ["quit"] | ["q"] => break,
            [] => {}
            _ => println!("Unknown command"),
        }
    }
}
