//! Receipt verification page.

use crate::api::portal::{PortalClient, ReceiptTrack};
use crate::models::verify::VerifyView;
use crate::utils::prompt::read_line;

pub struct VerifyPage {
    pub view: VerifyView,
}

impl VerifyPage {
    pub fn new() -> Self {
        Self {
            view: VerifyView::Idle,
        }
    }

    /// Trim the raw receipt id and show the placeholder synchronously,
    /// before any request is made. Returns the id to verify.
    pub fn begin(&mut self, raw_receipt_id: &str) -> String {
        self.view = VerifyView::Verifying;
        raw_receipt_id.trim().to_string()
    }

    /// Resolve the verification started by `begin`
    pub async fn complete(&mut self, client: &PortalClient, receipt_id: &str) {
        self.view = match client.verify_receipt(receipt_id).await {
            Ok(receipt) => VerifyView::Verified(receipt),
            Err(e) => VerifyView::Failed(format!("Error: {}", e)),
        };
    }

    /// Submit in one step where the placeholder need not be observed
    pub async fn submit(&mut self, client: &PortalClient, raw_receipt_id: &str) {
        let receipt_id = self.begin(raw_receipt_id);
        self.complete(client, &receipt_id).await;
    }

    /// Look up payment history and plate status by CNIC or vehicle id
    pub async fn lookup_vehicle(&self, client: &PortalClient, raw_query: &str) -> String {
        match client.verify_vehicle(raw_query.trim()).await {
            Ok(lookup) => {
                let mut lines = Vec::new();
                match &lookup.vehicle.vehicle_id {
                    Some(vehicle_id) => lines.push(format!(
                        "Vehicle {}: plate {}, owner {}",
                        vehicle_id,
                        lookup.vehicle.number_plate.as_deref().unwrap_or("not issued"),
                        lookup.vehicle.owner_cnic.as_deref().unwrap_or("unknown"),
                    )),
                    None => lines.push("No vehicle found.".to_string()),
                }
                if lookup.payments.is_empty() {
                    lines.push("No payments found.".to_string());
                } else {
                    for payment in &lookup.payments {
                        lines.push(format!(
                            "Receipt {}: {} on {}",
                            payment.receipt_id, payment.amount, payment.payment_date
                        ));
                    }
                }
                lines.join("\n")
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Track the dispatch progress recorded against a receipt
    pub async fn track(&self, client: &PortalClient, raw_receipt_id: &str) -> String {
        match client.track_receipt(raw_receipt_id.trim()).await {
            Ok(ReceiptTrack::OwnershipTransfer {
                vehicle_id,
                status,
                dispatch_status,
            }) => format!(
                "Ownership transfer for vehicle {}: {} (dispatch: {})",
                vehicle_id,
                status,
                dispatch_status.as_deref().unwrap_or("pending"),
            ),
            Ok(ReceiptTrack::NumberPlateApplication {
                vehicle_id,
                approved,
                dispatch_status,
            }) => format!(
                "Number plate application for vehicle {}: {} (dispatch: {})",
                vehicle_id,
                if approved != 0 { "approved" } else { "awaiting approval" },
                dispatch_status.as_deref().unwrap_or("pending"),
            ),
            Err(e) => format!("Error: {}", e),
        }
    }
}

impl Default for VerifyPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Interactive loop for the verification page
pub async fn run(client: &PortalClient) {
    let mut page = VerifyPage::new();

    loop {
        println!();
        println!("Receipt Verification");
        println!("  v) Verify a tax receipt");
        println!("  t) Track a dispatch receipt");
        println!("  l) Look up a vehicle by CNIC or vehicle ID");
        println!("  q) Quit");

        match read_line("> ").trim() {
            "v" => {
                let receipt_id = page.begin(&read_line("Receipt ID: "));
                println!("{}", page.view.render());
                page.complete(client, &receipt_id).await;
                println!("{}", page.view.render());
            }
            "t" => {
                let receipt_id = read_line("Receipt ID: ");
                println!("{}", page.track(client, &receipt_id).await);
            }
            "l" => {
                let query = read_line("CNIC or vehicle ID: ");
                println!("{}", page.lookup_vehicle(client, &query).await);
            }
            "q" | "quit" => break,
            _ => {}
        }
    }
}
