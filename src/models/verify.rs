//! View state for the receipt verification page.

use chrono::{Local, TimeZone};

use crate::api::portal::VerificationResult;

/// What the verification result region currently shows
#[derive(Debug, Clone)]
pub enum VerifyView {
    Idle,
    /// Placeholder shown synchronously, before the request resolves
    Verifying,
    Verified(VerificationResult),
    /// Full error text, already prefixed "Error: "
    Failed(String),
}

impl VerifyView {
    pub fn render(&self) -> String {
        match self {
            VerifyView::Idle => String::new(),
            VerifyView::Verifying => "Verifying...".to_string(),
            VerifyView::Failed(text) => text.clone(),
            VerifyView::Verified(receipt) => format!(
                "Citizen Name: {}\nCNIC: {}\nAsset ID: {}\nAmount: {}\nTimestamp: {}",
                receipt.citizen_name,
                receipt.cnic,
                receipt.asset_id,
                receipt.amount,
                format_timestamp(receipt.timestamp),
            ),
        }
    }
}

/// Convert Unix seconds to a local date/time string
pub fn format_timestamp(timestamp: i64) -> String {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_renders_nothing() {
        assert_eq!(VerifyView::Idle.render(), "");
    }

    #[test]
    fn verifying_renders_placeholder() {
        assert_eq!(VerifyView::Verifying.render(), "Verifying...");
    }

    #[test]
    fn verified_renders_five_lines_in_order() {
        let view = VerifyView::Verified(VerificationResult {
            citizen_name: "Ali Khan".to_string(),
            cnic: "35202-1234567-1".to_string(),
            asset_id: "A-9".to_string(),
            amount: 50000,
            timestamp: 1_700_000_000,
        });
        let rendered = view.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Citizen Name: Ali Khan"));
        assert!(lines[1].starts_with("CNIC: 35202-1234567-1"));
        assert!(lines[2].starts_with("Asset ID: A-9"));
        assert!(lines[3].starts_with("Amount: 50000"));
        assert!(lines[4].starts_with("Timestamp: "));
        assert!(lines[4].contains(&format_timestamp(1_700_000_000)));
    }

    #[test]
    fn failed_renders_stored_text() {
        let view = VerifyView::Failed("Error: Receipt not found".to_string());
        assert_eq!(view.render(), "Error: Receipt not found");
    }
}
