pub mod citizen;
pub mod officer;
pub mod verify;

use crate::api::portal::PortalClient;

/// The three independent pages a session can bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Citizen,
    Officer,
    Verify,
}

impl Page {
    pub fn parse(name: &str) -> Option<Page> {
        match name.to_lowercase().as_str() {
            "citizen" => Some(Page::Citizen),
            "officer" => Some(Page::Officer),
            "verify" => Some(Page::Verify),
            _ => None,
        }
    }
}

/// Bind the named page to the client and run its interactive loop.
/// Each page owns its own view state and fetch lifecycle; nothing is
/// shared across this boundary except the client.
pub async fn bind(page: Page, client: &PortalClient) {
    match page {
        Page::Citizen => citizen::run(client).await,
        Page::Officer => officer::run(client).await,
        Page::Verify => verify::run(client).await,
    }
}
