use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use civic_portal_client::api::portal::PortalClient;
use civic_portal_client::pages;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("civic_portal_client=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let base_url = std::env::var("PORTAL_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    info!("Starting civic portal client against {}", base_url);

    let client = PortalClient::with_base_url(base_url);

    let page_name = std::env::args().nth(1).unwrap_or_else(|| "citizen".to_string());
    let page = match pages::Page::parse(&page_name) {
        Some(page) => page,
        None => {
            error!(
                "Unknown page: {} (expected citizen, officer or verify)",
                page_name
            );
            return;
        }
    };

    pages::bind(page, &client).await;
}
