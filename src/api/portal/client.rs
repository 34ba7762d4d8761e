use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::models::{
    ApiError, ApprovalRequest, DispatchStatusUpdate, NumberPlateApplicationRequest,
    OwnershipTransferRequest, PaymentRecord, PendingNumberPlate, PendingOwnershipTransfer,
    ReceiptTrack, StatusResponse, TaxPaymentReceipt, TaxPaymentRequest,
    VehicleRegistrationRequest, VehicleVerification, VerificationResult,
};

/// Typed HTTP client for the civic portal API.
///
/// Every endpoint maps to one method returning a tagged result, so callers
/// handle the success shape and the `{error}` failure shape exhaustively
/// instead of probing loose JSON.
pub struct PortalClient {
    http_client: HttpClient,
    base_url: String,
}

impl PortalClient {
    const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000";

    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (configuration and tests)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Turn a non-2xx response into an `ApiError`, pulling out the JSON
    /// `error` field when the body carries one. The portal contract makes
    /// no distinction between 4xx and 5xx beyond ok/not-ok.
    async fn handle_error_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body_text)
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
            });
        debug!("Portal API returned status {}: {:?}", status, message);
        ApiError::Api { status, message }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    /// POST /api/pay_tax
    pub async fn pay_tax(
        &self,
        request: &TaxPaymentRequest,
    ) -> Result<TaxPaymentReceipt, ApiError> {
        self.post_json("/api/pay_tax", request).await
    }

    /// POST /api/register_vehicle
    pub async fn register_vehicle(
        &self,
        request: &VehicleRegistrationRequest,
    ) -> Result<StatusResponse, ApiError> {
        self.post_json("/api/register_vehicle", request).await
    }

    /// POST /api/apply_number_plate
    pub async fn apply_number_plate(
        &self,
        request: &NumberPlateApplicationRequest,
    ) -> Result<StatusResponse, ApiError> {
        self.post_json("/api/apply_number_plate", request).await
    }

    /// POST /api/request_ownership_transfer
    pub async fn request_ownership_transfer(
        &self,
        request: &OwnershipTransferRequest,
    ) -> Result<StatusResponse, ApiError> {
        self.post_json("/api/request_ownership_transfer", request)
            .await
    }

    /// GET /api/payments
    pub async fn payments(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        self.get_json("/api/payments").await
    }

    /// GET /api/pending_numberplates
    pub async fn pending_number_plates(&self) -> Result<Vec<PendingNumberPlate>, ApiError> {
        self.get_json("/api/pending_numberplates").await
    }

    /// GET /api/pending_ownershiptransfers
    pub async fn pending_ownership_transfers(
        &self,
    ) -> Result<Vec<PendingOwnershipTransfer>, ApiError> {
        self.get_json("/api/pending_ownershiptransfers").await
    }

    /// POST /api/approve_number_plate
    pub async fn approve_number_plate(
        &self,
        vehicle_id: &str,
    ) -> Result<StatusResponse, ApiError> {
        let body = ApprovalRequest {
            vehicle_id: vehicle_id.to_string(),
        };
        self.post_json("/api/approve_number_plate", &body).await
    }

    /// POST /api/approve_ownership_transfer
    pub async fn approve_ownership_transfer(
        &self,
        vehicle_id: &str,
    ) -> Result<StatusResponse, ApiError> {
        let body = ApprovalRequest {
            vehicle_id: vehicle_id.to_string(),
        };
        self.post_json("/api/approve_ownership_transfer", &body).await
    }

    /// GET /api/verify/{receiptId}
    ///
    /// The receipt id is interpolated into the path as-is, matching the
    /// portal's route contract.
    pub async fn verify_receipt(&self, receipt_id: &str) -> Result<VerificationResult, ApiError> {
        self.get_json(&format!("/api/verify/{}", receipt_id)).await
    }

    /// GET /api/verify_vehicle/{cnicOrVehicleId}
    ///
    /// Looks up the payment history and vehicle/plate status for a CNIC or
    /// a vehicle id. Always a 2xx on the portal side; a query with no match
    /// comes back with an empty history and null vehicle fields.
    pub async fn verify_vehicle(&self, query: &str) -> Result<VehicleVerification, ApiError> {
        self.get_json(&format!("/api/verify_vehicle/{}", query))
            .await
    }

    /// GET /api/track_receipt/{receiptId}
    pub async fn track_receipt(&self, receipt_id: &str) -> Result<ReceiptTrack, ApiError> {
        self.get_json(&format!("/api/track_receipt/{}", receipt_id))
            .await
    }

    /// POST /api/update_dispatch_status
    pub async fn update_dispatch_status(
        &self,
        update: &DispatchStatusUpdate,
    ) -> Result<StatusResponse, ApiError> {
        self.post_json("/api/update_dispatch_status", update).await
    }
}

impl Default for PortalClient {
    fn default() -> Self {
        Self::new()
    }
}
