use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for POST /api/pay_tax
#[derive(Debug, Clone, Serialize)]
pub struct TaxPaymentRequest {
    #[serde(rename = "citizenName")]
    pub citizen_name: String,
    pub cnic: String,
    #[serde(rename = "assetId")]
    pub asset_id: String,
    /// None serializes as JSON null, which is what the portal receives
    /// when the amount field did not parse as an integer.
    pub amount: Option<i64>,
}

/// Receipt returned for a successful tax payment
#[derive(Debug, Clone, Deserialize)]
pub struct TaxPaymentReceipt {
    #[serde(rename = "receiptId")]
    pub receipt_id: String,
}

/// Request body for POST /api/register_vehicle
#[derive(Debug, Clone, Serialize)]
pub struct VehicleRegistrationRequest {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
    #[serde(rename = "ownerCNIC")]
    pub owner_cnic: String,
}

/// Request body for POST /api/apply_number_plate
#[derive(Debug, Clone, Serialize)]
pub struct NumberPlateApplicationRequest {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
}

/// Request body for POST /api/request_ownership_transfer
#[derive(Debug, Clone, Serialize)]
pub struct OwnershipTransferRequest {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
    #[serde(rename = "newOwnerCNIC")]
    pub new_owner_cnic: String,
}

/// Request body for the two approval endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalRequest {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
}

/// Generic `{status}` success payload shared by several endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// One row of GET /api/payments
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRecord {
    #[serde(rename = "receiptId")]
    pub receipt_id: String,
    #[serde(rename = "citizenName")]
    pub citizen_name: String,
    #[serde(rename = "assetId")]
    pub asset_id: String,
    pub amount: i64,
}

/// One row of GET /api/pending_numberplates
#[derive(Debug, Clone, Deserialize)]
pub struct PendingNumberPlate {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
    #[serde(rename = "ownerCNIC")]
    pub owner_cnic: String,
}

/// One row of GET /api/pending_ownershiptransfers
#[derive(Debug, Clone, Deserialize)]
pub struct PendingOwnershipTransfer {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
    #[serde(rename = "oldOwnerCNIC")]
    pub old_owner_cnic: String,
    #[serde(rename = "newOwnerCNIC")]
    pub new_owner_cnic: String,
}

/// Payload of GET /api/verify/{receiptId}
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationResult {
    #[serde(rename = "citizenName")]
    pub citizen_name: String,
    pub cnic: String,
    #[serde(rename = "assetId")]
    pub asset_id: String,
    pub amount: i64,
    /// Unix seconds
    pub timestamp: i64,
}

/// One payment row of GET /api/verify_vehicle/{cnicOrVehicleId}
#[derive(Debug, Clone, Deserialize)]
pub struct VehiclePaymentRecord {
    #[serde(rename = "receiptId")]
    pub receipt_id: String,
    pub amount: i64,
    /// Already formatted by the server as a local date/time string
    #[serde(rename = "paymentDate")]
    pub payment_date: String,
}

/// Vehicle summary in a verification lookup; every field is null when
/// no vehicle matched the query
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleSummary {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,
    #[serde(rename = "numberPlate")]
    pub number_plate: Option<String>,
    #[serde(rename = "ownerCNIC")]
    pub owner_cnic: Option<String>,
}

/// Payload of GET /api/verify_vehicle/{cnicOrVehicleId}
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleVerification {
    pub payments: Vec<VehiclePaymentRecord>,
    pub vehicle: VehicleSummary,
}

/// Payload of GET /api/track_receipt/{receiptId}, discriminated by `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ReceiptTrack {
    #[serde(rename = "ownership_transfer")]
    OwnershipTransfer {
        #[serde(rename = "vehicleId")]
        vehicle_id: String,
        status: String,
        #[serde(rename = "dispatchStatus")]
        dispatch_status: Option<String>,
    },
    #[serde(rename = "number_plate_application")]
    NumberPlateApplication {
        #[serde(rename = "vehicleId")]
        vehicle_id: String,
        /// 0 or 1 as stored by the portal
        approved: i64,
        #[serde(rename = "dispatchStatus")]
        dispatch_status: Option<String>,
    },
}

/// Request body for POST /api/update_dispatch_status
#[derive(Debug, Clone, Serialize)]
pub struct DispatchStatusUpdate {
    #[serde(rename = "receiptId")]
    pub receipt_id: String,
    #[serde(rename = "dispatchStatus")]
    pub dispatch_status: String,
}

/// Error type for portal API operations.
///
/// The portal contract is binary: any non-2xx status is a failure carrying
/// an optional `error` string, with no further branching on the code.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Non-2xx response, with the server's `error` field when it sent one
    #[error("{}", api_message(.status, .message))]
    Api { status: u16, message: Option<String> },
    /// Request rejected before a response arrived
    #[error("{0}")]
    Transport(String),
    /// 2xx response whose body did not match the expected shape
    #[error("{0}")]
    Decode(String),
}

fn api_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(text) => text.clone(),
        None => format!("request failed with status {}", status),
    }
}
