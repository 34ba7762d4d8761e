pub mod client;
pub mod models;

pub use client::PortalClient;
pub use models::{
    ApiError, DispatchStatusUpdate, NumberPlateApplicationRequest, OwnershipTransferRequest,
    PaymentRecord, PendingNumberPlate, PendingOwnershipTransfer, ReceiptTrack, StatusResponse,
    TaxPaymentReceipt, TaxPaymentRequest, VehiclePaymentRecord, VehicleRegistrationRequest,
    VehicleSummary, VehicleVerification, VerificationResult,
};
