//! Form and view-state models for the three portal pages.
//!
//! View state is explicit and per-view; render functions are pure over it.

pub mod citizen;
pub mod officer;
pub mod verify;

pub use citizen::{
    NumberPlateApplicationForm, OwnershipTransferForm, TaxPaymentForm, VehicleRegistrationForm,
};
pub use officer::{
    ListState, PaymentsView, PendingPlatesView, PendingTransfersView, PAYMENTS_PREVIEW_ROWS,
};
pub use verify::VerifyView;
