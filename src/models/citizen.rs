//! Raw form state for the citizen portal page.
//!
//! Each struct holds the text exactly as the user typed it; `collect()`
//! produces the trimmed request body. The only parsing is the tax amount,
//! which keeps the portal's lenient leading-integer semantics.

use crate::api::portal::{
    NumberPlateApplicationRequest, OwnershipTransferRequest, TaxPaymentRequest,
    VehicleRegistrationRequest,
};

#[derive(Debug, Default, Clone)]
pub struct TaxPaymentForm {
    pub citizen_name: String,
    pub cnic: String,
    pub asset_id: String,
    pub amount: String,
}

impl TaxPaymentForm {
    pub fn collect(&self) -> TaxPaymentRequest {
        TaxPaymentRequest {
            citizen_name: self.citizen_name.trim().to_string(),
            cnic: self.cnic.trim().to_string(),
            asset_id: self.asset_id.trim().to_string(),
            amount: parse_leading_int(&self.amount),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct VehicleRegistrationForm {
    pub vehicle_id: String,
    pub owner_cnic: String,
}

impl VehicleRegistrationForm {
    pub fn collect(&self) -> VehicleRegistrationRequest {
        VehicleRegistrationRequest {
            vehicle_id: self.vehicle_id.trim().to_string(),
            owner_cnic: self.owner_cnic.trim().to_string(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct NumberPlateApplicationForm {
    pub vehicle_id: String,
}

impl NumberPlateApplicationForm {
    pub fn collect(&self) -> NumberPlateApplicationRequest {
        NumberPlateApplicationRequest {
            vehicle_id: self.vehicle_id.trim().to_string(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct OwnershipTransferForm {
    pub vehicle_id: String,
    pub new_owner_cnic: String,
}

impl OwnershipTransferForm {
    pub fn collect(&self) -> OwnershipTransferRequest {
        OwnershipTransferRequest {
            vehicle_id: self.vehicle_id.trim().to_string(),
            new_owner_cnic: self.new_owner_cnic.trim().to_string(),
        }
    }
}

/// Parse an amount the way a lenient web form does: trim, accept an optional
/// sign, then take leading ASCII digits. Anything without a leading integer
/// is forwarded as no value rather than rejected.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end]
        .parse::<i64>()
        .ok()
        .map(|n| if negative { -n } else { n })
}
