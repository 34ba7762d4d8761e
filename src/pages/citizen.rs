//! Citizen portal page: four independent form submissions.
//!
//! Each submission posts its collected form and produces the text for that
//! form's result region. The four handlers share the same shape but hold no
//! state in common, so a failure in one never affects another.

use crate::api::portal::PortalClient;
use crate::models::citizen::{
    NumberPlateApplicationForm, OwnershipTransferForm, TaxPaymentForm, VehicleRegistrationForm,
};
use crate::utils::prompt::read_line;

pub struct CitizenPage<'a> {
    client: &'a PortalClient,
}

impl<'a> CitizenPage<'a> {
    pub fn new(client: &'a PortalClient) -> Self {
        Self { client }
    }

    /// Submit the tax payment form; success reports the receipt id
    pub async fn submit_tax_payment(&self, form: &TaxPaymentForm) -> String {
        match self.client.pay_tax(&form.collect()).await {
            Ok(receipt) => format!("Success! Receipt ID: {}", receipt.receipt_id),
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Submit the vehicle registration form; success reports the status string
    pub async fn submit_vehicle_registration(&self, form: &VehicleRegistrationForm) -> String {
        match self.client.register_vehicle(&form.collect()).await {
            Ok(response) => response.status,
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Submit the number plate application form
    pub async fn submit_number_plate_application(
        &self,
        form: &NumberPlateApplicationForm,
    ) -> String {
        match self.client.apply_number_plate(&form.collect()).await {
            Ok(response) => response.status,
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Submit the ownership transfer request form
    pub async fn submit_ownership_transfer(&self, form: &OwnershipTransferForm) -> String {
        match self.client.request_ownership_transfer(&form.collect()).await {
            Ok(response) => response.status,
            Err(e) => format!("Error: {}", e),
        }
    }
}

/// Interactive loop for the citizen page
pub async fn run(client: &PortalClient) {
    let page = CitizenPage::new(client);

    loop {
        println!();
        println!("Citizen Portal");
        println!("  1) Pay tax");
        println!("  2) Register vehicle");
        println!("  3) Apply for number plate");
        println!("  4) Request ownership transfer");
        println!("  q) Quit");

        match read_line("> ").trim() {
            "1" => {
                let form = TaxPaymentForm {
                    citizen_name: read_line("Citizen name: "),
                    cnic: read_line("CNIC: "),
                    asset_id: read_line("Asset ID: "),
                    amount: read_line("Amount: "),
                };
                println!("{}", page.submit_tax_payment(&form).await);
            }
            "2" => {
                let form = VehicleRegistrationForm {
                    vehicle_id: read_line("Vehicle ID: "),
                    owner_cnic: read_line("Owner CNIC: "),
                };
                println!("{}", page.submit_vehicle_registration(&form).await);
            }
            "3" => {
                let form = NumberPlateApplicationForm {
                    vehicle_id: read_line("Vehicle ID: "),
                };
                println!("{}", page.submit_number_plate_application(&form).await);
            }
            "4" => {
                let form = OwnershipTransferForm {
                    vehicle_id: read_line("Vehicle ID: "),
                    new_owner_cnic: read_line("New owner CNIC: "),
                };
                println!("{}", page.submit_ownership_transfer(&form).await);
            }
            "q" | "quit" => break,
            _ => {}
        }
    }
}
