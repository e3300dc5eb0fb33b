use crate::labels::labelled_enum;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labelled_enum! {
    pub enum ContractStatus {
        Draft => "draft",
        Active => "active",
        Expired => "expired",
        Terminated => "terminated",
    }
}

labelled_enum! {
    pub enum ServiceType {
        OfficeCleaning => "office-cleaning",
        WindowCleaning => "window-cleaning",
        DeepCleaning => "deep-cleaning",
        FloorCare => "floor-care",
        Residential => "residential",
    }
}

/// Client service agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: u32,
    pub contract_number: String,
    pub client_name: String,
    pub client_address: String,
    pub service_type: ServiceType,
    pub status: ContractStatus,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Billed amount per month, NOK.
    pub monthly_value: f64,
}

impl Contract {
    /// True while the contract is active and `day` falls within its term.
    pub fn is_running_on(&self, day: NaiveDate) -> bool {
        self.status == ContractStatus::Active
            && self.start_date <= day
            && self.end_date.is_none_or(|end| day <= end)
    }
}
