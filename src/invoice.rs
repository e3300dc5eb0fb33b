use crate::labels::labelled_enum;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_VAT_RATE: f64 = 0.25;

labelled_enum! {
    pub enum InvoiceStatus {
        Draft => "draft",
        Sent => "sent",
        Paid => "paid",
        Overdue => "overdue",
        Cancelled => "cancelled",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl InvoiceLine {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u32,
    pub number: String,
    pub client_name: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub lines: Vec<InvoiceLine>,
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,
}

/// Rounds to øre (two decimals).
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Invoice {
    pub fn subtotal(&self) -> f64 {
        round_currency(self.lines.iter().map(InvoiceLine::amount).sum())
    }

    pub fn vat_amount(&self) -> f64 {
        round_currency(self.subtotal() * self.vat_rate)
    }

    pub fn total(&self) -> f64 {
        round_currency(self.subtotal() + self.vat_amount())
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.status {
            InvoiceStatus::Overdue => true,
            InvoiceStatus::Sent => self.due_date < today,
            _ => false,
        }
    }

    /// Sent or overdue invoices still waiting for payment.
    pub fn is_outstanding(&self) -> bool {
        matches!(self.status, InvoiceStatus::Sent | InvoiceStatus::Overdue)
    }
}
