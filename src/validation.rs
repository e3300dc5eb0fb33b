use crate::contract::Contract;
use crate::employee::Employee;
use crate::invoice::Invoice;
use crate::product::Product;
use crate::shift::Shift;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

pub fn validate_shift(shift: &Shift) -> Result<(), ValidationError> {
    if shift.title.trim().is_empty() {
        return Err(ValidationError::new(format!(
            "shift {} requires a non-empty title",
            shift.id
        )));
    }

    if shift.start_time == shift.end_time {
        return Err(ValidationError::new(format!(
            "shift {} starts and ends at {}",
            shift.id,
            shift.start_time.format("%H:%M")
        )));
    }

    let mut seen = HashSet::with_capacity(shift.assigned_employees.len());
    for employee_id in &shift.assigned_employees {
        if !seen.insert(*employee_id) {
            return Err(ValidationError::new(format!(
                "shift {} assigns employee {} more than once",
                shift.id, employee_id
            )));
        }
    }

    Ok(())
}

pub fn validate_employee(employee: &Employee) -> Result<(), ValidationError> {
    if employee.name.trim().is_empty() {
        return Err(ValidationError::new(format!(
            "employee {} requires a non-empty name",
            employee.id
        )));
    }
    if let Some(rate) = employee.hourly_rate {
        if !non_negative(rate) {
            return Err(ValidationError::new(format!(
                "employee {} has invalid hourly_rate {}",
                employee.id, rate
            )));
        }
    }
    Ok(())
}

pub fn validate_contract(contract: &Contract) -> Result<(), ValidationError> {
    if contract.client_name.trim().is_empty() {
        return Err(ValidationError::new(format!(
            "contract {} requires a client name",
            contract.id
        )));
    }
    if let Some(end) = contract.end_date {
        if end < contract.start_date {
            return Err(ValidationError::new(format!(
                "contract {} ends {} before it starts {}",
                contract.id, end, contract.start_date
            )));
        }
    }
    if !non_negative(contract.monthly_value) {
        return Err(ValidationError::new(format!(
            "contract {} has invalid monthly_value {}",
            contract.id, contract.monthly_value
        )));
    }
    Ok(())
}

pub fn validate_invoice(invoice: &Invoice) -> Result<(), ValidationError> {
    if !invoice.vat_rate.is_finite() || !(0.0..=1.0).contains(&invoice.vat_rate) {
        return Err(ValidationError::new(format!(
            "invoice {} has invalid vat_rate {} (must be between 0 and 1)",
            invoice.number, invoice.vat_rate
        )));
    }
    if invoice.due_date < invoice.issue_date {
        return Err(ValidationError::new(format!(
            "invoice {} is due {} before it was issued {}",
            invoice.number, invoice.due_date, invoice.issue_date
        )));
    }
    for (idx, line) in invoice.lines.iter().enumerate() {
        if !non_negative(line.quantity) {
            return Err(ValidationError::new(format!(
                "invoice {} line #{} has invalid quantity {}",
                invoice.number, idx, line.quantity
            )));
        }
        if !non_negative(line.unit_price) {
            return Err(ValidationError::new(format!(
                "invoice {} line #{} has invalid unit_price {}",
                invoice.number, idx, line.unit_price
            )));
        }
    }
    Ok(())
}

pub fn validate_product(product: &Product) -> Result<(), ValidationError> {
    if product.name.trim().is_empty() {
        return Err(ValidationError::new(format!(
            "product {} requires a non-empty name",
            product.id
        )));
    }
    if !non_negative(product.price) {
        return Err(ValidationError::new(format!(
            "product {} has invalid price {}",
            product.id, product.price
        )));
    }
    Ok(())
}
