use crate::calendar::WorkCalendar;
use crate::invoice::round_currency;
use crate::shift::ShiftStatus;
use crate::store::PortalStore;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub day: NaiveDate,
    pub shift_count: usize,
    pub shifts_by_status: BTreeMap<ShiftStatus, usize>,
    pub shifts_today: usize,
    pub employees_available: usize,
    pub active_contracts: usize,
    pub monthly_contract_value: f64,
    pub outstanding_invoices: usize,
    pub outstanding_amount: f64,
    pub overdue_invoices: usize,
    pub working_days_in_month: i64,
}

impl DashboardSummary {
    pub fn build(store: &PortalStore, calendar: &WorkCalendar, day: NaiveDate) -> Self {
        let mut shifts_by_status = BTreeMap::new();
        let mut shifts_today = 0;
        for shift in store.shifts.iter() {
            *shifts_by_status.entry(shift.status).or_insert(0) += 1;
            if shift.date == Some(day) {
                shifts_today += 1;
            }
        }

        let running: Vec<_> = store
            .contracts
            .iter()
            .filter(|contract| contract.is_running_on(day))
            .collect();
        let outstanding: Vec<_> = store
            .invoices
            .iter()
            .filter(|invoice| invoice.is_outstanding())
            .collect();

        let month_start = day.with_day(1).unwrap_or(day);
        let month_end = month_start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(month_start);

        Self {
            day,
            shift_count: store.shifts.len(),
            shifts_by_status,
            shifts_today,
            employees_available: store.employees.iter().filter(|e| e.is_available()).count(),
            active_contracts: running.len(),
            monthly_contract_value: round_currency(running.iter().map(|c| c.monthly_value).sum()),
            outstanding_invoices: outstanding.len(),
            outstanding_amount: round_currency(outstanding.iter().map(|i| i.total()).sum()),
            overdue_invoices: outstanding.iter().filter(|i| i.is_overdue(day)).count(),
            working_days_in_month: calendar.count_available_days(month_start, month_end),
        }
    }

    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("day={}", self.day));
        parts.push(format!("shifts={}", self.shift_count));
        parts.push(format!("today={}", self.shifts_today));
        for (status, count) in &self.shifts_by_status {
            parts.push(format!("{}={}", status, count));
        }
        parts.push(format!("available={}", self.employees_available));
        parts.push(format!(
            "contracts={} ({:.2} NOK/month)",
            self.active_contracts, self.monthly_contract_value
        ));
        if self.outstanding_invoices > 0 {
            parts.push(format!(
                "outstanding={} ({:.2} NOK)",
                self.outstanding_invoices, self.outstanding_amount
            ));
        }
        if self.overdue_invoices > 0 {
            parts.push(format!("overdue={}", self.overdue_invoices));
        }
        parts.push(format!("workdays={}", self.working_days_in_month));
        parts.join(", ")
    }
}
