use crate::labels::labelled_enum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

labelled_enum! {
    pub enum EmployeeStatus {
        Available => "available",
        Busy => "busy",
        OffDuty => "off-duty",
        OnLeave => "on-leave",
    }
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        EmployeeStatus::Available
    }
}

/// Staff member that can be assigned to shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Gross pay per worked hour; payroll treats a missing rate as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            skills: BTreeSet::new(),
            status: EmployeeStatus::default(),
            email: String::new(),
            phone: None,
            hourly_rate: None,
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }

    pub fn is_available(&self) -> bool {
        self.status == EmployeeStatus::Available
    }
}
