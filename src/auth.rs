//! Mock login against a fixed credential table. No sessions or tokens are issued.

use crate::labels::labelled_enum;
use serde::{Deserialize, Serialize};
use std::fmt;

labelled_enum! {
    pub enum UserType {
        Company => "company",
        Employee => "employee",
        Customer => "customer",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_code: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            company_code: None,
        }
    }

    pub fn with_company_code(mut self, code: impl Into<String>) -> Self {
        self.company_code = Some(code.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginSuccess {
    pub user_type: UserType,
    pub profile: Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    InvalidCompanyCode,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::InvalidCompanyCode => write!(f, "Invalid company code"),
        }
    }
}

impl std::error::Error for AuthError {}

#[derive(Debug, Clone)]
struct CredentialEntry {
    email: String,
    password: String,
    company_code: Option<String>,
    user_type: UserType,
    profile: Profile,
}

#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    entries: Vec<CredentialEntry>,
}

impl CredentialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo accounts the portal ships with.
    pub fn demo() -> Self {
        let mut table = Self::new();
        table.add(
            "admin@cleantech.no",
            "admin123",
            Some("CLEAN001"),
            UserType::Company,
            Profile {
                name: "CleanTech Solutions AS".into(),
                email: "admin@cleantech.no".into(),
                company: Some("CleanTech Solutions AS".into()),
                employee_id: None,
            },
        );
        table.add(
            "lars.hansen@cleantech.no",
            "employee123",
            Some("CLEAN001"),
            UserType::Employee,
            Profile {
                name: "Lars Hansen".into(),
                email: "lars.hansen@cleantech.no".into(),
                company: Some("CleanTech Solutions AS".into()),
                employee_id: Some(1),
            },
        );
        table.add(
            "kontakt@nordicoffice.no",
            "customer123",
            None,
            UserType::Customer,
            Profile {
                name: "Nordic Office Park".into(),
                email: "kontakt@nordicoffice.no".into(),
                company: None,
                employee_id: None,
            },
        );
        table
    }

    pub fn add(
        &mut self,
        email: impl Into<String>,
        password: impl Into<String>,
        company_code: Option<&str>,
        user_type: UserType,
        profile: Profile,
    ) {
        self.entries.push(CredentialEntry {
            email: email.into(),
            password: password.into(),
            company_code: company_code.map(str::to_string),
            user_type,
            profile,
        });
    }

    /// Email and password are checked first; accounts tied to a company also
    /// require its code. Emails and codes compare case-insensitively.
    pub fn login(&self, credentials: &Credentials) -> Result<LoginSuccess, AuthError> {
        let email = credentials.email.trim();
        let Some(entry) = self
            .entries
            .iter()
            .find(|entry| entry.email.eq_ignore_ascii_case(email))
            .filter(|entry| entry.password == credentials.password)
        else {
            tracing::info!(email, "login rejected: bad credentials");
            return Err(AuthError::InvalidCredentials);
        };

        if let Some(expected) = &entry.company_code {
            let supplied = credentials.company_code.as_deref().unwrap_or("").trim();
            if !expected.eq_ignore_ascii_case(supplied) {
                tracing::info!(email, "login rejected: bad company code");
                return Err(AuthError::InvalidCompanyCode);
            }
        }

        tracing::info!(email, user_type = %entry.user_type, "login accepted");
        Ok(LoginSuccess {
            user_type: entry.user_type,
            profile: entry.profile.clone(),
        })
    }
}
