pub(crate) mod labels;

pub mod auth;
pub mod calendar;
pub mod config;
pub mod conflicts;
pub mod contract;
pub mod dashboard;
pub mod employee;
pub mod filter;
pub mod grid;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod i18n;
pub mod invoice;
pub mod logging;
pub mod mock;
pub mod payroll;
pub mod product;
pub mod projector;
pub mod report;
pub mod shift;
pub mod store;
pub mod validation;
pub mod view_state;

pub use auth::{AuthError, CredentialTable, Credentials, LoginSuccess, Profile, UserType};
pub use calendar::WorkCalendar;
pub use config::{ConfigError, PortalConfig};
pub use conflicts::{ShiftConflict, find_conflicts};
pub use contract::{Contract, ContractStatus, ServiceType};
pub use dashboard::DashboardSummary;
pub use employee::{Employee, EmployeeStatus};
pub use filter::{Filterable, ListFilter, Searchable};
pub use grid::{GridDay, ViewMode, build_grid_days, visible_days};
pub use i18n::{Language, LanguagePreference, MemoryKeyValueStore, Translator};
pub use invoice::{Invoice, InvoiceLine, InvoiceStatus};
pub use labels::ParseEnumError;
pub use payroll::{PayrollLine, run_payroll};
pub use product::{Product, ProductCategory};
pub use projector::{CalendarGrid, SlotCell, project, shifts_in_slot};
pub use report::{WorkloadRow, workload_by_employee};
pub use shift::{Shift, ShiftPriority, ShiftStatus, TransitionError};
pub use store::{
    Dataset, Entity, InMemoryRepository, PortalStore, Repository, StoreError, StoreResult,
    load_dataset_from_json, load_shifts_from_csv,
};
pub use validation::ValidationError;
pub use view_state::{ScheduleAction, ScheduleViewState, reduce};
