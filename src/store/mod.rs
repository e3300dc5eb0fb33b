use crate::contract::Contract;
use crate::employee::Employee;
use crate::invoice::Invoice;
use crate::product::Product;
use crate::shift::{Shift, ShiftStatus, TransitionError};
use crate::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum StoreError {
    NotFound { kind: &'static str, id: u32 },
    Duplicate { kind: &'static str, id: u32 },
    Invalid(String),
    Transition(TransitionError),
    Io(io::Error),
    Serialization(SerdeJsonError),
    Csv(csv::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { kind, id } => write!(f, "{kind} {id} not found"),
            StoreError::Duplicate { kind, id } => write!(f, "{kind} {id} already exists"),
            StoreError::Invalid(msg) => write!(f, "invalid data: {msg}"),
            StoreError::Transition(err) => write!(f, "{err}"),
            StoreError::Io(err) => write!(f, "io error: {err}"),
            StoreError::Serialization(err) => write!(f, "serialization error: {err}"),
            StoreError::Csv(err) => write!(f, "csv error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Invalid(value.to_string())
    }
}

impl From<TransitionError> for StoreError {
    fn from(value: TransitionError) -> Self {
        Self::Transition(value)
    }
}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SerdeJsonError> for StoreError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<csv::Error> for StoreError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A record a repository can hold: identified by a numeric id and checked on write.
pub trait Entity: Clone {
    const KIND: &'static str;

    fn id(&self) -> u32;

    fn validate(&self) -> Result<(), ValidationError>;
}

impl Entity for Shift {
    const KIND: &'static str = "shift";

    fn id(&self) -> u32 {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_shift(self)
    }
}

impl Entity for Employee {
    const KIND: &'static str = "employee";

    fn id(&self) -> u32 {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_employee(self)
    }
}

impl Entity for Contract {
    const KIND: &'static str = "contract";

    fn id(&self) -> u32 {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_contract(self)
    }
}

impl Entity for Invoice {
    const KIND: &'static str = "invoice";

    fn id(&self) -> u32 {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_invoice(self)
    }
}

impl Entity for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> u32 {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_product(self)
    }
}

pub trait Repository<T: Entity> {
    fn list(&self) -> Vec<T>;
    fn get(&self, id: u32) -> Option<T>;
    fn create(&mut self, record: T) -> StoreResult<T>;
    fn update(&mut self, record: T) -> StoreResult<T>;
}

/// Plain record lists, the shape of a fixture file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// One repository per entity, as the portal screens see them.
#[derive(Debug, Clone, Default)]
pub struct PortalStore {
    pub shifts: InMemoryRepository<Shift>,
    pub employees: InMemoryRepository<Employee>,
    pub contracts: InMemoryRepository<Contract>,
    pub invoices: InMemoryRepository<Invoice>,
    pub products: InMemoryRepository<Product>,
}

impl PortalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dataset(dataset: Dataset) -> StoreResult<Self> {
        let store = Self {
            shifts: InMemoryRepository::from_records(dataset.shifts)?,
            employees: InMemoryRepository::from_records(dataset.employees)?,
            contracts: InMemoryRepository::from_records(dataset.contracts)?,
            invoices: InMemoryRepository::from_records(dataset.invoices)?,
            products: InMemoryRepository::from_records(dataset.products)?,
        };
        store.check_shift_assignments()?;
        Ok(store)
    }

    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            employees: self.employees.list(),
            shifts: self.shifts.list(),
            contracts: self.contracts.list(),
            invoices: self.invoices.list(),
            products: self.products.list(),
        }
    }

    /// Replaces every shift, e.g. after importing a CSV fixture.
    pub fn replace_shifts(&mut self, shifts: Vec<Shift>) -> StoreResult<()> {
        let replacement = InMemoryRepository::from_records(shifts)?;
        let previous = std::mem::replace(&mut self.shifts, replacement);
        if let Err(err) = self.check_shift_assignments() {
            self.shifts = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn create_shift(&mut self, shift: Shift) -> StoreResult<Shift> {
        self.check_assignment(&shift)?;
        self.shifts.create(shift)
    }

    pub fn update_shift(&mut self, shift: Shift) -> StoreResult<Shift> {
        self.check_assignment(&shift)?;
        self.shifts.update(shift)
    }

    pub fn set_shift_status(&mut self, shift_id: u32, status: ShiftStatus) -> StoreResult<Shift> {
        let mut shift = self.shifts.get(shift_id).ok_or(StoreError::NotFound {
            kind: Shift::KIND,
            id: shift_id,
        })?;
        let previous = shift.status;
        shift.transition_to(status)?;
        let updated = self.shifts.update(shift)?;
        tracing::info!(shift_id, from = %previous, to = %status, "shift status changed");
        Ok(updated)
    }

    pub fn assigned_employees(&self, shift: &Shift) -> Vec<Employee> {
        shift
            .assigned_employees
            .iter()
            .filter_map(|id| self.employees.get(*id))
            .collect()
    }

    /// Shifts may only reference employees the store knows about. A store
    /// without employee records accepts any reference.
    fn check_assignment(&self, shift: &Shift) -> StoreResult<()> {
        if self.employees.is_empty() {
            return Ok(());
        }
        match shift
            .assigned_employees
            .iter()
            .find(|id| !self.employees.contains(**id))
        {
            Some(unknown) => Err(StoreError::Invalid(format!(
                "shift {} references unknown employee {}",
                shift.id, unknown
            ))),
            None => Ok(()),
        }
    }

    fn check_shift_assignments(&self) -> StoreResult<()> {
        self.shifts
            .iter()
            .try_for_each(|shift| self.check_assignment(shift))
    }
}

pub mod import;
pub mod memory;

pub use import::{load_dataset_from_json, load_shifts_from_csv, read_dataset_json, read_shifts_csv};
pub use memory::InMemoryRepository;
