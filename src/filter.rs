//! Search box + dropdown filtering shared by every list screen.

use crate::contract::{Contract, ContractStatus};
use crate::employee::{Employee, EmployeeStatus};
use crate::invoice::{Invoice, InvoiceStatus};
use crate::product::{Product, ProductCategory};
use crate::shift::{Shift, ShiftStatus};
use serde::{Deserialize, Serialize};

/// Text fields a search term is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Records with one enum field the list screens filter on by equality.
pub trait Filterable: Searchable {
    type Key: Copy + PartialEq;

    fn filter_key(&self) -> Self::Key;
}

/// Case-insensitive substring match of the trimmed term against any field.
/// An empty term matches everything.
pub fn matches_search<'a, I>(fields: I, term: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListFilter<K> {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub key: Option<K>,
}

impl<K> Default for ListFilter<K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            key: None,
        }
    }
}

impl<K: Copy + PartialEq> ListFilter<K> {
    pub fn new(search: impl Into<String>, key: Option<K>) -> Self {
        Self {
            search: search.into(),
            key,
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self::new(term, None)
    }

    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Filterable<Key = K>,
    {
        self.key.is_none_or(|key| item.filter_key() == key)
            && matches_search(item.search_fields(), &self.search)
    }

    /// Keeps matching items in their original order.
    pub fn apply<'a, T, I>(&self, items: I) -> Vec<&'a T>
    where
        T: Filterable<Key = K> + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().filter(|item| self.matches(*item)).collect()
    }
}

impl Searchable for Shift {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.location.as_str()];
        if let Some(notes) = &self.notes {
            fields.push(notes.as_str());
        }
        fields
    }
}

impl Filterable for Shift {
    type Key = ShiftStatus;

    fn filter_key(&self) -> ShiftStatus {
        self.status
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.role.as_str(), self.email.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }
}

impl Filterable for Employee {
    type Key = EmployeeStatus;

    fn filter_key(&self) -> EmployeeStatus {
        self.status
    }
}

impl Searchable for Contract {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.contract_number.as_str(),
            self.client_name.as_str(),
            self.client_address.as_str(),
            self.service_type.as_str(),
        ]
    }
}

impl Filterable for Contract {
    type Key = ContractStatus;

    fn filter_key(&self) -> ContractStatus {
        self.status
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.client_name.as_str()]
    }
}

impl Filterable for Invoice {
    type Key = InvoiceStatus;

    fn filter_key(&self) -> InvoiceStatus {
        self.status
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Filterable for Product {
    type Key = ProductCategory;

    fn filter_key(&self) -> ProductCategory {
        self.category
    }
}
