use super::{Entity, Repository, StoreError, StoreResult};
use std::collections::BTreeMap;

/// Repository backed by an ordered map; `list` returns records by ascending id.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: BTreeMap<u32, T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut repo = Self::new();
        for record in records {
            repo.create(record)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.records.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.records.values()
    }

    pub fn next_id(&self) -> u32 {
        self.records
            .keys()
            .next_back()
            .map(|max| max + 1)
            .unwrap_or(1)
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    fn get(&self, id: u32) -> Option<T> {
        self.records.get(&id).cloned()
    }

    fn create(&mut self, record: T) -> StoreResult<T> {
        record.validate()?;
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(StoreError::Duplicate { kind: T::KIND, id });
        }
        self.records.insert(id, record.clone());
        tracing::debug!(kind = T::KIND, id, "record created");
        Ok(record)
    }

    fn update(&mut self, record: T) -> StoreResult<T> {
        record.validate()?;
        let id = record.id();
        let Some(slot) = self.records.get_mut(&id) else {
            return Err(StoreError::NotFound { kind: T::KIND, id });
        };
        *slot = record.clone();
        tracing::debug!(kind = T::KIND, id, "record updated");
        Ok(record)
    }
}
