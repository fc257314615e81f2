use linked_hash_set::LinkedHashSet;
use thiserror::Error;

use crate::action::ActionRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate action id: {0}")]
    DuplicateId(String),
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write catalog: {0}")]
    Write(#[from] std::io::Error),
}

/// Insertion-ordered collection of action records with unique ids.
///
/// Built once from literals and read-only after that. Registering two
/// records with the same id fails at construction rather than silently
/// overwriting the earlier one.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ActionRecord>,
    ids: LinkedHashSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            records: Vec::new(),
            ids: LinkedHashSet::new(),
        }
    }

    pub fn from_records(records: Vec<ActionRecord>) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();
        for record in records {
            catalog.push(record)?;
        }
        Ok(catalog)
    }

    pub fn push(&mut self, record: ActionRecord) -> Result<(), CatalogError> {
        if !self.ids.insert(record.id.clone()) {
            return Err(CatalogError::DuplicateId(record.id));
        }
        log::debug!("registered action {}", record.id);
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ActionRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

impl serde::Serialize for Catalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> ActionRecord {
        ActionRecord::new(
            "sword_attack",
            "Sword Attack",
            "1d20 + @strength_mod + @proficiency",
            "damage(target, 1d8 + @strength_mod)",
        )
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::from_records(vec![sword(), sword()]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "sword_attack"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_records(vec![
            sword(),
            ActionRecord::new("initiative", "Roll Initiative", "1d20 + @dexterity_mod", ""),
        ])
        .unwrap();
        assert_eq!(catalog.get("initiative").unwrap().label, "Roll Initiative");
        assert!(catalog.get("fireball").is_none());
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        catalog.push(sword()).unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_ids_keep_insertion_order() {
        let catalog = Catalog::from_records(vec![
            ActionRecord::new("initiative", "Roll Initiative", "1d20 + @dexterity_mod", ""),
            sword(),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec!["initiative", "sword_attack"]);
    }
}
