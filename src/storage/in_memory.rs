use crate::error::LedgerError;
use crate::ledger::GroupLedger;
use crate::models::Group;
use crate::storage::Storage;
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemoryStorage {
    ledgers: HashMap<String, GroupLedger>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            ledgers: HashMap::new(),
        }
    }
}

impl Storage for InMemoryStorage {
    fn create_group(&mut self, group: Group) -> Result<Group, LedgerError> {
        if self.ledgers.contains_key(&group.id) {
            return Err(LedgerError::DuplicateGroup(group.id));
        }
        self.ledgers
            .insert(group.id.clone(), GroupLedger::new(group.clone()));
        Ok(group)
    }

    fn get_group(&self, group_id: &str) -> Option<Group> {
        self.ledgers.get(group_id).map(|l| l.group().clone())
    }

    fn list_groups(&self) -> Vec<Group> {
        let mut groups: Vec<Group> = self.ledgers.values().map(|l| l.group().clone()).collect();
        groups.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        groups
    }

    fn get_ledger(&self, group_id: &str) -> Option<&GroupLedger> {
        self.ledgers.get(group_id)
    }

    fn get_ledger_mut(&mut self, group_id: &str) -> Option<&mut GroupLedger> {
        self.ledgers.get_mut(group_id)
    }
}
