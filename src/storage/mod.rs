use crate::error::LedgerError;
use crate::ledger::GroupLedger;
use crate::models::Group;

pub trait Storage {
    fn create_group(&mut self, group: Group) -> Result<Group, LedgerError>;
    fn get_group(&self, group_id: &str) -> Option<Group>;
    fn list_groups(&self) -> Vec<Group>;

    fn get_ledger(&self, group_id: &str) -> Option<&GroupLedger>;
    fn get_ledger_mut(&mut self, group_id: &str) -> Option<&mut GroupLedger>;
}

pub mod in_memory;
