mod ledger_tests;

use crate::ledger::GroupLedger;
use crate::models::{Group, Member, Session};
use chrono::Utc;

pub fn roommates(ids: &[&str]) -> Group {
    Group {
        id: "flat".to_string(),
        name: "Flat".to_string(),
        members: ids
            .iter()
            .map(|id| Member::new(*id, id.to_uppercase()))
            .collect(),
        created_at: Utc::now(),
    }
}

pub fn test_ledger(ids: &[&str]) -> GroupLedger {
    let _ = env_logger::try_init();
    GroupLedger::new(roommates(ids))
}

pub fn session(id: &str) -> Session {
    Session::new(id, id.to_uppercase())
}
