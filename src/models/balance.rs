use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Net position per member id. Positive: the group owes the member.
pub type Balances = BTreeMap<String, i64>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTotals {
    pub paid: i64,
    pub owed_share: i64,
}

impl MemberTotals {
    pub fn net(&self) -> i64 {
        self.paid - self.owed_share
    }
}
