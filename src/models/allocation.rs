use serde::{Deserialize, Serialize};

/// Who shares an expense, and in what proportion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allocation {
    /// Equal parts between the listed members.
    Equal(Vec<String>),
    /// Parts proportional to each member's weight.
    Weighted(Vec<(String, u32)>),
}

/// One member's resolved part of an entry, in minor units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub member_id: String,
    pub amount: i64,
}
