use serde::{Deserialize, Serialize};

/// `from` pays `amount` to `to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInstruction {
    pub from: String,
    pub to: String,
    pub amount: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPlan {
    pub transfers: Vec<TransferInstruction>,
}

impl SettlementPlan {
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransferInstruction> {
        self.transfers.iter()
    }

    pub fn total(&self) -> i64 {
        self.transfers.iter().map(|t| t.amount).sum()
    }
}

impl<'a> IntoIterator for &'a SettlementPlan {
    type Item = &'a TransferInstruction;
    type IntoIter = std::slice::Iter<'a, TransferInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transfers.iter()
    }
}
