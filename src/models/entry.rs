use super::allocation::{Allocation, Share};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Groceries,
    Utilities,
    Rent,
    FoodAndDining,
    Transportation,
    Entertainment,
    Healthcare,
    Miscellaneous,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Groceries,
        ExpenseCategory::Utilities,
        ExpenseCategory::Rent,
        ExpenseCategory::FoodAndDining,
        ExpenseCategory::Transportation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::FoodAndDining => "Food & Dining",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    Expense,
    /// Money handed from one member to another to settle a balance.
    Payment,
}

/// A recorded entry. Never mutated after it is appended.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: String,
    pub group_id: String,
    pub kind: EntryKind,
    pub payer_id: String,
    pub amount: i64,
    pub shares: Vec<Share>,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
    pub recorded_by: String,
    pub created_at: DateTime<Utc>,
}

/// An expense as submitted by a caller, before its allocation is resolved.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewExpense {
    pub payer_id: String,
    pub amount: i64,
    /// `None` splits equally across everyone currently in the group.
    pub allocation: Option<Allocation>,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(payer_id: impl Into<String>, amount: i64) -> Self {
        NewExpense {
            payer_id: payer_id.into(),
            amount,
            allocation: None,
            category: ExpenseCategory::Miscellaneous,
            description: String::new(),
            date: Utc::now().date_naive(),
        }
    }

    pub fn split_equally<I, S>(mut self, member_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allocation = Some(Allocation::Equal(
            member_ids.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn split_weighted<I, S>(mut self, weights: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        self.allocation = Some(Allocation::Weighted(
            weights.into_iter().map(|(id, w)| (id.into(), w)).collect(),
        ));
        self
    }

    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = category;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }
}
