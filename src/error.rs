use serde::Serialize;
use thiserror::Error;

/// Broad class of a [`LedgerError`], so callers can tell bad input apart
/// from an inconsistent ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// The request was rejected; the caller should fix its input.
    Validation,
    /// A referenced group does not exist.
    NotFound,
    /// Stored data broke an invariant. This is a bug, not a user error.
    Integrity,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LedgerError {
    /// Amount is zero, negative, above the per-entry ceiling, or would push
    /// the group's running total past `i64`
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    /// Payer or allocated member is not part of the group
    #[error("Member {0} is not part of the group")]
    UnknownMember(String),

    /// Allocation names no member with a non-zero share
    #[error("Allocation is empty")]
    EmptyAllocation,

    /// Net positions do not sum to zero
    #[error("Ledger is unbalanced: net positions sum to {imbalance}")]
    UnbalancedLedger { imbalance: i64 },

    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(String),

    /// Group with given ID already exists
    #[error("Group {0} already exists")]
    DuplicateGroup(String),

    /// Member ID is already used in the group
    #[error("Member {0} is already in the group")]
    DuplicateMember(String),

    /// Session member is not allowed to act on the group
    #[error("User {0} is not a group member")]
    NotGroupMember(String),

    /// Payment from a member to themselves
    #[error("Cannot record a payment from {0} to themselves")]
    SelfTransfer(String),
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::UnbalancedLedger { .. } => ErrorKind::Integrity,
            LedgerError::GroupNotFound(_) => ErrorKind::NotFound,
            LedgerError::InvalidAmount(_)
            | LedgerError::UnknownMember(_)
            | LedgerError::EmptyAllocation
            | LedgerError::DuplicateGroup(_)
            | LedgerError::DuplicateMember(_)
            | LedgerError::NotGroupMember(_)
            | LedgerError::SelfTransfer(_) => ErrorKind::Validation,
        }
    }

    pub fn is_integrity_violation(&self) -> bool {
        self.kind() == ErrorKind::Integrity
    }
}
