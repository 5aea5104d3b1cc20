pub mod allocation;
pub mod audit;
pub mod balance;
pub mod entry;
pub mod group;
pub mod member;
pub mod session;
pub mod settlement;

pub use allocation::{Allocation, Share};
pub use audit::{AuditAction, AuditLogEntry};
pub use balance::{Balances, MemberTotals};
pub use entry::{EntryKind, ExpenseCategory, ExpenseEntry, NewExpense};
pub use group::Group;
pub use member::Member;
pub use session::Session;
pub use settlement::{SettlementPlan, TransferInstruction};
