use crate::error::LedgerError;
use crate::ledger::GroupLedger;
use crate::models::*;
use futures::future::join_all;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type LedgerHandle = Arc<RwLock<GroupLedger>>;

/// Group ledgers shared between async tasks.
///
/// Each group sits behind its own lock: writes to one group are applied one
/// at a time in arrival order, reads take a consistent snapshot, and
/// different groups never wait on each other.
#[derive(Clone, Default)]
pub struct SharedLedgers {
    ledgers: Arc<RwLock<HashMap<String, LedgerHandle>>>,
}

impl SharedLedgers {
    pub fn new() -> Self {
        SharedLedgers {
            ledgers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, group: Group) -> Result<(), LedgerError> {
        let mut ledgers = self.ledgers.write().await;
        if ledgers.contains_key(&group.id) {
            return Err(LedgerError::DuplicateGroup(group.id));
        }
        info!("Registering group {}", group.id);
        ledgers.insert(
            group.id.clone(),
            Arc::new(RwLock::new(GroupLedger::new(group))),
        );
        Ok(())
    }

    async fn handle(&self, group_id: &str) -> Result<LedgerHandle, LedgerError> {
        self.ledgers
            .read()
            .await
            .get(group_id)
            .cloned()
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))
    }

    pub async fn add_member(
        &self,
        session: &Session,
        group_id: &str,
        member: Member,
    ) -> Result<(), LedgerError> {
        let handle = self.handle(group_id).await?;
        let mut ledger = handle.write().await;
        ledger.authorize(session)?;
        ledger.add_member(member)
    }

    pub async fn record_expense(
        &self,
        session: &Session,
        group_id: &str,
        expense: NewExpense,
    ) -> Result<ExpenseEntry, LedgerError> {
        let handle = self.handle(group_id).await?;
        let mut ledger = handle.write().await;
        ledger.authorize(session)?;
        ledger.record_expense(expense, &session.member_id)
    }

    pub async fn record_payment(
        &self,
        session: &Session,
        group_id: &str,
        from: &str,
        to: &str,
        amount: i64,
    ) -> Result<ExpenseEntry, LedgerError> {
        let handle = self.handle(group_id).await?;
        let mut ledger = handle.write().await;
        ledger.authorize(session)?;
        ledger.record_payment(from, to, amount, &session.member_id)
    }

    /// A copy of the group's ledger as of now. Later writes do not affect it.
    pub async fn snapshot(&self, group_id: &str) -> Result<GroupLedger, LedgerError> {
        let handle = self.handle(group_id).await?;
        let ledger = handle.read().await;
        debug!(
            "Snapshot of group {} at {} entries",
            group_id,
            ledger.entries().len()
        );
        Ok(ledger.clone())
    }

    pub async fn balances(&self, group_id: &str) -> Result<Balances, LedgerError> {
        let handle = self.handle(group_id).await?;
        let ledger = handle.read().await;
        Ok(ledger.balances())
    }

    pub async fn compute_plan(&self, group_id: &str) -> Result<SettlementPlan, LedgerError> {
        let handle = self.handle(group_id).await?;
        let ledger = handle.read().await;
        ledger.settlement_plan()
    }

    /// Balances of every registered group, sorted by group id.
    pub async fn all_balances(&self) -> Vec<(String, Balances)> {
        let handles: Vec<(String, LedgerHandle)> = self
            .ledgers
            .read()
            .await
            .iter()
            .map(|(id, h)| (id.clone(), h.clone()))
            .collect();

        let mut all = join_all(handles.into_iter().map(|(id, handle)| async move {
            let balances = handle.read().await.balances();
            (id, balances)
        }))
        .await;
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }
}
