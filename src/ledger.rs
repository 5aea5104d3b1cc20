use crate::allocation::resolve_shares;
use crate::constants::MAX_ENTRY_AMOUNT;
use crate::error::LedgerError;
use crate::models::*;
use crate::settlement::compute_plan;
use chrono::Utc;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Members of one group plus its append-only entry log.
///
/// Every balance is derived by folding the log; nothing else is stored.
/// Failed writes leave the ledger exactly as it was.
#[derive(Clone, Debug)]
pub struct GroupLedger {
    group: Group,
    entries: Vec<ExpenseEntry>,
    // sum of every entry amount; bounds each member's paid and owed totals
    volume: i64,
}

impl GroupLedger {
    pub fn new(group: Group) -> Self {
        Self {
            group,
            entries: Vec::new(),
            volume: 0,
        }
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Fails with `NotGroupMember` unless the session member belongs here.
    pub fn authorize(&self, session: &Session) -> Result<(), LedgerError> {
        if !self.group.is_member(&session.member_id) {
            warn!(
                "Member {} has no access to group {}",
                session.member_id, self.group.id
            );
            return Err(LedgerError::NotGroupMember(session.member_id.clone()));
        }
        Ok(())
    }

    pub fn add_member(&mut self, member: Member) -> Result<(), LedgerError> {
        if self.group.is_member(&member.id) {
            warn!("Member {} already in group {}", member.id, self.group.id);
            return Err(LedgerError::DuplicateMember(member.id));
        }
        info!("Adding member {} to group {}", member.id, self.group.id);
        self.group.members.push(member);
        Ok(())
    }

    pub fn record_expense(
        &mut self,
        expense: NewExpense,
        recorded_by: &str,
    ) -> Result<ExpenseEntry, LedgerError> {
        info!(
            "Recording expense of {} paid by {} in group {}",
            expense.amount, expense.payer_id, self.group.id
        );
        self.validate_amount(expense.amount)?;
        self.validate_member(&expense.payer_id)?;
        let shares = resolve_shares(&self.group, expense.amount, expense.allocation.as_ref())?;

        Ok(self.append(ExpenseEntry {
            id: Uuid::new_v4().to_string(),
            group_id: self.group.id.clone(),
            kind: EntryKind::Expense,
            payer_id: expense.payer_id,
            amount: expense.amount,
            shares,
            category: expense.category,
            description: expense.description,
            date: expense.date,
            recorded_by: recorded_by.to_string(),
            created_at: Utc::now(),
        }))
    }

    /// Records `from` handing `amount` to `to`. Moves `from`'s net position
    /// up and `to`'s down by the same amount.
    pub fn record_payment(
        &mut self,
        from: &str,
        to: &str,
        amount: i64,
        recorded_by: &str,
    ) -> Result<ExpenseEntry, LedgerError> {
        info!(
            "Recording payment of {} from {} to {} in group {}",
            amount, from, to, self.group.id
        );
        self.validate_amount(amount)?;
        self.validate_member(from)?;
        self.validate_member(to)?;
        if from == to {
            warn!("Self payment by {} in group {}", from, self.group.id);
            return Err(LedgerError::SelfTransfer(from.to_string()));
        }

        let now = Utc::now();
        Ok(self.append(ExpenseEntry {
            id: Uuid::new_v4().to_string(),
            group_id: self.group.id.clone(),
            kind: EntryKind::Payment,
            payer_id: from.to_string(),
            amount,
            shares: vec![Share {
                member_id: to.to_string(),
                amount,
            }],
            category: ExpenseCategory::Miscellaneous,
            description: "Settlement payment".to_string(),
            date: now.date_naive(),
            recorded_by: recorded_by.to_string(),
            created_at: now,
        }))
    }

    /// Paid and owed totals for every current member, zero if untouched.
    pub fn member_totals(&self) -> BTreeMap<String, MemberTotals> {
        let mut totals: BTreeMap<String, MemberTotals> = self
            .group
            .members
            .iter()
            .map(|m| (m.id.clone(), MemberTotals::default()))
            .collect();

        // cannot overflow: no total exceeds `volume`
        for entry in &self.entries {
            totals.entry(entry.payer_id.clone()).or_default().paid += entry.amount;
            for share in &entry.shares {
                totals.entry(share.member_id.clone()).or_default().owed_share += share.amount;
            }
        }
        totals
    }

    pub fn balances(&self) -> Balances {
        let balances: Balances = self
            .member_totals()
            .into_iter()
            .map(|(id, t)| (id, t.net()))
            .collect();
        debug!("Balances for group {}: {:?}", self.group.id, balances);
        balances
    }

    pub fn settlement_plan(&self) -> Result<SettlementPlan, LedgerError> {
        compute_plan(&self.balances())
    }

    /// Sum of recorded expenses. Settlement payments move money between
    /// members and are not spending, so they are left out.
    pub fn total_expense(&self) -> i64 {
        self.expenses().map(|e| e.amount).sum()
    }

    pub fn category_totals(&self) -> BTreeMap<ExpenseCategory, i64> {
        let mut totals = BTreeMap::new();
        for entry in self.expenses() {
            *totals.entry(entry.category).or_insert(0) += entry.amount;
        }
        totals
    }

    fn expenses(&self) -> impl Iterator<Item = &ExpenseEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Expense)
    }

    fn validate_amount(&self, amount: i64) -> Result<(), LedgerError> {
        if amount <= 0 || amount > MAX_ENTRY_AMOUNT {
            warn!("Rejected amount {} for group {}", amount, self.group.id);
            return Err(LedgerError::InvalidAmount(amount));
        }
        if self.volume.checked_add(amount).is_none() {
            warn!(
                "Amount {} would overflow the totals of group {}",
                amount, self.group.id
            );
            return Err(LedgerError::InvalidAmount(amount));
        }
        Ok(())
    }

    fn validate_member(&self, member_id: &str) -> Result<(), LedgerError> {
        if !self.group.is_member(member_id) {
            warn!("Member {} not in group {}", member_id, self.group.id);
            return Err(LedgerError::UnknownMember(member_id.to_string()));
        }
        Ok(())
    }

    fn append(&mut self, entry: ExpenseEntry) -> ExpenseEntry {
        debug!("Appending entry {} to group {}", entry.id, self.group.id);
        self.volume += entry.amount;
        self.entries.push(entry.clone());
        entry
    }
}
