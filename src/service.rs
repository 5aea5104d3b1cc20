use crate::error::LedgerError;
use crate::ledger::GroupLedger;
use crate::logger::AuditLogger;
use crate::models::*;
use crate::report::{self, DashboardSummary, MemberReport};
use crate::storage::Storage;
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

pub struct LedgerService<'a> {
    pub storage: &'a mut dyn Storage,
    pub audit_logger: &'a mut dyn AuditLogger,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a mut dyn Storage, audit_logger: &'a mut dyn AuditLogger) -> Self {
        info!("Initializing LedgerService");
        Self {
            storage,
            audit_logger,
        }
    }

    // GROUP MANAGEMENT

    /// Creates a group. The session member is always part of it and comes
    /// first unless listed explicitly.
    pub fn create_group(
        &mut self,
        session: &Session,
        name: String,
        members: Vec<Member>,
    ) -> Result<Group, LedgerError> {
        info!("Creating group '{}' for member {}", name, session.member_id);
        let mut roster: Vec<Member> = Vec::with_capacity(members.len() + 1);
        if !members.iter().any(|m| m.id == session.member_id) {
            roster.push(Member::new(session.member_id.clone(), session.name.clone()));
        }
        for member in members {
            if roster.iter().any(|m| m.id == member.id) {
                warn!("Duplicate member {} in new group '{}'", member.id, name);
                return Err(LedgerError::DuplicateMember(member.id));
            }
            roster.push(member);
        }

        let now = Utc::now();
        let group = Group {
            id: Uuid::new_v4().to_string(),
            name,
            members: roster,
            created_at: now,
        };
        let created = self.storage.create_group(group)?;
        debug!("Group created with ID: {}", created.id);

        self.audit_logger.record(
            session,
            AuditAction::CreateGroup,
            &serde_json::json!({ "group_id": created.id, "members": created.member_ids() }),
        );

        Ok(created)
    }

    pub fn add_member(
        &mut self,
        session: &Session,
        group_id: &str,
        member: Member,
    ) -> Result<Group, LedgerError> {
        info!(
            "Member {} adding {} to group {}",
            session.member_id, member.id, group_id
        );
        let ledger = self.authorized_ledger_mut(session, group_id)?;
        let member_id = member.id.clone();
        ledger.add_member(member)?;
        let group = ledger.group().clone();

        self.audit_logger.record(
            session,
            AuditAction::AddMember,
            &serde_json::json!({ "group_id": group_id, "member_id": member_id }),
        );

        Ok(group)
    }

    pub fn get_group(&self, group_id: &str) -> Result<Group, LedgerError> {
        self.storage
            .get_group(group_id)
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))
    }

    /// Groups the session member belongs to, oldest first.
    pub fn list_groups(&self, session: &Session) -> Vec<Group> {
        self.storage
            .list_groups()
            .into_iter()
            .filter(|g| g.is_member(&session.member_id))
            .collect()
    }

    // ENTRIES

    pub fn record_expense(
        &mut self,
        session: &Session,
        group_id: &str,
        expense: NewExpense,
    ) -> Result<ExpenseEntry, LedgerError> {
        let ledger = self.authorized_ledger_mut(session, group_id)?;
        let entry = ledger.record_expense(expense, &session.member_id)?;
        debug!("Expense recorded with ID: {}", entry.id);

        self.audit_logger.log(AuditLogEntry::new(
            &session.member_id,
            AuditAction::RecordExpense,
            &serde_json::json!({
                "entry_id": entry.id,
                "group_id": group_id,
                "payer_id": entry.payer_id,
                "amount": entry.amount,
            }),
            entry.created_at,
        ));

        Ok(entry)
    }

    pub fn record_payment(
        &mut self,
        session: &Session,
        group_id: &str,
        from: &str,
        to: &str,
        amount: i64,
    ) -> Result<ExpenseEntry, LedgerError> {
        let ledger = self.authorized_ledger_mut(session, group_id)?;
        let entry = ledger.record_payment(from, to, amount, &session.member_id)?;
        debug!("Payment recorded with ID: {}", entry.id);

        self.audit_logger.log(AuditLogEntry::new(
            &session.member_id,
            AuditAction::RecordPayment,
            &serde_json::json!({
                "entry_id": entry.id,
                "group_id": group_id,
                "from": from,
                "to": to,
                "amount": amount,
            }),
            entry.created_at,
        ));

        Ok(entry)
    }

    /// Records every transfer of the current plan as a payment. Either the
    /// whole plan is recorded or nothing is.
    pub fn settle_all(
        &mut self,
        session: &Session,
        group_id: &str,
    ) -> Result<SettlementPlan, LedgerError> {
        info!("Member {} settling group {}", session.member_id, group_id);
        let ledger = self.authorized_ledger_mut(session, group_id)?;
        let plan = ledger.settlement_plan()?;

        let mut staged = ledger.clone();
        for transfer in &plan {
            staged.record_payment(
                &transfer.from,
                &transfer.to,
                transfer.amount,
                &session.member_id,
            )?;
        }
        *ledger = staged;

        self.audit_logger.record(
            session,
            AuditAction::SettleAll,
            &serde_json::json!({ "group_id": group_id, "transfers": plan.transfers }),
        );

        debug!("Group {} settled with {} transfers", group_id, plan.len());
        Ok(plan)
    }

    // SUMMARY & SETTLEMENT

    pub fn get_balances(&self, group_id: &str) -> Result<Balances, LedgerError> {
        Ok(self.ledger(group_id)?.balances())
    }

    pub fn compute_plan(&self, group_id: &str) -> Result<SettlementPlan, LedgerError> {
        self.ledger(group_id)?.settlement_plan()
    }

    pub fn member_report(&self, group_id: &str) -> Result<Vec<MemberReport>, LedgerError> {
        Ok(report::per_person_report(self.ledger(group_id)?))
    }

    pub fn dashboard(
        &self,
        session: &Session,
        group_id: &str,
    ) -> Result<DashboardSummary, LedgerError> {
        let ledger = self.ledger(group_id)?;
        ledger.authorize(session)?;
        report::dashboard_summary(ledger, &session.member_id)
    }

    pub fn ledger(&self, group_id: &str) -> Result<&GroupLedger, LedgerError> {
        self.storage
            .get_ledger(group_id)
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))
    }

    // PERMISSION HELPERS

    fn authorized_ledger_mut(
        &mut self,
        session: &Session,
        group_id: &str,
    ) -> Result<&mut GroupLedger, LedgerError> {
        let ledger = self
            .storage
            .get_ledger_mut(group_id)
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))?;
        ledger.authorize(session)?;
        Ok(ledger)
    }
}
