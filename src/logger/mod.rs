use crate::models::{AuditAction, AuditLogEntry, Session};
use chrono::Utc;
use serde_json::Value;

/// Sink for the audit trail of successful ledger writes.
pub trait AuditLogger {
    fn log(&mut self, entry: AuditLogEntry);

    /// Logs `action` on behalf of the session member, stamped now.
    fn record(&mut self, session: &Session, action: AuditAction, payload: &Value) {
        self.log(AuditLogEntry::new(
            &session.member_id,
            action,
            payload,
            Utc::now(),
        ));
    }
}

pub mod in_memory;
