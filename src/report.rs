//! Read-only views over a group ledger: per-person breakdown, the
//! due/receive report and the dashboard summary.

use crate::config::CONFIG;
use crate::constants::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_MINOR_UNIT_DIGITS, MAX_MINOR_UNIT_DIGITS};
use crate::error::LedgerError;
use crate::ledger::GroupLedger;
use serde::Serialize;

/// How minor units are rendered for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub minor_unit_digits: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            minor_unit_digits: DEFAULT_MINOR_UNIT_DIGITS,
        }
    }
}

impl CurrencyFormat {
    /// Digits above [`MAX_MINOR_UNIT_DIGITS`] are clamped.
    pub fn new(symbol: impl Into<String>, minor_unit_digits: u32) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            minor_unit_digits: minor_unit_digits.min(MAX_MINOR_UNIT_DIGITS),
        }
    }

    pub fn from_config() -> Self {
        CurrencyFormat::new(CONFIG.currency_symbol.clone(), CONFIG.minor_unit_digits)
    }

    /// `-123456` with two digits renders as `-৳1,234.56`.
    pub fn format(&self, amount: i64) -> String {
        let digits = self.minor_unit_digits.min(MAX_MINOR_UNIT_DIGITS);
        let sign = if amount < 0 { "-" } else { "" };
        let scale = 10u64.pow(digits);
        let abs = amount.unsigned_abs();
        let major = group_thousands(abs / scale);
        if digits == 0 {
            format!("{}{}{}", sign, self.symbol, major)
        } else {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.symbol,
                major,
                abs % scale,
                width = digits as usize
            )
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BalanceStatus {
    Receive(i64),
    Due(i64),
    Settled,
}

impl BalanceStatus {
    pub fn from_net(net: i64) -> Self {
        if net > 0 {
            BalanceStatus::Receive(net)
        } else if net < 0 {
            BalanceStatus::Due(-net)
        } else {
            BalanceStatus::Settled
        }
    }

    pub fn describe(&self, currency: &CurrencyFormat) -> String {
        match self {
            BalanceStatus::Receive(n) => format!("Receive {}", currency.format(*n)),
            BalanceStatus::Due(n) => format!("Due {}", currency.format(*n)),
            BalanceStatus::Settled => "Settled".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberReport {
    pub member_id: String,
    pub name: String,
    pub paid: i64,
    pub should_pay: i64,
    pub net: i64,
    pub status: BalanceStatus,
}

/// One row per member, in the order members joined the group.
pub fn per_person_report(ledger: &GroupLedger) -> Vec<MemberReport> {
    let totals = ledger.member_totals();
    ledger
        .group()
        .members
        .iter()
        .map(|member| {
            let t = totals.get(&member.id).copied().unwrap_or_default();
            MemberReport {
                member_id: member.id.clone(),
                name: member.name.clone(),
                paid: t.paid,
                should_pay: t.owed_share,
                net: t.net(),
                status: BalanceStatus::from_net(t.net()),
            }
        })
        .collect()
}

/// Plain-text due/receive report, one line per member.
pub fn render_report(rows: &[MemberReport], currency: &CurrencyFormat) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}: Paid {}, Should Pay {}, {}",
                row.name,
                currency.format(row.paid),
                currency.format(row.should_pay),
                row.status.describe(currency)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DueStatus {
    MyDue,
    WillReceive,
    AllSettled,
}

impl DueStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DueStatus::MyDue => "My Due",
            DueStatus::WillReceive => "I'll Receive",
            DueStatus::AllSettled => "All Settled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub group_id: String,
    pub member_id: String,
    pub total_group_expense: i64,
    pub my_paid: i64,
    /// Positive when the group owes this member.
    pub my_net: i64,
    pub status: DueStatus,
}

pub fn dashboard_summary(
    ledger: &GroupLedger,
    member_id: &str,
) -> Result<DashboardSummary, LedgerError> {
    let totals = ledger
        .member_totals()
        .get(member_id)
        .copied()
        .ok_or_else(|| LedgerError::UnknownMember(member_id.to_string()))?;
    let my_net = totals.net();
    let status = match my_net {
        n if n < 0 => DueStatus::MyDue,
        n if n > 0 => DueStatus::WillReceive,
        _ => DueStatus::AllSettled,
    };
    Ok(DashboardSummary {
        group_id: ledger.group().id.clone(),
        member_id: member_id.to_string(),
        total_group_expense: ledger.total_expense(),
        my_paid: totals.paid,
        my_net,
        status,
    })
}
