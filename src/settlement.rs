use crate::error::LedgerError;
use crate::models::{Balances, SettlementPlan, TransferInstruction};
use log::{debug, error};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A member waiting in the creditor or debtor queue. Larger outstanding
/// amounts come first; equal amounts fall back to the smaller member id.
#[derive(Debug, PartialEq, Eq)]
struct Outstanding {
    amount: u64,
    member_id: Reverse<String>,
}

impl Ord for Outstanding {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| self.member_id.cmp(&other.member_id))
    }
}

impl PartialOrd for Outstanding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the transfers that bring every balance back to zero.
///
/// Greedy matching: the largest debtor pays the largest creditor
/// `min(debt, credit)`, and whoever reaches zero leaves the queue. Every
/// round retires at least one member and the last round retires two, so the
/// plan never has more than `non_zero_members - 1` transfers.
///
/// Balances that do not sum to zero fail with
/// [`LedgerError::UnbalancedLedger`]; no plan could settle them.
pub fn compute_plan(balances: &Balances) -> Result<SettlementPlan, LedgerError> {
    debug!("Computing settlement plan for balances: {:?}", balances);

    let sum: i128 = balances.values().map(|v| i128::from(*v)).sum();
    if sum != 0 {
        error!("Net positions sum to {} instead of zero", sum);
        let imbalance = i64::try_from(sum).unwrap_or(if sum > 0 { i64::MAX } else { i64::MIN });
        return Err(LedgerError::UnbalancedLedger { imbalance });
    }

    let mut creditors: BinaryHeap<Outstanding> = BinaryHeap::new();
    let mut debtors: BinaryHeap<Outstanding> = BinaryHeap::new();
    for (member_id, &net) in balances {
        let queue = match net.cmp(&0) {
            Ordering::Greater => &mut creditors,
            Ordering::Less => &mut debtors,
            Ordering::Equal => continue,
        };
        queue.push(Outstanding {
            amount: net.unsigned_abs(),
            member_id: Reverse(member_id.clone()),
        });
    }

    let mut transfers = Vec::new();
    while let (Some(debtor), Some(creditor)) = (debtors.pop(), creditors.pop()) {
        let amount = debtor.amount.min(creditor.amount);
        transfers.push(TransferInstruction {
            from: debtor.member_id.0.clone(),
            to: creditor.member_id.0.clone(),
            // bounded by a creditor's positive i64 balance
            amount: amount as i64,
        });

        if debtor.amount > amount {
            debtors.push(Outstanding {
                amount: debtor.amount - amount,
                member_id: debtor.member_id,
            });
        }
        if creditor.amount > amount {
            creditors.push(Outstanding {
                amount: creditor.amount - amount,
                member_id: creditor.member_id,
            });
        }
    }

    let plan = SettlementPlan { transfers };
    debug!("Settlement plan: {:?}", plan);
    Ok(plan)
}

/// Balances after every transfer in `plan` has been paid.
pub fn apply_plan(balances: &Balances, plan: &SettlementPlan) -> Balances {
    let mut after = balances.clone();
    for transfer in plan {
        *after.entry(transfer.from.clone()).or_insert(0) += transfer.amount;
        *after.entry(transfer.to.clone()).or_insert(0) -= transfer.amount;
    }
    after
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(pairs: &[(&str, i64)]) -> Balances {
        pairs.iter().map(|(id, v)| (id.to_string(), *v)).collect()
    }

    fn transfer(from: &str, to: &str, amount: i64) -> TransferInstruction {
        TransferInstruction {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    #[test]
    fn two_members() {
        let plan = compute_plan(&balances(&[("a", 600), ("b", -600)])).unwrap();
        assert_eq!(plan.transfers, vec![transfer("b", "a", 600)]);
    }

    #[test]
    fn largest_debtor_pays_first() {
        let plan = compute_plan(&balances(&[("a", 667), ("b", -333), ("c", -334)])).unwrap();
        assert_eq!(
            plan.transfers,
            vec![transfer("c", "a", 334), transfer("b", "a", 333)]
        );
    }

    #[test]
    fn ties_break_on_member_id() {
        let plan = compute_plan(&balances(&[("d", -50), ("c", 50), ("b", -50), ("a", 50)])).unwrap();
        assert_eq!(
            plan.transfers,
            vec![transfer("b", "a", 50), transfer("d", "c", 50)]
        );
    }

    #[test]
    fn empty_and_settled_give_empty_plan() {
        assert!(compute_plan(&Balances::new()).unwrap().is_empty());
        assert!(compute_plan(&balances(&[("a", 0), ("b", 0)])).unwrap().is_empty());
    }

    #[test]
    fn single_non_zero_balance_is_unbalanced() {
        let err = compute_plan(&balances(&[("a", 10), ("b", 0)])).unwrap_err();
        assert_eq!(err, LedgerError::UnbalancedLedger { imbalance: 10 });
        assert!(err.is_integrity_violation());
    }

    #[test]
    fn extreme_balances_still_plan() {
        let input = balances(&[("a", i64::MIN), ("b", i64::MAX), ("c", 1)]);
        let plan = compute_plan(&input).unwrap();
        assert_eq!(
            plan.transfers,
            vec![transfer("a", "b", i64::MAX), transfer("a", "c", 1)]
        );
    }

    #[test]
    fn overflowing_imbalance_is_still_unbalanced() {
        let err = compute_plan(&balances(&[("a", i64::MAX), ("b", i64::MAX)])).unwrap_err();
        assert_eq!(err, LedgerError::UnbalancedLedger { imbalance: i64::MAX });
        assert!(err.is_integrity_violation());
    }

    #[test]
    fn applying_plan_zeroes_everything() {
        let input = balances(&[("a", 500), ("b", -200), ("c", -900), ("d", 600)]);
        let plan = compute_plan(&input).unwrap();
        assert!(plan.len() <= 3);
        assert!(apply_plan(&input, &plan).values().all(|v| *v == 0));
    }
}
