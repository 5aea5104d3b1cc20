use crate::error::LedgerError;
use crate::models::{Allocation, Group, Share};
use log::{debug, warn};

/// Turns an allocation into concrete per-member shares of `amount`.
///
/// Shares always sum to exactly `amount`. Whatever integer division leaves
/// over goes to the first member in allocation order, so the result is the
/// same on every run.
pub fn resolve_shares(
    group: &Group,
    amount: i64,
    allocation: Option<&Allocation>,
) -> Result<Vec<Share>, LedgerError> {
    let mut weights: Vec<(String, u64)> = match allocation {
        None => group.members.iter().map(|m| (m.id.clone(), 1)).collect(),
        Some(Allocation::Equal(ids)) => {
            let mut weights: Vec<(String, u64)> = Vec::with_capacity(ids.len());
            for id in ids {
                if !weights.iter().any(|(seen, _)| seen == id) {
                    weights.push((id.clone(), 1));
                }
            }
            weights
        }
        Some(Allocation::Weighted(pairs)) => {
            let mut weights: Vec<(String, u64)> = Vec::with_capacity(pairs.len());
            for (id, weight) in pairs {
                match weights.iter_mut().find(|(seen, _)| seen == id) {
                    Some((_, w)) => *w += u64::from(*weight),
                    None => weights.push((id.clone(), u64::from(*weight))),
                }
            }
            weights
        }
    };

    for (id, _) in &weights {
        if !group.is_member(id) {
            warn!("Allocated member {} not in group {}", id, group.id);
            return Err(LedgerError::UnknownMember(id.clone()));
        }
    }
    weights.retain(|(_, w)| *w > 0);

    let total_weight: u64 = weights.iter().map(|(_, w)| w).sum();
    if weights.is_empty() || total_weight == 0 {
        warn!("Empty allocation for group {}", group.id);
        return Err(LedgerError::EmptyAllocation);
    }

    let mut shares: Vec<Share> = weights
        .iter()
        .map(|(id, w)| Share {
            member_id: id.clone(),
            amount: (i128::from(amount) * i128::from(*w) / i128::from(total_weight)) as i64,
        })
        .collect();

    let residual = amount - shares.iter().map(|s| s.amount).sum::<i64>();
    shares[0].amount += residual;

    debug!("Resolved {} into shares {:?}", amount, shares);
    Ok(shares)
}
