use soroban_sdk::{Address, Vec};

use crate::storage_types::{DonorRank, MAX_TOP_DONORS};

/// Re-rank `donor` after their cumulative total changed to `total`.
///
/// The ranking is kept sorted by amount, descending, and never holds more
/// than `MAX_TOP_DONORS` entries. On equal amounts the donor who reached the
/// amount first stays ahead, so a moving entry is only placed behind every
/// entry whose amount is at least its own. Returns whether the ranking
/// changed.
pub fn rank_donor(ranking: &mut Vec<DonorRank>, donor: &Address, total: i128) -> bool {
    match ranking.iter().position(|entry| entry.donor == *donor) {
        Some(index) => {
            ranking.remove(index as u32);
        }
        None => {
            if ranking.len() >= MAX_TOP_DONORS {
                let qualifies = ranking
                    .last()
                    .map(|lowest| total > lowest.amount)
                    .unwrap_or(true);
                if !qualifies {
                    return false;
                }
            }
        }
    }

    let slot = ranking
        .iter()
        .position(|entry| entry.amount < total)
        .map(|i| i as u32)
        .unwrap_or(ranking.len());
    ranking.insert(
        slot,
        DonorRank {
            donor: donor.clone(),
            amount: total,
        },
    );

    while ranking.len() > MAX_TOP_DONORS {
        ranking.pop_back();
    }
    true
}

/// Donor addresses in rank order.
pub fn donors(ranking: &Vec<DonorRank>) -> Vec<Address> {
    let mut out = Vec::new(ranking.env());
    for entry in ranking.iter() {
        out.push_back(entry.donor);
    }
    out
}
