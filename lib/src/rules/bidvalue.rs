use crate::rules::*;
use crate::util::*;
use std::sync::OnceLock;

/// Base value per suit; Grand counts 24. Null games are priced off
/// `AN_NULL_VALUE` instead.
pub fn base_value(egametype: EGameType) -> usize {
    match egametype {
        EGameType::Karo => 9,
        EGameType::Herz => 10,
        EGameType::Pik => 11,
        EGameType::Kreuz => 12,
        EGameType::Grand => 24,
        EGameType::Null => panic!("Null games have no base value"),
    }
}

pub const AN_NULL_VALUE: [usize; ENullTier::SIZE] = [23, 35, 46, 59];

/// All legal bid values, ascending: every reachable Farb- and Grand value
/// plus the four Null values. Built once, immutable afterwards.
pub fn bid_ladder() -> &'static [usize] {
    static ONCELOCK_LADDER: OnceLock<Vec<usize>> = OnceLock::new();
    ONCELOCK_LADDER.get_or_init(|| {
        let mut vecn_value = AN_NULL_VALUE.to_vec();
        for n_tier_total in 2..=18 {
            for egametype in [EGameType::Karo, EGameType::Herz, EGameType::Pik, EGameType::Kreuz] {
                vecn_value.push(n_tier_total * base_value(egametype));
            }
        }
        for n_tier_total in 2..=11 {
            vecn_value.push(n_tier_total * base_value(EGameType::Grand));
        }
        vecn_value.sort_unstable();
        vecn_value.dedup();
        vecn_value
    })
}

pub fn is_bid_value(n_bid: usize) -> bool {
    bid_ladder().binary_search(&n_bid).is_ok()
}

pub const N_BID_MINIMUM: usize = 18;

/// The smallest ladder value strictly greater than `n_bid`, if any.
pub fn get_next_bid(n_bid: usize) -> Option<usize> {
    bid_ladder().iter().copied().find(|n_value| *n_value > n_bid)
}
