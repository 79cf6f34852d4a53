use crate::primitives::*;
use crate::rules::*;
use crate::util::*;

/// The four Buben compacted to a 4-bit window, Kreuz-Bube on top.
pub(crate) fn bits_buben_window(cardset: SCardSet) -> u32 {
    let n_bits = cardset.as_bits();
    ((n_bits >> 31) & 1) << 3
        | ((n_bits >> 23) & 1) << 2
        | ((n_bits >> 15) & 1) << 1
        | ((n_bits >> 7) & 1)
}

/// The seven non-Bube cards of a suit as a 7-bit window, Ass on top.
pub(crate) fn bits_farbe_window(cardset: SCardSet, efarbe: EFarbe) -> u32 {
    (cardset.as_bits() >> (efarbe.to_usize() * 8)) & 0x7F
}

// Count the unbroken run from the top of the window: present trumps if the
// topmost trump is held, missing trumps otherwise ("mit"/"ohne").
pub(crate) fn spitze_in_window(n_bits: u32, n_size: u32) -> usize {
    debug_assert!(0 < n_size && n_size <= 32);
    debug_assert!(n_size==32 || n_bits < (1u32 << n_size));
    let n_aligned = n_bits << (32 - n_size);
    let n_probe = if n_aligned & 0x8000_0000 != 0 {
        !n_aligned
    } else {
        n_aligned
    };
    n_probe.leading_zeros().min(n_size).as_num::<usize>()
}

// Like `spitze_in_window`, but only counts cards that are present. Hand
// evaluation uses this to measure unbeatable runs within a plain suit.
pub(crate) fn spitze_present_in_window(n_bits: u32, n_size: u32) -> usize {
    debug_assert!(0 < n_size && n_size <= 32);
    debug_assert!(n_size==32 || n_bits < (1u32 << n_size));
    (!(n_bits << (32 - n_size))).leading_zeros().min(n_size).as_num::<usize>()
}

/// Spitze of the known cards: length of the unbroken top-trump run, all
/// present or all absent. Null games have none.
pub fn spitze(egametype: EGameType, cardset_known: SCardSet) -> usize {
    let n_bits_buben = bits_buben_window(cardset_known);
    match egametype {
        EGameType::Null => 0,
        EGameType::Grand => spitze_in_window(n_bits_buben, 4),
        EGameType::Karo | EGameType::Herz | EGameType::Pik | EGameType::Kreuz => {
            let efarbe = unwrap!(EFarbe::checked_from_usize(egametype.to_usize()));
            spitze_in_window(
                bits_farbe_window(cardset_known, efarbe) | (n_bits_buben << 7),
                11,
            )
        },
    }
}

/// The game tier entering the value formula: Spitze plus one. Null games
/// are priced by a fixed table and report 0 here.
pub fn game_tier(egametype: EGameType, cardset_hand_with_skat: SCardSet) -> usize {
    match egametype {
        EGameType::Null => 0,
        _ => spitze(egametype, cardset_hand_with_skat) + 1,
    }
}
