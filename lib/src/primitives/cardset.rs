use crate::primitives::card::*;
use crate::util::*;
use std::{fmt, ops};

/// A set of cards, one bit per card identity. Hands, the skat, trump masks
/// and legal-action masks are all values of this type, so membership, union
/// and difference stay single instructions.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct SCardSet(u32);

impl SCardSet {
    pub const fn new_empty() -> SCardSet {
        SCardSet(0)
    }
    pub const fn new_full() -> SCardSet {
        SCardSet(0xFFFF_FFFF)
    }
    pub(crate) const fn from_bits(n_bits: u32) -> SCardSet {
        SCardSet(n_bits)
    }
    pub(crate) const fn as_bits(self) -> u32 {
        self.0
    }
    pub const fn contains(self, card: SCard) -> bool {
        self.0 & (1 << card.to_usize()) != 0
    }
    pub const fn plus_card(self, card: SCard) -> SCardSet {
        SCardSet(self.0 | (1 << card.to_usize()))
    }
    pub const fn minus_card(self, card: SCard) -> SCardSet {
        SCardSet(self.0 & !(1 << card.to_usize()))
    }
    pub fn insert(&mut self, card: SCard) {
        debug_assert!(!self.contains(card));
        *self = self.plus_card(card);
    }
    pub fn remove(&mut self, card: SCard) {
        debug_assert!(self.contains(card));
        *self = self.minus_card(card);
    }
    pub const fn union(self, cardset_other: SCardSet) -> SCardSet {
        SCardSet(self.0 | cardset_other.0)
    }
    pub const fn intersection(self, cardset_other: SCardSet) -> SCardSet {
        SCardSet(self.0 & cardset_other.0)
    }
    /// Cards in `self` that are not in `cardset_other`. Applied to a hand
    /// before and after a discard, this yields exactly the removed cards.
    pub const fn difference(self, cardset_other: SCardSet) -> SCardSet {
        SCardSet(self.0 & !cardset_other.0)
    }
    pub const fn is_empty(self) -> bool {
        self.0==0
    }
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn lowest_card(self) -> Option<SCard> {
        if_then_some!(!self.is_empty(), unwrap!(SCard::checked_from_usize(self.0.trailing_zeros().as_num::<usize>())))
    }
    pub fn highest_card(self) -> Option<SCard> {
        if_then_some!(!self.is_empty(), unwrap!(SCard::checked_from_usize(31 - self.0.leading_zeros().as_num::<usize>())))
    }
    pub fn iter(self) -> SCardSetIterator {
        SCardSetIterator(self.0)
    }
}

impl ops::BitOr for SCardSet {
    type Output = SCardSet;
    fn bitor(self, cardset_other: SCardSet) -> SCardSet {
        self.union(cardset_other)
    }
}

impl ops::BitAnd for SCardSet {
    type Output = SCardSet;
    fn bitand(self, cardset_other: SCardSet) -> SCardSet {
        self.intersection(cardset_other)
    }
}

impl FromIterator<SCard> for SCardSet {
    fn from_iter<It: IntoIterator<Item=SCard>>(itcard: It) -> SCardSet {
        itcard.into_iter().fold_mutating(SCardSet::new_empty(), |cardset, card| cardset.insert(card))
    }
}

impl IntoIterator for SCardSet {
    type Item = SCard;
    type IntoIter = SCardSetIterator;
    fn into_iter(self) -> SCardSetIterator {
        self.iter()
    }
}

/// Yields cards in ascending identity order.
#[derive(Clone)]
pub struct SCardSetIterator(u32);

impl Iterator for SCardSetIterator {
    type Item = SCard;
    fn next(&mut self) -> Option<SCard> {
        if_then_some!(self.0!=0, {
            let n_card = self.0.trailing_zeros().as_num::<usize>();
            self.0 &= self.0 - 1;
            unwrap!(SCard::checked_from_usize(n_card))
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n_count = self.0.count_ones().as_num::<usize>();
        (n_count, Some(n_count))
    }
}

impl ExactSizeIterator for SCardSetIterator {}

impl fmt::Display for SCardSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use itertools::Itertools;
        write!(f, "{}", self.iter().format(" "))
    }
}

impl fmt::Debug for SCardSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
