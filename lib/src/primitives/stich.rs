use crate::primitives::{card::*, cardset::*, eplayerindex::*};
use crate::util::*;
use std::{fmt, ops::Index};

/// One trick: up to three cards, stored by absolute table position.
/// Cards are filled in play order starting at `epi_first`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SStich {
    epi_first: EPlayerIndex,
    mapepiocard: EnumMap<EPlayerIndex, Option<SCard>>,
}

impl SStich {
    pub fn new(epi_first: EPlayerIndex) -> SStich {
        SStich {
            epi_first,
            mapepiocard: EPlayerIndex::map_from_fn(|_epi| None),
        }
    }

    fn assert_invariant(&self) {
        #[cfg(debug_assertions)]
        for (n_offset, epi) in EPlayerIndex::values()
            .map(|epi| self.epi_first.wrapping_add(epi.to_usize()))
            .enumerate()
        {
            assert!(n_offset < self.size() || self.mapepiocard[epi].is_none());
        }
    }

    pub fn first_playerindex(&self) -> EPlayerIndex {
        self.epi_first
    }
    pub fn size(&self) -> usize {
        EPlayerIndex::values().filter(|epi| self.mapepiocard[*epi].is_some()).count()
    }
    pub fn is_empty(&self) -> bool {
        self.size()==0
    }
    pub fn is_full(&self) -> bool {
        self.size()==EPlayerIndex::SIZE
    }
    pub fn current_playerindex(&self) -> Option<EPlayerIndex> {
        if_then_some!(!self.is_full(), self.epi_first.wrapping_add(self.size()))
    }
    pub fn push(&mut self, card: SCard) {
        let epi = unwrap!(self.current_playerindex());
        assert!(self.mapepiocard[epi].is_none());
        self.mapepiocard[epi] = Some(card);
        self.assert_invariant();
    }
    pub fn get(&self, epi: EPlayerIndex) -> Option<SCard> {
        self.mapepiocard[epi]
    }
    pub fn first_card(&self) -> SCard {
        unwrap!(self.mapepiocard[self.epi_first])
    }
    /// Play order, leader first.
    pub fn iter(&self) -> impl Iterator<Item=(EPlayerIndex, SCard)> + '_ {
        EPlayerIndex::values()
            .map(move |epi| self.epi_first.wrapping_add(epi.to_usize()))
            .filter_map(move |epi| self.mapepiocard[epi].map(|card| (epi, card)))
    }
    pub fn cards(&self) -> SCardSet {
        self.iter().map(|(_epi, card)| card).collect()
    }
}

impl Index<EPlayerIndex> for SStich {
    type Output = SCard;
    fn index(&self, epi: EPlayerIndex) -> &SCard {
        unwrap!(self.mapepiocard[epi].as_ref())
    }
}

impl fmt::Display for SStich {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for epi in EPlayerIndex::values().map(|epi| self.epi_first.wrapping_add(epi.to_usize())) {
            write!(f, "{}{}:{} ",
                if epi==self.epi_first {">"} else {""},
                epi,
                match self.mapepiocard[epi] {
                    Some(card) => format!("{}", card),
                    None => "__".to_string(),
                },
            )?;
        }
        Ok(())
    }
}

/// A completed trick. Constructing one asserts all three cards are present.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SFullStich(SStich);

impl SFullStich {
    pub fn new(stich: SStich) -> SFullStich {
        assert!(stich.is_full());
        SFullStich(stich)
    }
    pub fn get(&self) -> &SStich {
        &self.0
    }
}

impl Index<EPlayerIndex> for SFullStich {
    type Output = SCard;
    fn index(&self, epi: EPlayerIndex) -> &SCard {
        &self.0[epi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stich_play_order() {
        let mut stich = SStich::new(EPlayerIndex::EPI1);
        assert!(stich.is_empty());
        assert_eq!(stich.current_playerindex(), Some(EPlayerIndex::EPI1));
        stich.push(SCard::new(EFarbe::Herz, ESchlag::Ass));
        assert_eq!(stich.current_playerindex(), Some(EPlayerIndex::EPI2));
        stich.push(SCard::new(EFarbe::Herz, ESchlag::S7));
        assert_eq!(stich.current_playerindex(), Some(EPlayerIndex::EPI0));
        stich.push(SCard::new(EFarbe::Pik, ESchlag::Dame));
        assert!(stich.is_full());
        assert_eq!(stich.current_playerindex(), None);
        assert_eq!(stich.first_card(), SCard::new(EFarbe::Herz, ESchlag::Ass));
        let veccard = stich.iter().map(|(_epi, card)| card).collect::<Vec<_>>();
        assert_eq!(veccard, vec![
            SCard::new(EFarbe::Herz, ESchlag::Ass),
            SCard::new(EFarbe::Herz, ESchlag::S7),
            SCard::new(EFarbe::Pik, ESchlag::Dame),
        ]);
        assert_eq!(stich[EPlayerIndex::EPI0], SCard::new(EFarbe::Pik, ESchlag::Dame));
        assert_eq!(SFullStich::new(stich).get().cards().count(), 3);
    }
}
