pub mod bidvalue;
pub mod cardpoints;
pub mod scoring;
pub mod spitze;

pub use bidvalue::*;
pub use cardpoints::*;
pub use scoring::*;
pub use spitze::*;

use crate::primitives::*;
use crate::util::*;
use std::fmt;

plain_enum_mod!(modegametype, EGameType {
    Karo,
    Herz,
    Pik,
    Kreuz,
    Grand,
    Null,
});

impl fmt::Display for EGameType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Karo | Self::Herz | Self::Pik | Self::Kreuz => {
                write!(f, "{}", unwrap!(EFarbe::checked_from_usize(self.to_usize())))
            },
            Self::Grand => write!(f, "Grand"),
            Self::Null => write!(f, "Null"),
        }
    }
}

// Extra tiers for Farb- and Grand games. The declaration order doubles as the
// numeric tier added on top of the Spitze-derived tier.
plain_enum_mod!(modeextratier, EExtraTier {
    Normal,
    Hand,
    Schneider,
    Schwarz,
    Ouvert,
});

// Null games have their own ladder of fixed game values.
plain_enum_mod!(modenulltier, ENullTier {
    Normal,
    Hand,
    Ouvert,
    HandOuvert,
});

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VGameAnnouncement {
    Farbspiel(EFarbe, EExtraTier),
    Grand(EExtraTier),
    Null(ENullTier),
}

impl VGameAnnouncement {
    pub fn game_type(&self) -> EGameType {
        match *self {
            Self::Farbspiel(efarbe, _extratier) => unwrap!(EGameType::checked_from_usize(efarbe.to_usize())),
            Self::Grand(_extratier) => EGameType::Grand,
            Self::Null(_nulltier) => EGameType::Null,
        }
    }
    pub fn is_ouvert(&self) -> bool {
        match *self {
            Self::Farbspiel(_, extratier) | Self::Grand(extratier) => extratier==EExtraTier::Ouvert,
            Self::Null(nulltier) => nulltier==ENullTier::Ouvert || nulltier==ENullTier::HandOuvert,
        }
    }
    /// Announced Schwarz or Ouvert obligates the declarer to take every trick.
    pub fn requires_all_tricks(&self) -> bool {
        match *self {
            Self::Farbspiel(_, extratier) | Self::Grand(extratier) => extratier >= EExtraTier::Schwarz,
            Self::Null(_) => false,
        }
    }
}

const BITS_BUBEN: u32 = (1<<7) | (1<<15) | (1<<23) | (1<<31);

const fn bits_farbe_ohne_buben(efarbe: EFarbe) -> u32 {
    0x7F << (efarbe as usize * 8)
}

const fn bits_farbe_mit_buben(efarbe: EFarbe) -> u32 {
    0xFF << (efarbe as usize * 8)
}

pub fn cardset_buben() -> SCardSet {
    SCardSet::from_bits(BITS_BUBEN)
}

/// All trump cards of a game type: the four Buben plus the named suit for
/// Farbspiele, only the Buben for Grand, nothing for Null.
pub fn cardset_trumpf(egametype: EGameType) -> SCardSet {
    SCardSet::from_bits(match egametype {
        EGameType::Karo | EGameType::Herz | EGameType::Pik | EGameType::Kreuz =>
            BITS_BUBEN | bits_farbe_ohne_buben(unwrap!(EFarbe::checked_from_usize(egametype.to_usize()))),
        EGameType::Grand => BITS_BUBEN,
        EGameType::Null => 0,
    })
}

pub fn is_trumpf(egametype: EGameType, card: SCard) -> bool {
    cardset_trumpf(egametype).contains(card)
}

/// The cards obligated to follow when `card_first` leads a trick. A Bube
/// leads the Buben group in Grand and the full trump group in Farbspiele;
/// in Null it is an ordinary card of its printed suit.
pub fn cardset_follow_group(egametype: EGameType, card_first: SCard) -> SCardSet {
    match egametype {
        EGameType::Null => SCardSet::from_bits(bits_farbe_mit_buben(card_first.farbe())),
        EGameType::Grand => {
            if card_first.is_bube() {
                cardset_buben()
            } else {
                SCardSet::from_bits(bits_farbe_ohne_buben(card_first.farbe()))
            }
        },
        EGameType::Karo | EGameType::Herz | EGameType::Pik | EGameType::Kreuz => {
            let efarbe_trumpf = unwrap!(EFarbe::checked_from_usize(egametype.to_usize()));
            if card_first.is_bube() || card_first.farbe()==efarbe_trumpf {
                cardset_trumpf(egametype)
            } else {
                SCardSet::from_bits(bits_farbe_ohne_buben(card_first.farbe()))
            }
        },
    }
}

/// The cards a player may legally play. Leading allows the whole hand;
/// following obligates the leading group when the hand can serve it.
pub fn legal_actions(egametype: EGameType, ocard_first: Option<SCard>, cardset_hand: SCardSet) -> SCardSet {
    match ocard_first {
        None => cardset_hand,
        Some(card_first) => {
            let cardset_following = cardset_follow_group(egametype, card_first).intersection(cardset_hand);
            if !cardset_following.is_empty() {
                cardset_following
            } else {
                cardset_hand
            }
        },
    }
}

pub fn must_follow_suit(egametype: EGameType, cardset_hand: SCardSet, card_first: SCard) -> bool {
    !cardset_follow_group(egametype, card_first).intersection(cardset_hand).is_empty()
}

// Position of each Schlag within the Null order 7 8 9 10 B D K A.
pub const AN_NULL_RANK_ORDER: [usize; ESchlag::SIZE] = [0, 1, 2, 5, 6, 3, 7, 4];

/// Relative strength of a card within a trick led by `card_first`. Cards
/// contesting the trick (trump or leading group) have pairwise distinct
/// strengths; offsuit discards of equal Schlag may tie below them.
pub fn card_strength(egametype: EGameType, card: SCard, card_first: SCard) -> usize {
    let n_rank = if EGameType::Null==egametype {
        AN_NULL_RANK_ORDER[card.schlag().to_usize()]
    } else {
        card.schlag().to_usize()
    };
    n_rank + if is_trumpf(egametype, card) {
        20 + if card.is_bube() {
            20 + card.farbe().to_usize()
        } else {
            0
        }
    } else if card.farbe()==card_first.farbe() {
        10
    } else {
        0
    }
}

/// The table position taking the trick. A later card only displaces the
/// current winner with strictly greater strength.
pub fn winner_index(egametype: EGameType, stich: &SFullStich) -> EPlayerIndex {
    let card_first = stich.get().first_card();
    let fn_strength = |epi: EPlayerIndex| card_strength(egametype, stich[epi], card_first);
    let mut epi_winner = stich.get().first_playerindex();
    for (epi, _card) in stich.get().iter().skip(1) {
        if fn_strength(epi) > fn_strength(epi_winner) {
            epi_winner = epi;
        }
    }
    // The leading card always contests the trick, so the maximum is unique.
    debug_assert!(EPlayerIndex::values()
        .filter(|epi| *epi!=epi_winner)
        .all(|epi| fn_strength(epi) < fn_strength(epi_winner)));
    epi_winner
}
