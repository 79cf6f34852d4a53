use crate::util::*;
use std::fmt;

plain_enum_mod!(modefarbe, EFarbe {
    Karo,
    Herz,
    Pik,
    Kreuz,
});

impl EFarbe {
    pub fn symbol(self) -> char {
        match self {
            Self::Karo => '\u{2666}',
            Self::Herz => '\u{2665}',
            Self::Pik => '\u{2660}',
            Self::Kreuz => '\u{2663}',
        }
    }
}

impl fmt::Display for EFarbe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Karo => "Karo",
            Self::Herz => "Herz",
            Self::Pik => "Pik",
            Self::Kreuz => "Kreuz",
        } )
    }
}

// Declaration order is the bit layout within a Farbe: 7 is the low bit, Bube the high bit.
plain_enum_mod!(modeschlag, ESchlag {
    S7,
    S8,
    S9,
    Dame,
    Koenig,
    Zehn,
    Ass,
    Bube,
});

impl fmt::Display for ESchlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::S7 => "7",
            Self::S8 => "8",
            Self::S9 => "9",
            Self::Dame => "D",
            Self::Koenig => "K",
            Self::Zehn => "10",
            Self::Ass => "A",
            Self::Bube => "B",
        })
    }
}

/// A card, identified by its position 0..32 within the deck bitmap:
/// `farbe*8 + schlag`.
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct SCard(u8);

impl SCard {
    pub const fn new(efarbe: EFarbe, eschlag: ESchlag) -> SCard {
        SCard((efarbe as u8) << 3 | eschlag as u8)
    }
    pub const fn farbe(self) -> EFarbe {
        unsafe { std::mem::transmute((self.0 >> 3) as usize) }
    }
    pub const fn schlag(self) -> ESchlag {
        unsafe { std::mem::transmute((self.0 & 7) as usize) }
    }
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
    pub fn checked_from_usize(n_card: usize) -> Option<SCard> {
        if_then_some!(n_card < EFarbe::SIZE * ESchlag::SIZE, SCard(n_card as u8))
    }
    pub fn values() -> impl Iterator<Item=SCard> + Clone {
        use itertools::iproduct;
        iproduct!(EFarbe::values(), ESchlag::values())
            .map(|(efarbe, eschlag)| SCard::new(efarbe, eschlag))
    }
    pub fn is_bube(self) -> bool {
        self.schlag()==ESchlag::Bube
    }
}

impl fmt::Debug for SCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for SCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.farbe().symbol(), self.schlag())
    }
}

#[test]
fn test_farbe_schlag_enumerators() {
    assert_eq!(EFarbe::values().count(), 4);
    assert_eq!(ESchlag::values().count(), 8);
    assert_eq!(SCard::values().count(), 32);
}

#[test]
fn test_card_ctor() {
    for (n_card, card) in SCard::values().enumerate() {
        assert_eq!(card.to_usize(), n_card);
        assert_eq!(Some(card), SCard::checked_from_usize(n_card));
        assert_eq!(card, SCard::new(card.farbe(), card.schlag()));
    }
    const CARD_BUBE_KREUZ: SCard = SCard::new(EFarbe::Kreuz, ESchlag::Bube);
    assert_eq!(CARD_BUBE_KREUZ.to_usize(), 31);
    assert_eq!(SCard::new(EFarbe::Karo, ESchlag::S7).to_usize(), 0);
    assert_eq!(SCard::new(EFarbe::Herz, ESchlag::Zehn).to_usize(), 13);
    assert!(SCard::checked_from_usize(32).is_none());
}
