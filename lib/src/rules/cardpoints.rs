use crate::primitives::*;

pub fn points_card(card: SCard) -> isize {
    match card.schlag() {
        ESchlag::S7 | ESchlag::S8 | ESchlag::S9 => 0,
        ESchlag::Bube => 2,
        ESchlag::Dame => 3,
        ESchlag::Koenig => 4,
        ESchlag::Zehn => 10,
        ESchlag::Ass => 11,
    }
}

pub fn points_cardset(cardset: SCardSet) -> isize {
    cardset.iter().map(points_card).sum()
}

pub fn points_stich(stich: &SFullStich) -> isize {
    points_cardset(stich.get().cards())
}

#[test]
fn test_points() {
    assert_eq!(points_cardset(SCardSet::new_full()), 120);
    assert_eq!(
        points_cardset([
            SCard::new(EFarbe::Karo, ESchlag::Ass),
            SCard::new(EFarbe::Herz, ESchlag::Zehn),
            SCard::new(EFarbe::Kreuz, ESchlag::Bube),
        ].into_iter().collect()),
        23
    );
}
