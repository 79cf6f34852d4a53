use crate::primitives::*;
use crate::rules::*;
use crate::util::*;

/// Terminal win/loss state of a played round, before pricing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct SWinFlags {
    pub b_solo_win: bool,
    pub b_schneider: bool,
    pub b_schwarz: bool,
}

/// Win determination for a round in which all ten tricks were played.
/// Early-terminated rounds (Null trick to the declarer, lost Schwarz/Ouvert)
/// are declarer losses without consulting this.
pub fn win_flags_completed(
    announcement: &VGameAnnouncement,
    n_points_solo: isize,
    n_points_team: isize,
) -> SWinFlags {
    match *announcement {
        // Completing all ten tricks without taking one wins the Null game.
        VGameAnnouncement::Null(_) => SWinFlags::new(/*b_solo_win*/true, /*b_schneider*/false, /*b_schwarz*/false),
        VGameAnnouncement::Farbspiel(_, extratier) | VGameAnnouncement::Grand(extratier) => {
            let b_schneider = n_points_team <= 30;
            let b_schwarz = n_points_team==0;
            let b_solo_win = if extratier==EExtraTier::Schneider {
                b_schneider
            } else {
                n_points_solo > 60
            };
            SWinFlags::new(b_solo_win, b_schneider, b_schwarz)
        },
    }
}

/// The signed game value credited to the declarer. Losing, or winning with
/// a value below the committed bid, doubles and negates.
pub fn game_value(
    announcement: &VGameAnnouncement,
    cardset_solo_with_skat: SCardSet,
    winflags: &SWinFlags,
    n_bid: usize,
) -> isize {
    let n_value: isize = match *announcement {
        VGameAnnouncement::Null(nulltier) => AN_NULL_VALUE[nulltier.to_usize()].as_num(),
        VGameAnnouncement::Farbspiel(_, extratier) | VGameAnnouncement::Grand(extratier) => {
            let n_tier = game_tier(announcement.game_type(), cardset_solo_with_skat);
            let mut n_extra_tier = extratier.to_usize();
            if winflags.b_solo_win {
                if winflags.b_schneider {
                    n_extra_tier += 1;
                }
                if winflags.b_schwarz {
                    n_extra_tier += 1;
                }
            }
            (base_value(announcement.game_type()) * (n_tier + n_extra_tier)).as_num()
        },
    };
    if !winflags.b_solo_win || n_value < n_bid.as_num::<isize>() {
        n_value * -2
    } else {
        n_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardset_with_buben(n_buben: usize) -> SCardSet {
        [EFarbe::Kreuz, EFarbe::Pik, EFarbe::Herz, EFarbe::Karo].into_iter()
            .take(n_buben)
            .map(|efarbe| SCard::new(efarbe, ESchlag::Bube))
            .collect()
    }

    #[test]
    fn test_win_flags() {
        let announcement = VGameAnnouncement::Farbspiel(EFarbe::Kreuz, EExtraTier::Normal);
        assert_eq!(
            win_flags_completed(&announcement, 61, 59),
            SWinFlags::new(true, false, false)
        );
        assert_eq!(
            win_flags_completed(&announcement, 60, 60),
            SWinFlags::new(false, false, false)
        );
        assert_eq!(
            win_flags_completed(&announcement, 95, 25),
            SWinFlags::new(true, true, false)
        );
        assert_eq!(
            win_flags_completed(&announcement, 120, 0),
            SWinFlags::new(true, true, true)
        );
        // Announced Schneider is won by reaching Schneider, not 61 points.
        let announcement_schneider = VGameAnnouncement::Grand(EExtraTier::Schneider);
        assert_eq!(
            win_flags_completed(&announcement_schneider, 75, 45),
            SWinFlags::new(false, false, false)
        );
        assert_eq!(
            win_flags_completed(&announcement_schneider, 91, 29),
            SWinFlags::new(true, true, false)
        );
        // A Null round that ran to completion is always a declarer win.
        assert_eq!(
            win_flags_completed(&VGameAnnouncement::Null(ENullTier::Normal), 0, 120),
            SWinFlags::new(true, false, false)
        );
    }

    #[test]
    fn test_overbid_doubles_and_negates() {
        // Kreuz-Bube present, Pik-Bube missing: mit 1, tier 2, value 24.
        let cardset_solo = [
            SCard::new(EFarbe::Kreuz, ESchlag::Bube),
            SCard::new(EFarbe::Herz, ESchlag::Bube),
        ].into_iter().collect::<SCardSet>();
        assert_eq!(game_tier(EGameType::Kreuz, cardset_solo), 2);
        let announcement = VGameAnnouncement::Farbspiel(EFarbe::Kreuz, EExtraTier::Normal);
        let winflags = SWinFlags::new(true, false, false);
        // value 24 >= bid 20: paid as won.
        assert_eq!(game_value(&announcement, cardset_solo, &winflags, 20), 24);
        // value 24 < bid 30: overbid, doubled and negated.
        assert_eq!(game_value(&announcement, cardset_solo, &winflags, 30), -48);
    }

    #[test]
    fn test_value_below_bid() {
        // Ohne 11 in Kreuz: tier 12, value 144. A bid above that turns a
        // won round into a doubled negative.
        let cardset_solo = SCardSet::new_empty();
        assert_eq!(game_tier(EGameType::Kreuz, cardset_solo), 12);
        let winflags = SWinFlags::new(true, false, false);
        let announcement = VGameAnnouncement::Farbspiel(EFarbe::Kreuz, EExtraTier::Normal);
        assert_eq!(game_value(&announcement, cardset_solo, &winflags, 144), 144);
        assert_eq!(game_value(&announcement, cardset_solo, &winflags, 150), -288);
    }

    #[test]
    fn test_null_values() {
        let winflags_lost = SWinFlags::new(false, false, false);
        let winflags_won = SWinFlags::new(true, false, false);
        assert_eq!(
            game_value(&VGameAnnouncement::Null(ENullTier::Normal), SCardSet::new_empty(), &winflags_lost, 18),
            -46
        );
        assert_eq!(
            game_value(&VGameAnnouncement::Null(ENullTier::Normal), SCardSet::new_empty(), &winflags_won, 18),
            23
        );
        assert_eq!(
            game_value(&VGameAnnouncement::Null(ENullTier::HandOuvert), SCardSet::new_empty(), &winflags_won, 59),
            59
        );
    }

    #[test]
    fn test_schneider_schwarz_raise_value() {
        let cardset_solo = cardset_with_buben(4);
        assert_eq!(game_tier(EGameType::Grand, cardset_solo), 5);
        let announcement = VGameAnnouncement::Grand(EExtraTier::Normal);
        assert_eq!(
            game_value(&announcement, cardset_solo, &SWinFlags::new(true, false, false), 18),
            24 * 5
        );
        assert_eq!(
            game_value(&announcement, cardset_solo, &SWinFlags::new(true, true, false), 18),
            24 * 6
        );
        assert_eq!(
            game_value(&announcement, cardset_solo, &SWinFlags::new(true, true, true), 18),
            24 * 7
        );
        // Lost: schneider/schwarz do not raise, value doubles negative.
        assert_eq!(
            game_value(&announcement, cardset_solo, &SWinFlags::new(false, true, true), 18),
            -240
        );
    }
}
