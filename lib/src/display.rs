use crate::primitives::*;
use crate::rules::*;
use crate::util::*;

// Sorting key matching how players fan a hand: Buben leftmost (Kreuz first),
// then the trump suit, then the plain suits, each descending. Null hands
// sort by suit and Null rank only.
fn sort_key(egametype: EGameType, card: SCard) -> (usize, usize, usize) {
    let n_farbe_desc = EFarbe::SIZE - card.farbe().to_usize();
    match egametype {
        EGameType::Null => (
            0,
            n_farbe_desc,
            ESchlag::SIZE - AN_NULL_RANK_ORDER[card.schlag().to_usize()],
        ),
        _ => {
            let efarbe_trumpf = match egametype {
                EGameType::Grand | EGameType::Null => EFarbe::Kreuz,
                _ => unwrap!(EFarbe::checked_from_usize(egametype.to_usize())),
            };
            let n_segment = if card.is_bube() {
                0
            } else if card.farbe()==efarbe_trumpf {
                1
            } else {
                2
            };
            (n_segment, n_farbe_desc, ESchlag::SIZE - card.schlag().to_usize())
        },
    }
}

/// The cards of `cardset`, sorted for the given game type, e.g.
/// `[♣B, ♠B, ♥A, ♥10, ♠K]` in a Herz game.
pub fn hand_text(cardset: SCardSet, egametype: EGameType) -> String {
    use itertools::Itertools;
    format!(
        "[{}]",
        cardset.iter()
            .sorted_by_key(|card| sort_key(egametype, *card))
            .format(", ")
    )
}

fn extra_tier_name(extratier: EExtraTier) -> &'static str {
    match extratier {
        EExtraTier::Normal => "",
        EExtraTier::Hand => "Hand",
        EExtraTier::Schneider => "Schneider announced",
        EExtraTier::Schwarz => "Schwarz announced",
        EExtraTier::Ouvert => "Ouvert",
    }
}

fn null_tier_name(nulltier: ENullTier) -> &'static str {
    match nulltier {
        ENullTier::Normal => "",
        ENullTier::Hand => "Hand",
        ENullTier::Ouvert => "Ouvert",
        ENullTier::HandOuvert => "Hand Ouvert",
    }
}

/// Short name of an announced game, e.g. "♥ Hand" or "Null Ouvert".
pub fn game_name(announcement: &VGameAnnouncement) -> String {
    let (str_game, str_tier) = match *announcement {
        VGameAnnouncement::Farbspiel(efarbe, extratier) => {
            (efarbe.symbol().to_string(), extra_tier_name(extratier))
        },
        VGameAnnouncement::Grand(extratier) => ("Grand".to_string(), extra_tier_name(extratier)),
        VGameAnnouncement::Null(nulltier) => ("Null".to_string(), null_tier_name(nulltier)),
    };
    if str_tier.is_empty() {
        str_game
    } else {
        format!("{} {}", str_game, str_tier)
    }
}
