use crate::primitives::*;
use crate::rules::*;
use crate::util::*;
use rand::prelude::*;
use std::cmp::Reverse;

// Strict order among cards competing for a trick in a trump game: any Bube
// beats any other trump, Buben rank by suit, plain trumps by card identity.
fn trumpf_order_key(card: SCard) -> usize {
    if card.is_bube() {
        1000 + card.farbe().to_usize()
    } else {
        card.to_usize()
    }
}

fn highest_points_card(cardset: SCardSet) -> SCard {
    unwrap!(cardset.iter().max_by_key(|card| (points_card(*card), card.to_usize())))
}

fn lowest_card(cardset: SCardSet) -> SCard {
    unwrap!(cardset.iter().min_by_key(|card| (card.schlag().to_usize(), card.to_usize())))
}

fn highest_trumpf(cardset_trumpf: SCardSet) -> SCard {
    debug_assert!(!cardset_trumpf.is_empty());
    unwrap!(cardset_trumpf.iter().max_by_key(|card| trumpf_order_key(*card)))
}

fn lowest_null_card(cardset: SCardSet) -> SCard {
    unwrap!(cardset.iter().min_by_key(|card| {
        (AN_NULL_RANK_ORDER[card.schlag().to_usize()], card.farbe().to_usize())
    }))
}

fn highest_null_card(cardset: SCardSet) -> SCard {
    unwrap!(cardset.iter().min_by_key(|card| {
        (Reverse(AN_NULL_RANK_ORDER[card.schlag().to_usize()]), card.farbe().to_usize())
    }))
}

/// Trick strategy: secure the trick with the highest possible card, or add
/// the most points once it is secure. In Null games, stay under the led
/// card when following and dump the highest card otherwise.
#[derive(Clone, Debug)]
pub struct SPlayingGreedy {
    egametype: EGameType,
    epi_self: EPlayerIndex,
    epi_solo: EPlayerIndex,
}

impl Default for SPlayingGreedy {
    fn default() -> Self {
        SPlayingGreedy {
            egametype: EGameType::Karo,
            epi_self: EPlayerIndex::EPI0,
            epi_solo: EPlayerIndex::EPI0,
        }
    }
}

impl SPlayingGreedy {
    pub fn start_playing(&mut self, egametype: EGameType, epi_self: EPlayerIndex, epi_solo: EPlayerIndex) {
        self.egametype = egametype;
        self.epi_self = epi_self;
        self.epi_solo = epi_solo;
    }

    pub fn play_card(&self, cardset_hand: SCardSet, cardset_legal: SCardSet, stich: &SStich) -> SCard {
        let n_trick_position = self.epi_self.wrapped_difference_usize(stich.first_playerindex());
        let b_leading = n_trick_position==0;
        debug_assert_eq!(b_leading, stich.is_empty());

        if self.egametype==EGameType::Null {
            return if b_leading || must_follow_suit(self.egametype, cardset_hand, stich.first_card()) {
                lowest_null_card(cardset_legal)
            } else {
                highest_null_card(cardset_legal)
            };
        }

        let cardset_trumpf_legal = cardset_trumpf(self.egametype).intersection(cardset_legal);
        let ocard_trumpf = if_then_some!(!cardset_trumpf_legal.is_empty(), highest_trumpf(cardset_trumpf_legal));
        let card_points = highest_points_card(cardset_legal);
        let card_low = lowest_card(cardset_legal);

        if b_leading {
            // The declarer pulls trumps, the defenders cash points.
            return match ocard_trumpf {
                Some(card_trumpf) if self.epi_self==self.epi_solo => card_trumpf,
                _ => card_points,
            };
        }

        let card_first = stich.first_card();
        let b_first_trumpf = is_trumpf(self.egametype, card_first);
        let b_follow = must_follow_suit(self.egametype, cardset_hand, card_first);

        if n_trick_position==1 {
            if b_first_trumpf {
                return match ocard_trumpf {
                    Some(card_trumpf) if trumpf_order_key(card_trumpf) > trumpf_order_key(card_first) => card_trumpf,
                    _ => card_low,
                };
            }
            if b_follow {
                // Within one suit, card identity orders by rank.
                return if card_points.to_usize() > card_first.to_usize() {
                    card_points
                } else {
                    card_low
                };
            }
            return ocard_trumpf.unwrap_or(card_low);
        }

        // Last to play: the whole trick is visible.
        let card_second = stich[stich.first_playerindex().wrapping_add(1)];
        let b_second_trumpf = is_trumpf(self.egametype, card_second);
        if b_first_trumpf || b_second_trumpf {
            return match ocard_trumpf {
                Some(card_trumpf)
                    if [card_first, card_second].into_iter()
                        .all(|card| trumpf_order_key(card_trumpf) > trumpf_order_key(card)) =>
                {
                    card_trumpf
                },
                _ => card_low,
            };
        }
        if let Some(card_trumpf) = ocard_trumpf {
            return card_trumpf;
        }
        if b_follow
            && card_points.to_usize() > card_first.to_usize()
            && card_points.to_usize() > card_second.to_usize()
        {
            return card_points;
        }
        card_low
    }
}

/// Plays a uniformly random legal card.
#[derive(Clone, Debug, Default)]
pub struct SPlayingRandom;

impl SPlayingRandom {
    pub fn play_card(&self, cardset_legal: SCardSet) -> SCard {
        unwrap!(cardset_legal.iter().choose(&mut rand::thread_rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(efarbe: EFarbe, eschlag: ESchlag) -> SCard {
        SCard::new(efarbe, eschlag)
    }

    fn greedy(egametype: EGameType, epi_self: EPlayerIndex, epi_solo: EPlayerIndex) -> SPlayingGreedy {
        let mut playing = SPlayingGreedy::default();
        playing.start_playing(egametype, epi_self, epi_solo);
        playing
    }

    #[test]
    fn test_solo_leads_highest_trumpf() {
        let playing = greedy(EGameType::Herz, EPlayerIndex::EPI0, EPlayerIndex::EPI0);
        let cardset_hand = [
            card(EFarbe::Kreuz, ESchlag::Bube),
            card(EFarbe::Herz, ESchlag::S7),
            card(EFarbe::Pik, ESchlag::Ass),
        ].into_iter().collect::<SCardSet>();
        assert_eq!(
            playing.play_card(cardset_hand, cardset_hand, &SStich::new(EPlayerIndex::EPI0)),
            card(EFarbe::Kreuz, ESchlag::Bube)
        );
    }

    #[test]
    fn test_defender_leads_points() {
        let playing = greedy(EGameType::Herz, EPlayerIndex::EPI0, EPlayerIndex::EPI1);
        let cardset_hand = [
            card(EFarbe::Kreuz, ESchlag::Bube),
            card(EFarbe::Pik, ESchlag::Ass),
            card(EFarbe::Karo, ESchlag::S7),
        ].into_iter().collect::<SCardSet>();
        assert_eq!(
            playing.play_card(cardset_hand, cardset_hand, &SStich::new(EPlayerIndex::EPI0)),
            card(EFarbe::Pik, ESchlag::Ass)
        );
    }

    #[test]
    fn test_second_secures_trumpf_trick() {
        let playing = greedy(EGameType::Herz, EPlayerIndex::EPI1, EPlayerIndex::EPI0);
        let cardset_hand = [
            card(EFarbe::Herz, ESchlag::Ass),
            card(EFarbe::Herz, ESchlag::S8),
            card(EFarbe::Pik, ESchlag::S7),
        ].into_iter().collect::<SCardSet>();
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(card(EFarbe::Herz, ESchlag::S7));
        let cardset_legal = legal_actions(EGameType::Herz, Some(card(EFarbe::Herz, ESchlag::S7)), cardset_hand);
        assert_eq!(playing.play_card(cardset_hand, cardset_legal, &stich), card(EFarbe::Herz, ESchlag::Ass));
    }

    #[test]
    fn test_second_cannot_beat_bube_lead() {
        let playing = greedy(EGameType::Herz, EPlayerIndex::EPI1, EPlayerIndex::EPI0);
        let cardset_hand = [
            card(EFarbe::Herz, ESchlag::Ass),
            card(EFarbe::Herz, ESchlag::S8),
        ].into_iter().collect::<SCardSet>();
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(card(EFarbe::Kreuz, ESchlag::Bube));
        let cardset_legal = legal_actions(EGameType::Herz, Some(card(EFarbe::Kreuz, ESchlag::Bube)), cardset_hand);
        assert_eq!(playing.play_card(cardset_hand, cardset_legal, &stich), card(EFarbe::Herz, ESchlag::S8));
    }

    #[test]
    fn test_second_follows_suit_with_points() {
        let playing = greedy(EGameType::Pik, EPlayerIndex::EPI1, EPlayerIndex::EPI0);
        let cardset_hand = [
            card(EFarbe::Herz, ESchlag::Ass),
            card(EFarbe::Herz, ESchlag::S7),
            card(EFarbe::Karo, ESchlag::Zehn),
        ].into_iter().collect::<SCardSet>();
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(card(EFarbe::Herz, ESchlag::Koenig));
        let cardset_legal = legal_actions(EGameType::Pik, Some(card(EFarbe::Herz, ESchlag::Koenig)), cardset_hand);
        assert_eq!(playing.play_card(cardset_hand, cardset_legal, &stich), card(EFarbe::Herz, ESchlag::Ass));
    }

    #[test]
    fn test_third_trumps_plain_trick() {
        let playing = greedy(EGameType::Kreuz, EPlayerIndex::EPI2, EPlayerIndex::EPI2);
        let cardset_hand = [
            card(EFarbe::Kreuz, ESchlag::S7),
            card(EFarbe::Karo, ESchlag::S8),
        ].into_iter().collect::<SCardSet>();
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(card(EFarbe::Herz, ESchlag::Ass));
        stich.push(card(EFarbe::Herz, ESchlag::Koenig));
        let cardset_legal = legal_actions(EGameType::Kreuz, Some(card(EFarbe::Herz, ESchlag::Ass)), cardset_hand);
        assert_eq!(playing.play_card(cardset_hand, cardset_legal, &stich), card(EFarbe::Kreuz, ESchlag::S7));
    }

    #[test]
    fn test_null_follows_low_discards_high() {
        let playing = greedy(EGameType::Null, EPlayerIndex::EPI1, EPlayerIndex::EPI0);
        let cardset_hand = [
            card(EFarbe::Herz, ESchlag::S7),
            card(EFarbe::Herz, ESchlag::Ass),
            card(EFarbe::Pik, ESchlag::Koenig),
        ].into_iter().collect::<SCardSet>();
        // Following Herz: play the 7, not the Ass.
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(card(EFarbe::Herz, ESchlag::Zehn));
        let cardset_legal = legal_actions(EGameType::Null, Some(card(EFarbe::Herz, ESchlag::Zehn)), cardset_hand);
        assert_eq!(playing.play_card(cardset_hand, cardset_legal, &stich), card(EFarbe::Herz, ESchlag::S7));
        // Void in Karo: dump the highest card in Null order.
        let mut stich_karo = SStich::new(EPlayerIndex::EPI0);
        stich_karo.push(card(EFarbe::Karo, ESchlag::S9));
        let cardset_hand_void = [
            card(EFarbe::Herz, ESchlag::Ass),
            card(EFarbe::Pik, ESchlag::Koenig),
        ].into_iter().collect::<SCardSet>();
        assert_eq!(
            playing.play_card(cardset_hand_void, cardset_hand_void, &stich_karo),
            card(EFarbe::Herz, ESchlag::Ass)
        );
    }

    #[test]
    fn test_random_plays_legal() {
        let playing = SPlayingRandom;
        let cardset_legal = [
            card(EFarbe::Karo, ESchlag::S7),
            card(EFarbe::Pik, ESchlag::Zehn),
        ].into_iter().collect::<SCardSet>();
        for _ in 0..20 {
            assert!(cardset_legal.contains(playing.play_card(cardset_legal)));
        }
    }
}
