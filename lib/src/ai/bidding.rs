use crate::game::*;
use crate::primitives::*;
use crate::rules::spitze::{spitze_in_window, spitze_present_in_window, bits_buben_window, bits_farbe_window};
use crate::rules::*;
use crate::util::*;
use rand::prelude::*;

// Evaluation of a suit game by trump count. Fewer than five trumps is
// hopeless, nine or more decides the game on its own.
const AF_COLOR_TRUMP_EVALUATION: [f32; 11] = [-100., -50., -20., -5., -2., 1., 2., 4., 6., 10., 100.];

const F_RISK_COLOR_HAND: f32 = 3.75;
const F_RISK_COLOR_SCHNEIDER: f32 = 5.0;
const F_RISK_COLOR_SCHWARZ: f32 = 6.5;
const F_RISK_GRAND_HAND: f32 = 10.5;
const F_RISK_GRAND_SCHNEIDER: f32 = 13.75;

/// What a hand is worth at the auction: the highest bid to go along with,
/// the game to announce when the auction is won, and whether to pick up
/// the skat. `n_extra_tier` includes overbid tiers and may thus exceed the
/// announceable range; [`announcement_from_tier`] clamps it.
#[derive(Clone, Copy, Debug)]
pub struct SBidEvaluation {
    pub n_bid: usize,
    pub egametype: EGameType,
    pub n_extra_tier: usize,
    pub f_confidence: f32,
    pub b_use_skat: bool,
}

fn extratier_clamped(n_extra_tier: usize) -> EExtraTier {
    unwrap!(EExtraTier::checked_from_usize(n_extra_tier.min(EExtraTier::SIZE - 1)))
}

pub fn announcement_from_tier(egametype: EGameType, n_extra_tier: usize) -> VGameAnnouncement {
    match egametype {
        EGameType::Null => VGameAnnouncement::Null(
            unwrap!(ENullTier::checked_from_usize(n_extra_tier.min(ENullTier::SIZE - 1)))
        ),
        EGameType::Grand => VGameAnnouncement::Grand(extratier_clamped(n_extra_tier)),
        EGameType::Karo | EGameType::Herz | EGameType::Pik | EGameType::Kreuz => {
            VGameAnnouncement::Farbspiel(
                unwrap!(EFarbe::checked_from_usize(egametype.to_usize())),
                extratier_clamped(n_extra_tier),
            )
        },
    }
}

fn extra_tier_farbspiel(
    f_risk_taking: f32,
    f_viability: f32,
    n_trumpf_spitze: usize,
    n_count_trumpf: usize,
    n_spitzen_sum: usize,
    n_spitze_farbe: usize,
) -> usize {
    let mut n_extra_tier = 0;
    if f_risk_taking * f_viability >= F_RISK_COLOR_HAND {
        n_extra_tier = EExtraTier::Hand.to_usize();
        if f_risk_taking * f_viability >= F_RISK_COLOR_SCHNEIDER {
            n_extra_tier = EExtraTier::Schneider.to_usize();
            if f_viability >= F_RISK_COLOR_SCHWARZ {
                n_extra_tier = EExtraTier::Schwarz.to_usize();
                // Ouvert only with a dominant trump run and nothing but
                // unbeatable side suits next to it.
                if n_trumpf_spitze >= 5
                    && n_count_trumpf >= 6
                    && n_spitzen_sum.as_num::<isize>() - n_spitze_farbe.as_num::<isize>()
                        == 10 - n_count_trumpf.as_num::<isize>()
                {
                    n_extra_tier = EExtraTier::Ouvert.to_usize();
                }
            }
        }
    }
    n_extra_tier
}

fn extra_tier_grand(
    n_count_buben: usize,
    b_buben_dominance: bool,
    f_risk_taking: f32,
    f_viability: f32,
    n_spitzen_sum: usize,
) -> usize {
    let mut n_extra_tier = 0;
    if f_risk_taking * f_viability >= F_RISK_GRAND_HAND {
        n_extra_tier = EExtraTier::Hand.to_usize();
        if f_risk_taking * f_viability >= F_RISK_GRAND_SCHNEIDER {
            n_extra_tier = EExtraTier::Schneider.to_usize();
            if b_buben_dominance && n_spitzen_sum==6 {
                n_extra_tier = EExtraTier::Schwarz.to_usize();
                if n_count_buben==4 && n_spitzen_sum==6 {
                    n_extra_tier = EExtraTier::Ouvert.to_usize();
                }
            }
        }
    }
    n_extra_tier
}

// Tiers forced on top of the natural game value so that it reaches the
// committed bid. Playing them is a gamble, which the confidence punishes.
fn overbid_tier(egametype: EGameType, n_tier: usize, n_extra_tier: usize, n_bid_minimum: usize) -> usize {
    if n_bid_minimum <= N_BID_MINIMUM {
        return 0;
    }
    let mut n_overbid_tier = 0;
    while (n_tier + n_extra_tier + n_overbid_tier) * base_value(egametype) < n_bid_minimum {
        n_overbid_tier += 1;
    }
    n_overbid_tier
}

fn overbid_punishment(n_extra_tier: usize, n_overbid_tier: usize) -> f32 {
    if n_extra_tier + n_overbid_tier > EExtraTier::Ouvert.to_usize() {
        10_000.
    } else {
        25. * n_overbid_tier.as_num::<f32>()
    }
}

fn null_overbid_tier(n_extra_tier: usize, n_bid_minimum: usize) -> usize {
    if n_bid_minimum > AN_NULL_VALUE[n_extra_tier] {
        2 // jump to the Ouvert variant
    } else {
        0
    }
}

fn null_overbid_punishment(n_extra_tier: usize, n_overbid_tier: usize) -> f32 {
    if n_overbid_tier==0 {
        0.
    } else if n_extra_tier + n_overbid_tier <= ENullTier::HandOuvert.to_usize() {
        25.
    } else {
        1000.
    }
}

// A guarded gap: an absent card directly below a held one lets the
// opponents undercut ("7, 9, Bauer steht wie eine Mauer" covers a single
// step, two or more absent cards below a held one do not).
fn null_gaps_farbe(cardset_hand: SCardSet, efarbe: EFarbe) -> f32 {
    const ASCHLAG_NULL_ASCENDING: [ESchlag; ESchlag::SIZE] = [
        ESchlag::S7, ESchlag::S8, ESchlag::S9, ESchlag::Zehn,
        ESchlag::Bube, ESchlag::Dame, ESchlag::Koenig, ESchlag::Ass,
    ];
    let mut f_gaps = 0.;
    let mut n_under: isize = 0;
    for eschlag in ASCHLAG_NULL_ASCENDING {
        if cardset_hand.contains(SCard::new(efarbe, eschlag)) {
            if n_under > 0 {
                f_gaps += 1.;
                if n_under > 1 {
                    f_gaps += 0.1;
                }
            }
            n_under = n_under.min(0) - 1;
        } else {
            n_under += 1;
        }
    }
    f_gaps
}

/// Evaluates a ten-card hand. With `n_bid_minimum==0` the evaluation is
/// free to recommend passing (`n_bid` 0); a positive minimum forces the
/// least bad option that reaches it. `cardset_with_skat` carries the known
/// cards beyond the hand (empty while the skat is face down).
pub fn calculate_bid(
    cardset_hand: SCardSet,
    epi_bidding: EPlayerIndex,
    n_bid_minimum: usize,
    b_skat_unknown: bool,
    cardset_with_skat: SCardSet,
    f_risk_taking: f32,
) -> SBidEvaluation {
    let b_passing_possible = n_bid_minimum==0;
    let cardset_known = cardset_with_skat.union(cardset_hand);
    let n_count_ass = cardset_hand.iter().filter(|card| card.schlag()==ESchlag::Ass).count();

    let n_bits_buben = bits_buben_window(cardset_hand);
    let n_buben_trumpf_spitze = spitze_in_window(bits_buben_window(cardset_known), 4);
    let n_buben_spitze = spitze_present_in_window(n_bits_buben, 4);
    let n_count_buben = n_bits_buben.count_ones().as_num::<usize>();

    let mut mapfarben_spitze = EFarbe::map_from_fn(|_| 0);
    let mut mapfarben_trumpf_spitze = EFarbe::map_from_fn(|_| 0);
    let mut mapfarben_count_trumpf = EFarbe::map_from_fn(|_| 0);
    let mut mapfarbef_easy_points = EFarbe::map_from_fn(|_| 0f32);
    let mut n_empty_colors = 0;
    // Short suits headed by a Zehn are a liability, but the skat may be
    // able to absorb some of them.
    let mut n_freebies = if b_skat_unknown {2} else {0};
    for efarbe in EFarbe::values() {
        let n_bits_farbe = bits_farbe_window(cardset_hand, efarbe);
        let n_spitze = spitze_present_in_window(n_bits_farbe, 7);
        let n_count_farbe = n_bits_farbe.count_ones().as_num::<usize>();
        mapfarben_spitze[efarbe] = n_spitze;
        mapfarben_trumpf_spitze[efarbe] = spitze_in_window(
            bits_farbe_window(cardset_known, efarbe) | (n_bits_buben << 7),
            11,
        );
        mapfarben_count_trumpf[efarbe] = n_count_buben + n_count_farbe;
        if n_spitze==1 {
            mapfarbef_easy_points[efarbe] += 11.;
        } else if n_spitze >= 2 {
            mapfarbef_easy_points[efarbe] += 21.;
        } else if n_count_farbe < 5 {
            if cardset_hand.contains(SCard::new(efarbe, ESchlag::Zehn)) {
                mapfarbef_easy_points[efarbe] -= 15.;
                if n_freebies > 0 {
                    n_freebies -= 1;
                    mapfarbef_easy_points[efarbe] += 12.;
                }
            }
            if cardset_hand.contains(SCard::new(efarbe, ESchlag::Koenig)) {
                mapfarbef_easy_points[efarbe] -= 6.;
            }
            if cardset_hand.contains(SCard::new(efarbe, ESchlag::Dame)) {
                mapfarbef_easy_points[efarbe] -= 4.;
            }
            if n_count_farbe==0 {
                n_empty_colors += 1;
            }
        }
    }
    let f_easy_points_total: f32 = EFarbe::values().map(|efarbe| mapfarbef_easy_points[efarbe]).sum();
    let n_spitzen_sum: usize = EFarbe::values().map(|efarbe| mapfarben_spitze[efarbe]).sum();

    let b_buben_dominance = n_count_buben==4
        || (n_count_buben==3 && n_buben_trumpf_spitze >= 1)
        || (n_count_buben==2 && n_buben_trumpf_spitze==2);
    let f_buben_strength = n_count_buben.as_num::<f32>()/4. + n_buben_trumpf_spitze.as_num::<f32>()/4.;
    // Without enough Buben, empty suits turn from discard opportunities
    // into suits the opponents run.
    let f_grand_empty_colors = n_empty_colors.as_num::<f32>() * (f_buben_strength - 0.35);
    let f_grand_bad_colors = 4. - n_count_ass.as_num::<f32>() - n_empty_colors.as_num::<f32>();

    let f_null_gaps: f32 = EFarbe::values().map(|efarbe| null_gaps_farbe(cardset_hand, efarbe)).sum();

    let (f_position_factor, f_null_position_factor): (f32, f32) = match epi_bidding {
        EPlayerIndex::EPI0 => (0.1, -0.15),
        EPlayerIndex::EPI1 => (-0.05, 0.),
        EPlayerIndex::EPI2 => (0., 0.),
    };
    let mut f_null_risk_taking = f_risk_taking + f_null_position_factor;
    let mut f_risk_taking = f_risk_taking + f_position_factor;

    let mut mapgametypef_viability = EGameType::map_from_fn(|_| 0f32);
    let mut mapgametypen_tier = EGameType::map_from_fn(|_| 0);
    let mut mapgametypen_extra_tier = EGameType::map_from_fn(|_| 0);
    for efarbe in EFarbe::values() {
        let egametype = unwrap!(EGameType::checked_from_usize(efarbe.to_usize()));
        mapgametypef_viability[egametype] = n_buben_spitze.as_num::<f32>()/3.
            + AF_COLOR_TRUMP_EVALUATION[mapfarben_count_trumpf[efarbe]]
            + 0.5 * (n_spitzen_sum - mapfarben_spitze[efarbe]).as_num::<f32>()
            + (f_easy_points_total - mapfarbef_easy_points[efarbe])/20.
            + n_empty_colors.as_num::<f32>()
            + n_count_ass.as_num::<f32>()/2.;
        mapgametypen_tier[egametype] = mapfarben_trumpf_spitze[efarbe] + 1;
    }
    mapgametypef_viability[EGameType::Grand] = 2.*f_buben_strength
        + n_count_buben.as_num::<f32>()
        + 0.5 * n_spitzen_sum.as_num::<f32>()
        + f_easy_points_total/15.
        + f_grand_empty_colors
        - f_grand_bad_colors
        + n_count_ass.as_num::<f32>();
    mapgametypen_tier[EGameType::Grand] = n_buben_trumpf_spitze + 1;
    // Null viability only looks at gaps.
    mapgametypef_viability[EGameType::Null] = 1. - (f_null_gaps - 1.)/5.;

    // Extra tiers require commitment before seeing the skat.
    if b_skat_unknown {
        for efarbe in EFarbe::values() {
            let egametype = unwrap!(EGameType::checked_from_usize(efarbe.to_usize()));
            mapgametypen_extra_tier[egametype] = extra_tier_farbspiel(
                f_risk_taking,
                mapgametypef_viability[egametype],
                mapfarben_trumpf_spitze[efarbe],
                mapfarben_count_trumpf[efarbe],
                n_spitzen_sum,
                mapfarben_spitze[efarbe],
            );
        }
        mapgametypen_extra_tier[EGameType::Grand] = extra_tier_grand(
            n_count_buben,
            b_buben_dominance,
            f_risk_taking,
            mapgametypef_viability[EGameType::Grand],
            n_spitzen_sum,
        );
        if f_null_risk_taking * mapgametypef_viability[EGameType::Null] >= 1. {
            mapgametypen_extra_tier[EGameType::Null] = ENullTier::Hand.to_usize();
        }
    }
    if f_null_gaps==0. {
        // A gapless hand stays gapless through the discard, so Ouvert is
        // safe even after picking up the skat.
        mapgametypen_extra_tier[EGameType::Null] = if b_skat_unknown {
            ENullTier::HandOuvert.to_usize()
        } else {
            ENullTier::Ouvert.to_usize()
        };
    }

    let mapgametypen_overbid_tier = EGameType::map_from_fn(|egametype| {
        match egametype {
            EGameType::Null => null_overbid_tier(mapgametypen_extra_tier[egametype], n_bid_minimum),
            _ => overbid_tier(
                egametype,
                mapgametypen_tier[egametype],
                mapgametypen_extra_tier[egametype],
                n_bid_minimum,
            ),
        }
    });

    // The skat may still improve the hand, so commit a little beyond what
    // the cards alone justify.
    if b_skat_unknown {
        f_risk_taking *= 1.33;
        f_null_risk_taking *= 1.33;
    }

    let mapgametypen_points = EGameType::map_from_fn(|egametype| {
        let n_extra_tier = mapgametypen_extra_tier[egametype];
        let n_overbid_tier = mapgametypen_overbid_tier[egametype];
        match egametype {
            EGameType::Null => AN_NULL_VALUE[(n_extra_tier + n_overbid_tier).min(ENullTier::SIZE - 1)],
            _ => base_value(egametype) * (mapgametypen_tier[egametype] + n_extra_tier + n_overbid_tier),
        }
    });

    let mapgametypef_confidence = EGameType::map_from_fn(|egametype| {
        let f_viability = mapgametypef_viability[egametype];
        let n_extra_tier = mapgametypen_extra_tier[egametype];
        let n_overbid_tier = mapgametypen_overbid_tier[egametype];
        match egametype {
            EGameType::Null => {
                f_null_risk_taking * f_viability + n_extra_tier.as_num::<f32>()
                    - null_overbid_punishment(n_extra_tier, n_overbid_tier)
            },
            EGameType::Grand => {
                f32::max(
                    f32::min(f_risk_taking * f_risk_taking * f_viability / F_RISK_GRAND_HAND, 1.),
                    f_risk_taking * f_viability / F_RISK_GRAND_HAND,
                )
                    + n_extra_tier.as_num::<f32>()
                    - overbid_punishment(n_extra_tier, n_overbid_tier)
            },
            _ => {
                let mut f_confidence = if f_viability < 0. {
                    f_viability
                } else {
                    f_risk_taking * f_viability / F_RISK_COLOR_HAND
                };
                if n_extra_tier > 0 {
                    f_confidence += n_extra_tier.as_num::<f32>();
                }
                f_confidence - overbid_punishment(n_extra_tier, n_overbid_tier)
            },
        }
    });

    // Among the options with full confidence, the most valuable wins. When
    // passing is forbidden and nothing reaches full confidence, fall back
    // to the least bad option.
    let mut n_bid = 0;
    let mut egametype_best = EGameType::Karo;
    let mut n_extra_tier_best = 0;
    let mut f_confidence_best = -100_000f32;
    for egametype in EGameType::values() {
        let f_confidence = mapgametypef_confidence[egametype];
        if (mapgametypen_points[egametype] > n_bid && f_confidence >= 1.)
            || (!b_passing_possible && f_confidence_best < 1. && f_confidence >= f_confidence_best)
        {
            n_bid = mapgametypen_points[egametype];
            egametype_best = egametype;
            n_extra_tier_best = mapgametypen_extra_tier[egametype] + mapgametypen_overbid_tier[egametype];
            f_confidence_best = f_confidence;
        }
    }
    SBidEvaluation {
        n_bid,
        egametype: egametype_best,
        n_extra_tier: n_extra_tier_best,
        f_confidence: f_confidence_best,
        // Only a plain game leaves room to exchange cards.
        b_use_skat: b_skat_unknown && n_extra_tier_best==0,
    }
}

/// Picks the best of the 66 ways to put two of the twelve cards back into
/// the skat, re-evaluating each resulting hand against the committed bid.
pub fn calculate_announcement_with_skat(
    cardset_with_skat: SCardSet,
    epi_bidding: EPlayerIndex,
    f_risk_taking: f32,
    n_bid: usize,
) -> (EGameType, usize, SCardSet) {
    use itertools::Itertools;
    debug_assert_eq!(cardset_with_skat.count(), N_CARDS_PER_HAND + N_CARDS_SKAT);
    let mut otplevalcardset: Option<(SBidEvaluation, SCardSet)> = None;
    for (card_skat_lo, card_skat_hi) in cardset_with_skat.iter().tuple_combinations() {
        let cardset_hand = cardset_with_skat
            .minus_card(card_skat_lo)
            .minus_card(card_skat_hi);
        let evaluation = calculate_bid(
            cardset_hand,
            epi_bidding,
            /*n_bid_minimum*/n_bid,
            /*b_skat_unknown*/false,
            cardset_with_skat,
            f_risk_taking,
        );
        let b_better = match &otplevalcardset {
            None => true,
            Some((evaluation_best, _cardset)) => {
                (evaluation.f_confidence >= 1. && evaluation.n_bid > evaluation_best.n_bid)
                    || (evaluation.f_confidence > evaluation_best.f_confidence
                        && evaluation_best.f_confidence < 1.)
            },
        };
        if b_better {
            otplevalcardset = Some((evaluation, cardset_hand));
        }
    }
    let (evaluation, cardset_hand) = unwrap!(otplevalcardset);
    (evaluation.egametype, evaluation.n_extra_tier, cardset_hand)
}

/// Auction strategy evaluating the hand once upon receiving it, then
/// bidding up to the resulting value.
#[derive(Clone, Debug)]
pub struct SBidderBasic {
    f_risk_taking: f32,
    cardset_hand: SCardSet,
    epi_bidding: EPlayerIndex,
    evaluation: SBidEvaluation,
    n_bid_committed: usize,
    b_picked_up_skat: bool,
}

impl Default for SBidderBasic {
    fn default() -> Self {
        SBidderBasic {
            f_risk_taking: 1.,
            cardset_hand: SCardSet::new_empty(),
            epi_bidding: EPlayerIndex::EPI0,
            evaluation: SBidEvaluation {
                n_bid: 0,
                egametype: EGameType::Karo,
                n_extra_tier: 0,
                f_confidence: 0.,
                b_use_skat: false,
            },
            n_bid_committed: 0,
            b_picked_up_skat: false,
        }
    }
}

impl SBidderBasic {
    pub fn receive_hand_cards(&mut self, cardset_hand: SCardSet, epi_bidding: EPlayerIndex, f_risk_taking: f32) {
        self.cardset_hand = cardset_hand;
        self.epi_bidding = epi_bidding;
        self.f_risk_taking = f_risk_taking;
        self.n_bid_committed = 0;
        self.b_picked_up_skat = false;
        self.evaluation = calculate_bid(
            cardset_hand,
            epi_bidding,
            /*n_bid_minimum*/0,
            /*b_skat_unknown*/true,
            SCardSet::new_empty(),
            f_risk_taking,
        );
    }

    pub fn say(&self, n_bid_offered: usize) -> usize {
        if n_bid_offered <= self.evaluation.n_bid {
            n_bid_offered
        } else {
            0
        }
    }

    pub fn hear(&self, n_bid_said: usize) -> bool {
        n_bid_said <= self.evaluation.n_bid
    }

    pub fn pickup_skat(&mut self, n_bid: usize) -> bool {
        self.n_bid_committed = n_bid;
        self.b_picked_up_skat = self.evaluation.b_use_skat;
        self.b_picked_up_skat
    }

    pub fn announce(&self, cardset_hand: SCardSet) -> (VGameAnnouncement, SCardSet) {
        if !self.b_picked_up_skat {
            return (
                announcement_from_tier(self.evaluation.egametype, self.evaluation.n_extra_tier),
                self.cardset_hand,
            );
        }
        let (egametype, n_extra_tier, cardset_hand_new) = calculate_announcement_with_skat(
            cardset_hand,
            self.epi_bidding,
            self.f_risk_taking,
            self.n_bid_committed,
        );
        (announcement_from_tier(egametype, n_extra_tier), cardset_hand_new)
    }
}

/// Auction strategy drawing its commitment from real-world game type and
/// tier frequencies, regardless of the cards.
#[derive(Clone, Debug, Default)]
pub struct SBidderRandom {
    oegametype: Option<EGameType>,
    n_extra_tier: usize,
    n_bid: usize,
}

impl SBidderRandom {
    pub fn receive_hand_cards(&mut self, cardset_hand: SCardSet) {
        let mut rng = rand::thread_rng();
        let n_gamechoice = unwrap!(rand::distributions::WeightedIndex::new(
            [0.04f32, 0.05, 0.06, 0.07, 0.14, 0.01, 0.63]
        )).sample(&mut rng);
        match EGameType::checked_from_usize(n_gamechoice) {
            None => {
                // Pass.
                self.oegametype = None;
                self.n_extra_tier = 0;
                self.n_bid = 0;
            },
            Some(EGameType::Null) => {
                self.oegametype = Some(EGameType::Null);
                self.n_extra_tier = unwrap!(rand::distributions::WeightedIndex::new(
                    [0.65f32, 0.2, 0.10, 0.05]
                )).sample(&mut rng);
                self.n_bid = AN_NULL_VALUE[self.n_extra_tier];
            },
            Some(egametype) => {
                self.oegametype = Some(egametype);
                self.n_extra_tier = unwrap!(rand::distributions::WeightedIndex::new(
                    [0.69419f32, 0.28, 0.024, 0.0018, 0.00001]
                )).sample(&mut rng);
                self.n_bid = base_value(egametype)
                    * (self.n_extra_tier + game_tier(egametype, cardset_hand));
            },
        }
    }

    pub fn say(&self, n_bid_offered: usize) -> usize {
        if n_bid_offered <= self.n_bid {
            n_bid_offered
        } else {
            0
        }
    }

    pub fn hear(&self, n_bid_said: usize) -> bool {
        n_bid_said <= self.n_bid
    }

    pub fn pickup_skat(&self) -> bool {
        self.n_extra_tier==0
    }

    pub fn announce(&self, cardset_hand: SCardSet) -> (VGameAnnouncement, SCardSet) {
        let egametype = unwrap!(self.oegametype);
        let mut cardset_hand_new = cardset_hand;
        if self.n_extra_tier==0 {
            // Skat was picked up: put two random cards back.
            let veccard = cardset_hand.iter().collect::<Vec<_>>();
            for card in veccard.choose_multiple(&mut rand::thread_rng(), N_CARDS_SKAT) {
                cardset_hand_new.remove(*card);
            }
        }
        (announcement_from_tier(egametype, self.n_extra_tier), cardset_hand_new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(efarbe: EFarbe, eschlag: ESchlag) -> SCard {
        SCard::new(efarbe, eschlag)
    }

    fn cardset_grand_powerhouse() -> SCardSet {
        // All four Buben and Asse, plus the black Zehnen.
        EFarbe::values().map(|efarbe| card(efarbe, ESchlag::Bube))
            .chain(EFarbe::values().map(|efarbe| card(efarbe, ESchlag::Ass)))
            .chain([card(EFarbe::Kreuz, ESchlag::Zehn), card(EFarbe::Pik, ESchlag::Zehn)])
            .collect()
    }

    fn cardset_mediocre() -> SCardSet {
        // Three broken suits headed by Zehnen and a bare Kreuz 7: neither
        // trumps nor a clean Null.
        [EFarbe::Karo, EFarbe::Herz, EFarbe::Pik].into_iter()
            .flat_map(|efarbe| {
                [card(efarbe, ESchlag::S7), card(efarbe, ESchlag::Zehn), card(efarbe, ESchlag::Koenig)]
            })
            .chain([card(EFarbe::Kreuz, ESchlag::S7)])
            .collect()
    }

    #[test]
    fn test_null_gaps() {
        // 7, 9, Bube: single steps are guarded.
        let cardset_guarded = [
            card(EFarbe::Pik, ESchlag::S7),
            card(EFarbe::Pik, ESchlag::S9),
            card(EFarbe::Pik, ESchlag::Bube),
        ].into_iter().collect();
        assert_eq!(null_gaps_farbe(cardset_guarded, EFarbe::Pik), 0.);
        // A bare Ass sits above seven absent cards.
        let cardset_bare_ass = SCardSet::new_empty().plus_card(card(EFarbe::Herz, ESchlag::Ass));
        assert_eq!(null_gaps_farbe(cardset_bare_ass, EFarbe::Herz), 1.1);
        // 7 and Koenig: the Zehn, Bube, Dame below the Koenig count once.
        let cardset_split = [
            card(EFarbe::Karo, ESchlag::S7),
            card(EFarbe::Karo, ESchlag::Koenig),
        ].into_iter().collect();
        assert_eq!(null_gaps_farbe(cardset_split, EFarbe::Karo), 1.1);
        assert_eq!(null_gaps_farbe(cardset_split, EFarbe::Pik), 0.);
    }

    #[test]
    fn test_calculate_bid_grand_powerhouse() {
        let evaluation = calculate_bid(
            cardset_grand_powerhouse(),
            EPlayerIndex::EPI2,
            /*n_bid_minimum*/0,
            /*b_skat_unknown*/true,
            SCardSet::new_empty(),
            /*f_risk_taking*/1.,
        );
        assert_eq!(evaluation.egametype, EGameType::Grand);
        // Mit 4, tier 5, Ouvert on top: 24 * (5 + 4).
        assert_eq!(evaluation.n_extra_tier, EExtraTier::Ouvert.to_usize());
        assert_eq!(evaluation.n_bid, 216);
        assert!(evaluation.f_confidence >= 1.);
        assert!(!evaluation.b_use_skat);
    }

    #[test]
    fn test_calculate_bid_passes_mediocre_hand() {
        let evaluation = calculate_bid(
            cardset_mediocre(),
            EPlayerIndex::EPI2,
            /*n_bid_minimum*/0,
            /*b_skat_unknown*/true,
            SCardSet::new_empty(),
            /*f_risk_taking*/1.,
        );
        assert_eq!(evaluation.n_bid, 0);
        assert!(evaluation.f_confidence < 1.);
    }

    #[test]
    fn test_calculate_bid_forced_picks_least_bad() {
        // The same mediocre hand, but passing is not allowed: Null is the
        // least unconvincing option.
        let evaluation = calculate_bid(
            cardset_mediocre(),
            EPlayerIndex::EPI2,
            /*n_bid_minimum*/18,
            /*b_skat_unknown*/true,
            SCardSet::new_empty(),
            /*f_risk_taking*/1.,
        );
        assert_eq!(evaluation.egametype, EGameType::Null);
        assert_eq!(evaluation.n_bid, 23);
        assert!(evaluation.f_confidence < 1.);
    }

    #[test]
    fn test_calculate_bid_gapless_null() {
        // 7-8-9 everywhere plus the Kreuz 7: no gaps at all, so the
        // evaluation goes for Null Hand Ouvert.
        let cardset_hand = [EFarbe::Karo, EFarbe::Herz, EFarbe::Pik].into_iter()
            .flat_map(|efarbe| {
                [card(efarbe, ESchlag::S7), card(efarbe, ESchlag::S8), card(efarbe, ESchlag::S9)]
            })
            .chain([card(EFarbe::Kreuz, ESchlag::S7)])
            .collect();
        let evaluation = calculate_bid(
            cardset_hand,
            EPlayerIndex::EPI2,
            /*n_bid_minimum*/0,
            /*b_skat_unknown*/true,
            SCardSet::new_empty(),
            /*f_risk_taking*/1.,
        );
        assert_eq!(evaluation.egametype, EGameType::Null);
        assert_eq!(evaluation.n_extra_tier, ENullTier::HandOuvert.to_usize());
        assert_eq!(evaluation.n_bid, 59);
        assert!(!evaluation.b_use_skat);
    }

    #[test]
    fn test_announcement_with_skat_discards_two() {
        let cardset_with_skat = cardset_grand_powerhouse()
            .plus_card(card(EFarbe::Herz, ESchlag::S7))
            .plus_card(card(EFarbe::Karo, ESchlag::S8));
        let (egametype, _n_extra_tier, cardset_hand) = calculate_announcement_with_skat(
            cardset_with_skat,
            EPlayerIndex::EPI0,
            /*f_risk_taking*/1.,
            /*n_bid*/18,
        );
        assert_eq!(egametype, EGameType::Grand);
        assert_eq!(cardset_hand.count(), N_CARDS_PER_HAND);
        assert!(cardset_hand.difference(cardset_with_skat).is_empty());
    }

    #[test]
    fn test_bidder_basic_auction_behaviour() {
        let mut bidder = SBidderBasic::default();
        bidder.receive_hand_cards(cardset_grand_powerhouse(), EPlayerIndex::EPI1, 1.);
        assert_eq!(bidder.say(18), 18);
        assert_eq!(bidder.say(216), 216);
        assert_eq!(bidder.say(240), 0);
        assert!(bidder.hear(216));
        assert!(!bidder.hear(240));
        // Ouvert commitment: the skat stays face down.
        assert!(!bidder.pickup_skat(18));
        let (announcement, cardset_kept) = bidder.announce(cardset_grand_powerhouse());
        assert_eq!(announcement, VGameAnnouncement::Grand(EExtraTier::Ouvert));
        assert_eq!(cardset_kept, cardset_grand_powerhouse());
    }

    #[test]
    fn test_bidder_basic_passes() {
        let mut bidder = SBidderBasic::default();
        bidder.receive_hand_cards(cardset_mediocre(), EPlayerIndex::EPI1, 1.);
        assert_eq!(bidder.say(18), 0);
        assert!(!bidder.hear(18));
    }

    #[test]
    fn test_bidder_random_announce_consistency() {
        for _ in 0..50 {
            let mut bidder = SBidderRandom::default();
            let cardset_hand = SCard::values().take(N_CARDS_PER_HAND).collect::<SCardSet>();
            bidder.receive_hand_cards(cardset_hand);
            if bidder.oegametype.is_none() {
                assert_eq!(bidder.say(18), 0);
                continue;
            }
            let b_pickup = bidder.pickup_skat();
            let cardset_for_announcement = if b_pickup {
                cardset_hand
                    .plus_card(SCard::new(EFarbe::Kreuz, ESchlag::Ass))
                    .plus_card(SCard::new(EFarbe::Kreuz, ESchlag::Bube))
            } else {
                cardset_hand
            };
            let (_announcement, cardset_kept) = bidder.announce(cardset_for_announcement);
            assert_eq!(cardset_kept.count(), N_CARDS_PER_HAND);
            assert!(cardset_kept.difference(cardset_for_announcement).is_empty());
        }
    }
}
