pub mod run;
pub use run::*;

use crate::primitives::*;
use crate::rules::*;
use crate::util::*;
use arrayvec::ArrayVec;
use rand::prelude::*;
use std::fmt;

pub const N_CARDS_PER_HAND: usize = 10;
pub const N_CARDS_SKAT: usize = 2;
pub const N_STICHE: usize = 10;

/// Faults that abort a round. Cheating identifies the offending player and
/// is never corrected or retried; an invalid deal is rejected up front.
#[derive(Debug)]
pub enum VRoundError {
    Cheating {
        epi: EPlayerIndex,
        str_violation: String,
    },
    InvalidDeal {
        str_reason: String,
    },
}

impl fmt::Display for VRoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Cheating{epi, str_violation} => write!(f, "Player {} is cheating: {}", epi, str_violation),
            Self::InvalidDeal{str_reason} => write!(f, "Invalid deal: {}", str_reason),
        }
    }
}

impl std::error::Error for VRoundError {}

macro_rules! cheating {($epi: expr, $($arg:tt)*) => {
    return Err(VRoundError::Cheating{
        epi: $epi,
        str_violation: format!($($arg)*),
    }.into())
}}

/// Within a round, table positions are fixed: `EPI0` is forehand (and leads
/// the first trick), `EPI1` middlehand, `EPI2` rearhand. Rotation across
/// rounds is the orchestrator's business.
#[derive(Clone, Debug)]
pub struct SDealCards {
    mapepicardset_hand: EnumMap<EPlayerIndex, SCardSet>,
    cardset_skat: SCardSet,
}

impl SDealCards {
    pub fn new_random(rng: &mut impl Rng) -> SDealCards {
        let mut veccard = SCard::values().collect::<Vec<_>>();
        veccard.shuffle(rng);
        SDealCards {
            mapepicardset_hand: EPlayerIndex::map_from_fn(|epi| {
                veccard[epi.to_usize()*N_CARDS_PER_HAND..(epi.to_usize()+1)*N_CARDS_PER_HAND]
                    .iter().copied().collect()
            }),
            cardset_skat: veccard[EPlayerIndex::SIZE*N_CARDS_PER_HAND..].iter().copied().collect(),
        }
    }

    pub fn new(mapepicardset_hand: EnumMap<EPlayerIndex, SCardSet>, cardset_skat: SCardSet) -> Result<SDealCards, Error> {
        for epi in EPlayerIndex::values() {
            if mapepicardset_hand[epi].count()!=N_CARDS_PER_HAND {
                return Err(VRoundError::InvalidDeal{
                    str_reason: format!("hand {} holds {} cards", epi, mapepicardset_hand[epi].count()),
                }.into());
            }
        }
        if cardset_skat.count()!=N_CARDS_SKAT {
            return Err(VRoundError::InvalidDeal{
                str_reason: format!("skat holds {} cards", cardset_skat.count()),
            }.into());
        }
        let cardset_all = EPlayerIndex::values()
            .map(|epi| mapepicardset_hand[epi])
            .fold(cardset_skat, SCardSet::union);
        if cardset_all != SCardSet::new_full() {
            return Err(VRoundError::InvalidDeal{
                str_reason: "piles overlap or omit cards".to_string(),
            }.into());
        }
        Ok(SDealCards{mapepicardset_hand, cardset_skat})
    }

    pub fn hand(&self, epi: EPlayerIndex) -> SCardSet {
        self.mapepicardset_hand[epi]
    }
    pub fn skat(&self) -> SCardSet {
        self.cardset_skat
    }

    pub fn bidding(self) -> SBidding {
        SBidding::new(self)
    }
}

/// One entry of the public bidding history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VBidEvent {
    Said(usize),
    Accepted(usize),
    Passed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct SBid {
    pub epi: EPlayerIndex,
    pub event: VBidEvent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VBiddingAction {
    Say {
        epi: EPlayerIndex,
        n_bid_offered: usize,
    },
    Hear {
        epi: EPlayerIndex,
        n_bid_said: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VBiddingState {
    AwaitSay,
    AwaitHear {
        n_bid_said: usize,
    },
    // Nobody bid: forehand gets one direct chance at the minimum bid.
    ForehandFallback,
    Over,
}

/// The say/hear state machine. Middlehand opens against forehand; rearhand
/// enters when one of them drops out. A rejected say drops the hearer, a
/// sayer's pass hands the saying role on (or ends the auction).
#[derive(Clone, Debug)]
pub struct SBidding {
    dealcards: SDealCards,
    state: VBiddingState,
    n_idx_ladder: usize,
    epi_saying: EPlayerIndex,
    epi_hearing: EPlayerIndex,
    n_bid_highest: usize,
    oepi_bidder: Option<EPlayerIndex>,
    vecbid: Vec<SBid>,
}

impl SBidding {
    fn new(dealcards: SDealCards) -> SBidding {
        SBidding {
            dealcards,
            state: VBiddingState::AwaitSay,
            n_idx_ladder: 0,
            epi_saying: EPlayerIndex::EPI1,
            epi_hearing: EPlayerIndex::EPI0,
            n_bid_highest: 0,
            oepi_bidder: None,
            vecbid: Vec::new(),
        }
    }

    pub fn hand(&self, epi: EPlayerIndex) -> SCardSet {
        self.dealcards.hand(epi)
    }

    pub fn history(&self) -> &[SBid] {
        &self.vecbid
    }

    pub fn which_player_can_do_something(&self) -> Option<VBiddingAction> {
        match self.state {
            VBiddingState::AwaitSay => Some(VBiddingAction::Say{
                epi: self.epi_saying,
                n_bid_offered: bid_ladder()[self.n_idx_ladder],
            }),
            VBiddingState::AwaitHear{n_bid_said} => Some(VBiddingAction::Hear{
                epi: self.epi_hearing,
                n_bid_said,
            }),
            VBiddingState::ForehandFallback => Some(VBiddingAction::Say{
                epi: EPlayerIndex::EPI0,
                n_bid_offered: N_BID_MINIMUM,
            }),
            VBiddingState::Over => None,
        }
    }

    fn end_of_saying(&mut self) {
        self.state = if self.n_bid_highest==0 {
            VBiddingState::ForehandFallback
        } else {
            VBiddingState::Over
        };
    }

    fn advance_ladder(&mut self) {
        self.n_idx_ladder += 1;
        self.state = if self.n_idx_ladder < bid_ladder().len() {
            VBiddingState::AwaitSay
        } else {
            VBiddingState::Over
        };
    }

    /// `n_bid_said` continues the auction iff it is exactly the offered
    /// value; anything else is a pass.
    pub fn say(&mut self, epi: EPlayerIndex, n_bid_said: usize) -> Result<(), Error> {
        match self.state {
            VBiddingState::AwaitSay => {
                if epi != self.epi_saying {
                    bail!("say out of turn: {} instead of {}", epi, self.epi_saying);
                }
                let n_bid_offered = bid_ladder()[self.n_idx_ladder];
                if n_bid_said != n_bid_offered {
                    self.vecbid.push(SBid::new(epi, VBidEvent::Passed));
                    if self.epi_saying==EPlayerIndex::EPI1 {
                        self.epi_saying = EPlayerIndex::EPI2;
                    } else {
                        self.end_of_saying();
                    }
                } else {
                    self.vecbid.push(SBid::new(epi, VBidEvent::Said(n_bid_said)));
                    self.n_bid_highest = n_bid_said;
                    self.oepi_bidder = Some(epi);
                    self.state = VBiddingState::AwaitHear{n_bid_said};
                }
                Ok(())
            },
            VBiddingState::ForehandFallback => {
                if epi != EPlayerIndex::EPI0 {
                    bail!("say out of turn: {} instead of forehand", epi);
                }
                if n_bid_said==N_BID_MINIMUM {
                    self.vecbid.push(SBid::new(epi, VBidEvent::Said(n_bid_said)));
                    self.n_bid_highest = n_bid_said;
                    self.oepi_bidder = Some(epi);
                } else {
                    self.vecbid.push(SBid::new(epi, VBidEvent::Passed));
                }
                self.state = VBiddingState::Over;
                Ok(())
            },
            _ => bail!("say in state {:?}", self.state),
        }
    }

    pub fn hear(&mut self, epi: EPlayerIndex, b_accepted: bool) -> Result<(), Error> {
        match self.state {
            VBiddingState::AwaitHear{n_bid_said} => {
                if epi != self.epi_hearing {
                    bail!("hear out of turn: {} instead of {}", epi, self.epi_hearing);
                }
                if b_accepted {
                    self.vecbid.push(SBid::new(epi, VBidEvent::Accepted(n_bid_said)));
                    self.oepi_bidder = Some(epi);
                    self.advance_ladder();
                } else {
                    self.vecbid.push(SBid::new(epi, VBidEvent::Passed));
                    if self.epi_saying==EPlayerIndex::EPI1 {
                        self.epi_hearing = EPlayerIndex::EPI1;
                        self.epi_saying = EPlayerIndex::EPI2;
                        self.advance_ladder();
                    } else {
                        self.state = VBiddingState::Over;
                    }
                }
                Ok(())
            },
            _ => bail!("hear in state {:?}", self.state),
        }
    }

    pub fn finish(self) -> Result<VBiddingResult, SBidding> {
        match self.state {
            VBiddingState::Over => Ok(match self.oepi_bidder {
                None => {
                    debug_assert_eq!(self.n_bid_highest, 0);
                    VBiddingResult::AllPassed
                },
                Some(epi_solo) => VBiddingResult::Winner(SAnnouncing{
                    dealcards: self.dealcards,
                    epi_solo,
                    n_bid: self.n_bid_highest,
                    vecbid: self.vecbid,
                }),
            }),
            _ => Err(self),
        }
    }
}

pub enum VBiddingResult {
    AllPassed,
    Winner(SAnnouncing),
}

/// Between auction and play: the declarer decides on the skat, announces
/// the game and (after pickup) discards back to ten cards.
#[derive(Clone, Debug)]
pub struct SAnnouncing {
    dealcards: SDealCards,
    epi_solo: EPlayerIndex,
    n_bid: usize,
    vecbid: Vec<SBid>,
}

impl SAnnouncing {
    pub fn solo_player(&self) -> EPlayerIndex {
        self.epi_solo
    }
    pub fn bid(&self) -> usize {
        self.n_bid
    }
    pub fn history(&self) -> &[SBid] {
        &self.vecbid
    }
    pub fn hand(&self, epi: EPlayerIndex) -> SCardSet {
        self.dealcards.hand(epi)
    }
    /// What the declarer gets to look at: the dealt hand, with the skat
    /// merged in iff it was picked up.
    pub fn hand_for_announcement(&self, b_pickup: bool) -> SCardSet {
        let cardset_hand = self.dealcards.hand(self.epi_solo);
        if b_pickup {
            cardset_hand.union(self.dealcards.cardset_skat)
        } else {
            cardset_hand
        }
    }

    pub fn announce(
        self,
        b_pickup: bool,
        announcement: VGameAnnouncement,
        cardset_hand_new: SCardSet,
    ) -> Result<SGame, Error> {
        let cardset_hand_original = self.dealcards.hand(self.epi_solo);
        // Known to the declarer for tier purposes even without pickup.
        let cardset_solo_with_skat = cardset_hand_original.union(self.dealcards.cardset_skat);
        let mut mapepicardset_hand = self.dealcards.mapepicardset_hand.clone();
        let mut cardset_skat = self.dealcards.cardset_skat;
        if !b_pickup {
            if cardset_hand_new != cardset_hand_original {
                cheating!(self.epi_solo, "declined the skat but changed hand from {} to {}", cardset_hand_original, cardset_hand_new);
            }
        } else {
            let cardset_available = cardset_solo_with_skat;
            let cardset_skat_new = cardset_available.difference(cardset_hand_new);
            if cardset_hand_new.count()!=N_CARDS_PER_HAND || cardset_skat_new.count()!=N_CARDS_SKAT {
                cheating!(self.epi_solo, "bad discard: kept {} put back {}", cardset_hand_new, cardset_skat_new);
            }
            mapepicardset_hand[self.epi_solo] = cardset_hand_new;
            cardset_skat = cardset_skat_new;
        }
        Ok(SGame {
            mapepicardset_hand,
            cardset_skat,
            cardset_solo_with_skat,
            announcement,
            epi_solo: self.epi_solo,
            n_bid: self.n_bid,
            vecbid: self.vecbid,
            vecstich: ArrayVec::new(),
            stich_current: SStich::new(EPlayerIndex::EPI0),
            // The skat counts for the declarer, picked up or not.
            n_points_solo: points_cardset(cardset_skat),
            n_points_team: 0,
            b_early_loss: false,
        })
    }
}

/// The trick-playing phase: ten tricks, forehand leading the first.
#[derive(Clone, Debug)]
pub struct SGame {
    mapepicardset_hand: EnumMap<EPlayerIndex, SCardSet>,
    cardset_skat: SCardSet,
    cardset_solo_with_skat: SCardSet,
    announcement: VGameAnnouncement,
    epi_solo: EPlayerIndex,
    n_bid: usize,
    vecbid: Vec<SBid>,
    vecstich: ArrayVec<SFullStich, N_STICHE>,
    stich_current: SStich,
    n_points_solo: isize,
    n_points_team: isize,
    b_early_loss: bool,
}

impl SGame {
    pub fn announcement(&self) -> &VGameAnnouncement {
        &self.announcement
    }
    pub fn solo_player(&self) -> EPlayerIndex {
        self.epi_solo
    }
    pub fn bid(&self) -> usize {
        self.n_bid
    }
    pub fn bidding_history(&self) -> &[SBid] {
        &self.vecbid
    }
    pub fn hand(&self, epi: EPlayerIndex) -> SCardSet {
        self.mapepicardset_hand[epi]
    }
    pub fn current_stich(&self) -> &SStich {
        &self.stich_current
    }
    pub fn completed_stiche(&self) -> &[SFullStich] {
        &self.vecstich
    }

    fn is_finished(&self) -> bool {
        self.b_early_loss || self.vecstich.len()==N_STICHE
    }

    pub fn which_player_can_do_something(&self) -> Option<EPlayerIndex> {
        if self.is_finished() {
            None
        } else {
            self.stich_current.current_playerindex()
        }
    }

    pub fn legal_actions_for(&self, epi: EPlayerIndex) -> SCardSet {
        legal_actions(
            self.announcement.game_type(),
            if_then_some!(!self.stich_current.is_empty(), self.stich_current.first_card()),
            self.mapepicardset_hand[epi],
        )
    }

    /// Accept a card from `epi`. The card must be in turn, physically held
    /// and legal; anything else aborts the round as cheating.
    pub fn zugeben(&mut self, epi: EPlayerIndex, card: SCard) -> Result<(), Error> {
        debug!("zugeben {} by {}", card, epi);
        match self.which_player_can_do_something() {
            Some(epi_active) if epi_active==epi => (),
            _ => bail!("{} cannot play a card now", epi),
        }
        let cardset_hand = self.mapepicardset_hand[epi];
        if !cardset_hand.contains(card) {
            cheating!(epi, "produced {} out of thin air, holding only {}", card, cardset_hand);
        }
        let cardset_legal = self.legal_actions_for(epi);
        if !cardset_legal.contains(card) {
            cheating!(epi, "played {} although only {} were allowed", card, cardset_legal);
        }
        self.stich_current.push(card);
        self.mapepicardset_hand[epi].remove(card);
        if self.stich_current.is_full() {
            self.resolve_stich();
        }
        Ok(())
    }

    fn resolve_stich(&mut self) {
        let stich = SFullStich::new(std::mem::replace(
            &mut self.stich_current,
            SStich::new(EPlayerIndex::EPI0), // placeholder until the winner is known
        ));
        let egametype = self.announcement.game_type();
        let epi_winner = winner_index(egametype, &stich);
        let n_points_stich = points_stich(&stich);
        debug!("stich {} goes to {} ({} points)", stich.get(), epi_winner, n_points_stich);
        if epi_winner==self.epi_solo {
            self.n_points_solo += n_points_stich;
            if egametype==EGameType::Null {
                // A single trick loses the Null game, remaining tricks are void.
                self.b_early_loss = true;
            }
        } else {
            self.n_points_team += n_points_stich;
            if self.announcement.requires_all_tricks() {
                self.b_early_loss = true;
            }
        }
        self.vecstich.push(stich);
        self.stich_current = SStich::new(epi_winner);
    }

    pub fn points_solo(&self) -> isize {
        self.n_points_solo
    }
    pub fn points_team(&self) -> isize {
        self.n_points_team
    }

    pub fn finish(self) -> Result<SRoundResult, SGame> {
        if !self.is_finished() {
            return Err(self);
        }
        let winflags = if self.b_early_loss {
            SWinFlags::new(/*b_solo_win*/false, /*b_schneider*/false, /*b_schwarz*/false)
        } else {
            win_flags_completed(&self.announcement, self.n_points_solo, self.n_points_team)
        };
        let n_value = game_value(&self.announcement, self.cardset_solo_with_skat, &winflags, self.n_bid);
        info!(
            "{} by {} ({}): {}",
            self.announcement.game_type(),
            self.epi_solo,
            if winflags.b_solo_win {"won"} else {"lost"},
            n_value,
        );
        Ok(SRoundResult {
            outcome: if winflags.b_solo_win {
                VRoundOutcome::SoloWin
            } else {
                VRoundOutcome::SoloLoss
            },
            oepi_solo: Some(self.epi_solo),
            winflags: Some(winflags),
            mapepin_points: EPlayerIndex::map_from_fn(|epi| {
                if epi==self.epi_solo {n_value} else {0}
            }),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VRoundOutcome {
    AllPassed,
    SoloWin,
    SoloLoss,
}

/// Terminal state of a round: who (if anyone) played solo, whether they
/// won, and the signed value credited at the declarer's seat.
#[derive(Clone, Debug)]
pub struct SRoundResult {
    pub outcome: VRoundOutcome,
    pub oepi_solo: Option<EPlayerIndex>,
    pub winflags: Option<SWinFlags>,
    pub mapepin_points: EnumMap<EPlayerIndex, isize>,
}

impl SRoundResult {
    pub fn new_all_passed() -> SRoundResult {
        SRoundResult {
            outcome: VRoundOutcome::AllPassed,
            oepi_solo: None,
            winflags: None,
            mapepin_points: EPlayerIndex::map_from_fn(|_epi| 0),
        }
    }
}
