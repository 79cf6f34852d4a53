use crate::ai::*;
use crate::game::*;
use crate::player::TPlayer;
use crate::primitives::*;
use crate::rules::*;

/// Heuristic player: hand evaluation drives the auction, greedy trick
/// logic drives the play. Bids with a fixed, slightly cautious appetite
/// for risk no matter what behaviour the table suggests.
pub struct SPlayerComputer {
    str_name: String,
    bidder: SBidderBasic,
    playing: SPlayingGreedy,
}

const F_RISK_TAKING: f32 = 0.95;

impl SPlayerComputer {
    pub fn new(str_name: &str) -> SPlayerComputer {
        SPlayerComputer {
            str_name: str_name.to_string(),
            bidder: SBidderBasic::default(),
            playing: SPlayingGreedy::default(),
        }
    }
}

impl TPlayer for SPlayerComputer {
    fn name(&self) -> &str {
        &self.str_name
    }

    fn receive_hand_cards(
        &mut self,
        cardset_hand: SCardSet,
        epi_bidding: EPlayerIndex,
        _f_behaviour: f32,
    ) {
        self.bidder.receive_hand_cards(cardset_hand, epi_bidding, F_RISK_TAKING);
    }

    fn say(&mut self, n_bid_offered: usize, _slcbid: &[SBid]) -> usize {
        self.bidder.say(n_bid_offered)
    }

    fn hear(&mut self, n_bid_said: usize, _slcbid: &[SBid]) -> bool {
        self.bidder.hear(n_bid_said)
    }

    fn pickup_skat(&mut self, n_bid: usize, _slcbid: &[SBid]) -> bool {
        self.bidder.pickup_skat(n_bid)
    }

    fn announce(&mut self, cardset_hand: SCardSet) -> (VGameAnnouncement, SCardSet) {
        self.bidder.announce(cardset_hand)
    }

    fn start_playing(
        &mut self,
        announcement: &VGameAnnouncement,
        _cardset_hand: SCardSet,
        epi_self: EPlayerIndex,
        epi_solo: EPlayerIndex,
        _ocardset_ouvert: Option<SCardSet>,
        _slcbid: &[SBid],
        _f_behaviour: f32,
    ) {
        self.playing.start_playing(announcement.game_type(), epi_self, epi_solo);
    }

    fn play_card(
        &mut self,
        cardset_hand: SCardSet,
        cardset_legal: SCardSet,
        stich: &SStich,
        _slcstich: &[SFullStich],
    ) -> SCard {
        self.playing.play_card(cardset_hand, cardset_legal, stich)
    }
}
