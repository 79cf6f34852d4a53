use crate::ai::*;
use crate::game::*;
use crate::player::TPlayer;
use crate::primitives::*;
use crate::rules::*;

/// Baseline player: random announcement appetite, uniformly random cards.
/// Useful as an opponent pool and for stress-testing the round loop.
pub struct SPlayerRandom {
    str_name: String,
    bidder: SBidderRandom,
    playing: SPlayingRandom,
}

impl SPlayerRandom {
    pub fn new(str_name: &str) -> SPlayerRandom {
        SPlayerRandom {
            str_name: str_name.to_string(),
            bidder: SBidderRandom::default(),
            playing: SPlayingRandom,
        }
    }
}

impl TPlayer for SPlayerRandom {
    fn name(&self) -> &str {
        &self.str_name
    }

    fn receive_hand_cards(
        &mut self,
        cardset_hand: SCardSet,
        _epi_bidding: EPlayerIndex,
        _f_behaviour: f32,
    ) {
        self.bidder.receive_hand_cards(cardset_hand);
    }

    fn say(&mut self, n_bid_offered: usize, _slcbid: &[SBid]) -> usize {
        self.bidder.say(n_bid_offered)
    }

    fn hear(&mut self, n_bid_said: usize, _slcbid: &[SBid]) -> bool {
        self.bidder.hear(n_bid_said)
    }

    fn pickup_skat(&mut self, _n_bid: usize, _slcbid: &[SBid]) -> bool {
        self.bidder.pickup_skat()
    }

    fn announce(&mut self, cardset_hand: SCardSet) -> (VGameAnnouncement, SCardSet) {
        self.bidder.announce(cardset_hand)
    }

    fn start_playing(
        &mut self,
        _announcement: &VGameAnnouncement,
        _cardset_hand: SCardSet,
        _epi_self: EPlayerIndex,
        _epi_solo: EPlayerIndex,
        _ocardset_ouvert: Option<SCardSet>,
        _slcbid: &[SBid],
        _f_behaviour: f32,
    ) {
    }

    fn play_card(
        &mut self,
        _cardset_hand: SCardSet,
        cardset_legal: SCardSet,
        _stich: &SStich,
        _slcstich: &[SFullStich],
    ) -> SCard {
        self.playing.play_card(cardset_legal)
    }
}
