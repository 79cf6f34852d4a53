pub mod playercomputer;
pub mod playerrandom;

pub use playercomputer::SPlayerComputer;
pub use playerrandom::SPlayerRandom;

use crate::game::*;
use crate::primitives::*;
use crate::rules::*;

/// A participant at the table. The orchestrator calls these in phase order;
/// every piece of public information (the bidding history, completed tricks,
/// an ouvert hand) travels as an argument, so implementations stay free of
/// table state they could not legitimately see.
pub trait TPlayer {
    fn name(&self) -> &str;

    /// Called once per round, before bidding. `f_behaviour` nudges the
    /// player's appetite for risk around 1.
    fn receive_hand_cards(
        &mut self,
        cardset_hand: SCardSet,
        epi_bidding: EPlayerIndex,
        f_behaviour: f32,
    );

    /// Return `n_bid_offered` to bid it, anything else to pass.
    fn say(&mut self, n_bid_offered: usize, slcbid: &[SBid]) -> usize;

    fn hear(&mut self, n_bid_said: usize, slcbid: &[SBid]) -> bool;

    /// The auction is won at `n_bid`. Return whether to pick up the skat.
    fn pickup_skat(&mut self, n_bid: usize, slcbid: &[SBid]) -> bool;

    /// `cardset_hand` holds twelve cards after a pickup, ten otherwise.
    /// Return the announcement and the ten cards to keep.
    fn announce(&mut self, cardset_hand: SCardSet) -> (VGameAnnouncement, SCardSet);

    #[allow(clippy::too_many_arguments)]
    fn start_playing(
        &mut self,
        announcement: &VGameAnnouncement,
        cardset_hand: SCardSet,
        epi_self: EPlayerIndex,
        epi_solo: EPlayerIndex,
        ocardset_ouvert: Option<SCardSet>,
        slcbid: &[SBid],
        f_behaviour: f32,
    );

    fn play_card(
        &mut self,
        cardset_hand: SCardSet,
        cardset_legal: SCardSet,
        stich: &SStich,
        slcstich: &[SFullStich],
    ) -> SCard;
}
