use crate::util::*;
use openskat_lib::display::*;
use openskat_lib::game::*;
use openskat_lib::primitives::*;
use openskat_lib::rules::*;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command {
    clap::Command::new(str_subcommand)
        .about("Overview of the deck, the bid ladder and hand sorting.")
}

pub fn run(_clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    use itertools::Itertools;
    println!("Deck:");
    for efarbe in EFarbe::values() {
        println!(
            "  {}",
            ESchlag::values()
                .map(|eschlag| SCard::new(efarbe, eschlag))
                .format_with(" ", |card, formatter| {
                    formatter(&format_args!("{} ({})", card, points_card(card)))
                }),
        );
    }
    println!("Bid ladder: {}", bid_ladder().iter().format(" "));
    let dealcards = SDealCards::new_random(&mut rand::thread_rng());
    let cardset_hand = dealcards.hand(EPlayerIndex::EPI0);
    println!("A dealt hand, sorted per game type:");
    for egametype in EGameType::values() {
        println!("  {:<6} {}", egametype, hand_text(cardset_hand, egametype));
    }
    Ok(())
}
