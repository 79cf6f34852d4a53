use crate::game::*;
use crate::player::TPlayer;
use crate::primitives::*;
use crate::util::*;
use rand::prelude::*;

/// Drive one round from deal to result. `mapepin_player` maps each table
/// position to a slot in `aplayer`, so the same players can be reseated
/// across rounds; `mapepif_behaviour` is handed through untouched.
pub fn run_round(
    dealcards: SDealCards,
    aplayer: &mut [Box<dyn TPlayer>; EPlayerIndex::SIZE],
    mapepin_player: &EnumMap<EPlayerIndex, usize>,
    mapepif_behaviour: &EnumMap<EPlayerIndex, f32>,
) -> Result<SRoundResult, Error> {
    macro_rules! player {($epi: expr) => {
        aplayer[mapepin_player[$epi]]
    }}
    for epi in EPlayerIndex::values() {
        debug!("hand {} ({}): {}", epi, player!(epi).name(), dealcards.hand(epi));
        player!(epi).receive_hand_cards(dealcards.hand(epi), epi, mapepif_behaviour[epi]);
    }
    let mut bidding = dealcards.bidding();
    while let Some(biddingaction) = bidding.which_player_can_do_something() {
        match biddingaction {
            VBiddingAction::Say{epi, n_bid_offered} => {
                let n_bid_said = player!(epi).say(n_bid_offered, bidding.history());
                bidding.say(epi, n_bid_said)?;
            },
            VBiddingAction::Hear{epi, n_bid_said} => {
                let b_accepted = player!(epi).hear(n_bid_said, bidding.history());
                bidding.hear(epi, b_accepted)?;
            },
        }
    }
    let announcing = match unwrap!(bidding.finish().ok()) {
        VBiddingResult::AllPassed => {
            debug!("all passed");
            return Ok(SRoundResult::new_all_passed());
        },
        VBiddingResult::Winner(announcing) => announcing,
    };
    let epi_solo = announcing.solo_player();
    let b_pickup = player!(epi_solo).pickup_skat(announcing.bid(), announcing.history());
    let (announcement, cardset_hand_new) = {
        let cardset_hand = announcing.hand_for_announcement(b_pickup);
        player!(epi_solo).announce(cardset_hand)
    };
    debug!(
        "{} ({}) plays {} at {}",
        epi_solo,
        player!(epi_solo).name(),
        crate::display::game_name(&announcement),
        announcing.bid(),
    );
    let mut game = announcing.announce(b_pickup, announcement, cardset_hand_new)?;
    let ocardset_ouvert = if_then_some!(game.announcement().is_ouvert(), game.hand(epi_solo));
    for epi in EPlayerIndex::values() {
        player!(epi).start_playing(
            &announcement,
            game.hand(epi),
            epi,
            epi_solo,
            ocardset_ouvert,
            game.bidding_history(),
            mapepif_behaviour[epi],
        );
    }
    while let Some(epi) = game.which_player_can_do_something() {
        let card = player!(epi).play_card(
            game.hand(epi),
            game.legal_actions_for(epi),
            game.current_stich(),
            game.completed_stiche(),
        );
        game.zugeben(epi, card)?;
    }
    Ok(unwrap!(game.finish().ok()))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SPlayerStats {
    pub n_points: isize,
    pub n_rounds_solo: usize,
    pub n_wins_solo: usize,
    pub n_rounds_team: usize,
    pub n_wins_team: usize,
}

/// Accumulated results of a series of rounds, per player slot.
#[derive(Clone, Debug, Default)]
pub struct SSimulationStats {
    pub astats: [SPlayerStats; EPlayerIndex::SIZE],
    pub n_rounds_passed: usize,
    pub n_rounds_played: usize,
}

impl SSimulationStats {
    /// Combine tallies from independently simulated batches.
    pub fn merge(&mut self, stats: &SSimulationStats) {
        for (stats_player, stats_player_other) in self.astats.iter_mut().zip(stats.astats.iter()) {
            stats_player.n_points += stats_player_other.n_points;
            stats_player.n_rounds_solo += stats_player_other.n_rounds_solo;
            stats_player.n_wins_solo += stats_player_other.n_wins_solo;
            stats_player.n_rounds_team += stats_player_other.n_rounds_team;
            stats_player.n_wins_team += stats_player_other.n_wins_team;
        }
        self.n_rounds_passed += stats.n_rounds_passed;
        self.n_rounds_played += stats.n_rounds_played;
    }

    /// Fold one round into the tally. Seeger-Fabian adds the tournament
    /// bonuses on top of the raw game values: 50 to the declarer for a win,
    /// minus 50 for a loss, 40 to each successful defender.
    pub fn register(
        &mut self,
        roundresult: &SRoundResult,
        mapepin_player: &EnumMap<EPlayerIndex, usize>,
        b_seeger_fabian: bool,
    ) {
        match roundresult.outcome {
            VRoundOutcome::AllPassed => self.n_rounds_passed += 1,
            VRoundOutcome::SoloWin | VRoundOutcome::SoloLoss => {
                self.n_rounds_played += 1;
                let epi_solo = unwrap!(roundresult.oepi_solo);
                for epi in EPlayerIndex::values() {
                    let stats_player = &mut self.astats[mapepin_player[epi]];
                    let mut n_points = roundresult.mapepin_points[epi];
                    if b_seeger_fabian {
                        n_points += match roundresult.outcome {
                            VRoundOutcome::SoloWin if epi==epi_solo => 50,
                            VRoundOutcome::SoloLoss if epi==epi_solo => -50,
                            VRoundOutcome::SoloLoss => 40,
                            _ => 0,
                        };
                    }
                    stats_player.n_points += n_points;
                    if epi==epi_solo {
                        stats_player.n_rounds_solo += 1;
                        if roundresult.outcome==VRoundOutcome::SoloWin {
                            stats_player.n_wins_solo += 1;
                        }
                    } else {
                        stats_player.n_rounds_team += 1;
                        if roundresult.outcome==VRoundOutcome::SoloLoss {
                            stats_player.n_wins_team += 1;
                        }
                    }
                }
            },
        }
    }
}

#[derive(Clone, Copy, Debug, new)]
pub struct SSimulationConfig {
    pub n_rounds: usize,
    pub b_equalize: bool,
    pub b_seeger_fabian: bool,
}

fn run_deal(
    dealcards: SDealCards,
    aplayer: &mut [Box<dyn TPlayer>; EPlayerIndex::SIZE],
    n_forehand: usize,
    config: &SSimulationConfig,
    rng: &mut impl Rng,
    stats: &mut SSimulationStats,
) -> Result<(), Error> {
    if config.b_equalize {
        let mapepif_behaviour = EPlayerIndex::map_from_fn(|_epi| rng.gen::<f32>()*0.2 + 0.9);
        use itertools::Itertools;
        for vecn_player in (0..EPlayerIndex::SIZE).permutations(EPlayerIndex::SIZE) {
            let mapepin_player = EPlayerIndex::map_from_fn(|epi| {
                vecn_player[(epi.to_usize() + n_forehand) % EPlayerIndex::SIZE]
            });
            let roundresult = run_round(dealcards.clone(), aplayer, &mapepin_player, &mapepif_behaviour)?;
            stats.register(&roundresult, &mapepin_player, config.b_seeger_fabian);
        }
    } else {
        let mapepin_player = EPlayerIndex::map_from_fn(|epi| {
            (epi.to_usize() + n_forehand) % EPlayerIndex::SIZE
        });
        let mapepif_behaviour = EPlayerIndex::map_from_fn(|_epi| 1.0);
        let roundresult = run_round(dealcards, aplayer, &mapepin_player, &mapepif_behaviour)?;
        stats.register(&roundresult, &mapepin_player, config.b_seeger_fabian);
    }
    Ok(())
}

/// Play `n_rounds` deals, rotating forehand after each. With `b_equalize`,
/// each deal is replayed under all six player-to-seat assignments with
/// per-seat behaviour noise, so card luck cancels out of the comparison.
pub fn run_simulation(
    aplayer: &mut [Box<dyn TPlayer>; EPlayerIndex::SIZE],
    config: &SSimulationConfig,
    rng: &mut impl Rng,
) -> Result<SSimulationStats, Error> {
    let mut stats = SSimulationStats::default();
    for i_round in 0..config.n_rounds {
        let dealcards = SDealCards::new_random(rng);
        run_deal(dealcards, aplayer, i_round % EPlayerIndex::SIZE, config, rng, &mut stats)?;
    }
    Ok(stats)
}

/// Rounds are independent, so they fan out over rayon's thread pool, each
/// worker building its own table via `fn_aplayer`. Deal `i` draws from a
/// rng seeded with `n_seed + i`, so results do not depend on scheduling.
pub fn run_simulation_parallel(
    fn_aplayer: &(impl Fn() -> [Box<dyn TPlayer>; EPlayerIndex::SIZE] + Sync),
    config: &SSimulationConfig,
    n_seed: u64,
) -> Result<SSimulationStats, Error> {
    use rayon::prelude::*;
    (0..config.n_rounds)
        .into_par_iter()
        .map(|i_round| {
            let mut rng = rand::rngs::StdRng::seed_from_u64(n_seed.wrapping_add(i_round.as_num::<u64>()));
            let dealcards = SDealCards::new_random(&mut rng);
            let mut stats = SSimulationStats::default();
            run_deal(dealcards, &mut fn_aplayer(), i_round % EPlayerIndex::SIZE, config, &mut rng, &mut stats)?;
            Ok(stats)
        })
        .try_reduce(SSimulationStats::default, |mut stats_accumulated, stats| {
            stats_accumulated.merge(&stats);
            Ok(stats_accumulated)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::*;
    use crate::rules::*;

    fn computer_table() -> [Box<dyn TPlayer>; EPlayerIndex::SIZE] {
        [
            Box::new(SPlayerComputer::new("A")),
            Box::new(SPlayerComputer::new("B")),
            Box::new(SPlayerComputer::new("C")),
        ]
    }

    fn identity_seating() -> EnumMap<EPlayerIndex, usize> {
        EPlayerIndex::map_from_fn(|epi| epi.to_usize())
    }

    #[test]
    fn test_run_round_deterministic() {
        let mapepin_player = identity_seating();
        let mapepif_behaviour = EPlayerIndex::map_from_fn(|_epi| 1.0);
        let fn_points = |n_seed: u64| {
            let dealcards = SDealCards::new_random(&mut rand::rngs::StdRng::seed_from_u64(n_seed));
            let roundresult = unwrap!(run_round(
                dealcards,
                &mut computer_table(),
                &mapepin_player,
                &mapepif_behaviour,
            ));
            EPlayerIndex::values()
                .map(|epi| roundresult.mapepin_points[epi])
                .collect::<Vec<_>>()
        };
        for n_seed in 0..20 {
            assert_eq!(fn_points(n_seed), fn_points(n_seed));
        }
    }

    #[test]
    fn test_run_round_result_consistency() {
        let mapepin_player = identity_seating();
        let mapepif_behaviour = EPlayerIndex::map_from_fn(|_epi| 1.0);
        for n_seed in 0..50 {
            let dealcards = SDealCards::new_random(&mut rand::rngs::StdRng::seed_from_u64(n_seed));
            let roundresult = unwrap!(run_round(
                dealcards,
                &mut computer_table(),
                &mapepin_player,
                &mapepif_behaviour,
            ));
            match roundresult.outcome {
                VRoundOutcome::AllPassed => {
                    assert!(roundresult.oepi_solo.is_none());
                    assert!(EPlayerIndex::values().all(|epi| roundresult.mapepin_points[epi]==0));
                },
                VRoundOutcome::SoloWin => {
                    let epi_solo = unwrap!(roundresult.oepi_solo);
                    assert!(roundresult.mapepin_points[epi_solo] > 0);
                    assert!(unwrap!(roundresult.winflags.as_ref()).b_solo_win);
                },
                VRoundOutcome::SoloLoss => {
                    let epi_solo = unwrap!(roundresult.oepi_solo);
                    assert!(roundresult.mapepin_points[epi_solo] < 0);
                },
            }
        }
    }

    #[test]
    fn test_register_seeger_fabian() {
        let mapepin_player = identity_seating();
        let mut stats = SSimulationStats::default();
        stats.register(
            &SRoundResult {
                outcome: VRoundOutcome::SoloWin,
                oepi_solo: Some(EPlayerIndex::EPI1),
                winflags: Some(SWinFlags::new(/*b_solo_win*/true, /*b_schneider*/false, /*b_schwarz*/false)),
                mapepin_points: EPlayerIndex::map_from_fn(|epi| if epi==EPlayerIndex::EPI1 {48} else {0}),
            },
            &mapepin_player,
            /*b_seeger_fabian*/true,
        );
        assert_eq!(stats.astats[1].n_points, 98);
        assert_eq!(stats.astats[0].n_points, 0);
        assert_eq!(stats.astats[1].n_wins_solo, 1);
        assert_eq!(stats.astats[0].n_rounds_team, 1);
        stats.register(
            &SRoundResult {
                outcome: VRoundOutcome::SoloLoss,
                oepi_solo: Some(EPlayerIndex::EPI1),
                winflags: Some(SWinFlags::new(/*b_solo_win*/false, /*b_schneider*/false, /*b_schwarz*/false)),
                mapepin_points: EPlayerIndex::map_from_fn(|epi| if epi==EPlayerIndex::EPI1 {-96} else {0}),
            },
            &mapepin_player,
            /*b_seeger_fabian*/true,
        );
        assert_eq!(stats.astats[1].n_points, 98 - 96 - 50);
        assert_eq!(stats.astats[0].n_points, 40);
        assert_eq!(stats.astats[2].n_points, 40);
        assert_eq!(stats.astats[0].n_wins_team, 1);
        assert_eq!(stats.n_rounds_played, 2);
        stats.register(&SRoundResult::new_all_passed(), &mapepin_player, /*b_seeger_fabian*/true);
        assert_eq!(stats.n_rounds_passed, 1);
    }

    #[test]
    fn test_simulation_mixed_table() {
        let mut aplayer: [Box<dyn TPlayer>; EPlayerIndex::SIZE] = [
            Box::new(SPlayerComputer::new("Computer")),
            Box::new(SPlayerRandom::new("Random 1")),
            Box::new(SPlayerRandom::new("Random 2")),
        ];
        let stats = unwrap!(run_simulation(
            &mut aplayer,
            &SSimulationConfig::new(/*n_rounds*/20, /*b_equalize*/false, /*b_seeger_fabian*/true),
            &mut rand::rngs::StdRng::seed_from_u64(3),
        ));
        assert_eq!(stats.n_rounds_passed + stats.n_rounds_played, 20);
        assert_eq!(
            stats.astats.iter().map(|stats_player| stats_player.n_rounds_solo).sum::<usize>(),
            stats.n_rounds_played
        );
    }

    #[test]
    fn test_simulation_equalized() {
        let mut aplayer = computer_table();
        let stats = unwrap!(run_simulation(
            &mut aplayer,
            &SSimulationConfig::new(/*n_rounds*/3, /*b_equalize*/true, /*b_seeger_fabian*/false),
            &mut rand::rngs::StdRng::seed_from_u64(4),
        ));
        // Each deal is replayed under all six seatings.
        assert_eq!(stats.n_rounds_passed + stats.n_rounds_played, 3 * 6);
        assert_eq!(
            stats.astats.iter().map(|stats_player| stats_player.n_rounds_team).sum::<usize>(),
            2 * stats.n_rounds_played
        );
    }

    #[test]
    fn test_simulation_parallel_reproducible() {
        let config = SSimulationConfig::new(/*n_rounds*/12, /*b_equalize*/true, /*b_seeger_fabian*/true);
        let fn_run = || {
            let stats = unwrap!(run_simulation_parallel(&computer_table, &config, /*n_seed*/7));
            (
                stats.n_rounds_passed,
                stats.n_rounds_played,
                stats.astats.iter().map(|stats_player| stats_player.n_points).collect::<Vec<_>>(),
            )
        };
        // Per-deal seeding makes the outcome independent of scheduling.
        assert_eq!(fn_run(), fn_run());
        let stats = unwrap!(run_simulation_parallel(&computer_table, &config, /*n_seed*/7));
        assert_eq!(stats.n_rounds_passed + stats.n_rounds_played, 12 * 6);
        assert_eq!(
            stats.astats.iter().map(|stats_player| stats_player.n_rounds_solo).sum::<usize>(),
            stats.n_rounds_played
        );
    }
}
