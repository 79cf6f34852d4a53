use crate::util::*;
use openskat_lib::game::*;
use openskat_lib::player::*;
use openskat_lib::primitives::*;
use rand::prelude::*;

pub fn subcommand(str_subcommand: &'static str) -> clap::Command {
    clap::Command::new(str_subcommand)
        .about("Let computer players compete over a series of rounds.")
        .arg(clap::Arg::new("rounds")
            .long("rounds")
            .takes_value(true)
            .default_value("100")
            .help("Number of deals to play")
        )
        .arg(clap::Arg::new("players")
            .long("players")
            .takes_value(true)
            .default_value("basic,basic,basic")
            .help("Comma-separated player kinds (basic or random), seated in deal order")
        )
        .arg(clap::Arg::new("equalize")
            .long("equalize")
            .help("Replay each deal under all six seatings to cancel out card luck")
        )
        .arg(clap::Arg::new("seeger-fabian")
            .long("seeger-fabian")
            .help("Score with the Seeger-Fabian tournament bonuses")
        )
        .arg(clap::Arg::new("seed")
            .long("seed")
            .takes_value(true)
            .help("Seed for the deal sequence (random if omitted)")
        )
        .arg(clap::Arg::new("parallel")
            .long("parallel")
            .help("Distribute the deals over all CPU cores")
        )
}

fn player_from_str(str_kind: &str, n_player: usize) -> Result<Box<dyn TPlayer>, Error> {
    let str_name = format!("{} {}", str_kind, n_player + 1);
    match str_kind {
        "basic" => Ok(Box::new(SPlayerComputer::new(&str_name))),
        "random" => Ok(Box::new(SPlayerRandom::new(&str_name))),
        _ => bail!("unknown player kind: {}", str_kind),
    }
}

fn table_from_kinds(slcstr_kind: &[String]) -> Result<[Box<dyn TPlayer>; EPlayerIndex::SIZE], Error> {
    let vecplayer = slcstr_kind.iter()
        .enumerate()
        .map(|(n_player, str_kind)| player_from_str(str_kind, n_player))
        .collect::<Result<Vec<_>, _>>()?;
    match <[Box<dyn TPlayer>; EPlayerIndex::SIZE]>::try_from(vecplayer) {
        Ok(aplayer) => Ok(aplayer),
        Err(vecplayer) => bail!("need {} players, got {}", EPlayerIndex::SIZE, vecplayer.len()),
    }
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let n_rounds = unwrap!(clapmatches.value_of("rounds")).parse::<usize>()?;
    let vecstr_kind = unwrap!(clapmatches.value_of("players"))
        .split(',')
        .map(|str_kind| str_kind.trim().to_string())
        .collect::<Vec<_>>();
    let mut aplayer = table_from_kinds(&vecstr_kind)?;
    let config = SSimulationConfig::new(
        n_rounds,
        /*b_equalize*/clapmatches.is_present("equalize"),
        /*b_seeger_fabian*/clapmatches.is_present("seeger-fabian"),
    );
    let on_seed = clapmatches.value_of("seed")
        .map(|str_seed| str_seed.parse::<u64>())
        .transpose()?;
    info!("simulating {} rounds: {}", n_rounds, vecstr_kind.join(","));
    let stats = if clapmatches.is_present("parallel") {
        run_simulation_parallel(
            &|| unwrap!(table_from_kinds(&vecstr_kind)), // validated above
            &config,
            on_seed.unwrap_or_else(|| rand::thread_rng().gen()),
        )?
    } else {
        let mut rng = match on_seed {
            Some(n_seed) => StdRng::seed_from_u64(n_seed),
            None => StdRng::from_entropy(),
        };
        run_simulation(&mut aplayer, &config, &mut rng)?
    };
    let n_rounds_total = stats.n_rounds_played + stats.n_rounds_passed;
    println!(
        "{} rounds: {} played, {} passed ({:.1}%)",
        n_rounds_total,
        stats.n_rounds_played,
        stats.n_rounds_passed,
        100. * stats.n_rounds_passed.as_num::<f32>() / n_rounds_total.max(1).as_num::<f32>(),
    );
    println!(
        "{:<12} {:>8} {:>8} {:>6} {:>9} {:>9}",
        "Player", "Score", "Avg", "Solo", "Solo won", "Team won",
    );
    for (n_player, stats_player) in stats.astats.iter().enumerate() {
        println!(
            "{:<12} {:>8} {:>8.2} {:>6} {:>9} {:>9}",
            aplayer[n_player].name(),
            stats_player.n_points,
            stats_player.n_points.as_num::<f32>() / n_rounds_total.max(1).as_num::<f32>(),
            stats_player.n_rounds_solo,
            stats_player.n_wins_solo,
            stats_player.n_wins_team,
        );
    }
    Ok(())
}
