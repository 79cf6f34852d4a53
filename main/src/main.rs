#![deny(bare_trait_objects)]

mod subcommands;
mod util;

use crate::util::*;

fn main() -> Result<(), Error> {
    openskat_logging::init_logging()?;
    macro_rules! subcommands{($(($mod:ident, $str_cmd:expr))*) => {
        let clapmatches = clap::Command::new("openskat")
            $(.subcommand(subcommands::$mod::subcommand($str_cmd)))*
            .get_matches();
        $(
            if let Some(clapmatches_subcommand)=clapmatches.subcommand_matches($str_cmd) {
                return subcommands::$mod::run(clapmatches_subcommand);
            }
        )*
    }}
    subcommands!(
        (simulate, "simulate")
        (cards, "cards")
    );
    Ok(())
}
