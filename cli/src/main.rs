mod commands;
mod terminal;

use commands::{CommandLine, Commands, arith, distance, family};
use ipstep_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        no_color: commands.no_color,
    };

    logging::init_logging(&cfg);
    print::initialize(&cfg);

    match commands.command {
        Commands::Add { addr, offset } => arith::add(addr, &offset, &cfg),
        Commands::Sub { addr, offset } => arith::sub(addr, &offset, &cfg),
        Commands::Family { addr } => {
            family::family(addr, &cfg);
            Ok(())
        }
        Commands::Distance { from, to } => distance::distance(from, to, &cfg),
    }
}
