use clap::Parser;

use crate::logging::{self, LogArg};

use self::play::PlayArg;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Grid snake in the terminal", long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    log: LogArg,
    #[clap(flatten)]
    play: PlayArg,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(&args.log)?;
    play::run(&args.play)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_parse() {
        assert!(CommandArgs::try_parse_from(["snake"]).is_ok());
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(CommandArgs::try_parse_from(["snake", "--seed", "xyz"]).is_err());
    }

    #[test]
    fn test_rejects_zero_tick() {
        assert!(CommandArgs::try_parse_from(["snake", "--tick-ms", "0"]).is_err());
    }
}
