mod commands;
mod terminal;

use commands::{CommandLine, Commands, calc, form};
use rectarea_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        no_color: commands.no_color,
    };

    if cfg.no_color {
        colored::control::set_override(false);
    }

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Calc { base, height } => {
            print::header("rectangle area", cfg.quiet);
            calc::calc(&base, &height, &cfg)
        }
        Commands::Form => {
            print::header("interactive form", cfg.quiet);
            form::form(&cfg)
        }
    }
}
