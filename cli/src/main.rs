mod commands;
mod terminal;

use commands::{CommandLine, Commands, build, demo, preset};
use reportkit_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(&cfg);
    print::banner(&cfg);

    let result = match commands.command {
        Commands::Preset { preset: chosen, inspect } => {
            print::header("running preset", cfg.quiet);
            preset::preset(chosen, inspect, &cfg)
        }
        Commands::Build(args) => {
            print::header("assembling report", cfg.quiet);
            build::build(args, &cfg)
        }
        Commands::Demo => demo::demo(&cfg),
        Commands::Presets => {
            print::header("available presets", cfg.quiet);
            commands::list_presets();
            Ok(())
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
