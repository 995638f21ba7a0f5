use clap::Parser;

use specs::cli::{Cli, Commands};
use specs::commands::{
    CommandContext, run_check, run_config, run_init, run_list, run_update, run_validate,
    run_version, run_view,
};

fn main() {
    let cli = Cli::parse();
    let ctx = CommandContext::from_cli(&cli);

    let exit_code = match &cli.command {
        Commands::Init(args) => run_init(args, &ctx),
        Commands::Validate(args) => run_validate(args, &ctx),
        Commands::List(args) => run_list(args, &ctx),
        Commands::Check(args) => run_check(args, &ctx),
        Commands::View(args) => run_view(args, &ctx),
        Commands::Config(args) => run_config(args, &ctx),
        Commands::Update(args) => run_update(args, &ctx),
        Commands::Version => run_version(&ctx),
    };

    std::process::exit(exit_code);
}
