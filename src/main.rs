use clap::Parser;

use clipjpg::cli::Cli;
use clipjpg::output;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Detected once; immutable for the rest of the run.
    let env = cj_platform::environment::detect();

    if let Err(err) = clipjpg::execute(&cli, env) {
        eprintln!("{}", output::render_error(&err));
        std::process::exit(1);
    }
}
