mod cli;
mod diagnostic;
mod error;
mod output;
mod run;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    let output = output::OutputContext::from_cli(&cli);

    match run::run(&cli, &output) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}
