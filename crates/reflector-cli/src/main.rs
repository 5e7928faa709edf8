use clap::Parser;

mod cli;

use cli::args::Cli;
use reflector_core::{exit_codes, Outcome};

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let outcome = match Cli::try_parse() {
        Ok(cli) => cli::run(&cli),
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => Outcome::error_with_log("badInvocation", "invalid invocation", e.to_string()),
    };

    let code = {
        let mut stdout = std::io::stdout().lock();
        let mut stderr = std::io::stderr().lock();
        outcome.emit(&mut stdout, &mut stderr)
    };
    let code = code.unwrap_or_else(|e| {
        eprintln!("fatal: unable to write response: {e}");
        exit_codes::STRUCTURED_ERROR
    });
    std::process::exit(code);
}
