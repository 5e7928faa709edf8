pub mod args;
pub mod handler;
mod input;

use args::Cli;
use reflector_core::{flatten_with_limits, FlattenLimits, Outcome};

/// Turns one invocation into its outcome. Never terminates the process.
pub fn run(cli: &Cli) -> Outcome {
    let raw = match input::read_request(cli.request_arg(), std::io::stdin().lock()) {
        Ok(raw) => raw,
        Err(e) => {
            return Outcome::error_with_log("badRequest", "unable to read request", format!("{e:#}"))
        }
    };

    let limits = FlattenLimits::with_max_depth(cli.max_depth as usize);
    let ar = match flatten_with_limits(&raw, limits) {
        Ok(ar) => ar,
        Err(e) => {
            tracing::debug!(error = %e, "request rejected");
            return Outcome::error_with_log(
                "badRequest",
                "unable to decode request",
                format!("error: unable to create new request: {e}"),
            );
        }
    };

    if cli.list {
        return Outcome::success(ar.to_string());
    }
    handler::route(&ar)
}
