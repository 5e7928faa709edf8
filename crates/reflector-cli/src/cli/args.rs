use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "reflector",
    version,
    about = "Answers one API-gateway request: flattens the request JSON and reports a body, redirect or error via the exit code"
)]
pub struct Cli {
    /// Deepest object nesting that is flattened; deeper requests are rejected
    #[arg(
        long,
        env = "REFLECTOR_MAX_DEPTH",
        default_value_t = 64,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_depth: u32,

    /// Print the flattened attributes as the response body instead of routing the request
    #[arg(long, env = "REFLECTOR_LIST")]
    pub list: bool,

    /// Arguments passed by the wrapper; the last one is the request JSON (`-` reads stdin)
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    pub fn request_arg(&self) -> &str {
        self.args.last().map(String::as_str).unwrap_or_default()
    }
}
