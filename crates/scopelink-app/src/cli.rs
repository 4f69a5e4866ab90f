use clap::Parser;

/// scopelink: mirrors radar session state into a presence service.
#[derive(Parser, Debug)]
#[command(name = "scopelink", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
