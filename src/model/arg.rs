use clap::Parser;

/// Gate that requires `Authorization: ApiKey <credential>` on /v1 routes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,
}
