use clap::Parser;
use std::path::PathBuf;

/// Serve chart pages for uploaded statistics samples.
#[derive(Debug, Clone, Parser)]
#[command(name = "statsviz", version)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "STATSVIZ_ADDR", default_value = "localhost:8000")]
    pub addr: String,

    /// Directory served under /static.
    #[arg(long, env = "STATSVIZ_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Chart page template, read on every upload.
    #[arg(
        long,
        env = "STATSVIZ_TEMPLATE",
        default_value = "./static/templates/ChartCartesian.html"
    )]
    pub template: PathBuf,
}
