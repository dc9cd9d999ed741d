use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-compat",
    about = "Check bundled third-party dependency licenses for LGPLv3 compatibility",
    version
)]
pub struct Cli {
    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Skip the dependency summary; only print the verdict
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Table,
    Json,
}
