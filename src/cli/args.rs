use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agcgrid", version, about = "AGC grid format inspector and converter")]
pub struct CliArgs {
    /// Input AGC grid file ("=" reads the grid from standard input)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output AGC grid file ("=" writes to standard output). When absent,
    /// the grid header is printed instead
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only probe whether the input is an AGC grid; exits non-zero if not
    #[arg(long, default_value_t = false)]
    pub probe: bool,

    /// Sub-region to extract, as west/east/south/north
    #[arg(short = 'R', long)]
    pub region: Option<String>,

    /// Print grid info as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
