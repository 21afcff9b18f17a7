use clap::{Parser, ValueEnum};
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "fakelog")]
#[command(version, about = "Generate fake log streams for testing", long_about = None)]
pub struct CliArgs {
    /// Log format
    #[arg(short, long, value_enum, default_value_t = LogFormat::ApacheCommon)]
    format: LogFormat,

    /// Output file path
    #[arg(short, long, default_value = "generated.log")]
    output: String,

    /// Where to write the lines
    #[arg(short = 't', long = "type", value_enum, default_value_t = SinkKind::Stdout)]
    sink: SinkKind,

    /// Number of lines to generate
    #[arg(short, long, default_value_t = 1000)]
    number: u64,

    /// Size of the logs to generate in bytes, overrides --number
    #[arg(short, long, default_value_t = 0)]
    bytes: u64,

    /// Seconds added to the timestamp of each successive line
    #[arg(short, long, default_value_t = 0.0)]
    sleep: f64,

    /// Seconds to wait between lines
    #[arg(short, long, default_value_t = 0.0)]
    delay: f64,

    /// Rotate the output file every N lines, or N bytes with --bytes
    #[arg(short = 'p', long, default_value_t = 0)]
    split_by: u64,

    /// Replace the output file if it already exists
    #[arg(short = 'w', long)]
    overwrite: bool,

    /// Keep generating until killed
    #[arg(short = 'l', long)]
    forever: bool,

    /// Emit raw lines or wrap them in a JSON envelope
    #[arg(short = 'y', long, value_enum, default_value_t = LogStyle::Plain)]
    style: LogStyle,

    /// Seed for the random source, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds to wait before the first line
    #[arg(long, default_value_t = 0.0)]
    start_delay: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum LogFormat {
    ApacheCommon,
    ApacheCombined,
    ApacheError,
    Rfc3164,
    Rfc5424,
    CommonLog,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogStyle {
    Plain,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SinkKind {
    Stdout,
    Log,
    Gz,
}
