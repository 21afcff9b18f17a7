use crate::args::{CliArgs, LogFormat, LogStyle, SinkKind};
use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// What ends the generation loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Limit {
    Forever,
    Bytes(u64),
    Lines(u64),
}

/// Validated run configuration. Built once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct Options {
    pub format: LogFormat,
    pub style: LogStyle,
    pub sink: SinkKind,
    pub output: PathBuf,
    pub limit: Limit,
    pub split_by: u64,
    pub delay: Duration,
    pub sleep: Duration,
    pub seed: Option<u64>,
    pub start_delay: Duration,
}

#[cfg(test)]
impl Options {
    /// Plain run to stdout with every knob at its default.
    pub fn new(format: LogFormat, limit: Limit) -> Self {
        Self {
            format,
            style: LogStyle::Plain,
            sink: SinkKind::Stdout,
            output: PathBuf::from("generated.log"),
            limit,
            split_by: 0,
            delay: Duration::ZERO,
            sleep: Duration::ZERO,
            seed: None,
            start_delay: Duration::ZERO,
        }
    }
}

fn seconds(name: &str, value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value).map_err(|_| {
        Error::InvalidOption(format!(
            "--{name} must be a non-negative number of seconds, got {value}"
        ))
    })
}

impl TryFrom<CliArgs> for Options {
    type Error = Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        let limit = if *args.forever() {
            Limit::Forever
        } else if *args.bytes() > 0 {
            Limit::Bytes(*args.bytes())
        } else if *args.number() > 0 {
            Limit::Lines(*args.number())
        } else {
            return Err(Error::InvalidOption(
                "--number must be positive unless --bytes or --forever is set".into(),
            ));
        };

        let sink = *args.sink();
        let output = PathBuf::from(args.output());
        if sink != SinkKind::Stdout && !*args.overwrite() && output.exists() {
            return Err(Error::OutputExists(output));
        }

        let mut split_by = *args.split_by();
        if sink == SinkKind::Stdout && split_by > 0 {
            warn!("--split-by has no effect when writing to stdout");
            split_by = 0;
        }
        if limit == Limit::Forever && split_by > 0 {
            warn!("--split-by has no effect with --forever");
        }

        Ok(Self {
            format: *args.format(),
            style: *args.style(),
            sink,
            output,
            limit,
            split_by,
            delay: seconds("delay", *args.delay())?,
            sleep: seconds("sleep", *args.sleep())?,
            seed: *args.seed(),
            start_delay: seconds("start-delay", *args.start_delay())?,
        })
    }
}
