use crate::args::SinkKind;
use crate::error::{Error, Result};
use crate::formatter::render;
use crate::options::{Limit, Options};
use crate::sink::Sink;
use chrono::{DateTime, FixedOffset, Local, TimeDelta};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::time::sleep;
use tracing::{debug, info};

/// What a finished run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub lines: u64,
    /// Payload bytes, newlines excluded.
    pub bytes: u64,
    /// Files closed by the run, in the order they were completed.
    pub files: Vec<PathBuf>,
}

/// Insert `count` right before the last extension of the file name:
/// `access.log` becomes `access3.log`, `data.tar.gz` becomes `data.tar1.gz`.
pub fn split_file_name(path: &Path, count: u64) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}{count}.{}", ext.to_string_lossy()),
        None => format!("{stem}{count}"),
    };
    path.with_file_name(name)
}

/// The open sink plus everything needed to rotate it.
struct Output {
    kind: SinkKind,
    base: PathBuf,
    path: PathBuf,
    sink: Sink,
    split_count: u64,
    completed: Vec<PathBuf>,
}

impl Output {
    fn open(kind: SinkKind, base: &Path) -> Result<Self> {
        let sink = Sink::open(kind, base).map_err(|source| Error::Open {
            path: base.to_path_buf(),
            source,
        })?;
        Ok(Self {
            kind,
            base: base.to_path_buf(),
            path: base.to_path_buf(),
            sink,
            split_count: 1,
            completed: Vec::new(),
        })
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.sink.write_all(line.as_bytes())?;
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Close the current file, announce it, and continue in the next split file.
    fn rotate(self) -> Result<Self> {
        let Output {
            kind,
            base,
            path,
            sink,
            split_count,
            mut completed,
        } = self;
        close(sink, &path, &mut completed)?;

        let next = split_file_name(&base, split_count);
        debug!(file = %next.display(), "rotating output");
        let sink = Sink::open(kind, &next).map_err(|source| Error::Open {
            path: next.clone(),
            source,
        })?;
        Ok(Self {
            kind,
            base,
            path: next,
            sink,
            split_count: split_count + 1,
            completed,
        })
    }

    fn finish(self) -> Result<Vec<PathBuf>> {
        let mut completed = self.completed;
        if self.kind == SinkKind::Stdout {
            self.sink
                .close()
                .map_err(|source| Error::Close { path: self.path, source })?;
        } else {
            close(self.sink, &self.path, &mut completed)?;
        }
        Ok(completed)
    }
}

fn close(sink: Sink, path: &Path, completed: &mut Vec<PathBuf>) -> Result<()> {
    sink.close().map_err(|source| Error::Close {
        path: path.to_path_buf(),
        source,
    })?;
    println!("{} is created.", path.display());
    completed.push(path.to_path_buf());
    Ok(())
}

/// Drives formatting, pacing, writing and rotation for one run.
pub struct Generator {
    options: Options,
    rng: StdRng,
    created: DateTime<FixedOffset>,
    step: TimeDelta,
}

impl Generator {
    pub fn new(options: Options) -> Result<Self> {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let step = TimeDelta::from_std(options.sleep).map_err(|_| {
            Error::InvalidOption(format!("--sleep {:?} is too large", options.sleep))
        })?;
        Ok(Self {
            options,
            rng,
            created: Local::now().fixed_offset(),
            step,
        })
    }

    /// Use `created` for the first line instead of the current time.
    pub fn starting_at(mut self, created: DateTime<FixedOffset>) -> Self {
        self.created = created;
        self
    }

    fn next_line(&mut self) -> String {
        let Options { format, style, .. } = self.options;
        render(format, style, &self.created, &mut self.rng)
    }

    fn advance(&mut self) -> Result<()> {
        self.created = self
            .created
            .checked_add_signed(self.step)
            .ok_or(Error::TimestampOverflow(self.created))?;
        Ok(())
    }

    fn should_rotate(&self, index: u64, bytes: u64, split_count: u64) -> bool {
        let split_by = self.options.split_by;
        if self.options.sink == SinkKind::Stdout || split_by == 0 {
            return false;
        }
        match self.options.limit {
            Limit::Forever => false,
            Limit::Bytes(_) => bytes > split_by.saturating_mul(split_count).saturating_add(1),
            Limit::Lines(_) => index > split_by.saturating_mul(split_count),
        }
    }

    fn done(&self, summary: &Summary) -> bool {
        match self.options.limit {
            Limit::Forever => false,
            Limit::Bytes(limit) => summary.bytes >= limit,
            Limit::Lines(limit) => summary.lines >= limit,
        }
    }

    /// Generate until the configured limit is reached. With [`Limit::Forever`]
    /// this only returns on an error.
    pub async fn run(mut self) -> Result<Summary> {
        info!(
            format = ?self.options.format,
            sink = ?self.options.sink,
            limit = ?self.options.limit,
            "generating logs"
        );
        let mut output = Output::open(self.options.sink, &self.options.output)?;
        let mut summary = Summary::default();

        while !self.done(&summary) {
            if !self.options.delay.is_zero() {
                sleep(self.options.delay).await;
            }
            let line = self.next_line();
            output.write_line(&line)?;
            self.advance()?;

            let index = summary.lines;
            summary.lines += 1;
            summary.bytes += line.len() as u64;

            if self.should_rotate(index, summary.bytes, output.split_count) {
                output = output.rotate()?;
            }
        }

        summary.files = output.finish()?;
        info!(lines = summary.lines, bytes = summary.bytes, "done");
        Ok(summary)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::args::{LogFormat, LogStyle};
    use asserting::prelude::*;
    use chrono::{TimeZone, Utc};
    use flate2::read::GzDecoder;
    use std::fs::File;
    use std::io::{BufRead, BufReader, Read};
    use std::time::Duration;

    fn start() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 7, 25, 23, 59, 0)
            .unwrap()
    }

    fn file_options(dir: &Path, name: &str, limit: Limit, split_by: u64) -> Options {
        Options {
            sink: SinkKind::Log,
            output: dir.join(name),
            split_by,
            seed: Some(42),
            ..Options::new(LogFormat::ApacheCommon, limit)
        }
    }

    async fn run(options: Options) -> Result<Summary> {
        Generator::new(options).unwrap().starting_at(start()).run().await
    }

    fn lines(path: &Path) -> Vec<String> {
        BufReader::new(File::open(path).unwrap())
            .lines()
            .map(|l| l.unwrap())
            .collect()
    }

    #[test]
    fn split_names() {
        assert_that!(split_file_name(Path::new("access.log"), 3))
            .is_equal_to(PathBuf::from("access3.log"));
        assert_that!(split_file_name(Path::new("data.tar.gz"), 1))
            .is_equal_to(PathBuf::from("data.tar1.gz"));
        assert_that!(split_file_name(Path::new("/var/log/output"), 2))
            .is_equal_to(PathBuf::from("/var/log/output2"));
        assert_that!(split_file_name(Path::new("logs/app.log"), 10))
            .is_equal_to(PathBuf::from("logs/app10.log"));
    }

    #[tokio::test]
    async fn line_limit_without_split() {
        let dir = tempfile::tempdir().unwrap();
        let summary = run(file_options(dir.path(), "access.log", Limit::Lines(50), 0))
            .await
            .unwrap();
        assert_that!(summary.lines).is_equal_to(50);
        assert_that!(summary.files.clone())
            .is_equal_to(vec![dir.path().join("access.log")]);
        assert_that!(lines(&dir.path().join("access.log")).len())
            .is_equal_to(50);
    }

    #[tokio::test]
    async fn line_split_follows_strict_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let summary = run(file_options(dir.path(), "access.log", Limit::Lines(25), 10))
            .await
            .unwrap();

        let expected = vec![
            dir.path().join("access.log"),
            dir.path().join("access1.log"),
            dir.path().join("access2.log"),
        ];
        assert_that!(summary.files.clone())
            .is_equal_to(expected.clone());
        let counts: Vec<usize> = expected.iter().map(|p| lines(p).len()).collect();
        assert_that!(counts).is_equal_to(vec![12, 10, 3]);
        assert_that!(dir.path().join("access3.log").exists())
            .is_false();
    }

    #[tokio::test]
    async fn rotation_on_last_line_leaves_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let summary = run(file_options(dir.path(), "access.log", Limit::Lines(12), 10))
            .await
            .unwrap();
        assert_that!(summary.files.len()).is_equal_to(2);
        assert_that!(lines(&dir.path().join("access.log")).len())
            .is_equal_to(12);
        assert_that!(lines(&dir.path().join("access1.log")).len())
            .is_equal_to(0);
    }

    #[tokio::test]
    async fn byte_limit_stops_on_first_line_reaching_it() {
        let dir = tempfile::tempdir().unwrap();
        let summary = run(file_options(dir.path(), "access.log", Limit::Bytes(1000), 0))
            .await
            .unwrap();

        let written = lines(&dir.path().join("access.log"));
        let total: u64 = written.iter().map(|l| l.len() as u64).sum();
        let last = written.last().unwrap().len() as u64;
        assert_that!(total).is_equal_to(summary.bytes);
        assert_that!(total).is_at_least(1000);
        assert_that!(total - last).is_less_than(1000);
    }

    #[tokio::test]
    async fn byte_split_rotates_past_each_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let split_by = 500;
        let summary = run(file_options(dir.path(), "access.log", Limit::Bytes(3000), split_by))
            .await
            .unwrap();
        assert_that!(summary.files.len()).is_at_least(5);

        let mut cumulative = 0;
        for (k, file) in summary.files.iter().enumerate() {
            let written = lines(file);
            cumulative += written.iter().map(|l| l.len() as u64).sum::<u64>();
            if k + 1 < summary.files.len() {
                let threshold = split_by * (k as u64 + 1) + 1;
                let last = written.last().unwrap().len() as u64;
                assert_that!(cumulative).is_greater_than(threshold);
                assert_that!(cumulative - last).is_at_most(threshold);
            }
        }
        assert_that!(cumulative).is_equal_to(summary.bytes);
    }

    #[tokio::test]
    async fn gz_output_matches_plain_output() {
        let dir = tempfile::tempdir().unwrap();
        let plain = file_options(dir.path(), "plain.log", Limit::Lines(200), 0);
        let gz = Options {
            sink: SinkKind::Gz,
            output: dir.path().join("packed.log.gz"),
            ..plain.clone()
        };
        run(plain).await.unwrap();
        run(gz).await.unwrap();

        let mut unpacked = String::new();
        GzDecoder::new(File::open(dir.path().join("packed.log.gz")).unwrap())
            .read_to_string(&mut unpacked)
            .unwrap();
        let plain_path = dir.path().join("plain.log");
        let expected = std::fs::read_to_string(plain_path).unwrap();
        assert_that!(unpacked).is_equal_to(expected);
    }

    #[tokio::test]
    async fn timestamps_advance_by_sleep() {
        let dir = tempfile::tempdir().unwrap();
        let options = Options {
            format: LogFormat::Rfc5424,
            style: LogStyle::Plain,
            sleep: Duration::from_millis(1500),
            ..file_options(dir.path(), "syslog.log", Limit::Lines(3), 0)
        };
        run(options).await.unwrap();

        let stamps: Vec<String> = lines(&dir.path().join("syslog.log"))
            .iter()
            .map(|l| l.split(' ').next().unwrap().to_string())
            .collect();
        assert_that!(stamps).is_equal_to(vec![
            "2025-07-25T23:59:00.000Z".to_string(),
            "2025-07-25T23:59:01.500Z".to_string(),
            "2025-07-25T23:59:03.000Z".to_string(),
        ]);
    }

    #[tokio::test]
    async fn failed_rotation_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("access1.log")).unwrap();
        let options = file_options(dir.path(), "access.log", Limit::Lines(5), 1);
        match run(options).await {
            Err(Error::Open { path, .. }) => {
                assert_that!(path)
                    .is_equal_to(dir.path().join("access1.log"));
            }
            other => panic!("expected an open error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn timestamp_overflow_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = Options {
            sleep: Duration::from_secs(1),
            ..file_options(dir.path(), "late.log", Limit::Lines(3), 0)
        };
        let last = DateTime::<Utc>::MAX_UTC.fixed_offset();
        let generator = Generator::new(options).unwrap().starting_at(last);
        match generator.run().await {
            Err(Error::TimestampOverflow(at)) => {
                assert_that!(at).is_equal_to(last);
            }
            other => panic!("expected a timestamp overflow, got {other:?}"),
        }
        assert_that!(lines(&dir.path().join("late.log")).len()).is_equal_to(1);
    }

    #[tokio::test]
    async fn forever_keeps_writing_at_the_configured_pace() {
        let dir = tempfile::tempdir().unwrap();
        let options = Options {
            delay: Duration::from_millis(20),
            ..file_options(dir.path(), "forever.log", Limit::Forever, 10)
        };
        let outcome = tokio::time::timeout(Duration::from_millis(300), run(options)).await;
        assert_that!(outcome.is_err()).is_true();

        let written = lines(&dir.path().join("forever.log"));
        assert_that!(written.len()).is_at_least(3);
        assert_that!(written.len()).is_at_most(15);
        assert_that!(dir.path().join("forever1.log").exists())
            .is_false();
    }
}
