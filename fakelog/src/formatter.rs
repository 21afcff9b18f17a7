use crate::args::{LogFormat, LogStyle};
use crate::fields;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use rand::{Rng, RngCore};
use serde::Serialize;

// 01/Jun/1995:00:00:59 -0600
const APACHE_TS: &str = "%d/%b/%Y:%H:%M:%S %z";
// Thu Jun 01 00:00:59 1995
const APACHE_ERROR_TS: &str = "%a %b %d %H:%M:%S %Y";
// Jun 01 00:00:59
const RFC3164_TS: &str = "%b %d %H:%M:%S";

type Template = fn(&DateTime<FixedOffset>, &mut dyn RngCore) -> String;

impl LogFormat {
    fn template(self) -> Template {
        match self {
            LogFormat::ApacheCommon | LogFormat::CommonLog => apache_common,
            LogFormat::ApacheCombined => apache_combined,
            LogFormat::ApacheError => apache_error,
            LogFormat::Rfc3164 => rfc3164,
            LogFormat::Rfc5424 => rfc5424,
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    timestamp: i64,
    #[serde(skip_serializing_if = "str::is_empty")]
    message: &'a str,
}

/// Render one log line for `ts`, drawing every other field from `rng`.
pub fn render<R: RngCore>(
    format: LogFormat,
    style: LogStyle,
    ts: &DateTime<FixedOffset>,
    rng: &mut R,
) -> String {
    let line = (format.template())(ts, rng);
    match style {
        LogStyle::Plain => line,
        LogStyle::Json => {
            let envelope = Envelope {
                timestamp: ts.timestamp_millis(),
                message: &line,
            };
            serde_json::to_string(&envelope).unwrap_or(line)
        }
    }
}

// {host} - {auth-user-id} [{datetime}] "{method} {request} {protocol}" {status} {bytes}
fn apache_common(ts: &DateTime<FixedOffset>, rng: &mut dyn RngCore) -> String {
    let host = fields::ipv4(rng);
    let user = fields::auth_user_id(rng);
    let method = fields::http_method(rng);
    let uri = fields::resource_uri(rng);
    let proto = fields::http_version(rng);
    let status = fields::status_code(rng);
    let bytes = rng.random_range(0..=30_000);
    format!(
        "{host} - {user} [{}] \"{method} {uri} {proto}\" {status} {bytes}",
        ts.format(APACHE_TS)
    )
}

// apache_common + "{referrer}" "{agent}"
fn apache_combined(ts: &DateTime<FixedOffset>, rng: &mut dyn RngCore) -> String {
    let host = fields::ipv4(rng);
    let user = fields::auth_user_id(rng);
    let method = fields::http_method(rng);
    let uri = fields::resource_uri(rng);
    let proto = fields::http_version(rng);
    let status = fields::status_code(rng);
    let bytes = rng.random_range(30..=100_000);
    let referrer = fields::url(rng);
    let agent = fields::user_agent(rng);
    format!(
        "{host} - {user} [{}] \"{method} {uri} {proto}\" {status} {bytes} \"{referrer}\" \"{agent}\"",
        ts.format(APACHE_TS)
    )
}

// [{timestamp}] [{module}:{severity}] [pid {pid}:tid {tid}] [client: {client}] {message}
fn apache_error(ts: &DateTime<FixedOffset>, rng: &mut dyn RngCore) -> String {
    let module = fields::word(rng);
    let level = fields::apache_level(rng);
    let pid = rng.random_range(1..=10_000);
    let tid = rng.random_range(1..=10_000);
    let client = fields::ipv4(rng);
    let message = fields::hacker_phrase(rng);
    format!(
        "[{}] [{module}:{level}] [pid {pid}:tid {tid}] [client: {client}] {message}",
        ts.format(APACHE_ERROR_TS)
    )
}

// {timestamp} {hostname} {application}[{pid}]: {message}
fn rfc3164(ts: &DateTime<FixedOffset>, rng: &mut dyn RngCore) -> String {
    let host = fields::username(rng).to_lowercase();
    let app = fields::word(rng);
    let pid = rng.random_range(1..=10_000);
    let message = fields::hacker_phrase(rng);
    let ts = ts.format(RFC3164_TS);
    format!("{ts} {host} {app}[{pid}]: {message}")
}

// {iso-timestamp} {hostname} {application} {pid} ID{message-id} {structured-data} {message}
fn rfc5424(ts: &DateTime<FixedOffset>, rng: &mut dyn RngCore) -> String {
    let host = fields::domain_name(rng);
    let app = fields::word(rng);
    let pid = rng.random_range(1..=10_000);
    let msg_id = rng.random_range(1..=1_000);
    let message = fields::hacker_phrase(rng);
    format!(
        "{} {host} {app} {pid} ID{msg_id} - {message}",
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}
