//! Random field values for the log templates.
//!
//! Everything draws from the caller's `Rng`, so a seeded generator gives
//! reproducible lines.

use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 7] = [
    ("GET", 60),
    ("POST", 20),
    ("PUT", 8),
    ("DELETE", 5),
    ("PATCH", 5),
    ("HEAD", 1),
    ("OPTIONS", 1),
];
const STATUS: [(u16, u8); 14] = [
    (200, 50),
    (201, 10),
    (204, 5),
    (301, 5),
    (302, 5),
    (304, 10),
    (400, 10),
    (401, 10),
    (403, 5),
    (404, 20),
    (405, 2),
    (500, 5),
    (502, 2),
    (503, 3),
];
const APACHE_LEVELS: [&str; 8] = [
    "emerg", "alert", "crit", "error", "warn", "notice", "info", "debug",
];
const HTTP_VERSIONS: [&str; 3] = ["HTTP/1.0", "HTTP/1.1", "HTTP/2.0"];
const TLDS: [&str; 8] = ["com", "net", "org", "io", "biz", "info", "name", "dev"];

const LAST_NAMES: [&str; 24] = [
    "Abbott", "Bailey", "Carroll", "Dietrich", "Ebert", "Fisher", "Gleason", "Hansen", "Jacobs",
    "Kuhn", "Larson", "Mann", "Nolan", "Okuneva", "Pollich", "Quigley", "Reilly", "Schmidt", "Torp",
    "Upton", "Veum", "Wisoky", "Yost", "Zulauf",
];

const ADJECTIVES: [&str; 20] = [
    "auxiliary",
    "primary",
    "back-end",
    "digital",
    "open-source",
    "virtual",
    "cross-platform",
    "redundant",
    "online",
    "haptic",
    "multi-byte",
    "bluetooth",
    "wireless",
    "1080p",
    "neural",
    "optical",
    "solid state",
    "mobile",
    "global",
    "dynamic",
];
const NOUNS: [&str; 20] = [
    "driver",
    "protocol",
    "bandwidth",
    "panel",
    "microchip",
    "program",
    "port",
    "card",
    "array",
    "interface",
    "system",
    "sensor",
    "firewall",
    "hard drive",
    "pixel",
    "alarm",
    "feed",
    "monitor",
    "application",
    "transmitter",
];
const VERBS: [&str; 12] = [
    "back up",
    "bypass",
    "hack",
    "override",
    "compress",
    "copy",
    "navigate",
    "index",
    "connect",
    "generate",
    "quantify",
    "calculate",
];
const ING_VERBS: [&str; 12] = [
    "backing up",
    "bypassing",
    "hacking",
    "overriding",
    "compressing",
    "copying",
    "navigating",
    "indexing",
    "connecting",
    "generating",
    "quantifying",
    "calculating",
];
const ABBREVIATIONS: [&str; 16] = [
    "TCP", "HTTP", "SDD", "RAM", "GB", "CSS", "SSL", "AGP", "SQL", "FTP", "PCI", "AI", "ADP", "RSS",
    "XML", "EXE",
];
const PHRASES: [&str; 8] = [
    "If we {verb} the {noun}, we can get to the {abbreviation} {noun} through the {adjective} {abbreviation} {noun}!",
    "We need to {verb} the {adjective} {abbreviation} {noun}!",
    "Try to {verb} the {abbreviation} {noun}, maybe it will {verb} the {adjective} {noun}!",
    "You can't {verb} the {noun} without {ing_verb} the {adjective} {abbreviation} {noun}!",
    "Use the {adjective} {abbreviation} {noun}, then you can {verb} the {adjective} {noun}!",
    "The {abbreviation} {noun} is down, {verb} the {adjective} {noun} so we can {verb} the {abbreviation} {noun}!",
    "{ing_verb} the {noun} won't do anything, we need to {verb} the {adjective} {abbreviation} {noun}!",
    "I'll {verb} the {adjective} {abbreviation} {noun}, that should {noun} the {abbreviation} {noun}!",
];

const WORDS: [&str; 24] = [
    "core", "proxy", "ssl", "auth", "cache", "mpm", "rewrite", "headers", "session", "deflate",
    "status", "alias", "mime", "log", "cgi", "dir", "env", "expires", "filter", "include",
    "setenvif", "socache", "unique", "vhost",
];
const BUZZWORDS: [&str; 24] = [
    "synergize",
    "leverage",
    "e-enable",
    "integrate",
    "streamline",
    "incentivize",
    "monetize",
    "aggregate",
    "envisioneer",
    "orchestrate",
    "disintermediate",
    "harness",
    "facilitate",
    "brand",
    "transition",
    "scale",
    "architect",
    "deploy",
    "engage",
    "empower",
    "utilize",
    "optimize",
    "visualize",
    "reinvent",
];
const BS_NOUNS: [&str; 20] = [
    "paradigms",
    "markets",
    "partnerships",
    "infrastructures",
    "platforms",
    "initiatives",
    "channels",
    "eyeballs",
    "communities",
    "solutions",
    "action-items",
    "portals",
    "niches",
    "technologies",
    "content",
    "supply-chains",
    "convergence",
    "relationships",
    "architectures",
    "interfaces",
];
const DOMAIN_WORDS: [&str; 20] = [
    "central",
    "dynamic",
    "forward",
    "global",
    "human",
    "internal",
    "legacy",
    "national",
    "principal",
    "regional",
    "senior",
    "chief",
    "direct",
    "district",
    "future",
    "product",
    "corporate",
    "customer",
    "investor",
    "lead",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, table: &[&'a str]) -> &'a str {
    table.choose(rng).copied().unwrap_or_default()
}

pub fn ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    let [a, b, c, d]: [u8; 4] = rng.random();
    format!("{a}.{b}.{c}.{d}")
}

pub fn http_method<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    METHODS
        .choose_weighted(rng, |(_, w)| *w)
        .map_or(METHODS[0].0, |(m, _)| *m)
}

pub fn status_code<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    STATUS
        .choose_weighted(rng, |(_, w)| *w)
        .map_or(STATUS[0].0, |(s, _)| *s)
}

pub fn apache_level<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, &APACHE_LEVELS)
}

pub fn http_version<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, &HTTP_VERSIONS)
}

/// Last name followed by four digits, e.g. `Hansen4821`.
pub fn username<R: Rng + ?Sized>(rng: &mut R) -> String {
    let name = pick(rng, &LAST_NAMES);
    format!("{name}{:04}", rng.random_range(0..10_000))
}

/// Either `-` or a lower-cased username, as seen in the access log auth column.
pub fn auth_user_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    if rng.random_bool(0.5) {
        "-".to_string()
    } else {
        username(rng).to_lowercase()
    }
}

pub fn word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, &WORDS)
}

pub fn domain_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}.{}",
        pick(rng, &DOMAIN_WORDS),
        pick(rng, &BS_NOUNS).replace('-', ""),
        pick(rng, &TLDS)
    )
}

/// One to four lower-case path segments.
pub fn resource_uri<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut uri = String::new();
    for _ in 0..rng.random_range(1..=4) {
        uri.push('/');
        if rng.random_bool(0.5) {
            uri.push_str(pick(rng, &BUZZWORDS));
        } else {
            uri.push_str(pick(rng, &BS_NOUNS));
        }
    }
    uri
}

pub fn url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let scheme = pick(rng, &["http", "https"]);
    let domain = domain_name(rng);
    let path = resource_uri(rng);
    format!("{scheme}://www.{domain}{path}")
}

pub fn user_agent<R: Rng + ?Sized>(rng: &mut R) -> String {
    let platform = pick(
        rng,
        &[
            "Windows NT 10.0; Win64; x64",
            "Macintosh; Intel Mac OS X 10_15_7",
            "X11; Linux x86_64",
            "iPhone; CPU iPhone OS 17_4 like Mac OS X",
            "Linux; Android 14; Pixel 8",
        ],
    );
    match rng.random_range(0..4) {
        0 => format!(
            "Mozilla/5.0 ({platform}; rv:{v}.0) Gecko/20100101 Firefox/{v}.0",
            v = rng.random_range(90..130)
        ),
        1 => format!(
            "Mozilla/5.0 ({platform}) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{}.{} Safari/605.1.15",
            rng.random_range(13..18),
            rng.random_range(0..6)
        ),
        2 => format!(
            "Mozilla/5.0 ({platform}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{v}.0.{b}.0 Safari/537.36 Edg/{v}.0.{b}.0",
            v = rng.random_range(100..130),
            b = rng.random_range(1000..7000)
        ),
        _ => format!(
            "Mozilla/5.0 ({platform}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.{}.{} Safari/537.36",
            rng.random_range(100..130),
            rng.random_range(1000..7000),
            rng.random_range(0..200)
        ),
    }
}

/// Technobabble along the lines of "We need to hack the neural SQL firewall!".
pub fn hacker_phrase<R: Rng + ?Sized>(rng: &mut R) -> String {
    let template = pick(rng, &PHRASES);
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let value = match &rest[start + 1..start + len] {
            "verb" => pick(rng, &VERBS),
            "ing_verb" => pick(rng, &ING_VERBS),
            "noun" => pick(rng, &NOUNS),
            "adjective" => pick(rng, &ADJECTIVES),
            "abbreviation" => pick(rng, &ABBREVIATIONS),
            _ => "",
        };
        if out.is_empty() {
            let mut chars = value.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push_str(value);
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}
