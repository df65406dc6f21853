//! Regex extractors for the evolutions page payload.
//!
//! The page ships its data as dehydrated JS object literals rather than JSON,
//! so there is nothing to hand a real parser. Instead the document is cut into
//! one block per evolution and each field is pulled out of its block by an
//! independent pattern. A field whose pattern misses falls back to a fixed
//! default; a miss in one extractor never affects another.
//!
//! All windows below are measured in characters and never split a code point.

use crate::record::{thousands, EvolutionItem, LabelMap};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// Upper bound on the final block when no later marker terminates it.
pub const MAX_BLOCK_CHARS: usize = 20_000;
/// Span scanned after the `requirements:` opener.
pub const REQUIREMENTS_WINDOW_CHARS: usize = 5_000;
/// Span scanned after the last `totalUpgradesText:` opener.
pub const UPGRADES_WINDOW_CHARS: usize = 3_000;

const EXPIRATION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Payload key to display label, in output order.
const REQUIREMENT_FIELDS: [(&str, &str); 4] = [
    ("maxOverall", "Max Overall"),
    ("minOverall", "Min Overall"),
    ("maxPlaystyles", "Max Playstyles"),
    ("maxPlaystylesPlus", "Max Playstyles+"),
];

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).expect(concat!(stringify!($name), " is valid")))
        }
    };
}

static_regex!(name_re, r#"name:"([^"]+)""#);
static_regex!(coins_re, r"coinsCost:(\d+)");
static_regex!(points_re, r"pointsCost:(\d+)");
static_regex!(requirements_re, r"requirements:\$R\[\d+\]=\{");
static_regex!(upgrades_re, r"totalUpgradesText:\$R\[\d+\]=\[");
static_regex!(
    upgrade_entry_re,
    r#"label:"([^"]+)",value:"([^"]*)",maxValue:"([^"]*)""#
);
static_regex!(end_time_re, r#"endTime:"([^"]+)""#);
static_regex!(players_re, r"numberOfPlayers:(\d+)");

fn requirement_field_res() -> &'static [(Regex, &'static str)] {
    static RES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RES.get_or_init(|| {
        REQUIREMENT_FIELDS
            .iter()
            .map(|(key, label)| {
                let re = Regex::new(&format!(r"{key}:(\d+)")).expect("requirement regex is valid");
                (re, *label)
            })
            .collect()
    })
}

/// Patterns that embed the game version tag.
///
/// The block opener and the per-level marker both carry `game:"<version>"`,
/// so they are compiled once per scraper rather than statically.
#[derive(Debug, Clone)]
pub struct EvolutionPatterns {
    block_marker: Regex,
    level_marker: Regex,
}

impl EvolutionPatterns {
    pub fn new(game_version: &str) -> Self {
        let game = regex::escape(game_version);
        let block_marker = Regex::new(&format!(
            r#"\{{id:\d+,game:"{game}",eaId:\d+,url:"/evolutions/"#
        ))
        .expect("escaped block marker regex is valid");
        let level_marker = Regex::new(&format!(r#"idx:\d+,game:"{game}",challenges:"#))
            .expect("escaped level marker regex is valid");

        Self {
            block_marker,
            level_marker,
        }
    }

    /// Split `html` into one substring per evolution.
    ///
    /// Each block runs from its marker to the next marker; the last one is
    /// capped at [`MAX_BLOCK_CHARS`].
    pub fn segment<'a>(&self, html: &'a str) -> Vec<&'a str> {
        let starts: Vec<usize> = self.block_marker.find_iter(html).map(|m| m.start()).collect();

        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| match starts.get(i + 1) {
                Some(&next) => &html[start..next],
                None => char_window(html, start, MAX_BLOCK_CHARS),
            })
            .collect()
    }

    /// Number of levels, counted as per-level `challenges:` entries.
    pub fn levels(&self, block: &str) -> String {
        self.level_marker.find_iter(block).count().to_string()
    }

    /// Build the full record for one block.
    pub fn extract(&self, block: &str) -> EvolutionItem {
        EvolutionItem {
            name: extract_name(block),
            price: extract_price(block),
            requirements: extract_requirements(block),
            upgrades: extract_upgrades(block),
            expiration: extract_expiration(block),
            levels: self.levels(block),
            players: extract_players(block),
        }
    }
}

/// First quoted `name:` value, or `"Unknown"`.
pub fn extract_name(block: &str) -> String {
    first_capture(name_re(), block)
        .unwrap_or("Unknown")
        .to_string()
}

/// Coin and point costs composed into a display price.
pub fn extract_price(block: &str) -> String {
    let coins = first_capture(coins_re(), block).and_then(|s| s.parse().ok());
    let points = first_capture(points_re(), block).and_then(|s| s.parse().ok());
    format_price(coins.unwrap_or(0), points.unwrap_or(0))
}

/// `"FREE"` when both costs are zero, else the non-zero parts joined by `" / "`.
pub fn format_price(coins: u64, points: u64) -> String {
    if coins == 0 && points == 0 {
        return "FREE".to_string();
    }

    let mut parts = Vec::with_capacity(2);
    if coins > 0 {
        parts.push(format!("{} Coins", thousands(coins)));
    }
    if points > 0 {
        parts.push(format!("{} Points", thousands(points)));
    }
    parts.join(" / ")
}

/// Requirement thresholds from the first `requirements:` object.
///
/// Only keys actually present in the window are returned, in the fixed
/// label order of `REQUIREMENT_FIELDS`.
pub fn extract_requirements(block: &str) -> LabelMap {
    let mut reqs = LabelMap::new();
    let Some(opener) = requirements_re().find(block) else {
        return reqs;
    };

    let window = char_window(block, opener.start(), REQUIREMENTS_WINDOW_CHARS);
    for (re, label) in requirement_field_res() {
        if let Some(value) = first_capture(re, window) {
            reqs.insert(*label, value);
        }
    }
    reqs
}

/// Stat upgrade ceilings from the last `totalUpgradesText:` array.
///
/// The page embeds several candidate arrays per block; the final one wins.
/// Each label maps to its `maxValue`, falling back to `value`; a label with
/// both empty is dropped. Labels keep page order; a repeated label keeps its
/// first position and takes the later value.
pub fn extract_upgrades(block: &str) -> LabelMap {
    let mut upgrades = LabelMap::new();
    let Some(opener) = upgrades_re().find_iter(block).last() else {
        return upgrades;
    };

    let window = char_window(block, opener.start(), UPGRADES_WINDOW_CHARS);
    for caps in upgrade_entry_re().captures_iter(window) {
        let label = &caps[1];
        let display = match (&caps[3], &caps[2]) {
            (max, _) if !max.is_empty() => max,
            (_, value) if !value.is_empty() => value,
            _ => continue,
        };
        upgrades.insert(label, display);
    }
    upgrades
}

/// `endTime:` reformatted for display, or `"-"` when absent.
pub fn extract_expiration(block: &str) -> String {
    match first_capture(end_time_re(), block) {
        Some(raw) => format_expiration(raw),
        None => "-".to_string(),
    }
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// The time is shown in the timestamp's own offset. Anything that does not
/// parse is returned unchanged.
pub fn format_expiration(raw: &str) -> String {
    let normalized = match raw.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => raw.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return dt.format(EXPIRATION_FORMAT).to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return naive.format(EXPIRATION_FORMAT).to_string();
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return midnight.format(EXPIRATION_FORMAT).to_string();
    }

    raw.to_string()
}

/// `numberOfPlayers:` as written, or `"0"`.
pub fn extract_players(block: &str) -> String {
    first_capture(players_re(), block)
        .unwrap_or("0")
        .to_string()
}

fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// At most `chars` characters of `text` starting at byte offset `start`.
///
/// `start` must lie on a char boundary (regex match offsets always do).
fn char_window(text: &str, start: usize, chars: usize) -> &str {
    let rest = &text[start..];
    match rest.char_indices().nth(chars) {
        Some((end, _)) => &rest[..end],
        None => rest,
    }
}
