//! JSON and table rendering for output records.

use crate::record::{EvolutionItem, LabelMap, SbcItem};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

/// A record that can be laid out as one table row.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TableRow for EvolutionItem {
    fn headers() -> &'static [&'static str] {
        &[
            "Name",
            "Price",
            "Requirements",
            "Upgrades",
            "Expiration",
            "Levels",
            "Players",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.price.clone(),
            flatten(&self.requirements),
            flatten(&self.upgrades),
            self.expiration.clone(),
            self.levels.clone(),
            self.players.clone(),
        ]
    }
}

impl TableRow for SbcItem {
    fn headers() -> &'static [&'static str] {
        &[
            "Name",
            "New",
            "Price",
            "Expiration",
            "Challenges",
            "Repeatable",
            "Refreshes",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.new.clone(),
            self.price.clone(),
            self.expiration.clone(),
            self.challenges.clone(),
            self.repeatable.clone(),
            self.refreshes.clone(),
        ]
    }
}

/// Collapse a nested mapping into one display cell, keeping its order.
pub fn flatten(map: &LabelMap) -> String {
    if map.is_empty() {
        return "-".to_string();
    }
    map.iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pretty JSON array; nested mappings stay objects.
pub fn render_json<R: Serialize>(records: &[R]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// One row per record under the record type's headers.
pub fn render_table<R: TableRow>(records: &[R]) -> String {
    build_table(records).to_string()
}

/// The table behind [`render_table`], sized to the terminal when there is one.
pub fn build_table<R: TableRow>(records: &[R]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(R::headers().iter().copied());
    table.add_rows(records.iter().map(R::cells));
    table
}
