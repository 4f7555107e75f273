use std::collections::HashMap;

use super::aggregate::DivisionStanding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    pub kind: ColumnKind,
}

impl TableColumn {
    pub fn text(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: ColumnKind::Text,
        }
    }

    pub fn number(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: ColumnKind::Number,
        }
    }

    /// Cell text for `standing`, or `None` if the key is not a standings field.
    pub fn value(&self, standing: &DivisionStanding) -> Option<String> {
        let cell = match self.key.as_str() {
            "division" => standing.division.clone(),
            "played" => standing.played.to_string(),
            "won" => standing.won.to_string(),
            "lost" => standing.lost.to_string(),
            "drawn" => standing.drawn.to_string(),
            "match_points" => standing.match_points.to_string(),
            "game_points" => standing.game_points.to_string(),
            "gold" => standing.gold.to_string(),
            "silver" => standing.silver.to_string(),
            "bronze" => standing.bronze.to_string(),
            "points" => standing.points.to_string(),
            _ => return None,
        };
        Some(cell)
    }
}

pub const DEFAULT_LAYOUT: &str = "default";

const TIE_EVENTS: [&str; 5] = ["badminton", "table-tennis", "squash", "lawn-tennis", "pickleball"];

/// Per-event standings columns, looked up once per query.
#[derive(Debug, Clone)]
pub struct ColumnLayouts {
    layouts: HashMap<String, Vec<TableColumn>>,
    event_layouts: HashMap<String, String>,
}

impl ColumnLayouts {
    pub fn new() -> Self {
        Self {
            layouts: HashMap::new(),
            event_layouts: HashMap::new(),
        }
    }

    pub fn with_layout(mut self, key: &str, columns: Vec<TableColumn>) -> Self {
        self.layouts.insert(key.to_string(), columns);
        self
    }

    pub fn with_event(mut self, event_id: &str, layout_key: &str) -> Self {
        self.event_layouts
            .insert(event_id.to_string(), layout_key.to_string());
        self
    }

    /// Events without their own layout fall back to `default`.
    pub fn layout_key(&self, event_id: &str) -> &str {
        self.event_layouts
            .get(event_id)
            .filter(|key| self.layouts.contains_key(key.as_str()))
            .map(String::as_str)
            .unwrap_or(DEFAULT_LAYOUT)
    }

    pub fn for_event(&self, event_id: &str) -> &[TableColumn] {
        self.layouts
            .get(self.layout_key(event_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for ColumnLayouts {
    fn default() -> Self {
        let league = vec![
            TableColumn::text("division", "Division"),
            TableColumn::number("played", "Played"),
            TableColumn::number("won", "Won"),
            TableColumn::number("lost", "Lost"),
            TableColumn::number("match_points", "Match Points"),
            TableColumn::number("game_points", "Game Points"),
        ];
        let chess = vec![
            TableColumn::text("division", "Division"),
            TableColumn::number("played", "Played"),
            TableColumn::number("won", "Won"),
            TableColumn::number("drawn", "Drawn"),
            TableColumn::number("lost", "Lost"),
            TableColumn {
                key: "match_points".to_string(),
                label: "Points".to_string(),
                kind: ColumnKind::Number,
            },
            TableColumn::number("game_points", "Game Points"),
        ];

        let mut layouts = ColumnLayouts::new()
            .with_layout(DEFAULT_LAYOUT, league.clone())
            .with_layout("tie", league)
            .with_layout("chess", chess)
            .with_event("chess", "chess");
        for event in TIE_EVENTS {
            layouts = layouts.with_event(event, "tie");
        }
        layouts
    }
}
