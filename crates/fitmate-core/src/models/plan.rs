//! Plan model definition and item-list parsing.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Textual id used in item lists to mark a one-minute break.
pub const BREAK_TOKEN: &str = "-1";

/// A single reference inside a plan's item list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum PlanItemRef {
    /// Reference to a stored exercise
    Exercise(u64),
    /// A fixed-length rest step
    Break,
    /// Reference to another plan whose items are spliced in place
    NestedPlan(u64),
}

impl FromStr for PlanItemRef {
    type Err = String;

    /// Parses one token of a stored item list.
    ///
    /// Accepted forms are a bare non-negative integer or `E<int>` for an
    /// exercise, `-1` for a break and `P<int>` for a nested plan.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token == BREAK_TOKEN {
            return Ok(PlanItemRef::Break);
        }

        let parse_id = |digits: &str| {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("Invalid plan item: '{token}'"));
            }
            digits
                .parse::<u64>()
                .map_err(|_| format!("Invalid plan item: '{token}'"))
        };

        if let Some(rest) = token.strip_prefix('P') {
            parse_id(rest).map(PlanItemRef::NestedPlan)
        } else if let Some(rest) = token.strip_prefix('E') {
            parse_id(rest).map(PlanItemRef::Exercise)
        } else {
            parse_id(token).map(PlanItemRef::Exercise)
        }
    }
}

impl fmt::Display for PlanItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanItemRef::Exercise(id) => write!(f, "{id}"),
            PlanItemRef::Break => f.write_str(BREAK_TOKEN),
            PlanItemRef::NestedPlan(id) => write!(f, "P{id}"),
        }
    }
}

impl PlanItemRef {
    /// Join references into the comma-separated form stored per plan.
    pub fn join(items: &[PlanItemRef]) -> String {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A named training plan as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Display name, unique across the catalog
    pub name: String,

    /// Raw comma-separated item list
    pub item_list: String,
}

impl Plan {
    /// Parse the stored item list, left to right.
    ///
    /// Each element is either a parsed reference or the raw token that
    /// failed to parse. A blank list has no items.
    pub fn items(&self) -> impl Iterator<Item = Result<PlanItemRef, &str>> + '_ {
        let list = self.item_list.trim();
        let tokens = if list.is_empty() {
            None
        } else {
            Some(list.split(','))
        };

        tokens
            .into_iter()
            .flatten()
            .map(|token| token.parse::<PlanItemRef>().map_err(|_| token.trim()))
    }
}
