//! Rule variants.

use serde::{Deserialize, Serialize};

/// Most recent marks each player keeps in the rolling variants.
pub const WINDOW: usize = 3;

/// Which set of placement rules a game uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Variant {
    /// Marks stay until restart; a full board without a line is a draw.
    Classic,
    /// Each player keeps their last three marks on a materialized grid.
    #[default]
    Rolling,
    /// Like `Rolling`, but occupancy is read straight from move history.
    RollingHistory,
}

impl Variant {
    /// Whether placing a fourth mark evicts the player's oldest one.
    pub fn is_rolling(self) -> bool {
        !matches!(self, Variant::Classic)
    }

    /// Title shown to players.
    pub fn title(self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Rolling => "Rolling (3 marks)",
            Variant::RollingHistory => "Rolling (history)",
        }
    }
}
