//! Bounded move history for the rolling variants.
//!
//! Each player owns a [`RollingWindow`]: a fixed-capacity ring buffer of
//! their most recent placements, oldest first. Recording a move into a full
//! window evicts the oldest entry and hands it back so the caller can clear
//! the matching board square.

use crate::variant::WINDOW;
use crate::{Player, Position};
use tracing::{debug, instrument};

/// Ring buffer holding at most [`WINDOW`] positions, oldest first.
#[derive(Debug, Clone, Default)]
pub struct RollingWindow {
    slots: [Option<Position>; WINDOW],
    head: usize,
    len: usize,
}

impl RollingWindow {
    /// Creates an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `pos`, returning the evicted oldest entry if the window was full.
    pub fn push(&mut self, pos: Position) -> Option<Position> {
        if self.len == WINDOW {
            let evicted = self.slots[self.head].replace(pos);
            self.head = (self.head + 1) % WINDOW;
            evicted
        } else {
            self.slots[(self.head + self.len) % WINDOW] = Some(pos);
            self.len += 1;
            None
        }
    }

    /// Number of positions held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next push will evict.
    pub fn is_full(&self) -> bool {
        self.len == WINDOW
    }

    /// Membership test over at most [`WINDOW`] entries.
    pub fn contains(&self, pos: Position) -> bool {
        self.iter().any(|p| p == pos)
    }

    /// The entry that would be evicted next.
    pub fn oldest(&self) -> Option<Position> {
        self.iter().next()
    }

    /// The most recent entry.
    pub fn newest(&self) -> Option<Position> {
        self.iter().last()
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % WINDOW])
    }

    /// Empties the window.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl PartialEq for RollingWindow {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for RollingWindow {}

/// Both players' rolling windows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    x: RollingWindow,
    o: RollingWindow,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The window belonging to `player`.
    pub fn window(&self, player: Player) -> &RollingWindow {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    fn window_mut(&mut self, player: Player) -> &mut RollingWindow {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }

    /// Records a placement, returning the position that fell out of the window.
    #[instrument(skip(self))]
    pub fn record(&mut self, pos: Position, player: Player) -> Option<Position> {
        let evicted = self.window_mut(player).push(pos);
        if let Some(old) = evicted {
            debug!(evicted = %old, "Oldest mark left the window");
        }
        evicted
    }

    /// Whether `pos` is one of `player`'s active marks.
    pub fn contains(&self, pos: Position, player: Player) -> bool {
        self.window(player).contains(pos)
    }

    /// Which player, if any, holds `pos`.
    pub fn owner(&self, pos: Position) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|player| self.contains(pos, *player))
    }

    /// Number of active marks for `player`.
    pub fn len(&self, player: Player) -> usize {
        self.window(player).len()
    }

    /// Most recent mark for `player`.
    pub fn newest(&self, player: Player) -> Option<Position> {
        self.window(player).newest()
    }

    /// Empties both windows.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.x.clear();
        self.o.clear();
    }
}
