//! Player commands decoded from key presses.

use crate::Position;

/// Something a player asked the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Place(Position),
    /// Clear the board; X moves first.
    Restart,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Decodes a key: `r` restarts, `q` quits, `1`-`9` place on the keypad
    /// layout. Any other key is ignored.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'r' | 'R' => Some(Command::Restart),
            'q' | 'Q' => Some(Command::Quit),
            c => Position::from_digit(c).map(Command::Place),
        }
    }
}
