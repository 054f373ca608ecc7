use smallvec::SmallVec;

/// Seating order of the players in a game.
/// Keeps track of whose turn it is; [`advance`](Self::advance) passes the
/// turn to the next seat, wrapping around after the last one.
#[derive(Clone, Debug)]
pub struct PlayerRotation<T> {
    players: SmallVec<[T; 2]>,
    cursor: usize,
}

impl<T> PlayerRotation<T> {
    pub fn new(players: impl IntoIterator<Item = T>) -> Self {
        Self {
            players: SmallVec::from_iter(players),
            cursor: 0,
        }
    }

    /// Player currently holding the turn.
    /// Returns `None` only for an empty rotation.
    pub fn current(&self) -> Option<&T> {
        self.players.get(self.cursor)
    }

    /// Pass the turn to the next seat and return the player now holding it.
    pub fn advance(&mut self) -> Option<&T> {
        if self.players.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.players.len();
        self.current()
    }
}
