//! Single-writer game session coordination and scheduled bot moves.
//!
//! One authoritative `GameState` at a time, mutated by one logical move at a
//! time under a single lock. Scheduled bot actions are keyed to the session
//! id they were computed for; a wake-up whose session is gone, replaced, or
//! no longer on that seat's turn drops silently instead of corrupting a
//! state it was never meant for.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};
use ulid::Ulid;

use crate::ai::{BotError, BotPlayer, HeuristicPlayer};
use crate::domain::apply::apply_move;
use crate::domain::cards_types::Card;
use crate::domain::dealing::dealt_state;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::{GameState, Move, Seat};
use crate::domain::tricks::legal_moves;
use crate::errors::domain::DomainError;

pub type SessionId = Ulid;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no active game session")]
    NoSession,
    /// The action was computed for a session that is gone or has moved on.
    #[error("stale action: session or turn no longer matches")]
    Stale,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Bot(#[from] BotError),
}

struct GameSession {
    id: SessionId,
    state: GameState,
}

pub struct SessionManager {
    session: Mutex<Option<GameSession>>,
    bot: Box<dyn BotPlayer>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self::with_bot(Box::new(HeuristicPlayer::new()))
    }

    pub fn with_bot(bot: Box<dyn BotPlayer>) -> Self {
        Self {
            session: Mutex::new(None),
            bot,
        }
    }

    /// Start a new game, unconditionally discarding any current session at
    /// any phase. Pending scheduled bot moves for the old session become
    /// stale and will be dropped.
    pub fn new_game(&self, seed: Option<u64>) -> SessionId {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let id = Ulid::new();
        info!(%id, seed, "starting new game");
        *self.session.lock() = Some(GameSession {
            id,
            state: dealt_state(seed),
        });
        id
    }

    /// Apply one move atomically against the current session.
    pub fn submit(&self, id: SessionId, mv: &Move) -> Result<GameState, SessionError> {
        let mut guard = self.session.lock();
        let session = guard.as_mut().ok_or(SessionError::NoSession)?;
        if session.id != id {
            return Err(SessionError::Stale);
        }
        let next = apply_move(&session.state, mv)?;
        session.state = next.clone();
        Ok(next)
    }

    /// Compute and apply a bot move for `seat`, if the session still matches
    /// and it is still that seat's turn.
    pub fn play_bot_move(&self, id: SessionId, seat: Seat) -> Result<GameState, SessionError> {
        let mut guard = self.session.lock();
        let session = guard.as_mut().ok_or(SessionError::NoSession)?;
        if session.id != id || session.state.turn != seat {
            return Err(SessionError::Stale);
        }
        let card = self.bot.choose_play(&session.state, seat)?;
        debug!(%id, seat, %card, "bot plays");
        let next = apply_move(&session.state, &Move::PlayCard(card))?;
        session.state = next.clone();
        Ok(next)
    }

    /// Schedule a bot move after a presentation-pacing delay. Non-blocking:
    /// a human move arriving meanwhile is never held up, and the wake-up
    /// re-checks the session key before acting.
    pub fn schedule_bot_move(self: Arc<Self>, id: SessionId, seat: Seat, delay: Duration) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match self.play_bot_move(id, seat) {
                Ok(_) => debug!(%id, seat, "scheduled bot move applied"),
                Err(SessionError::Stale | SessionError::NoSession) => {
                    debug!(%id, seat, "dropping stale scheduled bot move");
                }
                Err(err) => warn!(%id, seat, %err, "scheduled bot move failed"),
            }
        });
    }

    /// Presentation projection of the current state, if a session exists.
    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.session.lock().as_ref().map(|s| snapshot(&s.state))
    }

    /// Admissible cards for a seat in the current session.
    pub fn legal_moves(&self, seat: Seat) -> Result<Vec<Card>, SessionError> {
        let guard = self.session.lock();
        let session = guard.as_ref().ok_or(SessionError::NoSession)?;
        Ok(legal_moves(&session.state, seat)?)
    }

    /// Clone of the current state, e.g. for persistence.
    pub fn state(&self) -> Option<GameState> {
        self.session.lock().as_ref().map(|s| s.state.clone())
    }
}
