//! Bot actor: a background task that answers "your turn" signals with a
//! uniformly random free cell.

use super::{SessionEvent, SessionRng};
use clicktoe_rules::{Cell, CellSet, Move, Participant};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// A "your turn" signal for the bot.
///
/// Carries the free cells at signaling time; the bot picks among exactly
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotTurn {
    /// Round the move is for.
    pub round: u64,
    /// Cells free when the signal was sent.
    pub free: CellSet,
}

/// Picks a free cell uniformly at random.
pub fn pick_cell(free: CellSet, rng: &mut SessionRng) -> Option<Cell> {
    let cells = free.to_vec();
    rng.choose(&cells).copied()
}

/// A turn in flight. The permit is released once the bot has decided.
type PendingTurn = (BotTurn, OwnedSemaphorePermit);

struct BotActor {
    turns: mpsc::Receiver<PendingTurn>,
    events: mpsc::UnboundedSender<SessionEvent>,
    rng: Arc<Mutex<SessionRng>>,
    delay: Duration,
}

impl BotActor {
    #[instrument(skip_all, fields(delay_ms = self.delay.as_millis() as u64))]
    async fn run(mut self) {
        info!("Bot actor listening");
        while let Some((turn, permit)) = self.turns.recv().await {
            debug!(round = turn.round, free = turn.free.len(), "Bot signaled");
            tokio::time::sleep(self.delay).await;

            let cell = {
                let mut rng = self.rng.lock().await;
                pick_cell(turn.free, &mut rng)
            };
            drop(permit);
            let Some(cell) = cell else {
                warn!(round = turn.round, "Signaled with no free cells, bot stopping");
                return;
            };

            info!(round = turn.round, %cell, "Bot chose cell");
            let mv = Move::new(Participant::Bot, cell, turn.round);
            if self.events.send(SessionEvent::BotMove(mv)).is_err() {
                debug!("Session gone, bot stopping");
                return;
            }
        }
        debug!("Turn channel closed, bot stopping");
    }
}

/// Owner's end of a running bot actor. Dropping it aborts the task.
///
/// At most one turn is outstanding at a time: from [`signal`](Self::signal)
/// until the actor has picked its cell, further signals are refused.
#[derive(Debug)]
pub struct BotHandle {
    turns: mpsc::Sender<PendingTurn>,
    outstanding: Arc<Semaphore>,
    task: JoinHandle<()>,
}

impl BotHandle {
    /// Spawns a bot actor on the current tokio runtime.
    ///
    /// The turn channel holds a single pending signal.
    pub fn spawn(
        delay: Duration,
        rng: Arc<Mutex<SessionRng>>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        let (turns_tx, turns_rx) = mpsc::channel(1);
        let actor = BotActor {
            turns: turns_rx,
            events,
            rng,
            delay,
        };
        Self {
            turns: turns_tx,
            outstanding: Arc::new(Semaphore::new(1)),
            task: tokio::spawn(actor.run()),
        }
    }

    /// Hands the turn to the bot. Returns `false` if the signal was dropped.
    #[instrument(skip(self))]
    pub fn signal(&self, turn: BotTurn) -> bool {
        let Ok(permit) = Arc::clone(&self.outstanding).try_acquire_owned() else {
            error!("Bot already holds a pending turn");
            return false;
        };
        match self.turns.try_send((turn, permit)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                error!("Bot already holds a pending turn");
                false
            }
            Err(TrySendError::Closed(_)) => {
                warn!("Bot actor has stopped");
                false
            }
        }
    }

    /// Checks whether the actor's loop has ended.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for BotHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
