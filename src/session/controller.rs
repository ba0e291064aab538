//! Session controller: the single place where game state changes.
//!
//! Clicks, bot moves and resizes all arrive as [`SessionEvent`]s and are
//! applied one at a time by [`Session::handle`]. The controller keeps the
//! [`RegionMap`] in step with the engine so the renderer never has to look
//! at game state.

use super::{BotHandle, BotTurn, SessionError, SessionRng};
use crate::config::Settings;
use crate::tui::{Region, RegionId, RegionMap, Tone, layout};
use clicktoe_rules::{Cell, Move, Outcome, Participant, Symbol, Turn, TurnEngine};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Left click on a clickable region.
    Click(RegionId),
    /// Terminal resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// Move chosen by the bot actor.
    BotMove(Move),
    /// Quit requested from the keyboard.
    Quit,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Shut down cleanly.
    Quit,
}

/// One player's game against the bot, across any number of rounds.
#[derive(Debug)]
pub struct Session {
    engine: TurnEngine,
    regions: RegionMap,
    bot: BotHandle,
    rng: Arc<Mutex<SessionRng>>,
    bot_delay: Duration,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
}

impl Session {
    /// Creates a session for a terminal of the given size and spawns its bot.
    ///
    /// Must be called inside a tokio runtime.
    #[instrument(skip(settings), fields(bot_delay_ms = settings.bot_delay_ms()))]
    pub fn new(settings: &Settings, width: u16, height: u16) -> Self {
        let rng = SessionRng::from_seed(*settings.seed());
        info!(seed = rng.seed(), "Session random source ready");
        let rng = Arc::new(Mutex::new(rng));

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let bot_delay = settings.bot_delay();
        let bot = BotHandle::spawn(bot_delay, Arc::clone(&rng), events_tx.clone());

        let mut regions = RegionMap::new(width, height);
        regions.set(
            RegionId::Close,
            Region::new(layout::close())
                .with_text("X", Tone::Alert)
                .with_clickable(true),
        );

        let mut session = Self {
            engine: TurnEngine::new(),
            regions,
            bot,
            rng,
            bot_delay,
            events_tx,
            events_rx,
        };
        session.arm_round();
        session
    }

    /// The turn engine.
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// The regions to draw.
    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    /// Takes a pending bot event without waiting.
    pub fn try_next_event(&mut self) -> Option<SessionEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Waits for the next bot event.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events_rx.recv().await
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the board rejects a validated move or
    /// the bot refuses a turn it should be free to take.
    #[instrument(skip(self), fields(round = self.engine.round()))]
    pub fn handle(&mut self, event: SessionEvent) -> Result<Control, SessionError> {
        match event {
            SessionEvent::Quit => {
                info!("Quit requested");
                return Ok(Control::Quit);
            }
            SessionEvent::Resize { width, height } => self.resize(width, height),
            SessionEvent::BotMove(mv) => self.play(mv)?,
            SessionEvent::Click(id) if !self.regions.is_clickable(id) => {
                debug!(?id, "Click on inert region");
            }
            SessionEvent::Click(RegionId::Close) => {
                info!("Close clicked");
                return Ok(Control::Quit);
            }
            SessionEvent::Click(RegionId::ChooseBot) => self.choose_first(Participant::Bot)?,
            SessionEvent::Click(RegionId::ChooseHuman) => self.choose_first(Participant::Human)?,
            SessionEvent::Click(RegionId::Cell(cell)) => {
                let mv = Move::new(Participant::Human, cell, self.engine.round());
                self.play(mv)?;
            }
            SessionEvent::Click(RegionId::Winner | RegionId::Reset) => self.reset(),
            SessionEvent::Click(RegionId::Status | RegionId::WhoFirst) => {}
        }
        Ok(Control::Continue)
    }

    fn choose_first(&mut self, who: Participant) -> Result<(), SessionError> {
        let first = match self.engine.choose_first(who) {
            Ok(first) => first,
            Err(rejection) => {
                debug!(%rejection, "First-mover click ignored");
                return Ok(());
            }
        };
        self.regions.set_clickable(RegionId::ChooseBot, false);
        self.regions.set_clickable(RegionId::ChooseHuman, false);
        self.regions
            .set_title(RegionId::WhoFirst, format!("{} first", first));
        self.hand_turn_to(first)
    }

    fn hand_turn_to(&mut self, next: Participant) -> Result<(), SessionError> {
        let symbol = self.engine.active();
        match next {
            Participant::Human => self.set_status(format!("Your turn ({})", symbol)),
            Participant::Bot => {
                self.set_status(format!("Bot is thinking ({})", symbol));
                let turn = BotTurn {
                    round: self.engine.round(),
                    free: self.engine.board().free(),
                };
                if !self.bot.signal(turn) {
                    error!(round = turn.round, "Bot turn refused");
                    self.set_status("Bot is not responding".to_string());
                    return Err(SessionError::new(format!(
                        "Bot refused its turn in round {}",
                        turn.round
                    )));
                }
            }
        }
        Ok(())
    }

    fn play(&mut self, mv: Move) -> Result<(), SessionError> {
        match self.engine.submit(mv)? {
            Turn::Ignored(rejection) => {
                debug!(%mv, %rejection, "Move ignored");
            }
            Turn::Next { placed, next } => {
                self.mark(mv, placed);
                self.hand_turn_to(next)?;
            }
            Turn::Over { placed, outcome } => {
                self.mark(mv, placed);
                self.announce(outcome);
            }
        }
        Ok(())
    }

    fn mark(&mut self, mv: Move, symbol: Symbol) {
        self.regions.set(
            RegionId::Cell(mv.cell),
            Region::new(layout::cell(mv.cell))
                .with_title(mv.participant.to_string())
                .with_text(symbol.to_string(), Tone::Mark(symbol)),
        );
    }

    #[instrument(skip(self))]
    fn announce(&mut self, outcome: Outcome) {
        for cell in Cell::ALL {
            self.regions.set_clickable(RegionId::Cell(cell), false);
        }
        match outcome {
            Outcome::Winner { symbol, .. } => {
                self.regions.set(
                    RegionId::Winner,
                    Region::new(layout::winner())
                        .with_text("WINNER: ", Tone::Accent)
                        .with_text(symbol.to_string(), Tone::Alert)
                        .with_text(" Try again?", Tone::Accent)
                        .with_clickable(true),
                );
            }
            Outcome::Draw => {
                let (width, height) = self.regions.size();
                self.regions.set(
                    RegionId::Reset,
                    Region::new(layout::reset_prompt(width, height))
                        .with_text("Click me for resetting!", Tone::Accent)
                        .with_clickable(true),
                );
            }
        }
        self.set_status(outcome.to_string());
    }

    fn reset(&mut self) {
        self.engine.reset();
        if self.bot.is_finished() {
            warn!("Bot actor had stopped, re-arming");
        }
        // Replacing the handle aborts the old actor along with any delay it
        // is sleeping through.
        self.bot = BotHandle::spawn(self.bot_delay, Arc::clone(&self.rng), self.events_tx.clone());
        self.regions.clear(RegionId::Winner);
        self.regions.clear(RegionId::Reset);
        self.arm_round();
    }

    fn arm_round(&mut self) {
        for cell in Cell::ALL {
            self.regions.set(
                RegionId::Cell(cell),
                Region::new(layout::cell(cell))
                    .with_text(cell.to_string(), Tone::Muted)
                    .with_clickable(true),
            );
        }
        self.regions.set(
            RegionId::WhoFirst,
            Region::new(layout::who_first()).with_title("Who first?"),
        );
        self.regions.set(
            RegionId::ChooseBot,
            Region::new(layout::choose_bot())
                .with_text("BOT", Tone::Accent)
                .with_clickable(true),
        );
        self.regions.set(
            RegionId::ChooseHuman,
            Region::new(layout::choose_human())
                .with_text("YOU", Tone::Accent)
                .with_clickable(true),
        );
        self.set_status("Pick who moves first".to_string());
        debug!(round = self.engine.round(), "Round armed");
    }

    fn set_status(&mut self, text: String) {
        self.regions.set(
            RegionId::Status,
            Region::new(layout::status())
                .with_title(format!("Round {}", self.engine.round()))
                .with_text(text, Tone::Plain),
        );
    }

    fn resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized");
        self.regions.resize(width, height);
        self.regions
            .set_rect(RegionId::Reset, layout::reset_prompt(width, height));
    }
}
