//! Game session: the event-driven controller and the bot actor it drives.

mod bot;
mod controller;
mod error;
mod rng;

pub use bot::{BotHandle, BotTurn, pick_cell};
pub use controller::{Control, Session, SessionEvent};
pub use error::SessionError;
pub use rng::SessionRng;
