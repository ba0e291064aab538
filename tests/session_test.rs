//! Tests for the session controller driving the engine, regions and bot.

use clicktoe::tui::layout;
use clicktoe::{
    Cell, Control, Move, Outcome, Participant, Phase, RegionId, Session, SessionEvent, Settings,
    Symbol,
};
use std::time::Duration;
use tokio::time::timeout;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

/// Session whose bot never answers within a test.
fn scripted_session() -> Session {
    let settings = Settings::default().with_bot_delay_ms(60_000).with_seed(7);
    Session::new(&settings, WIDTH, HEIGHT)
}

/// Session whose bot answers immediately.
fn live_session() -> Session {
    let settings = Settings::default().with_bot_delay_ms(0).with_seed(7);
    Session::new(&settings, WIDTH, HEIGHT)
}

fn click(session: &mut Session, id: RegionId) -> Control {
    session.handle(SessionEvent::Click(id)).unwrap()
}

fn human(session: &mut Session, cell: Cell) {
    click(session, RegionId::Cell(cell));
}

async fn bot_event(session: &mut Session) -> SessionEvent {
    let event = timeout(Duration::from_secs(5), session.next_event())
        .await
        .expect("bot answered in time")
        .expect("event channel open");
    assert!(matches!(event, SessionEvent::BotMove(_)));
    event
}

async fn answer_bot(session: &mut Session) {
    let event = bot_event(session).await;
    session.handle(event).unwrap();
}

/// Plays `cell` for the bot in place of the move it picked itself.
async fn bot(session: &mut Session, cell: Cell) {
    bot_event(session).await;
    let round = session.engine().round();
    session
        .handle(SessionEvent::BotMove(Move::new(Participant::Bot, cell, round)))
        .unwrap();
}

fn region_text(session: &Session, id: RegionId) -> String {
    session.regions().get(id).map(|r| r.text()).unwrap_or_default()
}

#[tokio::test]
async fn test_initial_screen_asks_who_first() {
    let session = scripted_session();
    let regions = session.regions();

    assert_eq!(session.engine().phase(), Phase::AwaitingFirstChoice);
    assert_eq!(
        regions.get(RegionId::WhoFirst).unwrap().title().as_deref(),
        Some("Who first?")
    );
    assert_eq!(region_text(&session, RegionId::ChooseBot), "BOT");
    assert_eq!(region_text(&session, RegionId::ChooseHuman), "YOU");
    for cell in Cell::ALL {
        assert_eq!(region_text(&session, RegionId::Cell(cell)), cell.to_string());
        assert!(regions.is_clickable(RegionId::Cell(cell)));
    }
    assert_eq!(region_text(&session, RegionId::Close), "X");
}

#[tokio::test]
async fn test_cell_clicks_before_choice_are_ignored() {
    let mut session = scripted_session();
    human(&mut session, Cell::Center);
    assert_eq!(session.engine().board().turns(), 0);
    assert_eq!(session.engine().phase(), Phase::AwaitingFirstChoice);
}

#[tokio::test]
async fn test_human_click_claims_cell() {
    let mut session = scripted_session();
    click(&mut session, RegionId::ChooseHuman);
    human(&mut session, Cell::TopLeft);

    let board = session.engine().board();
    assert_eq!(board.symbol_at(Cell::TopLeft), Some(Symbol::X));
    assert_eq!(board.turns(), 1);

    let region = session.regions().get(RegionId::Cell(Cell::TopLeft)).unwrap();
    assert_eq!(region.text(), "X");
    assert_eq!(region.title().as_deref(), Some("YOU"));
    assert!(!region.clickable());
    assert_eq!(session.engine().to_move(), Some(Participant::Bot));
}

#[tokio::test]
async fn test_out_of_turn_and_occupied_clicks_are_noops() {
    let mut session = live_session();
    click(&mut session, RegionId::ChooseHuman);
    human(&mut session, Cell::TopLeft);

    // Bot's turn: the human cannot move.
    human(&mut session, Cell::Center);
    assert_eq!(session.engine().board().turns(), 1);

    bot(&mut session, Cell::TopCenter).await;
    let before = session.engine().clone();
    human(&mut session, Cell::TopCenter);
    human(&mut session, Cell::TopLeft);
    assert_eq!(session.engine(), &before);
}

#[tokio::test]
async fn test_second_first_mover_choice_is_ignored() {
    let mut session = scripted_session();
    click(&mut session, RegionId::ChooseHuman);
    click(&mut session, RegionId::ChooseBot);
    assert_eq!(session.engine().first_mover(), Some(Participant::Human));
    assert_eq!(
        session
            .regions()
            .get(RegionId::WhoFirst)
            .unwrap()
            .title()
            .as_deref(),
        Some("YOU first")
    );
}

#[tokio::test]
async fn test_bot_first_moves_as_x() {
    let mut session = live_session();
    click(&mut session, RegionId::ChooseBot);
    answer_bot(&mut session).await;

    let board = session.engine().board();
    assert_eq!(board.turns(), 1);
    let cell = Cell::ALL
        .into_iter()
        .find(|c| board.symbol_at(*c).is_some())
        .unwrap();
    assert_eq!(board.symbol_at(cell), Some(Symbol::X));
    assert_eq!(
        session
            .regions()
            .get(RegionId::Cell(cell))
            .unwrap()
            .title()
            .as_deref(),
        Some("BOT")
    );
    assert_eq!(session.engine().to_move(), Some(Participant::Human));
}

#[tokio::test]
async fn test_column_win_shows_winner_prompt() {
    let mut session = live_session();
    click(&mut session, RegionId::ChooseHuman);
    human(&mut session, Cell::TopLeft);
    bot(&mut session, Cell::TopCenter).await;
    human(&mut session, Cell::MiddleLeft);
    bot(&mut session, Cell::Center).await;
    human(&mut session, Cell::BottomLeft);

    let engine = session.engine();
    assert_eq!(engine.phase(), Phase::RoundOver);
    assert_eq!(
        engine.outcome(),
        Some(Outcome::Winner {
            symbol: Symbol::X,
            participant: Participant::Human,
            pattern: [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
        })
    );
    assert_eq!(region_text(&session, RegionId::Winner), "WINNER: X Try again?");
    assert!(session.regions().is_clickable(RegionId::Winner));
    for cell in Cell::ALL {
        assert!(!session.regions().is_clickable(RegionId::Cell(cell)));
    }
}

#[tokio::test]
async fn test_draw_then_reset() {
    let mut session = live_session();
    click(&mut session, RegionId::ChooseHuman);
    human(&mut session, Cell::TopLeft);
    bot(&mut session, Cell::TopCenter).await;
    human(&mut session, Cell::TopRight);
    bot(&mut session, Cell::Center).await;
    human(&mut session, Cell::MiddleLeft);
    bot(&mut session, Cell::MiddleRight).await;
    human(&mut session, Cell::BottomCenter);
    bot(&mut session, Cell::BottomLeft).await;
    human(&mut session, Cell::BottomRight);

    assert_eq!(session.engine().outcome(), Some(Outcome::Draw));
    assert_eq!(session.engine().board().turns(), 9);
    let reset = session.regions().get(RegionId::Reset).unwrap();
    assert_eq!(reset.text(), "Click me for resetting!");
    assert_eq!(*reset.rect(), layout::reset_prompt(WIDTH, HEIGHT));
    assert!(session.regions().get(RegionId::Winner).is_none());

    click(&mut session, RegionId::Reset);
    let engine = session.engine();
    assert_eq!(engine.round(), 2);
    assert_eq!(engine.phase(), Phase::AwaitingFirstChoice);
    assert_eq!(engine.board().turns(), 0);
    assert_eq!(engine.first_mover(), None);
    assert!(session.regions().get(RegionId::Reset).is_none());
    assert!(session.regions().is_clickable(RegionId::ChooseBot));
    for cell in Cell::ALL {
        assert!(session.regions().is_clickable(RegionId::Cell(cell)));
    }
}

#[tokio::test]
async fn test_stale_bot_move_after_reset_is_ignored() {
    let mut session = live_session();
    click(&mut session, RegionId::ChooseHuman);
    human(&mut session, Cell::TopLeft);
    bot(&mut session, Cell::TopCenter).await;
    human(&mut session, Cell::MiddleLeft);
    bot(&mut session, Cell::Center).await;
    human(&mut session, Cell::BottomLeft);
    click(&mut session, RegionId::Winner);

    click(&mut session, RegionId::ChooseHuman);
    session
        .handle(SessionEvent::BotMove(Move::new(
            Participant::Bot,
            Cell::BottomRight,
            1,
        )))
        .unwrap();
    assert_eq!(session.engine().board().turns(), 0);
    assert_eq!(session.engine().to_move(), Some(Participant::Human));
}

#[tokio::test]
async fn test_full_round_against_live_bot() {
    let mut session = live_session();
    for round in 1..=3 {
        assert_eq!(session.engine().round(), round);
        click(&mut session, RegionId::ChooseHuman);

        while session.engine().phase() == Phase::InProgress {
            match session.engine().to_move() {
                Some(Participant::Human) => {
                    let cell = session.engine().board().free().iter().next().unwrap();
                    human(&mut session, cell);
                }
                Some(Participant::Bot) => answer_bot(&mut session).await,
                None => unreachable!("in progress always has a mover"),
            }
        }

        let prompt = match session.engine().outcome().unwrap() {
            Outcome::Draw => RegionId::Reset,
            Outcome::Winner { .. } => RegionId::Winner,
        };
        assert_eq!(click(&mut session, prompt), Control::Continue);
    }
}

#[tokio::test]
async fn test_close_and_quit_end_the_session() {
    let mut session = scripted_session();
    assert_eq!(click(&mut session, RegionId::Close), Control::Quit);
    assert_eq!(session.handle(SessionEvent::Quit).unwrap(), Control::Quit);
}

#[tokio::test]
async fn test_resize_recentres_draw_prompt() {
    let mut session = live_session();
    click(&mut session, RegionId::ChooseHuman);
    for (h, b) in [
        (Cell::TopLeft, Some(Cell::TopCenter)),
        (Cell::TopRight, Some(Cell::Center)),
        (Cell::MiddleLeft, Some(Cell::MiddleRight)),
        (Cell::BottomCenter, Some(Cell::BottomLeft)),
        (Cell::BottomRight, None),
    ] {
        human(&mut session, h);
        if let Some(b) = b {
            bot(&mut session, b).await;
        }
    }

    session
        .handle(SessionEvent::Resize {
            width: 60,
            height: 20,
        })
        .unwrap();
    assert_eq!(
        *session.regions().get(RegionId::Reset).unwrap().rect(),
        layout::reset_prompt(60, 20)
    );
}

#[tokio::test]
async fn test_bot_answers_in_every_round_after_reset() {
    let mut session = live_session();
    for round in 1..=3 {
        click(&mut session, RegionId::ChooseBot);
        let SessionEvent::BotMove(mv) = bot_event(&mut session).await else {
            unreachable!();
        };
        assert_eq!(mv.round, round);
        session.handle(SessionEvent::BotMove(mv)).unwrap();
        assert_eq!(session.engine().board().turns(), 1);

        // Finish the round quickly: the human takes whatever is free.
        while session.engine().phase() == Phase::InProgress {
            match session.engine().to_move() {
                Some(Participant::Human) => {
                    let cell = session.engine().board().free().iter().next().unwrap();
                    human(&mut session, cell);
                }
                _ => answer_bot(&mut session).await,
            }
        }
        let prompt = match session.engine().outcome().unwrap() {
            Outcome::Draw => RegionId::Reset,
            Outcome::Winner { .. } => RegionId::Winner,
        };
        click(&mut session, prompt);
    }
}
