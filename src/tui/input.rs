//! Maps terminal events to session events.

use super::RegionMap;
use crate::session::SessionEvent;
use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Translates a terminal event, or `None` if the session does not care.
///
/// Left clicks are hit-tested against the clickable regions; `q`, `Esc`
/// and `Ctrl-C` quit.
pub fn translate(event: &Event, regions: &RegionMap) -> Option<SessionEvent> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => regions.hit(*column, *row).map(SessionEvent::Click),
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(SessionEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(SessionEvent::Quit)
            }
            _ => None,
        },
        Event::Resize(width, height) => Some(SessionEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::{Region, RegionId};
    use clicktoe_rules::Cell;
    use crossterm::event::KeyEvent;
    use ratatui::layout::Rect;

    fn click(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn regions() -> RegionMap {
        let mut map = RegionMap::new(80, 24);
        map.set(
            RegionId::Cell(Cell::Center),
            Region::new(Rect::new(9, 4, 9, 4)).with_clickable(true),
        );
        map
    }

    #[test]
    fn test_left_click_hits_region() {
        let event = click(MouseEventKind::Down(MouseButton::Left), 12, 5);
        assert_eq!(
            translate(&event, &regions()),
            Some(SessionEvent::Click(RegionId::Cell(Cell::Center)))
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let map = regions();
        assert_eq!(
            translate(&click(MouseEventKind::Down(MouseButton::Right), 12, 5), &map),
            None
        );
        assert_eq!(
            translate(&click(MouseEventKind::Up(MouseButton::Left), 12, 5), &map),
            None
        );
        assert_eq!(
            translate(&click(MouseEventKind::Down(MouseButton::Left), 70, 20), &map),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        let map = regions();
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(translate(&Event::Key(key), &map), Some(SessionEvent::Quit));
        }

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(translate(&Event::Key(plain_c), &map), None);

        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(translate(&Event::Key(release), &map), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            translate(&Event::Resize(100, 30), &regions()),
            Some(SessionEvent::Resize {
                width: 100,
                height: 30
            })
        );
    }
}
