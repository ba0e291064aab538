//! Stateless rendering of the region registry.

use super::{Fragment, Region, RegionMap, Tone};
use clicktoe_rules::Symbol;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Draws every region in registry order, clipped to the frame.
pub fn draw(frame: &mut Frame, regions: &RegionMap) {
    let screen = frame.area();
    for (_, region) in regions.iter() {
        let area = region.rect().intersection(screen);
        if area.is_empty() {
            continue;
        }
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph(region), area);
    }
}

fn paragraph(region: &Region) -> Paragraph<'_> {
    let border = if *region.clickable() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut block = Block::default().borders(Borders::ALL).border_style(border);
    if let Some(title) = region.title() {
        block = block.title(title.as_str());
    }

    let spans: Vec<Span<'_>> = region.body().iter().map(span).collect();
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(block)
}

fn span(fragment: &Fragment) -> Span<'_> {
    Span::styled(fragment.text.as_str(), style(fragment.tone))
}

fn style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::default(),
        Tone::Accent => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Tone::Alert => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Tone::Muted => Style::default().fg(Color::DarkGray),
        Tone::Mark(Symbol::X) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Tone::Mark(Symbol::O) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::RegionId;
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    fn render(regions: &RegionMap, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, regions)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_title_and_body() {
        let mut regions = RegionMap::new(30, 5);
        regions.set(
            RegionId::Winner,
            Region::new(Rect::new(0, 0, 30, 3))
                .with_title("Round 1")
                .with_text("WINNER: ", Tone::Accent)
                .with_text("X", Tone::Alert),
        );

        let screen = render(&regions, 30, 5);
        assert!(screen.contains("Round 1"));
        assert!(screen.contains("WINNER: X"));
    }

    #[test]
    fn test_offscreen_regions_are_skipped() {
        let mut regions = RegionMap::new(10, 5);
        regions.set(
            RegionId::Reset,
            Region::new(Rect::new(50, 50, 28, 3)).with_text("hidden", Tone::Plain),
        );
        assert!(!render(&regions, 10, 5).contains("hidden"));
    }

    #[test]
    fn test_mark_colours() {
        assert_eq!(style(Tone::Mark(Symbol::X)).fg, Some(Color::Red));
        assert_eq!(style(Tone::Mark(Symbol::O)).fg, Some(Color::Yellow));
    }
}
