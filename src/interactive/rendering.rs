//! TUI rendering with ratatui
//!
//! Draws the ladder grid, the on-screen keyboard and the score panels.

use super::app::{App, MessageStyle};
use crate::core::{Pack, Reveal, matrix};
use crate::output::formatters::{CURRENT_ROW_RGB, KEYBOARD, cell_text, palette_color};
use crate::packs::PuzzleSet;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
};

/// Areas of the main screen, shared by drawing and mouse hit-testing
pub struct ScreenLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub main: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Pack tabs
            Constraint::Min(8),    // Grid + side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        tabs: chunks[1],
        main: chunks[2],
        keyboard: chunks[3],
        status: chunks[4],
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area());

    render_header(f, layout.header);
    render_tabs(f, app, layout.tabs);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Grid
            Constraint::Percentage(35), // Counters + messages
        ])
        .split(layout.main);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, layout.keyboard);
    render_status(f, layout.status);

    if app.show_help {
        render_help(f, f.area());
    }
}

/// Key drawn at (`column`, `row`) inside the keyboard block
#[must_use]
pub fn key_at(keyboard: Rect, column: u16, row: u16) -> Option<char> {
    if column >= keyboard.right().saturating_sub(1) {
        return None;
    }
    let line = usize::from(row.checked_sub(keyboard.y + 1)?);
    let &(indent, keys) = KEYBOARD.get(line)?;

    // Border, indent, then " X " plus a gap per key
    let start = usize::from(keyboard.x) + 1 + keyboard_indent(indent);
    let offset = usize::from(column).checked_sub(start)?;
    if offset % 4 == 3 {
        return None;
    }
    keys.chars().nth(offset / 4)
}

/// Index of the pack tab drawn at (`column`, `row`)
#[must_use]
pub fn pack_at(puzzles: &PuzzleSet, tabs: Rect, column: u16, row: u16) -> Option<usize> {
    if row != tabs.y + 1 || column >= tabs.right().saturating_sub(1) {
        return None;
    }

    let column = usize::from(column);
    let mut x = usize::from(tabs.x) + 1;
    for (i, pack) in puzzles.iter().enumerate() {
        // Padding on both sides of the title
        let width = Line::from(tab_title(i, pack)).width() + 2;
        if (x..x + width).contains(&column) {
            return Some(i);
        }
        // Divider
        x += width + 1;
    }
    None
}

fn tab_title(index: usize, pack: &Pack) -> String {
    format!("{} {}", index + 1, pack.name())
}

const fn keyboard_indent(indent: usize) -> usize {
    indent * 2 + 1
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD LADDER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .puzzles
        .iter()
        .enumerate()
        .map(|(i, pack)| Line::from(tab_title(i, pack)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.pack_index)
        .block(
            Block::default()
                .title(" Packs (TAB / 1-9) ")
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let pack = session.pack();
    let width = matrix::width(pack);

    let mut lines = vec![Line::from("")];
    for row in 0..pack.row_count() {
        let is_current = row == session.current_row();
        let mut spans = vec![Span::raw(if is_current { " ▶ " } else { "   " })];

        for col in 0..width {
            let view = session.cell_view(row, col);
            let mut style = match view.reveal {
                Reveal::Shown(_) => Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                Reveal::Covered => Style::default().fg(Color::DarkGray),
                Reveal::Hidden => Style::default(),
            };

            if let Some(slot) = view.highlight {
                style = style.bg(rgb(palette_color(slot)));
            } else if is_current {
                style = style.bg(rgb(CURRENT_ROW_RGB));
            } else if view.reveal != Reveal::Hidden {
                style = style.bg(Color::Gray);
            }

            spans.push(Span::styled(cell_text(&view), style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", pack.name()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Counters
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_counters(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_counters(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.session.snapshot();
    let net = snapshot.net_result();
    let net_color = if net < 0 { Color::Red } else { Color::Green };

    let content = vec![
        Line::from(vec![
            Span::raw("Failed attempts: "),
            Span::styled(
                snapshot.failed_attempts.to_string(),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::raw("Points:          "),
            Span::styled(snapshot.score.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Result:          "),
            Span::styled(
                net.to_string(),
                Style::default().fg(net_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Row:             {}/{}",
            snapshot.current_row + 1,
            snapshot.pack.row_count()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD
        .iter()
        .map(|&(indent, keys)| {
            let mut spans = vec![Span::raw(" ".repeat(keyboard_indent(indent)))];
            for ch in keys.chars() {
                let used = app
                    .session
                    .used_letters()
                    .iter()
                    .any(|l| l.as_char() == ch);
                let style = if used {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD)
                };
                spans.push(Span::styled(format!(" {ch} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("A-Z: Guess | TAB: Next Pack | 1-9: Pick Pack | ?: Help | ESC: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let area = centered_rect(area, 60, 12);

    let content = vec![
        Line::from(Span::styled(
            "How to play",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Each word shares one letter with the next word, in the same column."),
        Line::from("Colored cells mark those shared letters."),
        Line::from("Guess a shared letter to move down a row and score a point."),
        Line::from("Letters missing from the word count as failed attempts."),
        Line::from("On the last row every letter of the word scores."),
        Line::from("Keys and pack tabs can also be clicked."),
        Line::from(""),
        Line::from("Press ? or ESC to close."),
    ];

    let popup = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_at_finds_keys() {
        let keyboard = Rect::new(0, 0, 60, 5);
        // Top row starts after the border and a one-space indent
        assert_eq!(key_at(keyboard, 2, 1), Some('Q'));
        assert_eq!(key_at(keyboard, 4, 1), Some('Q'));
        assert_eq!(key_at(keyboard, 5, 1), None);
        assert_eq!(key_at(keyboard, 6, 1), Some('W'));
        assert_eq!(key_at(keyboard, 8, 3), Some('Z'));
        assert_eq!(key_at(keyboard, 5, 2), Some('A'));
    }

    #[test]
    fn key_at_ignores_borders_and_margins() {
        let keyboard = Rect::new(0, 10, 60, 5);
        assert_eq!(key_at(keyboard, 2, 10), None);
        assert_eq!(key_at(keyboard, 2, 14), None);
        assert_eq!(key_at(keyboard, 1, 11), None);
        assert_eq!(key_at(keyboard, 59, 11), None);
        assert_eq!(key_at(keyboard, 50, 11), None);
    }

    #[test]
    fn pack_at_follows_tab_titles() {
        let puzzles = PuzzleSet::embedded();
        let tabs = Rect::new(0, 3, 100, 3);
        // " 1 Result pack 1 " spans columns 1..=17, the divider sits at 18
        assert_eq!(pack_at(&puzzles, tabs, 1, 4), Some(0));
        assert_eq!(pack_at(&puzzles, tabs, 17, 4), Some(0));
        assert_eq!(pack_at(&puzzles, tabs, 18, 4), None);
        assert_eq!(pack_at(&puzzles, tabs, 19, 4), Some(1));
        assert_eq!(pack_at(&puzzles, tabs, 19, 3), None);
        assert_eq!(pack_at(&puzzles, tabs, 95, 4), None);
    }
}
