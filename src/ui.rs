use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use scribble::format::format_elapsed;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const BOX_PADDING: u16 = 4;

const LIME: Color = Color::Rgb(154, 230, 0);
const TEAL: Color = Color::Rgb(0, 116, 144);

/// Carve a horizontally centered rect of `width` out of `area`
fn centered(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn boxed(text: &str, style: Style, border: Color, area: Rect, buf: &mut Buffer) {
    let width = u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .saturating_add(BOX_PADDING * 2 + 2);
    Paragraph::new(Span::styled(text.to_string(), style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(border)),
        )
        .render(centered(width, area), buf);
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.controller.state();

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1), // title
                Constraint::Length(1), // tagline
                Constraint::Length(1), // round counter
                Constraint::Length(1),
                Constraint::Length(3), // word
                Constraint::Length(1),
                Constraint::Length(3), // timer
                Constraint::Length(1),
                Constraint::Length(1), // control
                Constraint::Length(1), // help
                Constraint::Min(0),
            ])
            .split(area);

        Paragraph::new(Line::from(vec![
            Span::styled("✦ ", Style::default().fg(LIME)),
            Span::styled("Pictionary", bold_style),
            Span::styled(" ✦", Style::default().fg(LIME)),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        Paragraph::new(Span::raw("Draw the word!"))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        if self.show_round_counter {
            Paragraph::new(Span::styled(
                format!(
                    "{}/{}",
                    state.rounds_started,
                    self.controller.word_list().len()
                ),
                dim_style,
            ))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
        }

        match state.current_word.as_deref() {
            Some(word) => {
                boxed(
                    word,
                    bold_style.fg(Color::Black).bg(LIME),
                    LIME,
                    chunks[5],
                    buf,
                );

                let timer_style = if state.is_running() {
                    bold_style.fg(Color::White).bg(TEAL)
                } else {
                    dim_style.fg(Color::White).bg(TEAL)
                };
                boxed(
                    &format_elapsed(state.elapsed_seconds),
                    timer_style,
                    TEAL,
                    chunks[7],
                    buf,
                );
            }
            None => {
                Paragraph::new(Span::styled(
                    "Press Start to get your word!",
                    dim_style.patch(italic_style),
                ))
                .alignment(Alignment::Center)
                .render(chunks[6], buf);
            }
        }

        let control = if state.is_running() {
            Span::styled("[space] Stop", bold_style.fg(TEAL))
        } else {
            Span::styled("[space] Start", bold_style.fg(LIME))
        };
        Paragraph::new(control)
            .alignment(Alignment::Center)
            .render(chunks[9], buf);

        Paragraph::new(Span::styled("(c) counter  (esc) quit", italic_style))
            .alignment(Alignment::Center)
            .render(chunks[10], buf);
    }
}
