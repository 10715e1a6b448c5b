//! Frame rendering for the form widget.
//!
//! Layout, top to bottom: title bar (with the theme indicator glyph), the two
//! input boxes, the token display, the message line, the status bar, and a
//! key-hint line. The message line color follows the message tone; everything
//! else takes its colors from the active theme's palette.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::form::{Field, FormState, MessageTone};
use crate::core::theme::Theme;

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Default text
    pub fg: Color,
    /// Focused-control highlight
    pub accent: Color,
    /// Secondary text (hints, unfocused borders)
    pub dim: Color,
    /// Error-tone messages
    pub error: Color,
    /// Success-tone messages
    pub success: Color,
}

impl Palette {
    /// Palette for the given theme.
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                accent: Color::Blue,
                dim: Color::DarkGray,
                error: Color::Red,
                success: Color::Blue,
            },
            Theme::Dark => Self {
                bg: Color::Black,
                fg: Color::White,
                accent: Color::Cyan,
                dim: Color::Gray,
                error: Color::LightRed,
                success: Color::LightBlue,
            },
        }
    }

    const fn message_color(&self, tone: MessageTone) -> Color {
        match tone {
            MessageTone::Neutral => self.fg,
            MessageTone::Success => self.success,
            MessageTone::Error => self.error,
        }
    }
}

/// Renders one frame of the widget.
pub fn render(frame: &mut Frame<'_>, form: &FormState, theme: Theme) {
    let palette = Palette::for_theme(theme);
    let area = frame.area();

    // Paint the themed background across the whole screen first
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(3), // meter number field
            Constraint::Length(3), // amount field
            Constraint::Length(3), // token display
            Constraint::Length(1), // message line
            Constraint::Min(0),    // spacer
            Constraint::Length(1), // status bar
            Constraint::Length(1), // key hints
        ])
        .split(area);

    render_title(frame, chunks[0], &palette, theme);
    render_field(
        frame,
        chunks[1],
        &palette,
        "Meter Number",
        &form.meter_no,
        form.focus == Field::MeterNo,
    );
    render_field(
        frame,
        chunks[2],
        &palette,
        "Amount",
        &form.amount,
        form.focus == Field::Amount,
    );
    render_token_display(frame, chunks[3], &palette, form);
    render_message(frame, chunks[4], &palette, form);
    render_status_bar(frame, chunks[6], &palette, form);
    render_key_hints(frame, chunks[7], &palette);
}

fn render_title(frame: &mut Frame<'_>, area: Rect, palette: &Palette, theme: Theme) {
    let title = Line::from(vec![
        Span::styled(
            " MeterBuddy ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("- prepaid token simulator ", Style::default().fg(palette.dim)),
        Span::raw(theme.indicator()),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    palette: &Palette,
    title: &str,
    value: &str,
    focused: bool,
) {
    let border_style = if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };

    // A trailing block cursor marks the focused field
    let text = if focused {
        format!("{value}\u{2588}")
    } else {
        value.to_string()
    };

    let field = Paragraph::new(text)
        .style(Style::default().fg(palette.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title.to_string()),
        );
    frame.render_widget(field, area);
}

fn render_token_display(frame: &mut Frame<'_>, area: Rect, palette: &Palette, form: &FormState) {
    let token = Paragraph::new(form.token_display.clone())
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim))
                .title("Token"),
        );
    frame.render_widget(token, area);
}

fn render_message(frame: &mut Frame<'_>, area: Rect, palette: &Palette, form: &FormState) {
    let message = Paragraph::new(form.message.clone())
        .style(Style::default().fg(palette.message_color(form.message_tone)));
    frame.render_widget(message, area);
}

fn render_status_bar(frame: &mut Frame<'_>, area: Rect, palette: &Palette, form: &FormState) {
    let status = Paragraph::new(form.status.clone()).style(
        Style::default()
            .fg(palette.bg)
            .bg(palette.dim)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(status, area);
}

fn render_key_hints(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let hints = Paragraph::new("Tab switch field | Enter submit | Ctrl+L clear | Ctrl+T theme | Esc quit")
        .style(Style::default().fg(palette.dim));
    frame.render_widget(hints, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_between_themes() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(format!("{:?}", light.bg), format!("{:?}", dark.bg));
    }

    #[test]
    fn test_message_color_follows_tone() {
        let palette = Palette::for_theme(Theme::Light);
        assert_eq!(palette.message_color(MessageTone::Error), palette.error);
        assert_eq!(palette.message_color(MessageTone::Success), palette.success);
        assert_eq!(palette.message_color(MessageTone::Neutral), palette.fg);
    }
}
