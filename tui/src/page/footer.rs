//! Document footer: copyright, social links, and scrolling hints.

use chrono::Datelike;
use chrono::Local;
use crossterm::event::KeyCode;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use super::PageContext;
use super::content_cols;
use crate::key_hint;

pub(crate) fn lines(ctx: &PageContext) -> Vec<Line<'static>> {
    let hero = &ctx.profile.hero;
    let mut lines = vec![
        Line::from(Span::styled(
            "─".repeat(content_cols(ctx.width)),
            Style::default().dim(),
        )),
        Line::from(Span::styled(
            format!(
                "© {} {}. All rights reserved.",
                Local::now().year(),
                hero.name
            ),
            Style::default().dim(),
        )),
    ];

    let mut social = Vec::new();
    for (i, link) in hero.links.iter().enumerate() {
        if i > 0 {
            social.push(Span::styled("  ·  ", Style::default().dim()));
        }
        social.push(Span::styled(link.url.clone(), Style::default().cyan()));
    }
    if !social.is_empty() {
        lines.push(Line::from(social));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        key_hint::plain(KeyCode::Up).into(),
        Span::raw(" "),
        key_hint::plain(KeyCode::Down).into(),
        Span::styled(" scroll   ", Style::default().dim()),
        key_hint::plain(KeyCode::Enter).into(),
        Span::styled(" expand image   ", Style::default().dim()),
        key_hint::plain(KeyCode::Esc).into(),
        Span::styled(" collapse   ", Style::default().dim()),
        key_hint::plain(KeyCode::Char('q')).into(),
        Span::styled(" quit", Style::default().dim()),
    ]));
    lines
}
