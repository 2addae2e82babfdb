//! Hero banner: name, headline, summary, and social links.

use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use super::PageContext;
use super::wrap_styled;

pub(crate) fn lines(ctx: &PageContext) -> Vec<Line<'static>> {
    let hero = &ctx.profile.hero;
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw("Hi, I'm "),
            Span::styled(hero.name.clone(), Style::default().bold().cyan()),
        ]),
        Line::default(),
    ];
    lines.extend(wrap_styled(&hero.headline, ctx.width, Style::default().bold()));
    lines.push(Line::default());
    lines.extend(wrap_styled(&hero.summary, ctx.width, Style::default().dim()));
    lines.push(Line::default());
    for link in &hero.links {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", link.label), Style::default().magenta()),
            Span::styled(link.url.clone(), Style::default().cyan().underlined()),
        ]));
    }
    lines
}
