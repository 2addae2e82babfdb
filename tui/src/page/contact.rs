//! Contact section: blurb plus email and phone channels.

use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use super::PageContext;
use super::wrap_plain;

pub(crate) fn lines(ctx: &PageContext) -> Vec<Line<'static>> {
    let contact = &ctx.profile.contact;
    let mut lines = wrap_plain(&contact.blurb, ctx.width);
    lines.push(Line::default());
    lines.push(channel("email", &contact.email));
    lines.push(channel("phone", &contact.phone));
    lines
}

fn channel(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:>6}  "), Style::default().magenta()),
        Span::styled(value.to_string(), Style::default().bold()),
    ])
}
