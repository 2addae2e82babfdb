//! About section: education, work experience, and volunteer history.

use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use super::PageContext;
use super::wrap_plain;

pub(crate) fn lines(ctx: &PageContext) -> Vec<Line<'static>> {
    let profile = ctx.profile;
    let mut lines = Vec::new();

    lines.push(subheading("Education"));
    for entry in &profile.education {
        lines.push(Line::from(Span::styled(
            entry.degree.clone(),
            Style::default().bold(),
        )));
        lines.push(Line::from(entry.school.clone()));
        lines.push(Line::from(Span::styled(
            entry.period.clone(),
            Style::default().dim(),
        )));
        lines.push(Line::default());
    }

    lines.push(subheading("Work Experience"));
    for entry in &profile.experience {
        lines.push(Line::from(Span::styled(
            entry.role.clone(),
            Style::default().bold(),
        )));
        lines.push(Line::from(Span::styled(
            entry.period.clone(),
            Style::default().dim(),
        )));
        lines.extend(wrap_plain(&entry.summary, ctx.width));
        lines.push(Line::default());
    }

    lines.push(subheading("Volunteer Experience"));
    for entry in &profile.volunteer {
        lines.push(Line::from(Span::styled(
            entry.role.clone(),
            Style::default().bold(),
        )));
        lines.extend(wrap_plain(&entry.summary, ctx.width));
    }

    lines
}

fn subheading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().bold().magenta()))
}
