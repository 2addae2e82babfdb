//! Skills grid: one block per category.

use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use super::PageContext;
use super::wrap_plain;

pub(crate) fn lines(ctx: &PageContext) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for category in &ctx.profile.skills {
        lines.push(Line::from(Span::styled(
            category.name.clone(),
            Style::default().bold().magenta(),
        )));
        let items = category.items.join(" · ");
        for mut line in wrap_plain(&items, ctx.width.saturating_sub(2)) {
            line.spans.insert(0, Span::raw("  "));
            lines.push(line);
        }
        lines.push(Line::default());
    }
    // Drop the trailing spacer; the page adds its own between sections.
    lines.pop();
    lines
}
