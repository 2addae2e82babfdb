//! Gallery section: a selectable list of image slots with a one-at-a-time
//! expanded caption panel.

use folio_core::gallery::ImageStatus;
use folio_core::gallery::PLACEHOLDER_CAPTION;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use super::PageContext;
use super::wrap_styled;

pub(crate) fn lines(ctx: &PageContext) -> Vec<Line<'static>> {
    let mut lines = wrap_styled(
        "Below are some visual examples from my portfolio. Select an image and press enter \
         to learn more.",
        ctx.width,
        Style::default().dim(),
    );
    lines.push(Line::default());

    if ctx.gallery.is_empty() {
        lines.push(Line::from(Span::styled(
            "No gallery configured.",
            Style::default().dim(),
        )));
        return lines;
    }

    for (position, image) in ctx.gallery.iter().enumerate() {
        let selected = position == ctx.gallery_selection;
        let marker = if selected { "▸ " } else { "  " };

        let mut spans = vec![Span::styled(
            marker,
            Style::default().cyan(),
        )];
        let name_style = if selected {
            Style::default().bold()
        } else {
            Style::default()
        };
        spans.push(Span::styled(image.caption.clone(), name_style));
        spans.push(Span::styled("  ·  ", Style::default().dim()));
        match image.status {
            ImageStatus::Loaded { width, height } => {
                spans.push(Span::styled(
                    format!("{width}×{height}"),
                    Style::default().green().dim(),
                ));
            }
            ImageStatus::Missing => {
                // Broken slots render the placeholder, never an error.
                spans.push(Span::styled(
                    PLACEHOLDER_CAPTION,
                    Style::default().yellow().dim(),
                ));
            }
        }
        lines.push(Line::from(spans));

        if ctx.gallery_expanded == Some(position) {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("Made by {}", ctx.profile.hero.name),
                    Style::default().italic(),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(image.path.display().to_string(), Style::default().dim()),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FetchState;
    use folio_core::gallery::GalleryImage;
    use folio_core::profile::Profile;
    use std::path::PathBuf;

    fn slot(index: u32, status: ImageStatus) -> GalleryImage {
        GalleryImage {
            index,
            path: PathBuf::from(format!("gallery/image-{index:02}.png")),
            caption: format!("Portfolio image {index}"),
            status,
        }
    }

    fn rendered(ctx: &PageContext) -> String {
        lines(ctx)
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.as_ref()))
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn broken_slots_always_render_the_placeholder() {
        let profile = Profile::default();
        let projects = FetchState::Loading;
        let gallery = vec![
            slot(1, ImageStatus::Loaded { width: 4, height: 2 }),
            slot(2, ImageStatus::Missing),
        ];
        let ctx = PageContext {
            profile: &profile,
            gallery: &gallery,
            projects: &projects,
            gallery_selection: 0,
            gallery_expanded: None,
            width: 80,
        };

        let text = rendered(&ctx);
        assert!(text.contains("4×2"));
        assert!(text.contains(PLACEHOLDER_CAPTION));
    }

    #[test]
    fn expansion_adds_a_caption_panel_for_one_slot_only() {
        let profile = Profile::default();
        let projects = FetchState::Loading;
        let gallery = vec![slot(1, ImageStatus::Missing), slot(2, ImageStatus::Missing)];
        let mut ctx = PageContext {
            profile: &profile,
            gallery: &gallery,
            projects: &projects,
            gallery_selection: 1,
            gallery_expanded: None,
            width: 80,
        };

        let collapsed_len = lines(&ctx).len();
        ctx.gallery_expanded = Some(1);
        let expanded = lines(&ctx);
        assert_eq!(expanded.len(), collapsed_len + 2);
        assert!(rendered(&ctx).contains(&format!("Made by {}", profile.hero.name)));
    }
}
