//! Projects section, fed by the startup fetch.
//!
//! Renders a pending notice until the single fetch settles, then the resolved
//! list (remote or fallback), with an advisory when the fallback was forced
//! by a failure.

use folio_core::projects::NO_LINK;
use folio_core::projects::ProjectSource;
use folio_core::projects::ProjectSummary;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use super::PageContext;
use super::wrap_plain;
use super::wrap_styled;
use crate::app::FetchState;

pub(crate) fn lines(ctx: &PageContext) -> Vec<Line<'static>> {
    match ctx.projects {
        FetchState::Loading => vec![Line::from(Span::styled(
            "Loading GitHub repositories...",
            Style::default().dim().italic(),
        ))],
        FetchState::Settled {
            entries,
            source,
            notice,
        } => settled_lines(ctx, entries, *source, notice.as_deref()),
    }
}

fn settled_lines(
    ctx: &PageContext,
    entries: &[ProjectSummary],
    source: ProjectSource,
    notice: Option<&str>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(notice) = notice {
        lines.extend(wrap_styled(notice, ctx.width, Style::default().yellow()));
        lines.push(Line::default());
    }

    let intro = match source {
        ProjectSource::Remote => {
            "These are my public GitHub repositories, most recently updated first."
        }
        ProjectSource::Fallback => "A selection of projects from my resume.",
    };
    lines.extend(wrap_styled(intro, ctx.width, Style::default().dim()));
    lines.push(Line::default());

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "No public projects to show.",
            Style::default().dim(),
        )));
        return lines;
    }

    for project in entries {
        lines.push(Line::from(Span::styled(
            project.title.clone(),
            Style::default().bold(),
        )));
        lines.extend(wrap_plain(&project.description, ctx.width));
        if project.link == NO_LINK {
            lines.push(Line::from(Span::styled(
                "no public link",
                Style::default().dim(),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                project.link.clone(),
                Style::default().cyan().underlined(),
            )));
        }
        lines.push(Line::default());
    }
    // The page adds the inter-section spacer.
    lines.pop();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::gallery::GalleryImage;
    use folio_core::profile::Profile;
    use folio_core::projects::FALLBACK_PROJECTS;

    fn context<'a>(
        profile: &'a Profile,
        gallery: &'a [GalleryImage],
        projects: &'a FetchState,
    ) -> PageContext<'a> {
        PageContext {
            profile,
            gallery,
            projects,
            gallery_selection: 0,
            gallery_expanded: None,
            width: 80,
        }
    }

    fn rendered(state: &FetchState) -> String {
        let profile = Profile::default();
        let ctx = context(&profile, &[], state);
        lines(&ctx)
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn pending_state_renders_loading_notice() {
        assert!(rendered(&FetchState::Loading).contains("Loading GitHub repositories"));
    }

    #[test]
    fn fallback_state_renders_advisory_and_every_entry() {
        let state = FetchState::Settled {
            entries: FALLBACK_PROJECTS.clone(),
            source: ProjectSource::Fallback,
            notice: Some("Failed to load projects from GitHub.".to_string()),
        };
        let text = rendered(&state);
        assert!(text.contains("Failed to load projects from GitHub."));
        for project in FALLBACK_PROJECTS.iter() {
            assert!(text.contains(&project.title));
        }
        assert!(text.contains("no public link"));
    }

    #[test]
    fn remote_state_has_no_advisory() {
        let state = FetchState::Settled {
            entries: vec![ProjectSummary {
                id: 1,
                title: "x".to_string(),
                description: "d".to_string(),
                link: "http://e/x".to_string(),
            }],
            source: ProjectSource::Remote,
            notice: None,
        };
        let text = rendered(&state);
        assert!(text.contains("http://e/x"));
        assert!(!text.contains("Failed"));
    }
}
