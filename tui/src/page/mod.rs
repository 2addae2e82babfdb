//! The single-page document: section order, layout, and shared rendering
//! helpers.
//!
//! Every section renders to plain [`Line`]s; the page is their concatenation
//! plus a footer, and the app scrolls a viewport over it. Layout records each
//! section's extent in document rows so the reveal controller can measure
//! visibility.

pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod footer;
pub(crate) mod gallery;
pub(crate) mod hero;
pub(crate) mod projects;
pub(crate) mod skills;

use folio_core::gallery::GalleryImage;
use folio_core::profile::Profile;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::FetchState;
use crate::reveal::ScrollReveal;

/// Text wider than this wraps even on wide terminals.
const MAX_CONTENT_COLS: usize = 96;

/// The page's sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SectionId {
    Hero,
    About,
    Skills,
    Gallery,
    Projects,
    Contact,
}

impl SectionId {
    pub(crate) const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Gallery,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Heading drawn above the section body; the hero is its own banner.
    pub(crate) fn heading(self) -> Option<&'static str> {
        match self {
            SectionId::Hero => None,
            SectionId::About => Some("About Me"),
            SectionId::Skills => Some("My Skills"),
            SectionId::Gallery => Some("My Portfolio"),
            SectionId::Projects => Some("My Projects"),
            SectionId::Contact => Some("Get in Touch"),
        }
    }

    pub(crate) fn nav_label(self) -> &'static str {
        match self {
            SectionId::Hero => "top",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Gallery => "gallery",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Key that jumps to this section's anchor.
    pub(crate) fn jump_key(self) -> char {
        match self {
            SectionId::Hero => 't',
            SectionId::About => 'a',
            SectionId::Skills => 's',
            SectionId::Gallery => 'g',
            SectionId::Projects => 'p',
            SectionId::Contact => 'c',
        }
    }

    pub(crate) fn from_jump_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.jump_key() == key)
    }
}

/// Everything the section renderers read.
pub(crate) struct PageContext<'a> {
    pub(crate) profile: &'a Profile,
    pub(crate) gallery: &'a [GalleryImage],
    pub(crate) projects: &'a FetchState,
    pub(crate) gallery_selection: usize,
    pub(crate) gallery_expanded: Option<usize>,
    pub(crate) width: u16,
}

/// Extent of one section in document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SectionExtent {
    pub(crate) id: SectionId,
    pub(crate) top: usize,
    pub(crate) height: usize,
}

pub(crate) struct PageLayout {
    pub(crate) lines: Vec<Line<'static>>,
    pub(crate) sections: Vec<SectionExtent>,
}

/// Lay the whole document out for the given width and reveal state.
///
/// Withheld (not yet revealed) section bodies keep their height and render
/// dimmed, so a reveal flip never shifts the layout under the viewport.
pub(crate) fn build(ctx: &PageContext, reveal: &ScrollReveal) -> PageLayout {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut sections = Vec::new();

    for id in SectionId::ALL {
        let top = lines.len();
        lines.extend(heading_lines(id, ctx.width));

        let body = section_lines(id, ctx);
        if reveal.is_revealed(id) {
            lines.extend(body);
        } else {
            lines.extend(body.into_iter().map(|line| line.dim()));
        }
        lines.push(Line::default());

        sections.push(SectionExtent {
            id,
            top,
            height: lines.len() - top,
        });
    }

    lines.extend(footer::lines(ctx));
    PageLayout { lines, sections }
}

fn section_lines(id: SectionId, ctx: &PageContext) -> Vec<Line<'static>> {
    match id {
        SectionId::Hero => hero::lines(ctx),
        SectionId::About => about::lines(ctx),
        SectionId::Skills => skills::lines(ctx),
        SectionId::Gallery => gallery::lines(ctx),
        SectionId::Projects => projects::lines(ctx),
        SectionId::Contact => contact::lines(ctx),
    }
}

fn heading_lines(id: SectionId, width: u16) -> Vec<Line<'static>> {
    let Some(title) = id.heading() else {
        return Vec::new();
    };
    let rule_cols = content_cols(width).saturating_sub(title.width() + 1);
    vec![
        Line::from(vec![
            Span::styled(title, Style::default().bold().cyan()),
            " ".into(),
            Span::styled("─".repeat(rule_cols), Style::default().dim()),
        ]),
        Line::default(),
    ]
}

/// The fixed one-row bar above the scrolling document.
pub(crate) fn header_bar(profile: &Profile) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", profile.hero.name),
            Style::default().bold().cyan(),
        ),
        "  ".into(),
    ];
    for id in SectionId::ALL {
        spans.push(crate::key_hint::plain(crossterm::event::KeyCode::Char(id.jump_key())).into());
        spans.push(Span::styled(format!(" {}  ", id.nav_label()), Style::default().dim()));
    }
    spans.push(crate::key_hint::plain(crossterm::event::KeyCode::Char('q')).into());
    spans.push(Span::styled(" quit", Style::default().dim()));
    Paragraph::new(Line::from(spans))
}

pub(crate) fn content_cols(width: u16) -> usize {
    (width as usize).clamp(20, MAX_CONTENT_COLS)
}

pub(crate) fn wrap_plain(text: &str, width: u16) -> Vec<Line<'static>> {
    wrap_styled(text, width, Style::default())
}

pub(crate) fn wrap_styled(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    textwrap::wrap(text, content_cols(width))
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}
