//! App state and the event loop.
//!
//! One blocking loop over a std mpsc channel: the input thread feeds key and
//! resize events, the tokio runtime feeds the one fetch settlement and the
//! smooth-scroll animation ticks. All mutable state lives here, owned by the
//! loop; nothing else writes it.

use std::io::Stdout;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::channel;
use std::time::Duration;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use folio_core::config::Config;
use folio_core::gallery;
use folio_core::gallery::GalleryImage;
use folio_core::profile::Profile;
use folio_core::projects::FALLBACK_PROJECTS;
use folio_core::projects::ProjectSource;
use folio_core::projects::ProjectSummary;
use folio_core::projects::ProjectsClient;
use folio_core::projects::ResolvedProjects;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use tracing::debug;
use tracing::info;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::key_hint;
use crate::page;
use crate::page::PageContext;
use crate::page::SectionExtent;
use crate::page::SectionId;
use crate::reveal::ScrollReveal;
use crate::tui;

/// Delay between smooth-scroll animation frames.
const SCROLL_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Lifecycle of the single startup fetch. Settles exactly once; any later
/// settlement attempt is discarded.
#[derive(Debug)]
pub(crate) enum FetchState {
    Loading,
    Settled {
        entries: Vec<ProjectSummary>,
        source: ProjectSource,
        notice: Option<String>,
    },
}

impl FetchState {
    pub(crate) fn settle(&mut self, resolved: ResolvedProjects) {
        if matches!(self, FetchState::Settled { .. }) {
            debug!("duplicate fetch settlement discarded");
            return;
        }
        *self = FetchState::Settled {
            entries: resolved.entries,
            source: resolved.source,
            notice: resolved.notice,
        };
    }
}

pub(crate) struct App {
    tx: AppEventSender,
    runtime: tokio::runtime::Handle,
    config: Config,
    profile: Profile,
    gallery: Vec<GalleryImage>,
    projects: FetchState,
    reveal: ScrollReveal,

    scroll: usize,
    scroll_target: Option<usize>,
    gallery_selection: usize,
    gallery_expanded: Option<usize>,

    // Geometry captured at the last draw, for key handling.
    viewport_rows: usize,
    max_scroll: usize,
    extents: Vec<SectionExtent>,

    done: bool,
}

/// Run the UI to completion.
pub(crate) fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    runtime: tokio::runtime::Handle,
    config: Config,
    profile: Profile,
) -> std::io::Result<()> {
    let (raw_tx, rx) = channel();
    let tx = AppEventSender::new(raw_tx);
    tui::spawn_input_thread(tx.clone());

    let gallery = gallery::load_manifest(&config.gallery_dir, config.gallery_count);
    let mut app = App::new(tx, runtime, config, profile, gallery);
    app.spawn_fetch();
    app.event_loop(terminal, &rx)
}

impl App {
    fn new(
        tx: AppEventSender,
        runtime: tokio::runtime::Handle,
        config: Config,
        profile: Profile,
        gallery: Vec<GalleryImage>,
    ) -> Self {
        let mut reveal = ScrollReveal::new();
        for id in [
            SectionId::About,
            SectionId::Skills,
            SectionId::Gallery,
            SectionId::Projects,
            SectionId::Contact,
        ] {
            reveal.observe_with(id, config.reveal_threshold, move || {
                debug!("section {id:?} scrolled into view");
            });
        }

        Self {
            tx,
            runtime,
            config,
            profile,
            gallery,
            projects: FetchState::Loading,
            reveal,
            scroll: 0,
            scroll_target: None,
            gallery_selection: 0,
            gallery_expanded: None,
            viewport_rows: 0,
            max_scroll: 0,
            extents: Vec::new(),
            done: false,
        }
    }

    /// Kick off the one fetch for this page view. The result comes back as an
    /// app event; if the UI is gone by then, the sender drops it.
    fn spawn_fetch(&self) {
        let tx = self.tx.clone();
        let client = ProjectsClient::new(self.config.listing_base_url.clone());
        let user = self.config.github_user.clone();
        self.runtime.spawn(async move {
            let resolved = client.resolve(&user, &FALLBACK_PROJECTS).await;
            info!(
                "project list settled from {:?} with {} entries",
                resolved.source,
                resolved.entries.len()
            );
            tx.send(AppEvent::ProjectsResolved(resolved));
        });
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        rx: &Receiver<AppEvent>,
    ) -> std::io::Result<()> {
        loop {
            self.draw(terminal)?;
            let Ok(event) = rx.recv() else {
                break;
            };
            self.handle_event(event);
            if self.done {
                break;
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize => {}
            AppEvent::Tick => self.step_scroll(),
            AppEvent::ProjectsResolved(resolved) => self.projects.settle(resolved),
            AppEvent::ExitRequest => self.done = true,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key_hint::plain(KeyCode::Char('q')).is_press(key)
            || key_hint::ctrl(KeyCode::Char('c')).is_press(key)
        {
            self.tx.send(AppEvent::ExitRequest);
            return;
        }

        match key.code {
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(self.page_step())),
            KeyCode::PageDown => self.scroll_by(self.page_step()),
            KeyCode::Home => {
                self.scroll_target = None;
                self.scroll = 0;
            }
            KeyCode::End => {
                self.scroll_target = None;
                self.scroll = self.max_scroll;
            }
            KeyCode::Left => self.move_gallery_selection(-1),
            KeyCode::Right => self.move_gallery_selection(1),
            KeyCode::Enter => self.toggle_gallery_expansion(),
            KeyCode::Esc => self.gallery_expanded = None,
            KeyCode::Char(c) => {
                if let Some(id) = SectionId::from_jump_key(c.to_ascii_lowercase()) {
                    self.jump_to(id);
                }
            }
            _ => {}
        }
    }

    fn page_step(&self) -> i64 {
        (self.viewport_rows.saturating_sub(2)).max(1) as i64
    }

    fn scroll_by(&mut self, delta: i64) {
        self.scroll_target = None;
        let next = self.scroll as i64 + delta;
        self.scroll = next.clamp(0, self.max_scroll as i64) as usize;
    }

    /// Anchor jump with eased scrolling: set the target and let ticks walk
    /// the offset toward it.
    fn jump_to(&mut self, id: SectionId) {
        // Jumping away is the "outside interaction" that folds the gallery.
        self.gallery_expanded = None;
        let Some(extent) = self.extents.iter().find(|extent| extent.id == id) else {
            return;
        };
        let target = extent.top.min(self.max_scroll);
        if target != self.scroll {
            self.scroll_target = Some(target);
            self.schedule_tick();
        }
    }

    fn step_scroll(&mut self) {
        let Some(target) = self.scroll_target else {
            return;
        };
        let current = self.scroll as i64;
        let goal = target as i64;
        let delta = goal - current;
        if delta == 0 {
            self.scroll_target = None;
            return;
        }
        // Ease out: cover a quarter of the remaining distance, at least one
        // row, per frame.
        let step = (delta.abs() / 4).max(1) * delta.signum();
        self.scroll = (current + step).clamp(0, self.max_scroll as i64) as usize;
        if self.scroll == target {
            self.scroll_target = None;
        } else {
            self.schedule_tick();
        }
    }

    fn schedule_tick(&self) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(SCROLL_FRAME_INTERVAL).await;
            tx.send(AppEvent::Tick);
        });
    }

    fn move_gallery_selection(&mut self, delta: i64) {
        if self.gallery.is_empty() {
            return;
        }
        // Moving the selection is an outside interaction: collapse first.
        self.gallery_expanded = None;
        let last = self.gallery.len() as i64 - 1;
        let next = (self.gallery_selection as i64 + delta).clamp(0, last);
        self.gallery_selection = next as usize;
    }

    fn toggle_gallery_expansion(&mut self) {
        if self.gallery.is_empty() {
            return;
        }
        self.gallery_expanded = if self.gallery_expanded == Some(self.gallery_selection) {
            None
        } else {
            Some(self.gallery_selection)
        };
    }

    fn draw(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> std::io::Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            if area.height == 0 || area.width == 0 {
                return;
            }
            let header = Rect { height: 1, ..area };
            let body = Rect {
                y: area.y + 1,
                height: area.height.saturating_sub(1),
                ..area
            };

            let ctx = PageContext {
                profile: &self.profile,
                gallery: &self.gallery,
                projects: &self.projects,
                gallery_selection: self.gallery_selection,
                gallery_expanded: self.gallery_expanded,
                width: body.width,
            };

            let mut layout = page::build(&ctx, &self.reveal);
            let view_rows = body.height as usize;
            self.max_scroll = layout.lines.len().saturating_sub(view_rows);
            self.scroll = self.scroll.min(self.max_scroll);
            self.viewport_rows = view_rows;

            let mut revealed_now = false;
            for extent in &layout.sections {
                revealed_now |= self.reveal.note_section(
                    extent.id,
                    extent.top,
                    extent.height,
                    self.scroll,
                    view_rows,
                );
            }
            if revealed_now {
                layout = page::build(&ctx, &self.reveal);
            }
            self.extents = layout.sections.clone();

            frame.render_widget(page::header_bar(&self.profile), header);
            frame.render_widget(
                Paragraph::new(Text::from(layout.lines)).scroll((self.scroll as u16, 0)),
                body,
            );
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(source: ProjectSource, len: usize) -> ResolvedProjects {
        ResolvedProjects {
            entries: FALLBACK_PROJECTS.iter().take(len).cloned().collect(),
            source,
            notice: None,
        }
    }

    #[test]
    fn fetch_state_settles_exactly_once() {
        let mut state = FetchState::Loading;
        state.settle(resolved(ProjectSource::Remote, 2));
        match &state {
            FetchState::Settled { entries, source, .. } => {
                assert_eq!(entries.len(), 2);
                assert_eq!(*source, ProjectSource::Remote);
            }
            FetchState::Loading => panic!("state must settle"),
        }

        // A second settlement is discarded.
        state.settle(resolved(ProjectSource::Fallback, 7));
        match &state {
            FetchState::Settled { entries, source, .. } => {
                assert_eq!(entries.len(), 2);
                assert_eq!(*source, ProjectSource::Remote);
            }
            FetchState::Loading => panic!("state must stay settled"),
        }
    }
}
