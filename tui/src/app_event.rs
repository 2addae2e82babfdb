use crossterm::event::KeyEvent;
use folio_core::projects::ResolvedProjects;

/// Events consumed by the app loop.
#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    /// Terminal dimensions changed; the next draw picks up the new size.
    Resize,
    /// Animation frame for the smooth-scroll easing.
    Tick,
    /// The one startup fetch settled, successfully or via the fallback.
    ProjectsResolved(ResolvedProjects),
    ExitRequest,
}
