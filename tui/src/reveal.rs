//! One-shot reveal tracking for page sections scrolled into view.
//!
//! Each watched section owns a boolean flag that starts `false` and flips to
//! `true` the first time enough of the section is inside the viewport. The
//! flip is permanent: the watch detaches, any registered callback runs
//! exactly once, and later geometry is ignored. Sections are independent of
//! one another.

use std::collections::HashMap;

use crate::page::SectionId;

type RevealCallback = Box<dyn FnOnce() + Send>;

struct Watch {
    threshold: f32,
    revealed: bool,
    callback: Option<RevealCallback>,
}

pub(crate) struct ScrollReveal {
    watches: HashMap<SectionId, Watch>,
}

impl ScrollReveal {
    pub(crate) fn new() -> Self {
        Self {
            watches: HashMap::new(),
        }
    }

    /// Watch `id` with the given visible-fraction threshold.
    pub(crate) fn observe(&mut self, id: SectionId, threshold: f32) {
        self.insert_watch(id, threshold, None);
    }

    /// Watch `id` and run `callback` once, on the frame the section first
    /// reveals. The callback never runs a second time.
    pub(crate) fn observe_with(
        &mut self,
        id: SectionId,
        threshold: f32,
        callback: impl FnOnce() + Send + 'static,
    ) {
        self.insert_watch(id, threshold, Some(Box::new(callback)));
    }

    fn insert_watch(&mut self, id: SectionId, threshold: f32, callback: Option<RevealCallback>) {
        self.watches.insert(
            id,
            Watch {
                threshold: threshold.clamp(0.0, 1.0),
                revealed: false,
                callback,
            },
        );
    }

    /// Unwatched sections count as revealed; content is only ever withheld
    /// while a live watch says so.
    pub(crate) fn is_revealed(&self, id: SectionId) -> bool {
        self.watches.get(&id).is_none_or(|watch| watch.revealed)
    }

    /// Feed one frame of geometry for `id`, in document rows. Returns `true`
    /// when this frame flipped the flag.
    ///
    /// Degenerate geometry (zero-height section or viewport) reveals
    /// immediately: when visibility cannot be measured, content must not stay
    /// hidden.
    pub(crate) fn note_section(
        &mut self,
        id: SectionId,
        section_top: usize,
        section_height: usize,
        view_top: usize,
        view_height: usize,
    ) -> bool {
        let Some(watch) = self.watches.get_mut(&id) else {
            return false;
        };
        if watch.revealed {
            return false;
        }

        let ratio = visible_ratio(section_top, section_height, view_top, view_height);
        let met = match ratio {
            Some(ratio) => ratio >= watch.threshold,
            None => true,
        };
        if !met {
            return false;
        }

        watch.revealed = true;
        if let Some(callback) = watch.callback.take() {
            callback();
        }
        true
    }
}

/// Fraction of the section inside the viewport, or `None` when the geometry
/// is degenerate.
fn visible_ratio(
    section_top: usize,
    section_height: usize,
    view_top: usize,
    view_height: usize,
) -> Option<f32> {
    if section_height == 0 || view_height == 0 {
        return None;
    }
    let section_bottom = section_top + section_height;
    let view_bottom = view_top + view_height;
    let overlap = section_bottom
        .min(view_bottom)
        .saturating_sub(section_top.max(view_top));
    Some(overlap as f32 / section_height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    #[test]
    fn flag_flips_once_threshold_is_met() {
        let mut reveal = ScrollReveal::new();
        reveal.observe(SectionId::About, 0.5);
        assert!(!reveal.is_revealed(SectionId::About));

        // 2 of 10 rows visible: below the 0.5 threshold.
        assert!(!reveal.note_section(SectionId::About, 20, 10, 0, 22));
        assert!(!reveal.is_revealed(SectionId::About));

        // 6 of 10 rows visible: met.
        assert!(reveal.note_section(SectionId::About, 20, 10, 10, 16));
        assert!(reveal.is_revealed(SectionId::About));
    }

    #[test]
    fn flag_never_reverts_after_reveal() {
        let mut reveal = ScrollReveal::new();
        reveal.observe(SectionId::Skills, 0.1);
        assert!(reveal.note_section(SectionId::Skills, 0, 5, 0, 30));

        // Scrolled far away again: the flag holds and reports no change.
        assert!(!reveal.note_section(SectionId::Skills, 0, 5, 500, 30));
        assert!(reveal.is_revealed(SectionId::Skills));
    }

    #[test]
    fn callback_runs_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut reveal = ScrollReveal::new();
        reveal.observe_with(SectionId::Projects, 0.1, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        reveal.note_section(SectionId::Projects, 0, 10, 0, 30);
        reveal.note_section(SectionId::Projects, 0, 10, 0, 30);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn never_visible_section_stays_unrevealed() {
        let mut reveal = ScrollReveal::new();
        reveal.observe(SectionId::Contact, 0.1);
        for view_top in 0..5 {
            reveal.note_section(SectionId::Contact, 100, 10, view_top, 20);
        }
        assert!(!reveal.is_revealed(SectionId::Contact));
    }

    #[test]
    fn degenerate_geometry_reveals_immediately() {
        let mut reveal = ScrollReveal::new();
        reveal.observe(SectionId::Gallery, 0.9);
        // Zero-height viewport: visibility cannot be measured.
        assert!(reveal.note_section(SectionId::Gallery, 10, 4, 0, 0));
        assert!(reveal.is_revealed(SectionId::Gallery));

        reveal.observe(SectionId::About, 0.9);
        // Zero-height section.
        assert!(reveal.note_section(SectionId::About, 10, 0, 0, 30));
        assert!(reveal.is_revealed(SectionId::About));
    }

    #[test]
    fn unwatched_sections_count_as_revealed() {
        let reveal = ScrollReveal::new();
        assert!(reveal.is_revealed(SectionId::Hero));
    }

    #[test]
    fn watches_are_independent() {
        let mut reveal = ScrollReveal::new();
        reveal.observe(SectionId::About, 0.1);
        reveal.observe(SectionId::Contact, 0.1);

        reveal.note_section(SectionId::About, 0, 10, 0, 30);
        assert!(reveal.is_revealed(SectionId::About));
        assert!(!reveal.is_revealed(SectionId::Contact));
    }
}
