//! State for the business detail overlay.

use crate::model::Business;

/// What the overlay body currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    /// Request in flight.
    Loading,
    /// Lookup succeeded.
    Loaded(Box<Business>),
    /// Lookup failed; the overlay stays open with this message.
    Failed(DetailFailure),
}

/// Why a detail lookup failed, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFailure {
    /// Backend answered with a non-success envelope, or there was no
    /// identifier to look up.
    Unavailable,
    /// Backend could not be reached or answered garbage.
    Network,
}

impl DetailFailure {
    /// User-facing text.
    pub fn message(self) -> &'static str {
        match self {
            DetailFailure::Unavailable => "Failed to load business details",
            DetailFailure::Network => "Network error. Please try again.",
        }
    }
}

/// Detail overlay.
///
/// # Cardinality
/// - Closed: 1 state
/// - Open: one state per (generation, body); only the request tagged with
///   the current generation may change the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailOverlay {
    open: Option<OpenOverlay>,
}

#[derive(Debug, Clone, PartialEq)]
struct OpenOverlay {
    generation: u64,
    body: DetailBody,
    scroll: u16,
}

impl DetailOverlay {
    /// Create overlay state (closed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is open.
    pub fn is_visible(&self) -> bool {
        self.open.is_some()
    }

    /// Open for the request tagged `generation`, showing the loading placeholder.
    pub fn open_loading(&mut self, generation: u64) {
        self.open_with(generation, DetailBody::Loading);
    }

    /// Open directly into a body, e.g. a failure that needs no request.
    pub fn open_with(&mut self, generation: u64, body: DetailBody) {
        self.open = Some(OpenOverlay {
            generation,
            body,
            scroll: 0,
        });
    }

    /// Close, forgetting the pending generation.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Body of the open overlay.
    pub fn body(&self) -> Option<&DetailBody> {
        self.open.as_ref().map(|o| &o.body)
    }

    /// Generation of the request the overlay is waiting for or showing.
    pub fn generation(&self) -> Option<u64> {
        self.open.as_ref().map(|o| o.generation)
    }

    /// Replace the body if the overlay is open for `generation`.
    ///
    /// Returns `false` (and changes nothing) for stale generations or a
    /// closed overlay.
    pub fn resolve(&mut self, generation: u64, body: DetailBody) -> bool {
        match self.open.as_mut() {
            Some(open) if open.generation == generation => {
                open.body = body;
                open.scroll = 0;
                true
            }
            _ => false,
        }
    }

    /// Current scroll offset; 0 when closed.
    pub fn scroll(&self) -> u16 {
        self.open.as_ref().map_or(0, |o| o.scroll)
    }

    /// Scroll up, saturating at the top.
    pub fn scroll_up(&mut self, lines: u16) {
        if let Some(open) = self.open.as_mut() {
            open.scroll = open.scroll.saturating_sub(lines);
        }
    }

    /// Scroll down, never past `max`.
    pub fn scroll_down(&mut self, lines: u16, max: u16) {
        if let Some(open) = self.open.as_mut() {
            open.scroll = open.scroll.saturating_add(lines).min(max);
        }
    }
}
