//! Layout Policy
//!
//! The line-breaking intents a node can take, the requests callers may make,
//! and the stored state a node keeps between requests.
//!
//! # Resolution
//!
//! A node stores a [`LayoutState`]. Reading its effective layout never yields a
//! meta-value: an unestablished or defaulted state falls back to the node's
//! `default_layout`, which is typed as a concrete [`Layout`].
//!
//! # Negotiation
//!
//! Requests are "first writer wins": a parent suggesting a layout through
//! `try_set_layout` only succeeds while the child is still unestablished.
//! Builders force their layout, so a layout chosen at construction time
//! always beats later suggestions.

use std::cell::Cell;

/// A concrete line-breaking policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// No line breaks.
    #[default]
    Inline,

    /// Starts on the current line, breaks between children.
    InlineBlock,

    /// Starts on a new line, breaks between children.
    Block,
}

impl Layout {
    /// Whether this layout spans multiple lines.
    #[inline]
    pub fn is_multiline(self) -> bool {
        matches!(self, Layout::InlineBlock | Layout::Block)
    }

    /// Whether this is [`Layout::Block`].
    #[inline]
    pub fn is_block(self) -> bool {
        matches!(self, Layout::Block)
    }

    /// Whether this is [`Layout::Inline`].
    #[inline]
    pub fn is_inline(self) -> bool {
        matches!(self, Layout::Inline)
    }
}

/// A layout request, including the meta-values a caller may ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutRequest {
    /// Ask for nothing. Always ignored: a layout cannot be unset.
    None,

    /// Reset to the unestablished state.
    Unestablished,

    /// Use the node's default layout, and count as established.
    Default,

    /// A concrete layout.
    Exact(Layout),
}

impl From<Layout> for LayoutRequest {
    fn from(layout: Layout) -> Self {
        LayoutRequest::Exact(layout)
    }
}

impl From<LayoutState> for LayoutRequest {
    fn from(state: LayoutState) -> Self {
        match state {
            LayoutState::Unestablished => LayoutRequest::Unestablished,
            LayoutState::Default => LayoutRequest::Default,
            LayoutState::Established(layout) => LayoutRequest::Exact(layout),
        }
    }
}

/// The layout state a node stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutState {
    /// Nothing has asked for a layout yet.
    #[default]
    Unestablished,

    /// Explicitly defaulted.
    Default,

    /// A concrete layout has been chosen.
    Established(Layout),
}

impl LayoutState {
    /// Whether some request has already claimed this node.
    #[inline]
    pub fn is_established(self) -> bool {
        !matches!(self, LayoutState::Unestablished)
    }

    /// Resolve to a concrete layout, falling back to `default`.
    #[inline]
    pub fn resolve(self, default: Layout) -> Layout {
        match self {
            LayoutState::Established(layout) => layout,
            LayoutState::Unestablished | LayoutState::Default => default,
        }
    }

    /// The layout an owner should suggest to its content once it takes this
    /// state.
    ///
    /// | own state     | content |
    /// |---------------|---------|
    /// | `Inline`      | `Inline` |
    /// | `InlineBlock` | `Block` |
    /// | `Block`       | `Block` |
    /// | meta states   | no change |
    pub fn cascade(self) -> Option<Layout> {
        match self {
            LayoutState::Established(Layout::Inline) => Some(Layout::Inline),
            LayoutState::Established(Layout::InlineBlock | Layout::Block) => Some(Layout::Block),
            LayoutState::Unestablished | LayoutState::Default => None,
        }
    }

    fn from_request(request: LayoutRequest) -> Option<Self> {
        match request {
            LayoutRequest::None => None,
            LayoutRequest::Unestablished => Some(LayoutState::Unestablished),
            LayoutRequest::Default => Some(LayoutState::Default),
            LayoutRequest::Exact(layout) => Some(LayoutState::Established(layout)),
        }
    }
}

/// Interior-mutable layout storage embedded in every node.
///
/// Rendering takes `&self`, yet parents negotiate their children's layout
/// during the pass, so the state lives in a `Cell`.
#[derive(Clone, Debug, Default)]
pub struct LayoutSlot {
    state: Cell<LayoutState>,
}

impl LayoutSlot {
    /// Create an unestablished slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored state.
    #[inline]
    pub fn state(&self) -> LayoutState {
        self.state.get()
    }

    /// Whether a request has claimed this slot.
    #[inline]
    pub fn is_established(&self) -> bool {
        self.state.get().is_established()
    }

    /// Apply a request.
    ///
    /// Returns the new state when it changed, which is the owner's cue to run
    /// its layout-changed hook.
    pub fn request(&self, request: LayoutRequest, only_if_unestablished: bool) -> Option<LayoutState> {
        if only_if_unestablished && self.is_established() {
            return None;
        }
        let next = LayoutState::from_request(request)?;
        if next == self.state.get() {
            return None;
        }
        tracing::trace!(from = ?self.state.get(), to = ?next, "layout changed");
        self.state.set(next);
        Some(next)
    }
}
