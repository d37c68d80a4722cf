// Pure visibility state for the snippet toggler.
// No platform dependencies here; the web frontend implements the handle
// traits over live DOM nodes and tests/toggle_tests.rs drives the same code
// through in-memory fakes.

/// Identifier of the snippet container element.
pub const CONTENT_ID: &str = "code";
/// Identifier of the button that drives the toggle.
pub const CONTROL_ID: &str = "toggle-button";
/// Class whose presence marks the snippet as shown.
pub const ACTIVE_CLASS: &str = "active";

pub const LABEL_SHOWN: &str = "Hide Code";
pub const LABEL_HIDDEN: &str = "Show Code";

/// Two-valued visibility state of the snippet container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

impl Visibility {
    #[inline]
    pub fn from_marker(present: bool) -> Self {
        if present {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    /// The toggle is its own inverse.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    #[inline]
    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }

    /// Button label derived from this state.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Shown => LABEL_SHOWN,
            Visibility::Hidden => LABEL_HIDDEN,
        }
    }
}

/// An identifier that did not resolve to a live element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no element with id \"{id}\"")]
pub struct ElementNotFound {
    pub id: String,
}

impl ElementNotFound {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_owned() }
    }
}

/// The snippet container: carries the active marker.
pub trait ContentElement {
    /// Add the marker if absent, remove it if present.
    fn toggle_marker(&mut self);
    fn has_marker(&self) -> bool;
}

/// The button: carries the user-visible label.
pub trait ToggleControl {
    fn set_label(&mut self, label: &str);
}

/// Lookup seam over the surrounding document.
pub trait ElementRegistry {
    type Content: ContentElement;
    type Control: ToggleControl;

    fn content(&self, id: &str) -> Option<Self::Content>;
    fn control(&self, id: &str) -> Option<Self::Control>;
}

/// Owns the two handles resolved once at startup; no ambient lookups happen
/// after construction.
pub struct Toggler<C, B> {
    content: C,
    control: B,
}

impl<C: ContentElement, B: ToggleControl> Toggler<C, B> {
    pub fn new(content: C, control: B) -> Self {
        Self { content, control }
    }

    /// Resolve both handles up front, content first. A failed lookup aborts
    /// before anything is written, so the document is left untouched.
    pub fn from_registry<R>(registry: &R) -> Result<Self, ElementNotFound>
    where
        R: ElementRegistry<Content = C, Control = B>,
    {
        let content = registry
            .content(CONTENT_ID)
            .ok_or_else(|| ElementNotFound::new(CONTENT_ID))?;
        let control = registry
            .control(CONTROL_ID)
            .ok_or_else(|| ElementNotFound::new(CONTROL_ID))?;
        Ok(Self::new(content, control))
    }

    /// Flip the marker, then derive the label from the state read back from
    /// the content element (not from an assumed previous state).
    pub fn toggle(&mut self) -> Visibility {
        self.content.toggle_marker();
        let vis = Visibility::from_marker(self.content.has_marker());
        self.control.set_label(vis.label());
        vis
    }

    /// Rewrite the label from the current marker without flipping it. Run
    /// once at startup so label and state agree before the first click.
    pub fn sync_label(&mut self) -> Visibility {
        let vis = Visibility::from_marker(self.content.has_marker());
        self.control.set_label(vis.label());
        vis
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn control(&self) -> &B {
        &self.control
    }
}
