//! The page capability: named elements the client projects state onto.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Marker set on the balance element while a click's balance change is
/// being animated, and cleared shortly after.
pub const BALANCE_PULSE_MARKER: &str = "balance-increase";

/// The fixed elements the client knows how to address.
///
/// A concrete page may be missing any of these; operations on an absent
/// element are silent no-ops, so the client works unchanged on pages
/// that only show a subset of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The current user's display name.
    UserName,
    /// The click counter.
    Clicks,
    /// The balance counter.
    Balance,
    /// The ranked leaderboard container.
    Leaderboard,
}

impl Element {
    /// Label used when the element is written to a text page.
    pub fn label(self) -> &'static str {
        match self {
            Element::UserName => "user",
            Element::Clicks => "clicks",
            Element::Balance => "balance",
            Element::Leaderboard => "leaderboard",
        }
    }
}

/// Where rendered state lands.
///
/// Methods take `&self`: page implementations use interior mutability,
/// which lets the session share one page across its handlers and the
/// fire-and-forget marker-clear task.
pub trait Page: Send + Sync + 'static {
    /// Replaces the text of an element. No-op if the element is absent.
    fn set_text(&self, element: Element, text: &str);

    /// Attaches a transient marker (the terminal analogue of a CSS
    /// class) to an element. No-op if the element is absent.
    fn set_marker(&self, element: Element, marker: &str);

    /// Removes a marker set by [`set_marker`](Page::set_marker).
    fn clear_marker(&self, element: Element, marker: &str);

    /// Shows a blocking user-facing notice (confirmation, rejection,
    /// stats summary).
    fn notice(&self, text: &str);
}

/// A [`Page`] that writes to the terminal.
///
/// Element texts are cached so an unchanged projection prints nothing;
/// repeated renders of the same state stay quiet.
pub struct TextPage {
    elements: HashSet<Element>,
    texts: Mutex<HashMap<Element, String>>,
    markers: Mutex<HashMap<Element, HashSet<String>>>,
}

impl TextPage {
    /// A page with every element present.
    pub fn new() -> Self {
        Self::with_elements(&[
            Element::UserName,
            Element::Clicks,
            Element::Balance,
            Element::Leaderboard,
        ])
    }

    /// A page exposing only the given elements; writes to the rest are
    /// silently dropped.
    pub fn with_elements(elements: &[Element]) -> Self {
        Self {
            elements: elements.iter().copied().collect(),
            texts: Mutex::new(HashMap::new()),
            markers: Mutex::new(HashMap::new()),
        }
    }

    /// The current text of an element, if any has been set.
    pub fn text_of(&self, element: Element) -> Option<String> {
        self.texts.lock().expect("page lock").get(&element).cloned()
    }

    /// Whether the element currently carries the given marker.
    pub fn has_marker(&self, element: Element, marker: &str) -> bool {
        self.markers
            .lock()
            .expect("page lock")
            .get(&element)
            .is_some_and(|set| set.contains(marker))
    }
}

impl Default for TextPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for TextPage {
    fn set_text(&self, element: Element, text: &str) {
        if !self.elements.contains(&element) {
            return;
        }
        let mut texts = self.texts.lock().expect("page lock");
        let unchanged = texts
            .get(&element)
            .is_some_and(|current| current.as_str() == text);
        if unchanged {
            return;
        }
        texts.insert(element, text.to_string());
        println!("{}: {text}", element.label());
    }

    fn set_marker(&self, element: Element, marker: &str) {
        if !self.elements.contains(&element) {
            return;
        }
        self.markers
            .lock()
            .expect("page lock")
            .entry(element)
            .or_default()
            .insert(marker.to_string());
    }

    fn clear_marker(&self, element: Element, marker: &str) {
        if let Some(set) = self
            .markers
            .lock()
            .expect("page lock")
            .get_mut(&element)
        {
            set.remove(marker);
        }
    }

    fn notice(&self, text: &str) {
        println!("\n{text}\n");
    }
}
