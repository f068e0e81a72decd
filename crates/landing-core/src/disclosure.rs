//! Exclusive Disclosure List
//!
//! A fixed, ordered list of items of which exactly one is expanded. Selecting
//! a header makes that item the only expanded one; there is no state with
//! every item collapsed.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::media::{Media, MediaSlot};

/// Expand/collapse animation length, in milliseconds
pub const TRANSITION_MS: u32 = 300;

/// Expand/collapse timing function
pub const TRANSITION_EASING: &str = "ease-in-out";

/// One entry in the list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureItem {
    pub title: String,

    /// Text revealed when expanded
    pub body: String,

    #[serde(default)]
    pub media: Option<Media>,

    /// SVG path data for the header icon
    #[serde(default)]
    pub icon: Option<String>,
}

impl DisclosureItem {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            media: None,
            icon: None,
        }
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_icon(mut self, path: impl Into<String>) -> Self {
        self.icon = Some(path.into());
        self
    }

    pub fn media_slot(&self) -> MediaSlot<'_> {
        MediaSlot::for_media(self.media.as_ref())
    }
}

/// Target `max-height` of an item body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaxHeight {
    Collapsed,
    /// Expanded before the body has been measured
    Natural,
    /// Expanded to the measured content height, in pixels
    Measured(u32),
}

impl MaxHeight {
    pub fn css(&self) -> String {
        match self {
            MaxHeight::Collapsed => "0px".into(),
            MaxHeight::Natural => "none".into(),
            MaxHeight::Measured(px) => format!("{px}px"),
        }
    }
}

/// Visual target state of an item body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyStyle {
    pub max_height: MaxHeight,
    pub opacity: f32,
}

impl BodyStyle {
    pub fn expanded(measured_height: Option<u32>) -> Self {
        Self {
            max_height: measured_height.map_or(MaxHeight::Natural, MaxHeight::Measured),
            opacity: 1.0,
        }
    }

    pub fn collapsed() -> Self {
        Self {
            max_height: MaxHeight::Collapsed,
            opacity: 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.max_height != MaxHeight::Collapsed
    }

    pub fn opacity_css(&self) -> String {
        self.opacity.to_string()
    }

    pub fn transition_css() -> String {
        format!("all {TRANSITION_MS}ms {TRANSITION_EASING}")
    }
}

/// Single-select accordion state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusiveDisclosureList {
    items: Vec<DisclosureItem>,
    selected: usize,
}

impl ExclusiveDisclosureList {
    /// Create a list with the first item expanded
    pub fn new(items: Vec<DisclosureItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(SiteError::EmptyDisclosure);
        }
        Ok(Self { items, selected: 0 })
    }

    /// Make `index` the expanded item.
    ///
    /// Re-selecting the expanded item changes nothing. An out-of-range index
    /// is a caller bug: the state is kept and `false` is returned.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "Ignoring out-of-range disclosure selection");
            return false;
        }
        self.selected = index;
        true
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        index == self.selected
    }

    pub fn items(&self) -> &[DisclosureItem] {
        &self.items
    }

    pub fn expanded_item(&self) -> &DisclosureItem {
        &self.items[self.selected]
    }

    /// Body style for `index`, given its measured content height if known
    pub fn body_style(&self, index: usize, measured_height: Option<u32>) -> BodyStyle {
        if self.is_expanded(index) {
            BodyStyle::expanded(measured_height)
        } else {
            BodyStyle::collapsed()
        }
    }
}
