//! Region registry shared between the session controller and the renderer.
//!
//! The controller decides what each region says and whether it reacts to
//! clicks; the renderer only draws the registry and maps mouse positions
//! back to region ids.

use clicktoe_rules::{Cell, Symbol};
use derive_getters::Getters;
use ratatui::layout::{Position, Rect};
use std::collections::BTreeMap;

/// Identifies a clickable or display-only region.
///
/// Variant order is draw order: later regions are drawn on top and win
/// hit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionId {
    /// One of the nine board cells.
    Cell(Cell),
    /// Status line under the board.
    Status,
    /// Close button.
    Close,
    /// Frame around the first-mover buttons.
    WhoFirst,
    /// "BOT moves first" button.
    ChooseBot,
    /// "YOU move first" button.
    ChooseHuman,
    /// Winner banner, click to play again.
    Winner,
    /// Draw prompt, click to play again.
    Reset,
}

/// Colour role of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Default terminal colour.
    Plain,
    /// Highlighted prompt text.
    Accent,
    /// Attention-grabbing text.
    Alert,
    /// De-emphasised text.
    Muted,
    /// A placed symbol.
    Mark(Symbol),
}

/// A run of text with one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The text.
    pub text: String,
    /// How to colour it.
    pub tone: Tone,
}

/// What one region shows and whether it takes clicks.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Region {
    rect: Rect,
    title: Option<String>,
    body: Vec<Fragment>,
    clickable: bool,
}

impl Region {
    /// Creates an empty, inert region.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            title: None,
            body: Vec::new(),
            clickable: false,
        }
    }

    /// Sets the border title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a text fragment.
    pub fn with_text(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.body.push(Fragment {
            text: text.into(),
            tone,
        });
        self
    }

    /// Sets whether the region reacts to clicks.
    pub fn with_clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// The body as plain text.
    pub fn text(&self) -> String {
        self.body.iter().map(|f| f.text.as_str()).collect()
    }
}

/// All regions currently registered, plus the terminal size.
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    regions: BTreeMap<RegionId, Region>,
    width: u16,
    height: u16,
}

impl RegionMap {
    /// Creates an empty registry for a terminal of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            regions: BTreeMap::new(),
            width,
            height,
        }
    }

    /// Registers or replaces a region.
    pub fn set(&mut self, id: RegionId, region: Region) {
        self.regions.insert(id, region);
    }

    /// Removes a region, returning it if it was present.
    pub fn clear(&mut self, id: RegionId) -> Option<Region> {
        self.regions.remove(&id)
    }

    /// Looks up a region.
    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    /// Checks whether a region exists and takes clicks.
    pub fn is_clickable(&self, id: RegionId) -> bool {
        self.regions.get(&id).is_some_and(|r| r.clickable)
    }

    /// Turns click handling for a region on or off.
    pub fn set_clickable(&mut self, id: RegionId, clickable: bool) {
        if let Some(region) = self.regions.get_mut(&id) {
            region.clickable = clickable;
        }
    }

    /// Replaces a region's title.
    pub fn set_title(&mut self, id: RegionId, title: impl Into<String>) {
        if let Some(region) = self.regions.get_mut(&id) {
            region.title = Some(title.into());
        }
    }

    /// Moves a region.
    pub fn set_rect(&mut self, id: RegionId, rect: Rect) {
        if let Some(region) = self.regions.get_mut(&id) {
            region.rect = rect;
        }
    }

    /// Iterates over regions in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions.iter().map(|(id, region)| (*id, region))
    }

    /// The topmost clickable region under a terminal position.
    pub fn hit(&self, column: u16, row: u16) -> Option<RegionId> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(_, region)| region.clickable && region.rect.contains(position))
            .map(|(id, _)| *id)
    }

    /// Terminal width and height.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Records a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}
