use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::models::NavItem;

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open: a cursor on the boundary belongs to the section below.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Geometry lookup for on-page sections.
pub trait SectionLayout {
    /// Bounds of the element with this id, or `None` if it is not rendered.
    fn section_bounds(&self, id: &str) -> Option<SectionBounds>;
}

impl<K> SectionLayout for HashMap<K, SectionBounds>
where
    K: Borrow<str> + Eq + Hash,
{
    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        self.get(id).copied()
    }
}

/// Name of the first anchor item whose section contains
/// `scroll_offset + anchor_offset`.
///
/// External items and items whose section is missing are skipped. `None`
/// means no section is under the cursor; callers keep their current
/// selection in that case.
pub fn resolve<'a, L>(
    items: &'a [NavItem],
    layout: &L,
    scroll_offset: f64,
    anchor_offset: f64,
) -> Option<&'a str>
where
    L: SectionLayout + ?Sized,
{
    let cursor = scroll_offset + anchor_offset;

    items
        .iter()
        .filter_map(|item| {
            let bounds = layout.section_bounds(item.section_id()?)?;
            Some((item, bounds))
        })
        .find(|(_, bounds)| bounds.contains(cursor))
        .map(|(item, _)| item.name.as_str())
}
