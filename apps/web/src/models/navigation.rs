/// SVG path data drawn inside a 24x24 viewBox, the same way the landing
/// page draws its card icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon(pub &'static str);

impl Icon {
    pub fn path(&self) -> &'static str {
        self.0
    }
}

/// Where a navigation item points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget<'a> {
    /// A section on the current page, by element id (without the `#`).
    Anchor(&'a str),
    /// Anything else: another route, another site.
    External(&'a str),
}

/// One entry of the navigation bar. `name` is the item's identity and must
/// be unique within a bar.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub name: String,
    pub url: String,
    pub icon: Option<Icon>,
}

impl NavItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn target(&self) -> NavTarget<'_> {
        match self.url.strip_prefix('#') {
            Some(id) if !id.is_empty() => NavTarget::Anchor(id),
            _ => NavTarget::External(&self.url),
        }
    }

    /// Element id of the section this item scrolls to, if it is an anchor.
    pub fn section_id(&self) -> Option<&str> {
        match self.target() {
            NavTarget::Anchor(id) => Some(id),
            NavTarget::External(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        let item = NavItem::new("About", "#about");
        assert_eq!(item.target(), NavTarget::Anchor("about"));
        assert_eq!(item.section_id(), Some("about"));
    }

    #[test]
    fn test_external_targets() {
        assert_eq!(NavItem::new("Docs", "/docs").target(), NavTarget::External("/docs"));
        assert_eq!(
            NavItem::new("Paper", "https://arxiv.org/abs/2601.19029").target(),
            NavTarget::External("https://arxiv.org/abs/2601.19029")
        );
        // A route with a fragment still leaves the page
        assert_eq!(NavItem::new("Home", "/#home").section_id(), None);
    }

    #[test]
    fn test_bare_hash_is_not_an_anchor() {
        let item = NavItem::new("Top", "#");
        assert_eq!(item.target(), NavTarget::External("#"));
        assert_eq!(item.section_id(), None);
    }
}
