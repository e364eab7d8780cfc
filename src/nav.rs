/// A top-level page reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Document title shown while the page is mounted.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Portfolio",
            Page::About => "About Me",
            Page::Contact => "Contact",
        }
    }

    /// Exact match only: `/about/` and `/about/team` are not `/about`.
    pub fn from_path(path: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    pub fn is_active(self, current_path: &str) -> bool {
        self.path() == current_path
    }
}

/// Open/closed state of the collapsible mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Called whenever a navigation link is activated.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Route changed to `path`, however it happened (link, brand, history). Closes the panel
    /// and resolves the page now shown, if it is one of ours.
    pub fn navigated(&mut self, path: &str) -> Option<Page> {
        self.close();
        Page::from_path(path)
    }
}

/// Where a navigation link is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Desktop,
    Mobile,
}

pub fn link_class(placement: Placement, active: bool) -> &'static str {
    match (placement, active) {
        (Placement::Desktop, true) => {
            "capitalize hover:text-gold transition-colors duration-300 relative group text-gold"
        }
        (Placement::Desktop, false) => {
            "capitalize hover:text-gold transition-colors duration-300 relative group text-ink"
        }
        (Placement::Mobile, true) => {
            "block w-full text-left capitalize hover:text-gold transition-all duration-300 text-lg text-gold font-semibold"
        }
        (Placement::Mobile, false) => {
            "block w-full text-left capitalize hover:text-gold transition-all duration-300 text-lg text-ink"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_route_matching() {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path("/about"), Some(Page::About));
        assert_eq!(Page::from_path("/contact"), Some(Page::Contact));

        // no prefix matching, no trailing slash folding, case sensitive
        assert_eq!(Page::from_path("/about/"), None);
        assert_eq!(Page::from_path("/about/team"), None);
        assert_eq!(Page::from_path("/About"), None);
        assert_eq!(Page::from_path("/contacts"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn test_single_active_item() {
        for page in Page::ALL {
            let active = Page::ALL
                .iter()
                .filter(|p| p.is_active(page.path()))
                .collect::<Vec<_>>();
            assert_eq!(active, vec![&page]);
        }
        assert!(Page::ALL.iter().all(|p| !p.is_active("/blog")));
    }

    #[test]
    fn test_paths_and_labels_unique() {
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in &Page::ALL[i + 1..] {
                assert_ne!(a.path(), b.path());
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());

        // closing an already closed menu is a no-op
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_closes_on_any_route_change() {
        let mut menu = MenuState::default();

        // the brand link targets "/" without going through a nav list item
        menu.toggle();
        assert_eq!(menu.navigated("/"), Some(Page::Home));
        assert!(!menu.is_open());

        menu.toggle();
        assert_eq!(menu.navigated("/contact"), Some(Page::Contact));
        assert!(!menu.is_open());

        // history navigation can land anywhere, including unknown routes
        menu.toggle();
        assert_eq!(menu.navigated("/does/not/exist"), None);
        assert!(!menu.is_open());

        assert_eq!(menu.navigated("/about"), Some(Page::About));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_class_highlights_active() {
        assert!(link_class(Placement::Desktop, true).contains("text-gold"));
        assert!(link_class(Placement::Desktop, false).ends_with("text-ink"));
        assert!(link_class(Placement::Mobile, true).contains("font-semibold"));
        assert!(!link_class(Placement::Mobile, false).contains("font-semibold"));
    }
}
