//! Navigation targets and the collapsible mobile menu

/// Pages reachable from the navigation shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    About,
    Contact,
}

impl NavTarget {
    /// Link order in the header
    pub const ALL: [Self; 3] = [Self::Home, Self::About, Self::Contact];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

/// Expanded/collapsed state of the mobile menu; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// State after a navigation link was activated, whether or not the route
    /// actually changed
    #[must_use]
    pub const fn after_navigation(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_closes_on_navigation() {
        let menu = MenuState::default();
        assert!(!menu.is_open());

        let menu = menu.toggled();
        assert!(menu.is_open());
        assert!(!menu.toggled().is_open());

        assert!(!menu.after_navigation().is_open());
        assert!(!MenuState::default().after_navigation().is_open());
    }

    #[test]
    fn current_page_link_still_closes_the_menu() {
        let menu = MenuState::default().toggled();
        let current = NavTarget::About;

        // Same target as the current page: no route change follows
        let menu = menu.after_navigation();
        assert!(!menu.is_open(), "menu stayed open after tapping {current:?}");

        // Reopening afterwards starts from the closed state
        assert!(menu.toggled().is_open());
    }

    #[test]
    fn paths_are_the_three_routes() {
        let paths: Vec<_> = NavTarget::ALL.into_iter().map(NavTarget::path).collect();
        assert_eq!(paths, ["/", "/about", "/contact"]);
    }
}
