//! Per-theme copy, classes and iconography for every view.
//!
//! Views never branch on the theme themselves; they look their presentation up
//! in one [`ThemeTable`] per view. A table has a slot for every theme, so an
//! unhandled theme does not compile.

mod about;
mod contact;
mod header;
mod home;

pub use about::{ABOUT, AboutCopy, FeatureCopy};
pub use contact::{CONTACT, ContactCopy, FieldCopy, InfoIcons};
pub use header::{HEADER, HeaderCopy, SIDEBAR_FEATURES, SidebarFeature};
pub use home::{HOME, HOME_HEADING, HomeCopy, LOADING_LABEL};

use crate::theme::Theme;

/// One value per theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTable<T> {
    pub minimal: T,
    pub dark: T,
    pub colorful: T,
}

impl<T> ThemeTable<T> {
    #[must_use]
    pub const fn get(&self, theme: Theme) -> &T {
        match theme {
            Theme::Minimal => &self.minimal,
            Theme::Dark => &self.dark,
            Theme::Colorful => &self.colorful,
        }
    }
}

/// Company contact details shared by About and Contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyDetails {
    pub name: &'static str,
    pub address_lines: [&'static str; 2],
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub registration: &'static str,
}

pub const COMPANY: CompanyDetails = CompanyDetails {
    name: "MultiThemeApp Pte. Ltd.",
    address_lines: ["#01-04, 75 Ayer Rajah", "India"],
    phone: "+91 12345 67890",
    email: "hr@multithemeapp-inc.com",
    website: "www.multithemeapp-inc.com",
    registration: "UEN: 1244321408D | © 2025 MultiThemeApp Pte. Ltd. All rights reserved.",
};

/// Office hours as `(days, hours)` rows
pub const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];
