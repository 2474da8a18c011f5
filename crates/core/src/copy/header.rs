use super::ThemeTable;

/// Navigation shell presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCopy {
    pub brand: &'static str,
}

pub static HEADER: ThemeTable<HeaderCopy> = ThemeTable {
    minimal: HeaderCopy {
        brand: "MultiThemeApp",
    },
    dark: HeaderCopy {
        brand: "MultiThemeApp",
    },
    colorful: HeaderCopy {
        brand: "🎨 MultiTheme",
    },
};

/// A card in the dark theme's side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarFeature {
    pub title: &'static str,
    pub body: &'static str,
}

pub const SIDEBAR_FEATURES: [SidebarFeature; 3] = [
    SidebarFeature {
        title: "Layout",
        body: "Sophisticated sidebar design with elegant spacing",
    },
    SidebarFeature {
        title: "Typography",
        body: "Premium serif fonts for enhanced readability",
    },
    SidebarFeature {
        title: "Experience",
        body: "Refined user interface with smooth interactions",
    },
];
