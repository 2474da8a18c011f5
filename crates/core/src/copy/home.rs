use super::ThemeTable;

pub const HOME_HEADING: &str = "Welcome to MultiTheme Store";
pub const LOADING_LABEL: &str = "Loading products...";

/// Home view presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeCopy {
    pub heading_class: &'static str,
    pub subtitle: &'static str,
    pub subtitle_class: &'static str,
    pub cta_label: &'static str,
    pub section_heading_class: &'static str,
    pub grid_class: &'static str,
    pub card_class: &'static str,
    pub product_title_class: &'static str,
    pub price_class: &'static str,
    pub add_label: &'static str,
    pub add_button_class: &'static str,
}

pub static HOME: ThemeTable<HomeCopy> = ThemeTable {
    minimal: HomeCopy {
        heading_class: "text-2xl md:text-4xl",
        subtitle: "Clean, simple shopping experience with quality products.",
        subtitle_class: "text-base",
        cta_label: "Shop Now",
        section_heading_class: "text-xl",
        grid_class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
        card_class: "hover:-translate-y-0.5 hover:scale-[1.02]",
        product_title_class: "text-base",
        price_class: "text-lg",
        add_label: "Add to Cart",
        add_button_class: "rounded-md",
    },
    dark: HomeCopy {
        heading_class: "text-3xl md:text-5xl",
        subtitle: "Discover premium products in our elegant, sophisticated marketplace.",
        subtitle_class: "text-base",
        cta_label: "Shop Now",
        section_heading_class: "text-xl",
        grid_class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
        card_class: "hover:-translate-y-1 hover:scale-[1.02]",
        product_title_class: "text-lg",
        price_class: "text-lg",
        add_label: "Add to Cart",
        add_button_class: "rounded-md",
    },
    colorful: HomeCopy {
        heading_class: "text-4xl md:text-6xl",
        subtitle: "Colorful collection of amazing products just for you! 🌈✨",
        subtitle_class: "text-lg",
        cta_label: "🛍️ Start Shopping",
        section_heading_class: "text-2xl",
        grid_class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4",
        card_class: "hover:-translate-y-0.5 hover:scale-105 hover:rotate-1",
        product_title_class: "text-base",
        price_class: "text-xl",
        add_label: "💝 Add",
        add_button_class: "rounded-full",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn grid_density_grows_with_the_theme() {
        assert!(HOME.get(Theme::Dark).grid_class.contains("lg:grid-cols-2"));
        assert!(HOME.get(Theme::Minimal).grid_class.contains("lg:grid-cols-3"));
        assert!(HOME.get(Theme::Colorful).grid_class.contains("xl:grid-cols-4"));
    }
}
