use super::ThemeTable;

/// One card of the features grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCopy {
    pub title: &'static str,
    pub description: &'static str,
}

/// About view presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutCopy {
    pub container_class: &'static str,
    pub title: &'static str,
    pub title_class: &'static str,
    pub intro: &'static str,
    pub intro_class: &'static str,
    pub features_heading: &'static str,
    pub heading_class: &'static str,
    pub features_grid_class: &'static str,
    pub feature_card_class: &'static str,
    pub feature_title_class: &'static str,
    pub features: [FeatureCopy; 6],
    pub company_heading: &'static str,
    pub company_grid_class: &'static str,
}

const TECHNICAL_FEATURES: [FeatureCopy; 6] = [
    FeatureCopy {
        title: "Multi-Theme System",
        description: "Dynamic theme switching with distinct layouts, typography, and visual styles.",
    },
    FeatureCopy {
        title: "Persistent Storage",
        description: "LocalStorage integration ensures theme preferences persist across sessions.",
    },
    FeatureCopy {
        title: "Responsive Design",
        description: "Fully responsive layouts optimized for all device sizes and orientations.",
    },
    FeatureCopy {
        title: "Performance Optimized",
        description: "Optimized font loading, efficient re-renders, and smooth animations.",
    },
    FeatureCopy {
        title: "Security First",
        description: "Content Security Policy, input sanitization, and secure API practices.",
    },
    FeatureCopy {
        title: "API Integration",
        description: "Live data integration with a public product API and error handling.",
    },
];

pub static ABOUT: ThemeTable<AboutCopy> = ThemeTable {
    minimal: AboutCopy {
        container_class: "max-w-3xl mx-auto",
        title: "About MultiTheme App",
        title_class: "text-xl sm:text-2xl lg:text-4xl",
        intro: "A clean, efficient demonstration of theming capabilities with Rust, WebAssembly and modern web practices.",
        intro_class: "text-sm sm:text-base",
        features_heading: "Technical Features",
        heading_class: "text-lg sm:text-xl",
        features_grid_class: "grid-cols-1 md:grid-cols-2 lg:grid-cols-3",
        feature_card_class: "shadow-md hover:scale-[1.02]",
        feature_title_class: "text-sm sm:text-base",
        features: TECHNICAL_FEATURES,
        company_heading: "Company Information",
        company_grid_class: "grid-cols-1 md:grid-cols-2",
    },
    dark: AboutCopy {
        container_class: "max-w-4xl mx-auto",
        title: "About MultiTheme App",
        title_class: "text-2xl sm:text-3xl lg:text-5xl",
        intro: "An elegant showcase of sophisticated theme architecture, demonstrating advanced component patterns and premium user experience design.",
        intro_class: "text-sm sm:text-base",
        features_heading: "Technical Features",
        heading_class: "text-lg sm:text-xl",
        features_grid_class: "grid-cols-1 lg:grid-cols-2",
        feature_card_class: "shadow-md hover:scale-[1.02]",
        feature_title_class: "text-base sm:text-lg",
        features: TECHNICAL_FEATURES,
        company_heading: "Company Information",
        company_grid_class: "grid-cols-1 lg:grid-cols-2",
    },
    colorful: AboutCopy {
        container_class: "text-center",
        title: "🌟 About Our Amazing Team!",
        title_class: "text-3xl sm:text-4xl lg:text-6xl",
        intro: "Welcome to our super fun and colorful world! 🎨✨ We love creating amazing experiences that make you smile! 😊",
        intro_class: "text-base sm:text-lg",
        features_heading: "🚀 Cool Features",
        heading_class: "text-xl sm:text-2xl",
        features_grid_class: "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3",
        feature_card_class: "shadow-lg hover:shadow-xl hover:scale-105 hover:rotate-2",
        feature_title_class: "text-sm sm:text-base",
        features: [
            FeatureCopy {
                title: "🎨 Three Amazing Themes",
                description: "Switch between minimalist, dark, and our super colorful theme!",
            },
            FeatureCopy {
                title: "💾 Memory Magic",
                description: "Your favorite theme stays with you even after closing the app!",
            },
            FeatureCopy {
                title: "📱 Works Everywhere",
                description: "Looks fantastic on phones, tablets, and computers!",
            },
            FeatureCopy {
                title: "⚡ Super Fast",
                description: "Lightning-fast animations and smooth transitions!",
            },
            FeatureCopy {
                title: "🔒 Safe & Secure",
                description: "Built with the latest security features to keep you safe!",
            },
            FeatureCopy {
                title: "🛍️ Shopping Fun",
                description: "Real products from a cool shopping API!",
            },
        ],
        company_heading: "🏢 About Hipster Company",
        company_grid_class: "grid-cols-1",
    },
};
