//! Theme configuration for the Home Value GUI
//!
//! Provides dark and light theme variants with a consistent color scheme
//! for the appraisal interface.

use gpui::*;

/// Theme colors for the application
#[allow(dead_code)]
#[derive(Clone)]
pub struct Theme {
    // Backgrounds - layered for visual hierarchy
    pub background: Hsla,
    pub sidebar_bg: Hsla,
    pub card_bg: Hsla,
    pub card_bg_elevated: Hsla,
    pub hover_bg: Hsla,

    // Text hierarchy
    pub text: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub text_dimmed: Hsla,

    // Borders
    pub border: Hsla,
    pub border_subtle: Hsla,

    // Accent colors
    pub accent: Hsla,
    pub accent_hover: Hsla,
    pub accent_subtle: Hsla,

    // Semantic colors
    pub positive: Hsla,
    pub positive_subtle: Hsla,
    pub negative: Hsla,
    pub negative_subtle: Hsla,
    pub warning: Hsla,
    pub warning_subtle: Hsla,

    // Navigation
    pub nav_active_indicator: Hsla,
    pub nav_hover: Hsla,
}

impl Theme {
    /// Dark theme, the default for the appraisal interface
    pub fn dark() -> Self {
        Self {
            // Dark backgrounds - layered for depth
            background: hsla(216.0 / 360.0, 0.14, 0.09, 1.0),
            sidebar_bg: hsla(216.0 / 360.0, 0.16, 0.07, 1.0),
            card_bg: hsla(216.0 / 360.0, 0.13, 0.12, 1.0),
            card_bg_elevated: hsla(216.0 / 360.0, 0.13, 0.15, 1.0),
            hover_bg: hsla(216.0 / 360.0, 0.15, 0.17, 1.0),

            // Text - contrast hierarchy
            text: hsla(0.0, 0.0, 0.96, 1.0),
            text_secondary: hsla(216.0 / 360.0, 0.08, 0.80, 1.0),
            text_muted: hsla(216.0 / 360.0, 0.10, 0.58, 1.0),
            text_dimmed: hsla(216.0 / 360.0, 0.08, 0.44, 1.0),

            // Borders
            border: hsla(216.0 / 360.0, 0.13, 0.21, 1.0),
            border_subtle: hsla(216.0 / 360.0, 0.11, 0.15, 1.0),

            // Accent - warm amber
            accent: hsla(36.0 / 360.0, 0.88, 0.55, 1.0),
            accent_hover: hsla(36.0 / 360.0, 0.92, 0.62, 1.0),
            accent_subtle: hsla(36.0 / 360.0, 0.80, 0.52, 0.16),

            // Positive - green (successful appraisal / saved message)
            positive: hsla(150.0 / 360.0, 0.70, 0.46, 1.0),
            positive_subtle: hsla(150.0 / 360.0, 0.62, 0.44, 0.16),

            // Negative - red
            negative: hsla(5.0 / 360.0, 0.74, 0.55, 1.0),
            negative_subtle: hsla(5.0 / 360.0, 0.68, 0.50, 0.16),

            // Warning - amber (missing artifacts)
            warning: hsla(42.0 / 360.0, 0.90, 0.52, 1.0),
            warning_subtle: hsla(42.0 / 360.0, 0.82, 0.50, 0.16),

            // Navigation
            nav_active_indicator: hsla(36.0 / 360.0, 0.88, 0.55, 1.0),
            nav_hover: hsla(216.0 / 360.0, 0.18, 0.14, 1.0),
        }
    }

    /// Light theme variant
    #[allow(dead_code)]
    pub fn light() -> Self {
        Self {
            background: hsla(216.0 / 360.0, 0.10, 0.97, 1.0),
            sidebar_bg: hsla(216.0 / 360.0, 0.08, 0.93, 1.0),
            card_bg: hsla(0.0, 0.0, 1.0, 1.0),
            card_bg_elevated: hsla(216.0 / 360.0, 0.05, 0.99, 1.0),
            hover_bg: hsla(216.0 / 360.0, 0.12, 0.91, 1.0),

            text: hsla(216.0 / 360.0, 0.24, 0.12, 1.0),
            text_secondary: hsla(216.0 / 360.0, 0.15, 0.30, 1.0),
            text_muted: hsla(216.0 / 360.0, 0.10, 0.46, 1.0),
            text_dimmed: hsla(216.0 / 360.0, 0.08, 0.58, 1.0),

            border: hsla(216.0 / 360.0, 0.14, 0.85, 1.0),
            border_subtle: hsla(216.0 / 360.0, 0.10, 0.91, 1.0),

            accent: hsla(36.0 / 360.0, 0.85, 0.45, 1.0),
            accent_hover: hsla(36.0 / 360.0, 0.88, 0.50, 1.0),
            accent_subtle: hsla(36.0 / 360.0, 0.80, 0.45, 0.12),

            positive: hsla(150.0 / 360.0, 0.66, 0.36, 1.0),
            positive_subtle: hsla(150.0 / 360.0, 0.58, 0.36, 0.12),

            negative: hsla(5.0 / 360.0, 0.70, 0.50, 1.0),
            negative_subtle: hsla(5.0 / 360.0, 0.64, 0.48, 0.12),

            warning: hsla(42.0 / 360.0, 0.86, 0.46, 1.0),
            warning_subtle: hsla(42.0 / 360.0, 0.78, 0.46, 0.12),

            nav_active_indicator: hsla(36.0 / 360.0, 0.85, 0.45, 1.0),
            nav_hover: hsla(216.0 / 360.0, 0.12, 0.89, 1.0),
        }
    }
}
