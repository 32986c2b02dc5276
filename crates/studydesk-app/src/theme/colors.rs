//! Color definitions for the StudyDesk theme

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from 0-255 values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Create with alpha
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }
}

/// Theme color palette
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // === Backgrounds ===
    /// Page background
    pub background: Rgba,
    /// Card/panel background
    pub surface: Rgba,
    /// Elevated surface (modals)
    pub surface_elevated: Rgba,
    /// Input field background
    pub input_bg: Rgba,

    // === Brand ===
    /// Primary brand color
    pub primary: Rgba,
    /// Primary hover state
    pub primary_hover: Rgba,

    // === Text ===
    /// Primary text
    pub text_primary: Rgba,
    /// Secondary/muted text
    pub text_secondary: Rgba,
    /// Disabled text
    pub text_disabled: Rgba,

    // === Status ===
    pub success: Rgba,
    pub warning: Rgba,
    pub error: Rgba,

    // === UI Elements ===
    /// Border color
    pub border: Rgba,
    /// Divider color
    pub divider: Rgba,
    /// Hover state overlay
    pub hover: Rgba,
}

impl ThemeColors {
    /// Dark palette (the default)
    pub fn dark() -> Self {
        Self {
            background: Rgba::rgb(0x0f1117),
            surface: Rgba::rgb(0x1a1d27),
            surface_elevated: Rgba::rgb(0x232734),
            input_bg: Rgba::rgb(0x161922),

            primary: Rgba::rgb(0x4364f7),
            primary_hover: Rgba::rgb(0x5a78ff),

            text_primary: Rgba::rgb(0xeceff4),
            text_secondary: Rgba::rgb(0x8b949e),
            text_disabled: Rgba::rgb(0x5c6370),

            success: Rgba::rgb(0x3fb950),
            warning: Rgba::rgb(0xd29922),
            error: Rgba::rgb(0xf85149),

            border: Rgba::rgb(0x30363d),
            divider: Rgba::rgb(0x262b35),
            hover: Rgba::rgb(0xb1bac4).with_alpha(0.12),
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Self {
            background: Rgba::rgb(0xf8f9fb),
            surface: Rgba::rgb(0xffffff),
            surface_elevated: Rgba::rgb(0xffffff),
            input_bg: Rgba::rgb(0xf1f3f6),

            primary: Rgba::rgb(0x4364f7),
            primary_hover: Rgba::rgb(0x2e4cd8),

            text_primary: Rgba::rgb(0x1a1d27),
            text_secondary: Rgba::rgb(0x57606a),
            text_disabled: Rgba::rgb(0x9aa2ab),

            success: Rgba::rgb(0x1a7f37),
            warning: Rgba::rgb(0x9a6700),
            error: Rgba::rgb(0xcf222e),

            border: Rgba::rgb(0xd0d7de),
            divider: Rgba::rgb(0xe4e8ec),
            hover: Rgba::rgb(0x1a1d27).with_alpha(0.06),
        }
    }
}
