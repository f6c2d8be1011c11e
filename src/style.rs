// ABOUTME: Style resolution shared by the live preview and the exported bundle
// ABOUTME: Maps text styles, slide overrides and viewports to concrete CSS values

use crate::model::{ButtonVariant, Slide, SliderConfig, TextAlign, TextStyle};
use std::fmt;
use std::str::FromStr;

/// Text role governed by one `TextStyle` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Title,
    Subtitle,
    Button,
}

impl Role {
    pub fn style(self, config: &SliderConfig) -> &TextStyle {
        match self {
            Role::Title => &config.title_style,
            Role::Subtitle => &config.subtitle_style,
            Role::Button => &config.button_style,
        }
    }

    fn slide_override(self, slide: &Slide) -> Option<TextAlign> {
        let overrides = slide.alignment.as_ref()?;
        match self {
            Role::Title => overrides.title,
            Role::Subtitle => overrides.subtitle,
            Role::Button => overrides.button,
        }
    }

    /// Color used for the role's text when no positional rule applies
    pub fn base_color(self) -> ColorRole {
        match self {
            Role::Title => ColorRole::Title,
            Role::Subtitle => ColorRole::Subtitle,
            Role::Button => ColorRole::ButtonText,
        }
    }
}

/// One theme color, exposed to the stylesheet as a custom property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Background,
    Button,
    ButtonText,
    Title,
    Subtitle,
    Accent,
    Dot,
    DotActive,
    Arrow,
}

impl ColorRole {
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Background,
        ColorRole::Button,
        ColorRole::ButtonText,
        ColorRole::Title,
        ColorRole::Subtitle,
        ColorRole::Accent,
        ColorRole::Dot,
        ColorRole::DotActive,
        ColorRole::Arrow,
    ];

    pub fn css_var(self) -> &'static str {
        match self {
            ColorRole::Background => "--sl-bg",
            ColorRole::Button => "--sl-button",
            ColorRole::ButtonText => "--sl-button-text",
            ColorRole::Title => "--sl-title",
            ColorRole::Subtitle => "--sl-subtitle",
            ColorRole::Accent => "--sl-accent",
            ColorRole::Dot => "--sl-dot",
            ColorRole::DotActive => "--sl-dot-active",
            ColorRole::Arrow => "--sl-arrow",
        }
    }

    /// `var(--sl-...)` reference for use in declarations
    pub fn css_ref(self) -> String {
        format!("var({})", self.css_var())
    }

    /// Concrete color value. Text roles honor their style's color override.
    pub fn value(self, config: &SliderConfig) -> &str {
        match self {
            ColorRole::Background => &config.background_color,
            ColorRole::Button => &config.button_color,
            ColorRole::ButtonText => config
                .button_style
                .color
                .as_deref()
                .unwrap_or(&config.button_text_color),
            ColorRole::Title => config
                .title_style
                .color
                .as_deref()
                .unwrap_or(&config.title_color),
            ColorRole::Subtitle => config
                .subtitle_style
                .color
                .as_deref()
                .unwrap_or(&config.subtitle_color),
            ColorRole::Accent => &config.accent_color,
            ColorRole::Dot => &config.dot_color,
            ColorRole::DotActive => &config.dot_active_color,
            ColorRole::Arrow => &config.arrow_color,
        }
    }
}

impl TextAlign {
    pub fn css_text_align(self) -> &'static str {
        self.as_str()
    }

    /// Cross-axis placement for a column of lines
    pub fn align_items(self) -> &'static str {
        match self {
            TextAlign::Left => "flex-start",
            TextAlign::Center => "center",
            TextAlign::Right => "flex-end",
            TextAlign::Justify => "stretch",
        }
    }

    /// Main-axis distribution for a row of buttons
    pub fn justify_content(self) -> &'static str {
        match self {
            TextAlign::Left => "flex-start",
            TextAlign::Center => "center",
            TextAlign::Right => "flex-end",
            TextAlign::Justify => "space-between",
        }
    }
}

/// Device frame the carousel is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Tablet,
    Desktop,
}

impl Viewport {
    pub fn size(self) -> (u32, u32) {
        match self {
            Viewport::Mobile => (340, 700),
            Viewport::Tablet => (500, 700),
            Viewport::Desktop => (800, 600),
        }
    }

    pub fn font_scale(self) -> f64 {
        match self {
            Viewport::Mobile => 1.0,
            Viewport::Tablet => 1.1,
            Viewport::Desktop => 1.2,
        }
    }

    /// Share of the frame height taken by the slide image
    pub fn image_height(self) -> &'static str {
        match self {
            Viewport::Desktop => "40%",
            Viewport::Mobile | Viewport::Tablet => "50%",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Viewport::Mobile => "mobile",
            Viewport::Tablet => "tablet",
            Viewport::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Viewport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Viewport::Mobile),
            "tablet" => Ok(Viewport::Tablet),
            "desktop" => Ok(Viewport::Desktop),
            other => Err(format!(
                "unknown viewport {:?} (expected mobile, tablet or desktop)",
                other
            )),
        }
    }
}

/// Concrete presentation values for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTextStyle {
    pub font_size: f64,
    pub letter_spacing: f64,
    pub align: TextAlign,
    pub color: ColorRole,
}

impl ResolvedTextStyle {
    /// Declarations for the role's typography rule
    pub fn typography_css(&self) -> String {
        format!(
            "font-size:{};letter-spacing:{}",
            px(self.font_size),
            px(self.letter_spacing)
        )
    }
}

/// Format a pixel length exactly as given.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Apply a viewport font scale. Unscaled values pass through untouched; scaled
/// ones drop only the binary noise of the multiplication (below a millionth of a pixel).
fn scale_length(value: f64, scale: f64) -> f64 {
    if scale == 1.0 {
        return value;
    }
    (value * scale * 1e6).round() / 1e6
}

/// Alignment order: slide override, then shared role style, then center.
pub fn resolve_alignment(config: &SliderConfig, role: Role, slide: Option<&Slide>) -> TextAlign {
    slide
        .and_then(|s| role.slide_override(s))
        .unwrap_or(role.style(config).text_align)
}

/// Resolve a role's style. Sizes pass through unclamped; only the viewport scale applies.
pub fn resolve_text_style(
    config: &SliderConfig,
    role: Role,
    slide: Option<&Slide>,
    viewport: Option<Viewport>,
) -> ResolvedTextStyle {
    let style = role.style(config);
    let scale = viewport.map(Viewport::font_scale).unwrap_or(1.0);
    ResolvedTextStyle {
        font_size: scale_length(style.font_size, scale),
        letter_spacing: style.letter_spacing,
        align: resolve_alignment(config, role, slide),
        color: role.base_color(),
    }
}

/// Declarations for a block of stacked lines (title or subtitle)
pub fn block_alignment_css(align: TextAlign) -> String {
    format!(
        "text-align:{};align-items:{}",
        align.css_text_align(),
        align.align_items()
    )
}

/// Declarations for the button row
pub fn row_alignment_css(align: TextAlign) -> String {
    format!(
        "text-align:{};justify-content:{};align-items:{}",
        align.css_text_align(),
        align.justify_content(),
        align.align_items()
    )
}

/// The second title line takes the accent color; every other line keeps the title color.
pub fn title_line_color(line_index: usize) -> ColorRole {
    if line_index == 1 {
        ColorRole::Accent
    } else {
        ColorRole::Title
    }
}

pub fn subtitle_line_color(_line_index: usize) -> ColorRole {
    ColorRole::Subtitle
}

/// Colors for one button variant. `None` background means transparent, `None` border means none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub background: Option<ColorRole>,
    pub text: ColorRole,
    pub border: Option<ColorRole>,
}

impl ButtonColors {
    pub fn css(&self) -> String {
        let background = self
            .background
            .map(ColorRole::css_ref)
            .unwrap_or_else(|| "transparent".to_string());
        let border = self
            .border
            .map(|c| format!("3px solid {}", c.css_ref()))
            .unwrap_or_else(|| "none".to_string());
        format!(
            "background:{};color:{};border:{}",
            background,
            self.text.css_ref(),
            border
        )
    }
}

pub fn button_colors(variant: ButtonVariant) -> ButtonColors {
    match variant {
        ButtonVariant::Primary => ButtonColors {
            background: Some(ColorRole::Button),
            text: ColorRole::ButtonText,
            border: None,
        },
        ButtonVariant::Outline => ButtonColors {
            background: None,
            text: ColorRole::Title,
            border: Some(ColorRole::Title),
        },
    }
}
