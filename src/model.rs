// ABOUTME: Data model for slider decks: slides, buttons, text styles and the shared theme
// ABOUTME: Serializes to the camelCase JSON shape used by the raw configuration export

use crate::errors::{Result, SliderError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Horizontal alignment of a text role.
///
/// Unknown keywords coming from hand-edited JSON fall back to `Center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }

    /// Parse a keyword, falling back to `Center` for anything unrecognized.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => TextAlign::Left,
            "center" => TextAlign::Center,
            "right" => TextAlign::Right,
            "justify" => TextAlign::Justify,
            other => {
                warn!("Unknown text alignment {:?}, using center", other);
                TextAlign::Center
            }
        }
    }
}

impl From<String> for TextAlign {
    fn from(value: String) -> Self {
        TextAlign::parse_lenient(&value)
    }
}

impl From<TextAlign> for String {
    fn from(value: TextAlign) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual treatment of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
        }
    }
}

impl From<String> for ButtonVariant {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "outline" => ButtonVariant::Outline,
            "primary" => ButtonVariant::Primary,
            other => {
                warn!("Unknown button variant {:?}, using primary", other);
                ButtonVariant::Primary
            }
        }
    }
}

impl From<ButtonVariant> for String {
    fn from(value: ButtonVariant) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideButton {
    pub id: String,
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub variant: ButtonVariant,
}

/// Per-slide alignment overrides. Absent roles use the shared config value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideAlignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<TextAlign>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(default)]
    pub subtitle: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub buttons: Vec<SlideButton>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<SlideAlignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TextStyle {
    pub fn new(font_size: f64, letter_spacing: f64) -> Self {
        Self {
            font_size,
            letter_spacing,
            text_align: TextAlign::Center,
            color: None,
        }
    }
}

fn default_title_style() -> TextStyle {
    TextStyle::new(28.0, 0.0)
}

fn default_subtitle_style() -> TextStyle {
    TextStyle::new(16.0, 0.0)
}

fn default_button_style() -> TextStyle {
    TextStyle::new(16.0, 1.0)
}

/// Shared theme applied to every slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    pub background_color: String,
    pub button_color: String,
    pub button_text_color: String,
    pub title_color: String,
    pub subtitle_color: String,
    pub accent_color: String,
    pub dot_color: String,
    pub dot_active_color: String,
    pub arrow_color: String,
    #[serde(default = "default_title_style")]
    pub title_style: TextStyle,
    #[serde(default = "default_subtitle_style")]
    pub subtitle_style: TextStyle,
    #[serde(default = "default_button_style")]
    pub button_style: TextStyle,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            background_color: "#00C3BE".to_string(),
            button_color: "#FFCC05".to_string(),
            button_text_color: "#391465".to_string(),
            title_color: "#391465".to_string(),
            subtitle_color: "#A3004A".to_string(),
            accent_color: "#A3004A".to_string(),
            dot_color: "#391465".to_string(),
            dot_active_color: "#FFFFFF".to_string(),
            arrow_color: "#FFCC05".to_string(),
            title_style: default_title_style(),
            subtitle_style: default_subtitle_style(),
            button_style: default_button_style(),
        }
    }
}

impl SliderConfig {
    /// Named color fields, in declaration order.
    pub fn colors(&self) -> [(&'static str, &str); 9] {
        [
            ("backgroundColor", self.background_color.as_str()),
            ("buttonColor", self.button_color.as_str()),
            ("buttonTextColor", self.button_text_color.as_str()),
            ("titleColor", self.title_color.as_str()),
            ("subtitleColor", self.subtitle_color.as_str()),
            ("accentColor", self.accent_color.as_str()),
            ("dotColor", self.dot_color.as_str()),
            ("dotActiveColor", self.dot_active_color.as_str()),
            ("arrowColor", self.arrow_color.as_str()),
        ]
    }
}

/// The complete artifact: ordered slides plus the shared theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderData {
    pub slides: Vec<Slide>,
    pub config: SliderConfig,
}

const IMAGE_BASE: &str =
    "https://upload.snrcdn.net/089654187a7f3816659495cc1fcb80a7356a4069/default/origin";

fn button(id: &str, text: &str, url: &str, variant: ButtonVariant) -> SlideButton {
    SlideButton {
        id: id.to_string(),
        text: text.to_string(),
        url: url.to_string(),
        variant,
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SliderData {
    /// The built-in sample deck every editing session starts from.
    fn default() -> Self {
        let slides = vec![
            Slide {
                id: "1".to_string(),
                title: lines(&["IL Y A TOUJOURS", "UNE BONNE RAISON", "DE FAIRE PLAISIR"]),
                subtitle: lines(&[
                    "Célébrer les étapes",
                    "importantes de la vie,",
                    "les anniversaires, les réussites...",
                ]),
                image_url: format!("{}/aac011858e4f46159c6227404a36f2bb.png", IMAGE_BASE),
                buttons: vec![button("1-1", "SUIVANT", "#next", ButtonVariant::Primary)],
                alignment: None,
            },
            Slide {
                id: "2".to_string(),
                title: lines(&["ENVOYER VOS COLIS", "en locker dès 3,99€"]),
                subtitle: lines(&["On vous réserve un", "avantage exclusif !"]),
                image_url: format!("{}/1e5d70837b81433d8434f1a10dcf1d83.png", IMAGE_BASE),
                buttons: vec![button("2-1", "JE FONCE", "#next", ButtonVariant::Primary)],
                alignment: None,
            },
            Slide {
                id: "3".to_string(),
                title: lines(&["Profitez de", "-20%"]),
                subtitle: lines(&["Sur votre premier envoi", "avec le code :", "NEW-2456"]),
                image_url: format!("{}/c327efd71a3644f7a125d011b6a25064.png", IMAGE_BASE),
                buttons: vec![
                    button("3-1", "PLUS TARD", "#close", ButtonVariant::Outline),
                    button("3-2", "J'envoie 📦", "#action", ButtonVariant::Primary),
                ],
                alignment: None,
            },
        ];

        Self {
            slides,
            config: SliderConfig::default(),
        }
    }
}

impl SliderData {
    /// Parse a deck from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a deck from a JSON file on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SliderError::PathNotFoundError(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Pretty-printed JSON, the raw configuration export format
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the structural invariants the editor normally guarantees.
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(SliderError::ValidationError(
                "a slider needs at least one slide".to_string(),
            ));
        }

        let mut slide_ids = HashSet::new();
        for slide in &self.slides {
            if !slide_ids.insert(slide.id.as_str()) {
                return Err(SliderError::ValidationError(format!(
                    "duplicate slide id {:?}",
                    slide.id
                )));
            }
            let mut button_ids = HashSet::new();
            for btn in &slide.buttons {
                if !button_ids.insert(btn.id.as_str()) {
                    return Err(SliderError::ValidationError(format!(
                        "duplicate button id {:?} in slide {:?}",
                        btn.id, slide.id
                    )));
                }
            }
        }

        for (name, value) in self.config.colors() {
            if value.trim().is_empty() {
                return Err(SliderError::ValidationError(format!(
                    "color field {} is empty",
                    name
                )));
            }
        }

        Ok(())
    }
}

fn line_index_check(lines: &[String], index: usize) -> Result<()> {
    if index >= lines.len() {
        return Err(SliderError::ValidationError(format!(
            "line {} does not exist (slide has {} lines)",
            index,
            lines.len()
        )));
    }
    Ok(())
}

impl Slide {
    pub fn add_title_line(&mut self) {
        self.title.push(String::new());
    }

    pub fn set_title_line(&mut self, index: usize, text: &str) -> Result<()> {
        line_index_check(&self.title, index)?;
        self.title[index] = text.to_string();
        Ok(())
    }

    pub fn remove_title_line(&mut self, index: usize) -> Result<String> {
        line_index_check(&self.title, index)?;
        Ok(self.title.remove(index))
    }

    pub fn add_subtitle_line(&mut self) {
        self.subtitle.push(String::new());
    }

    pub fn set_subtitle_line(&mut self, index: usize, text: &str) -> Result<()> {
        line_index_check(&self.subtitle, index)?;
        self.subtitle[index] = text.to_string();
        Ok(())
    }

    pub fn remove_subtitle_line(&mut self, index: usize) -> Result<String> {
        line_index_check(&self.subtitle, index)?;
        Ok(self.subtitle.remove(index))
    }

    /// Append a placeholder button and return its id
    pub fn add_button(&mut self) -> String {
        let id = format!("{}-{}", self.id, uuid::Uuid::new_v4().simple());
        self.buttons
            .push(button(&id, "New Button", "#", ButtonVariant::Primary));
        id
    }

    pub fn button_mut(&mut self, id: &str) -> Result<&mut SlideButton> {
        self.buttons
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| SliderError::ButtonNotFound(id.to_string()))
    }

    pub fn remove_button(&mut self, id: &str) -> Result<SlideButton> {
        let pos = self
            .buttons
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| SliderError::ButtonNotFound(id.to_string()))?;
        Ok(self.buttons.remove(pos))
    }
}
