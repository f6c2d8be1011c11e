// ABOUTME: Bundle generator: turns a SliderData snapshot into one standalone HTML document
// ABOUTME: Emits escaped markup, theme-derived CSS and the embedded carousel runtime

use crate::markup::{escape_html, Element};
use crate::model::{ButtonVariant, Slide, SlideButton, SliderData};
use crate::navigation::Carousel;
use crate::runtime::{runtime_script, RuntimeOptions};
use crate::style::{
    block_alignment_css, button_colors, resolve_text_style, row_alignment_css,
    subtitle_line_color, title_line_color, ColorRole, Role, Viewport,
};
use log::{debug, info, warn};

pub const DEFAULT_FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Archivo:wght@500;800&family=Saira:wght@900&display=swap";

/// Everything the generator needs besides the deck itself
#[derive(Debug, Clone, PartialEq)]
pub struct BundleOptions {
    pub title: String,
    /// Web-font stylesheet; the only external reference a bundle may carry
    pub font_stylesheet: Option<String>,
    /// Fixed device frame, or `None` to fill the host container
    pub viewport: Option<Viewport>,
    pub runtime: RuntimeOptions,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            title: "Slider".to_string(),
            font_stylesheet: Some(DEFAULT_FONT_STYLESHEET.to_string()),
            viewport: None,
            runtime: RuntimeOptions::default(),
        }
    }
}

const BASE_CSS: &str = "\
*{box-sizing:border-box;margin:0;padding:0}
html,body{height:100%}
body{display:flex;align-items:center;justify-content:center;font-family:'Archivo',system-ui,sans-serif}
.sl-root{position:relative;width:var(--sl-width);height:var(--sl-height);max-width:100%;max-height:100vh;background:var(--sl-bg);border-radius:16px;overflow:hidden;touch-action:pan-y;user-select:none;-webkit-user-select:none}
.sl-viewport{position:absolute;top:0;right:0;bottom:0;left:0;overflow:hidden}
.sl-track{display:flex;height:100%;transition:transform .35s ease}
.sl-slide{flex:0 0 100%;height:100%;display:flex;flex-direction:column}
.sl-image{height:var(--sl-image-height);width:100%;overflow:hidden}
.sl-image img{display:block;width:100%;height:100%;object-fit:cover}
.sl-content{flex:1;display:flex;flex-direction:column;justify-content:flex-end;gap:8px;padding:20px 20px 64px}
.sl-title,.sl-subtitle{display:flex;flex-direction:column;width:100%}
.sl-title{margin-bottom:8px}
.sl-subtitle{margin-bottom:16px}
.sl-title-line{font-family:'Saira',system-ui,sans-serif;font-weight:900;text-transform:uppercase;line-height:1.15}
.sl-subtitle-line{font-weight:500;line-height:1.15}
.sl-buttons{display:flex;flex-wrap:wrap;gap:8px;margin-top:16px;width:100%}
.sl-button{padding:8px 24px;border-radius:8px;font-family:'Saira',system-ui,sans-serif;font-weight:900;text-transform:uppercase;cursor:pointer;transition:transform .15s}
.sl-button:hover{transform:scale(1.05)}
.sl-close{position:absolute;top:16px;right:16px;z-index:10;width:28px;height:28px;border:none;border-radius:4px;background:var(--sl-button);color:var(--sl-button-text);font-size:18px;font-weight:900;line-height:28px;cursor:pointer}
.sl-arrow{position:absolute;top:40%;z-index:10;padding:8px;border:none;background:transparent;color:var(--sl-arrow);font-size:32px;font-weight:900;line-height:1;cursor:pointer}
.sl-arrow-prev{left:8px}
.sl-arrow-next{right:8px}
.sl-dots{position:absolute;bottom:16px;left:0;right:0;z-index:10;display:flex;justify-content:center;gap:8px}
.sl-dot{width:10px;height:10px;border:none;border-radius:50%;background:var(--sl-dot);cursor:pointer;transition:background-color .2s}
.sl-dot.is-active{background:var(--sl-dot-active)}
.is-hidden{display:none}
";

/// Stylesheet: static layout plus the role rules derived from the theme.
///
/// Colors are referenced through custom properties set on the root element,
/// so only numbers and keywords are interpolated here.
pub fn render_stylesheet(data: &SliderData, options: &BundleOptions) -> String {
    let config = &data.config;
    let mut css = String::from(BASE_CSS);

    let title = resolve_text_style(config, Role::Title, None, options.viewport);
    let subtitle = resolve_text_style(config, Role::Subtitle, None, options.viewport);
    let button = resolve_text_style(config, Role::Button, None, options.viewport);

    css.push_str(&format!(".sl-title-line{{{}}}\n", title.typography_css()));
    css.push_str(&format!(
        ".sl-subtitle-line{{{};color:{}}}\n",
        subtitle.typography_css(),
        subtitle.color.css_ref()
    ));
    css.push_str(&format!(".sl-button{{{}}}\n", button.typography_css()));

    for variant in [ButtonVariant::Primary, ButtonVariant::Outline] {
        css.push_str(&format!(
            ".sl-button-{}{{{}}}\n",
            variant.as_str(),
            button_colors(variant).css()
        ));
    }

    css
}

/// Custom properties for the root element: theme colors and frame geometry
fn root_style(data: &SliderData, options: &BundleOptions) -> String {
    let mut decls: Vec<String> = ColorRole::ALL
        .iter()
        .map(|role| format!("{}:{}", role.css_var(), role.value(&data.config)))
        .collect();

    match options.viewport {
        Some(viewport) => {
            let (width, height) = viewport.size();
            decls.push(format!("--sl-width:{}px", width));
            decls.push(format!("--sl-height:{}px", height));
            decls.push(format!("--sl-image-height:{}", viewport.image_height()));
        }
        None => {
            decls.push("--sl-width:100%".to_string());
            decls.push("--sl-height:100%".to_string());
            decls.push("--sl-image-height:50%".to_string());
        }
    }

    decls.join(";")
}

fn render_button(slide_index: usize, button_index: usize, button: &SlideButton) -> Element {
    Element::new("button")
        .attr("type", "button")
        .class(format!("sl-button sl-button-{}", button.variant.as_str()))
        .attr("data-slide", slide_index.to_string())
        .attr("data-button", button_index.to_string())
        .attr("data-url", button.url.clone())
        .text(button.text.clone())
}

fn render_slide(data: &SliderData, index: usize, slide: &Slide, active: bool) -> Element {
    let config = &data.config;
    let title_align = resolve_text_style(config, Role::Title, Some(slide), None).align;
    let subtitle_align = resolve_text_style(config, Role::Subtitle, Some(slide), None).align;
    let button_align = resolve_text_style(config, Role::Button, Some(slide), None).align;

    let image = Element::new("div").class("sl-image").child(
        Element::new("img")
            .attr("src", slide.image_url.clone())
            .attr("alt", "")
            .attr("draggable", "false"),
    );

    let title = Element::new("div")
        .class("sl-title")
        .style(block_alignment_css(title_align))
        .children(slide.title.iter().enumerate().map(|(i, line)| {
            Element::new("div")
                .class("sl-title-line")
                .style(format!("color:{}", title_line_color(i).css_ref()))
                .text(line.clone())
        }));

    let subtitle = Element::new("div")
        .class("sl-subtitle")
        .style(block_alignment_css(subtitle_align))
        .children(slide.subtitle.iter().enumerate().map(|(i, line)| {
            Element::new("div")
                .class("sl-subtitle-line")
                .style(format!("color:{}", subtitle_line_color(i).css_ref()))
                .text(line.clone())
        }));

    let buttons = Element::new("div")
        .class("sl-buttons")
        .style(row_alignment_css(button_align))
        .children(
            slide
                .buttons
                .iter()
                .enumerate()
                .map(|(b, button)| render_button(index, b, button)),
        );

    let content = Element::new("div")
        .class("sl-content")
        .child(title)
        .child(subtitle)
        .child(buttons);

    Element::new("div")
        .class(if active {
            "sl-slide is-active"
        } else {
            "sl-slide"
        })
        .attr("data-index", index.to_string())
        .attr("data-slide-id", slide.id.clone())
        .attr("aria-hidden", if active { "false" } else { "true" })
        .child(image)
        .child(content)
}

fn hidden_class(base: &str, visible: bool) -> String {
    if visible {
        base.to_string()
    } else {
        format!("{} is-hidden", base)
    }
}

/// The carousel root element with every slide, control and dot
pub fn render_slider(data: &SliderData, options: &BundleOptions) -> Element {
    // Initial paint for state 0; the runtime re-renders on load and after every transition
    let carousel = Carousel::new(data.slides.len());

    let close = Element::new("button")
        .attr("type", "button")
        .class(hidden_class(
            "sl-close",
            carousel.close_visible(options.runtime.close_visibility),
        ))
        .attr("aria-label", "Close")
        .text("\u{00d7}");

    let prev = Element::new("button")
        .attr("type", "button")
        .class(hidden_class(
            "sl-arrow sl-arrow-prev",
            carousel.prev_arrow_visible(),
        ))
        .attr("aria-label", "Previous slide")
        .text("\u{2039}");

    let next = Element::new("button")
        .attr("type", "button")
        .class(hidden_class(
            "sl-arrow sl-arrow-next",
            carousel.next_arrow_visible(),
        ))
        .attr("aria-label", "Next slide")
        .text("\u{203a}");

    let track = Element::new("div")
        .class("sl-track")
        .children(
            data.slides
                .iter()
                .enumerate()
                .map(|(i, slide)| render_slide(data, i, slide, i == carousel.current())),
        );

    let dots = Element::new("div")
        .class("sl-dots")
        .children((0..data.slides.len()).map(|i| {
            Element::new("button")
                .attr("type", "button")
                .class(if i == carousel.current() {
                    "sl-dot is-active"
                } else {
                    "sl-dot"
                })
                .attr("data-index", i.to_string())
                .attr("aria-label", format!("Go to slide {}", i + 1))
        }));

    let mut root = Element::new("div")
        .attr("id", options.runtime.root_id.clone())
        .class("sl-root")
        .style(root_style(data, options));
    if let Some(viewport) = options.viewport {
        root = root.attr("data-viewport", viewport.as_str());
    }

    root.child(close)
        .child(prev)
        .child(next)
        .child(Element::new("div").class("sl-viewport").child(track))
        .child(dots)
}

/// Generate the complete standalone document for a deck.
///
/// Total over every deck, including an empty one, which yields a document
/// with no slides or dots and inert navigation.
pub fn generate_bundle(data: &SliderData, options: &BundleOptions) -> String {
    if data.slides.is_empty() {
        warn!("Generating bundle for a deck with no slides");
    }
    debug!(
        "Bundle options: viewport={:?} arrows={:?} swipe={:?} close={:?}",
        options.viewport,
        options.runtime.arrow_policy,
        options.runtime.swipe_policy,
        options.runtime.close_visibility
    );

    // Build the full HTML document
    let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html_doc.push_str("<meta charset=\"UTF-8\">\n");
    html_doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=0\">\n",
    );
    html_doc.push_str(&format!("<title>{}</title>\n", escape_html(&options.title)));

    if let Some(font) = &options.font_stylesheet {
        html_doc.push_str(
            &Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", font.clone())
                .render(),
        );
        html_doc.push('\n');
    }

    html_doc.push_str(
        &Element::new("style")
            .raw(render_stylesheet(data, options))
            .render(),
    );
    html_doc.push_str("\n</head>\n<body>\n");

    html_doc.push_str(&render_slider(data, options).render());
    html_doc.push('\n');

    html_doc.push_str(
        &Element::new("script")
            .raw(runtime_script(data, &options.runtime))
            .render(),
    );
    html_doc.push_str("\n</body>\n</html>\n");

    info!(
        "Generated bundle: {} slides, {} bytes",
        data.slides.len(),
        html_doc.len()
    );

    html_doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextAlign;

    #[test]
    fn stylesheet_reflects_typography() {
        let mut data = SliderData::default();
        data.config.title_style.font_size = 40.0;
        data.config.button_style.letter_spacing = 2.5;
        let css = render_stylesheet(&data, &BundleOptions::default());
        assert!(css.contains(".sl-title-line{font-size:40px;letter-spacing:0px}"));
        assert!(css.contains(".sl-button{font-size:16px;letter-spacing:2.5px}"));
        assert!(css.contains(".sl-button-outline{background:transparent;"));
    }

    #[test]
    fn desktop_viewport_scales_fonts_and_frame() {
        let data = SliderData::default();
        let options = BundleOptions {
            viewport: Some(Viewport::Desktop),
            ..Default::default()
        };
        let css = render_stylesheet(&data, &options);
        assert!(css.contains(".sl-title-line{font-size:33.6px;"));

        let root = render_slider(&data, &options).render();
        assert!(root.contains("--sl-width:800px;--sl-height:600px;--sl-image-height:40%"));
        assert!(root.contains("data-viewport=\"desktop\""));
    }

    #[test]
    fn slide_alignment_override_is_applied() {
        let mut data = SliderData::default();
        data.slides[1].alignment = Some(crate::model::SlideAlignment {
            button: Some(TextAlign::Right),
            ..Default::default()
        });
        let html = render_slider(&data, &BundleOptions::default()).render();
        assert!(html.contains(
            "class=\"sl-buttons\" style=\"text-align:right;justify-content:flex-end;align-items:flex-end\""
        ));
        assert_eq!(
            html.matches("text-align:center;justify-content:center").count(),
            2
        );
    }

    #[test]
    fn initial_paint_matches_state_zero() {
        let data = SliderData::default();
        let html = render_slider(&data, &BundleOptions::default()).render();
        assert!(html.contains("class=\"sl-close is-hidden\""));
        assert!(html.contains("class=\"sl-arrow sl-arrow-prev is-hidden\""));
        assert!(html.contains("class=\"sl-arrow sl-arrow-next\""));
        assert_eq!(html.matches("sl-slide is-active").count(), 1);
        assert_eq!(html.matches("sl-dot is-active").count(), 1);
    }
}
