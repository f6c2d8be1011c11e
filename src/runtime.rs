// ABOUTME: The vanilla-script carousel runtime embedded in every exported bundle
// ABOUTME: Mirrors the navigation module: one `current` index, a transition table and an idempotent render

use crate::markup::escape_script_json;
use crate::navigation::{CloseVisibility, NavPolicy, DEFAULT_DEAD_ZONE_PX};
use log::warn;
use serde::Serialize;

/// Settings baked into the generated script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOptions {
    /// id of the carousel root element
    pub root_id: String,
    /// Global object looked up at call time for `close` and `trackClick`
    pub host_api: String,
    /// Case-insensitive substring marking a button as dismiss/send
    pub dismiss_keyword: String,
    pub arrow_policy: NavPolicy,
    pub swipe_policy: NavPolicy,
    pub close_visibility: CloseVisibility,
    pub dead_zone: f64,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            root_id: "slider-root".to_string(),
            host_api: "InAppMessage".to_string(),
            dismiss_keyword: "envoi".to_string(),
            arrow_policy: NavPolicy::Clamp,
            swipe_policy: NavPolicy::Clamp,
            close_visibility: CloseVisibility::LastSlide,
            dead_zone: DEFAULT_DEAD_ZONE_PX,
        }
    }
}

const RUNTIME_BODY: &str = r#"
  var root = document.getElementById(OPTIONS.rootId);
  if (!root) { return; }

  var track = root.querySelector('.sl-track');
  var slides = root.querySelectorAll('.sl-slide');
  var dots = root.querySelectorAll('.sl-dot');
  var prevArrow = root.querySelector('.sl-arrow-prev');
  var nextArrow = root.querySelector('.sl-arrow-next');
  var closeControl = root.querySelector('.sl-close');
  var slideData = (DATA && DATA.slides) || [];
  var count = slides.length;
  var state = { current: 0 };

  function toggle(el, cls, on) {
    if (!el) { return; }
    if (on) { el.classList.add(cls); } else { el.classList.remove(cls); }
  }

  function step(from, delta, policy) {
    if (count === 0) { return 0; }
    if (policy === 'wrap') { return (from + delta + count) % count; }
    return Math.min(Math.max(from + delta, 0), count - 1);
  }

  function closeVisible(current) {
    if (count === 0) { return false; }
    if (OPTIONS.closeVisibility === 'first-two') { return current < 2; }
    return current === count - 1;
  }

  function render() {
    var current = state.current;
    if (track) { track.style.transform = 'translateX(' + (-current * 100) + '%)'; }
    for (var i = 0; i < slides.length; i++) {
      toggle(slides[i], 'is-active', i === current);
      slides[i].setAttribute('aria-hidden', i === current ? 'false' : 'true');
    }
    for (var j = 0; j < dots.length; j++) {
      toggle(dots[j], 'is-active', j === current);
    }
    toggle(prevArrow, 'is-hidden', count === 0 || current <= 0);
    toggle(nextArrow, 'is-hidden', count === 0 || current >= count - 1);
    toggle(closeControl, 'is-hidden', !closeVisible(current));
  }

  function goTo(index) {
    if (index < 0 || index >= count || index === state.current) { return; }
    state.current = index;
    render();
  }

  function next(policy) { goTo(step(state.current, 1, policy)); }
  function prev(policy) { goTo(step(state.current, -1, policy)); }

  function callHost(method, arg) {
    try {
      var host = window[OPTIONS.hostApi];
      if (host && typeof host[method] === 'function') { host[method](arg); }
    } catch (err) {
      // host errors stay inside the host
    }
  }

  function buttonInfo(el) {
    var s = Number(el.getAttribute('data-slide'));
    var b = Number(el.getAttribute('data-button'));
    var info = (slideData[s] && slideData[s].buttons && slideData[s].buttons[b]) || {};
    return {
      text: String(info.text != null ? info.text : el.textContent || ''),
      url: String(info.url != null ? info.url : el.getAttribute('data-url') || '')
    };
  }

  function onButtonClick(event) {
    event.stopPropagation();
    event.preventDefault();
    var info = buttonInfo(event.currentTarget);
    var keyword = String(OPTIONS.dismissKeyword || '').toLowerCase();
    var dismiss = keyword !== '' && info.text.toLowerCase().indexOf(keyword) !== -1;

    if (info.url === '#next') { next(OPTIONS.arrowPolicy); }
    else if (info.url === '#prev') { prev(OPTIONS.arrowPolicy); }

    if (dismiss) { callHost('trackClick', info.text); }
    if (dismiss || info.url === '#close') { callHost('close'); }

    if (info.url !== '' && info.url.charAt(0) !== '#') {
      window.open(info.url, '_blank');
    }
  }

  var buttons = root.querySelectorAll('.sl-button');
  for (var k = 0; k < buttons.length; k++) {
    buttons[k].addEventListener('click', onButtonClick);
  }

  for (var d = 0; d < dots.length; d++) {
    dots[d].addEventListener('click', function (event) {
      event.stopPropagation();
      goTo(Number(event.currentTarget.getAttribute('data-index')));
    });
  }

  if (prevArrow) {
    prevArrow.addEventListener('click', function (event) {
      event.stopPropagation();
      prev(OPTIONS.arrowPolicy);
    });
  }
  if (nextArrow) {
    nextArrow.addEventListener('click', function (event) {
      event.stopPropagation();
      next(OPTIONS.arrowPolicy);
    });
  }
  if (closeControl) {
    closeControl.addEventListener('click', function (event) {
      event.stopPropagation();
      callHost('close');
    });
  }

  var touch = { startX: 0, endX: 0, fromButton: false, active: false };

  root.addEventListener('touchstart', function (event) {
    var t = event.touches && event.touches[0];
    if (!t) { return; }
    touch.startX = t.clientX;
    touch.endX = t.clientX;
    var target = event.target;
    touch.fromButton = !!(target && target.closest && target.closest('.sl-button'));
    touch.active = true;
  }, { passive: true });

  root.addEventListener('touchmove', function (event) {
    var t = event.touches && event.touches[0];
    if (touch.active && t) { touch.endX = t.clientX; }
  }, { passive: true });

  root.addEventListener('touchend', function () {
    if (!touch.active) { return; }
    touch.active = false;
    if (touch.fromButton) { return; }
    var deltaX = touch.endX - touch.startX;
    if (Math.abs(deltaX) < OPTIONS.deadZone) { return; }
    if (deltaX > 0) { prev(OPTIONS.swipePolicy); } else { next(OPTIONS.swipePolicy); }
  });

  render();
"#;

fn script_literal<T: Serialize>(value: &T, what: &str) -> String {
    match serde_json::to_string(value) {
        Ok(json) => escape_script_json(&json),
        Err(e) => {
            warn!("Failed to serialize {} for bundle: {}", what, e);
            "null".to_string()
        }
    }
}

/// Build the complete script body: data snapshot, options, then the runtime.
pub fn runtime_script<T: Serialize>(data: &T, options: &RuntimeOptions) -> String {
    let mut script = String::from("\n(function () {\n  'use strict';\n");
    script.push_str("  var DATA = ");
    script.push_str(&script_literal(data, "slider data"));
    script.push_str(";\n  var OPTIONS = ");
    script.push_str(&script_literal(options, "runtime options"));
    script.push(';');
    script.push_str(RUNTIME_BODY);
    script.push_str("})();\n");
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SliderData;

    #[test]
    fn options_serialize_with_runtime_keywords() {
        let options = RuntimeOptions {
            swipe_policy: NavPolicy::Wrap,
            close_visibility: CloseVisibility::FirstTwo,
            ..Default::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains(r#""arrowPolicy":"clamp""#));
        assert!(json.contains(r#""swipePolicy":"wrap""#));
        assert!(json.contains(r#""closeVisibility":"first-two""#));
        assert!(json.contains(r#""deadZone":10.0"#));
    }

    #[test]
    fn script_embeds_data_and_options() {
        let script = runtime_script(&SliderData::default(), &RuntimeOptions::default());
        assert!(script.contains("var DATA = {\"slides\":["));
        assert!(script.contains("\"hostApi\":\"InAppMessage\""));
        assert!(script.trim_end().ends_with("})();"));
    }

    #[test]
    fn runtime_body_never_closes_its_script() {
        assert!(!RUNTIME_BODY.to_ascii_lowercase().contains("</script"));
    }
}
