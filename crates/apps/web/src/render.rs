//! HTML string rendering for the sidebar list and marker popups.
//!
//! The host page wires delegated DOM events back to the wasm exports through
//! the `data-movie` and `data-scene-id` attributes emitted here.

use std::fmt::Write as _;

use catalog::Scene;
use view::SidebarModel;

/// Shown when the filter matches nothing.
pub const NO_RESULTS_TEXT: &str = "沒有找到相關電影。";

const LOCATION_LABEL: &str = "地點:";

/// Minimal HTML escaping for text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Popup content for one marker: movie, location label, image, description.
pub fn popup_html(scene: &Scene) -> String {
    let movie = escape_html(&scene.movie);
    let title = escape_html(&scene.title);
    let image = escape_html(&scene.image);
    let description = escape_html(&scene.description);
    format!(
        "<div class=\"popup\">\
         <h3>{movie}</h3>\
         <p><b>{LOCATION_LABEL}</b> {title}</p>\
         <img src=\"{image}\" alt=\"{title}\" width=\"200\"/>\
         <p class=\"popup-description\">{description}</p>\
         </div>"
    )
}

/// Renders the accordion list, or the no-results message for an empty model.
pub fn sidebar_html(model: &SidebarModel) -> String {
    if model.is_empty() {
        return format!("<p class=\"no-results\">{NO_RESULTS_TEXT}</p>");
    }

    let mut out = String::new();
    for group in &model.groups {
        let movie = escape_html(&group.movie);
        let chevron = if group.open { "▲" } else { "▼" };
        let _ = write!(
            out,
            "<div class=\"group\">\
             <div class=\"group-header\" data-movie=\"{movie}\">\
             <span>{movie} ({})</span><span class=\"chevron\">{chevron}</span>\
             </div>",
            group.scenes.len()
        );
        if group.open {
            out.push_str("<ul class=\"group-scenes\">");
            for item in &group.scenes {
                let _ = write!(
                    out,
                    "<li class=\"scene-item\" data-scene-id=\"{}\">{}</li>",
                    item.id.raw(),
                    escape_html(&item.title)
                );
            }
            out.push_str("</ul>");
        }
        out.push_str("</div>");
    }
    out
}
