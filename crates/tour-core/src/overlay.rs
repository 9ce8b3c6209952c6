//! Info overlay content, markup and screen placement.
//!
//! The DOM side lives in the web crate; everything that can be decided without
//! a document is here so it can be tested on the host.

use crate::constants::{
    OVERLAY_CLOSE_CLASS, OVERLAY_DEFAULT_TITLE, OVERLAY_Z_INDEX, UNSUPPORTED_CONTENT_HTML,
};
use crate::model::{ContentItem, ContentType, Spot, SpotContent};
use glam::{Mat4, Vec2, Vec3};

/// Content shown when an infospot is activated.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayContent {
    pub title: Option<String>,
    pub items: Vec<ContentItem>,
    /// True when the spot carried an ordered list of items.
    pub combined: bool,
}

impl OverlayContent {
    pub fn single(kind: Option<ContentType>, value: Option<String>) -> Self {
        Self {
            title: None,
            items: vec![ContentItem {
                kind: kind.unwrap_or_else(|| ContentType::Other(String::new())),
                value: value.unwrap_or_default(),
            }],
            combined: false,
        }
    }

    pub fn combined(items: Vec<ContentItem>) -> Self {
        Self {
            title: None,
            items,
            combined: true,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn from_spot(spot: &Spot) -> Self {
        let content = match &spot.content {
            Some(SpotContent::Combined(items)) => Self::combined(items.clone()),
            Some(SpotContent::Single(value)) => {
                Self::single(spot.content_type.clone(), Some(value.clone()))
            }
            None => Self::single(spot.content_type.clone(), None),
        };
        content.with_title(spot.label.clone())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(OVERLAY_DEFAULT_TITLE)
    }
}

/// Render one content block. Unknown kinds render a fixed fallback block.
pub fn render_block(item: &ContentItem) -> String {
    let value = escape_html(&item.value);
    match &item.kind {
        ContentType::Info => format!("<p>{value}</p>"),
        ContentType::Image => format!(r#"<img src="{value}" alt="Image" style="width: 100%;" />"#),
        ContentType::Video => format!(
            r#"<video controls style="width: 100%;"><source src="{value}" type="video/mp4"></video>"#
        ),
        ContentType::Audio => format!(
            r#"<audio controls style="width: 100%;"><source src="{value}" type="audio/mpeg"></audio>"#
        ),
        ContentType::Other(kind) => {
            log::warn!("[overlay] unsupported content type \"{kind}\"");
            UNSUPPORTED_CONTENT_HTML.to_string()
        }
    }
}

/// Full inner markup of the overlay: header with close control, then body.
pub fn render_overlay_html(content: &OverlayContent) -> String {
    let body: String = content.items.iter().map(render_block).collect();
    format!(
        r#"<div class="info-box-header"><h3>{title}</h3><button class="{close}">X</button></div><div class="info-box-content">{body}</div>"#,
        title = escape_html(content.title()),
        close = OVERLAY_CLOSE_CLASS,
    )
}

/// Project a world-space point to viewport pixels (origin top-left).
#[inline]
pub fn project_to_screen(world: Vec3, view_proj: Mat4, viewport: Vec2) -> Vec2 {
    let ndc = view_proj.project_point3(world);
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport.x,
        (-ndc.y * 0.5 + 0.5) * viewport.y,
    )
}

/// Inline style placing the overlay centred on `screen`.
pub fn overlay_style(screen: Vec2) -> String {
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;transform:translate(-50%, -50%);z-index:{};",
        screen.x, screen.y, OVERLAY_Z_INDEX
    )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
