//! Pagination widget rendering

use super::element::{html_escape, Element, Node};
use super::link::NavLink;
use crate::config::Settings;
use crate::count::FetchResult;
use crate::pagination::{Derived, PageState};

/// Text shown while the count is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// Label of the previous-page link
pub const PREV_LABEL: &str = "← Prev";

/// Label of the next-page link
pub const NEXT_LABEL: &str = "Next →";

/// Rendered widget plus the document title it asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Document title; only set once the count is known
    pub title: Option<String>,
    /// Widget markup
    pub body: Node,
}

impl View {
    /// Widget markup as HTML
    pub fn to_html(&self) -> String {
        self.body.to_html()
    }

    /// Widget text content
    pub fn text(&self) -> String {
        self.body.text_content()
    }

    /// Whether prev/next controls are present
    pub fn has_controls(&self) -> bool {
        self.body.find_attr("data-test", "pagination").is_some()
    }

    /// A complete HTML document wrapping the widget
    pub fn to_document(&self) -> String {
        let title = self
            .title
            .as_deref()
            .map(|t| format!("<title>{}</title>", html_escape(t)))
            .unwrap_or_default();
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\">{}</head><body>{}</body></html>",
            title,
            self.to_html()
        )
    }
}

/// Render the widget for `page` given the current fetch state.
///
/// `per_page` is read from `settings` on every call.
pub fn render(result: &FetchResult, page: u32, settings: &Settings) -> View {
    match result {
        FetchResult::Loading => View {
            title: None,
            body: Element::new("p").child(LOADING_TEXT).into(),
        },
        FetchResult::Error(message) => View {
            title: None,
            body: Element::new("p").child(message.clone()).into(),
        },
        FetchResult::Success(count) => {
            let state = PageState::new(page, settings.per_page);
            let derived = Derived::new(*count, &state);
            View {
                title: Some(format!(
                    "{} | Page {} of {}",
                    settings.site_name, derived.page, derived.total_pages
                )),
                body: render_controls(&state, &derived, &settings.route),
            }
        }
    }
}

fn render_controls(state: &PageState, derived: &Derived, route: &str) -> Node {
    let prev = nav_link(
        "prev",
        &NavLink::to_page(route, state.prev_page()),
        derived.prev_disabled,
        PREV_LABEL,
    );
    let next = nav_link(
        "next",
        &NavLink::to_page(route, state.next_page()),
        derived.next_disabled,
        NEXT_LABEL,
    );

    Element::new("div")
        .attr("class", "pagination")
        .attr("data-test", "pagination")
        .child(prev)
        .child(
            Element::new("p")
                .child(format!("{} of ", derived.page))
                .child(
                    Element::new("span")
                        .attr("class", "totalPages")
                        .child(derived.total_pages.to_string()),
                ),
        )
        .child(Element::new("p").child(format!("Items total: {}", derived.count)))
        .child(next)
        .into()
}

fn nav_link(class: &'static str, link: &NavLink, disabled: bool, label: &'static str) -> Element {
    Element::new("a")
        .attr("class", class)
        .attr("href", link.href())
        .attr("aria-disabled", if disabled { "true" } else { "false" })
        .child(label)
}
