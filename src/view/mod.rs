//! View module
//!
//! Turns a [`FetchResult`](crate::count::FetchResult) into markup.
//!
//! # Overview
//!
//! - [`Node`] / [`Element`]: a small element tree rendered to escaped HTML
//! - [`NavLink`]: link targets for `{ route, page }`
//! - [`render`]: the pure render function of the widget state

mod element;
mod link;
mod renderer;

pub use element::{html_escape, Element, Node};
pub use link::NavLink;
pub use renderer::{render, View, LOADING_TEXT, NEXT_LABEL, PREV_LABEL};
