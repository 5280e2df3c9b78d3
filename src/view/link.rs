//! Navigation link targets

use url::form_urlencoded;

/// Destination of a navigation link: `{ route, page }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Route name, without slashes
    pub route: String,
    /// Target page
    pub page: u32,
}

impl NavLink {
    /// Link to `page` of `route`
    pub fn to_page(route: &str, page: u32) -> Self {
        Self {
            route: route.trim_matches('/').to_string(),
            page,
        }
    }

    /// Root-relative href, e.g. `/items?page=2`
    pub fn href(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &self.page.to_string())
            .finish();
        format!("/{}?{}", self.route, query)
    }
}
