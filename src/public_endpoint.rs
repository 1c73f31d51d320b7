use crate::{catalog::routes::RoutePath, config::PublicEndpoint};

/// returns absolute url of a catalog page, for sitemaps and shared links
pub fn page_url(conf: &PublicEndpoint, route: &RoutePath) -> String {
    let url = conf.base_url.trim_end_matches('/');
    format!("{url}{}", route.path())
}
