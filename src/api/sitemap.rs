use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;

use crate::state::AppState;
use bym_backend::locale::Locale;
use bym_backend::routes;

fn url_entry(loc: &str, tr_href: &str, en_href: &str, changefreq: &str, priority: &str) -> String {
    let lastmod = Utc::now().to_rfc3339();
    format!(
        r#"
  <url>
    <loc>{loc}</loc>
    <lastmod>{lastmod}</lastmod>
    <changefreq>{changefreq}</changefreq>
    <priority>{priority}</priority>
    <xhtml:link rel="alternate" hreflang="tr-TR" href="{tr_href}" />
    <xhtml:link rel="alternate" hreflang="en-US" href="{en_href}" />
    <xhtml:link rel="alternate" hreflang="x-default" href="{tr_href}" />
  </url>"#,
    )
}

/// GET /api/sitemap.xml
///
/// Static page table plus one entry per blog slug per locale. A content
/// store failure degrades to the static entries only.
pub async fn sitemap(State(state): State<Arc<AppState>>) -> Response {
    let base = &state.config.site.base_url;
    let mut entries = String::new();

    // Static pages: the tr and en catalogs are parallel tables
    let pairs = routes::catalog(Locale::Tr)
        .iter()
        .zip(routes::catalog(Locale::En).iter());
    for (tr, en) in pairs {
        let tr_url = format!("{}/{}", base, tr.path);
        let en_url = format!("{}/en/{}", base, en.path);
        entries.push_str(&url_entry(&tr_url, &tr_url, &en_url, "monthly", "0.8"));
        entries.push_str(&url_entry(&en_url, &tr_url, &en_url, "monthly", "0.8"));
    }

    let slugs = match state.store.all_slugs().await {
        Ok(slugs) => slugs,
        Err(e) => {
            tracing::error!("Error fetching blog slugs for sitemap: {}", e);
            Vec::new()
        }
    };
    for slug in slugs {
        let tr_url = format!("{}/blog/{}", base, slug);
        let en_url = format!("{}/en/blog/{}", base, slug);
        entries.push_str(&url_entry(&tr_url, &tr_url, &en_url, "weekly", "0.7"));
        entries.push_str(&url_entry(&en_url, &tr_url, &en_url, "weekly", "0.7"));
    }

    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
        xmlns:xhtml="http://www.w3.org/1999/xhtml">{}
</urlset>"#,
        entries
    );

    ([(header::CONTENT_TYPE, "text/xml")], body).into_response()
}

/// GET /api/robots.txt
pub async fn robots(State(state): State<Arc<AppState>>) -> Response {
    let base = &state.config.site.base_url;
    let body = format!(
        "User-agent: *\n\
         Allow: /\n\
         Allow: /tr/\n\
         Allow: /en/\n\
         Disallow: /tr/member/*\n\
         Disallow: /en/member/*\n\
         Disallow: /api/*\n\
         \n\
         Sitemap: {base}/sitemap.xml\n\
         Sitemap: {base}/tr/sitemap.xml\n\
         Sitemap: {base}/en/sitemap.xml\n",
    );

    ([(header::CONTENT_TYPE, "text/plain")], body).into_response()
}
