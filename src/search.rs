//! Search service: query normalization, result assembly and merging.
//!
//! Results are built fresh per request and discarded with the response;
//! nothing here is cached or shared across requests.

use serde::Serialize;

use crate::assets::resolve_asset_url;
use crate::content::ContentStore;
use crate::i18n;
use crate::locale::{self, Locale};
use crate::models::BlogPostRow;
use crate::routes::{self, StaticRouteEntry};

/// Queries shorter than this (after trimming) get an empty-result response.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Blog,
    Page,
    Event,
    Project,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Trim and lowercase, the only normalization applied before matching.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Build a result from a content match.
pub fn post_result(
    row: &BlogPostRow,
    tags: Option<Vec<String>>,
    locale: Locale,
    storage_base: &str,
) -> SearchResult {
    SearchResult {
        id: row.post_id.clone(),
        title: row.title.clone(),
        excerpt: row.excerpt.clone(),
        url: format!("/{}/blog/{}", locale, row.slug),
        kind: ResultKind::Blog,
        image: row
            .image
            .as_deref()
            .map(|path| resolve_asset_url(Some(path), storage_base)),
        category: row.category.clone(),
        date: row
            .date
            .as_deref()
            .map(|raw| locale::format_date(raw, locale)),
        tags,
    }
}

/// Build a result from a static route match.
pub fn route_result(entry: StaticRouteEntry, locale: Locale) -> SearchResult {
    SearchResult {
        id: entry.result_id(),
        title: entry.name.to_string(),
        excerpt: i18n::route_excerpt(locale, entry.name),
        url: entry.url(locale),
        kind: ResultKind::Page,
        image: None,
        category: None,
        date: Some(locale::format_today(locale)),
        tags: None,
    }
}

/// Concatenate the two sources: content matches first, then route matches.
/// No deduplication, no relevance scoring, no interleaving. This ordering
/// is the observed contract and callers depend on it.
pub fn merge(content: Vec<SearchResult>, route_matches: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut results = content;
    results.extend(route_matches);
    results
}

/// Stateless search over the content store and the static route catalog.
/// Constructed once at bootstrap with an injected store handle.
#[derive(Clone)]
pub struct SearchService {
    store: ContentStore,
    storage_base: String,
}

impl SearchService {
    pub fn new(store: ContentStore, storage_base: String) -> Self {
        Self {
            store,
            storage_base,
        }
    }

    /// Run a search for an already-normalized query.
    ///
    /// The tag fetch consumes the ids of the content match, so the two store
    /// reads are sequential by data dependency. Store failures degrade to an
    /// empty dynamic side inside [`ContentStore`]; route matching cannot fail.
    pub async fn search(
        &self,
        normalized_query: &str,
        locale: Locale,
    ) -> anyhow::Result<Vec<SearchResult>> {
        let posts = self.store.search_posts(normalized_query, locale).await;

        let post_ids: Vec<String> = posts.iter().map(|p| p.post_id.clone()).collect();
        let mut tag_map = self.store.tags_for_posts(&post_ids, locale).await;

        let content_results: Vec<SearchResult> = posts
            .iter()
            .map(|row| {
                let tags = tag_map.remove(&row.post_id);
                post_result(row, tags, locale, &self.storage_base)
            })
            .collect();

        let route_results: Vec<SearchResult> = routes::match_routes(normalized_query, locale)
            .into_iter()
            .map(|entry| route_result(entry, locale))
            .collect();

        Ok(merge(content_results, route_results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_row(id: &str, date: Option<&str>, image: Option<&str>) -> BlogPostRow {
        BlogPostRow {
            post_id: id.to_string(),
            title: format!("Post {}", id),
            slug: format!("post-{}", id),
            excerpt: "An excerpt".to_string(),
            category: Some("Biyoteknoloji".to_string()),
            date: date.map(|d| d.to_string()),
            image: image.map(|i| i.to_string()),
        }
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Blog  "), "blog");
        assert_eq!(normalize_query("DOKU Mühendisliği"), "doku mühendisliği");
    }

    #[test]
    fn test_merge_keeps_content_before_routes() {
        let content = vec![
            post_result(&post_row("a", None, None), None, Locale::En, "base"),
            post_result(&post_row("b", None, None), None, Locale::En, "base"),
        ];
        let route_matches = vec![route_result(
            routes::catalog(Locale::En)[2],
            Locale::En,
        )];

        let merged = merge(content, route_matches);
        let ids: Vec<&str> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "page-blog"]);
        assert_eq!(merged[2].kind, ResultKind::Page);
    }

    #[test]
    fn test_post_result_fields() {
        let row = post_row("42", Some("2025-07-25"), Some("covers/x.webp"));
        let result = post_result(
            &row,
            Some(vec!["crispr".to_string()]),
            Locale::Tr,
            "https://storage.example.com/blog-images",
        );

        assert_eq!(result.url, "/tr/blog/post-42");
        assert_eq!(result.kind, ResultKind::Blog);
        assert_eq!(result.date.as_deref(), Some("25 Temmuz, 2025"));
        assert_eq!(
            result.image.as_deref(),
            Some("https://storage.example.com/blog-images/covers/x.webp")
        );
        assert_eq!(result.tags.as_deref(), Some(&["crispr".to_string()][..]));
    }

    #[test]
    fn test_post_result_without_image_has_no_image() {
        // The search path leaves missing images out instead of substituting
        // the default asset
        let row = post_row("7", None, None);
        let result = post_result(&row, None, Locale::En, "base");
        assert!(result.image.is_none());
        assert!(result.date.is_none());
    }

    #[test]
    fn test_route_result_for_blog_entry() {
        let entry = routes::match_routes("blog", Locale::En)[0];
        let result = route_result(entry, Locale::En);

        assert_eq!(result.id, "page-blog");
        assert_eq!(result.title, "Blog");
        assert_eq!(result.url, "/en/blog");
        assert_eq!(result.excerpt, "Go to Blog page");
        assert!(result.date.is_some());
    }

    #[test]
    fn test_result_kind_serializes_lowercase() {
        let entry = routes::catalog(Locale::En)[0];
        let json = serde_json::to_value(route_result(entry, Locale::En)).unwrap();
        assert_eq!(json["type"], "page");
        // absent optionals are omitted, not null
        assert!(json.get("image").is_none());
        assert!(json.get("tags").is_none());
    }
}
