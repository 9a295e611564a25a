use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::state::AppState;
use bym_backend::assets::{resolve_asset_url, DEFAULT_AUTHOR_AVATAR};
use bym_backend::content::default_categories;
use bym_backend::i18n;
use bym_backend::locale::{format_date, Locale};
use bym_backend::models::{BlogAuthorRow, BlogPostDetailRow};

#[derive(Debug, Deserialize)]
pub struct LocaleParams {
    #[serde(default)]
    pub locale: Option<String>,
}

/// Author object for a post. Posts referencing an unknown or absent author
/// fall back to the first stored profile, then to the team default.
fn author_json(
    author_id: Option<&str>,
    authors: &[BlogAuthorRow],
    locale: Locale,
    storage_base: &str,
) -> Value {
    let found = author_id
        .and_then(|id| authors.iter().find(|a| a.author_id == id))
        .or_else(|| authors.first());

    let Some(author) = found else {
        return json!({
            "name": i18n::message(locale, "author.team-name"),
            "avatar": DEFAULT_AUTHOR_AVATAR,
            "position": i18n::message(locale, "author.default-position"),
            "bio": "",
        });
    };

    let avatar = match author.avatar_path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => resolve_asset_url(Some(path), storage_base),
        None => DEFAULT_AUTHOR_AVATAR.to_string(),
    };

    json!({
        "name": author.name,
        "avatar": avatar,
        "position": author
            .position
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(i18n::message(locale, "author.default-position")),
        "bio": author.bio.as_deref().unwrap_or(""),
    })
}

fn post_json(
    row: &BlogPostDetailRow,
    tags: Vec<String>,
    authors: &[BlogAuthorRow],
    locale: Locale,
    storage_base: &str,
) -> Value {
    json!({
        "id": row.post_id,
        "title": row.title,
        "slug": row.slug,
        "category": row.category,
        "excerpt": row.excerpt,
        "content": row.content,
        "author": author_json(row.author_id.as_deref(), authors, locale, storage_base),
        "date": row.date.as_deref().map(|raw| format_date(raw, locale)),
        "reading_time": row.reading_time,
        "image": resolve_asset_url(row.image.as_deref(), storage_base),
        "featured": row.featured,
        "url": format!("/{}/blog/{}", locale, row.slug),
        "tags": tags,
    })
}

/// GET /api/blog/posts?locale=
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocaleParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let locale = Locale::resolve(params.locale.as_deref());

    let rows = state.store.list_posts(locale).await.map_err(|e| {
        tracing::error!("Error fetching blog posts: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to load blog posts" })),
        )
    })?;

    let post_ids: Vec<String> = rows.iter().map(|r| r.post_id.clone()).collect();
    let mut tag_map = state.store.tags_for_posts(&post_ids, locale).await;
    let authors = state.store.list_authors(locale).await;

    let storage_base = &state.config.storage.public_base_url;
    let posts: Vec<Value> = rows
        .iter()
        .map(|row| {
            let tags = tag_map.remove(&row.post_id).unwrap_or_default();
            post_json(row, tags, &authors, locale, storage_base)
        })
        .collect();

    Ok(Json(json!({ "posts": posts })))
}

/// GET /api/blog/posts/:slug?locale=
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let locale = Locale::resolve(params.locale.as_deref());

    let row = state
        .store
        .post_by_slug(&slug, locale)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching blog post {}: {}", slug, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to load blog post" })),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Post not found" })),
            )
        })?;

    let mut tag_map = state
        .store
        .tags_for_posts(&[row.post_id.clone()], locale)
        .await;
    let tags = tag_map.remove(&row.post_id).unwrap_or_default();
    let authors = state.store.list_authors(locale).await;

    Ok(Json(json!({
        "post": post_json(&row, tags, &authors, locale, &state.config.storage.public_base_url),
    })))
}

/// GET /api/blog/categories?locale=
///
/// A store failure degrades to the fixed default category list.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocaleParams>,
) -> Json<Value> {
    let locale = Locale::resolve(params.locale.as_deref());

    let categories = match state.store.list_categories(locale).await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::error!("Error fetching blog categories: {}", e);
            default_categories(locale)
        }
    };

    Json(json!({ "categories": categories }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://storage.example.com/object/public/blog-images";

    fn author(author_id: &str, avatar_path: Option<&str>) -> BlogAuthorRow {
        BlogAuthorRow {
            author_id: author_id.to_string(),
            name: format!("Author {}", author_id),
            position: Some("Editör".to_string()),
            avatar_path: avatar_path.map(|p| p.to_string()),
            bio: Some("bio".to_string()),
        }
    }

    #[test]
    fn test_author_matched_by_id_with_resolved_avatar() {
        let authors = vec![author("a1", None), author("a2", Some("avatars/a2.webp"))];
        let value = author_json(Some("a2"), &authors, Locale::Tr, BASE);
        assert_eq!(value["name"], "Author a2");
        assert_eq!(value["avatar"], format!("{}/avatars/a2.webp", BASE));
        assert_eq!(value["position"], "Editör");
    }

    #[test]
    fn test_author_without_avatar_gets_default() {
        let authors = vec![author("a1", None)];
        let value = author_json(Some("a1"), &authors, Locale::En, BASE);
        assert_eq!(value["avatar"], DEFAULT_AUTHOR_AVATAR);
    }

    #[test]
    fn test_unknown_author_falls_back_to_first_profile() {
        let authors = vec![author("a1", None), author("a2", None)];
        let value = author_json(Some("missing"), &authors, Locale::Tr, BASE);
        assert_eq!(value["name"], "Author a1");
        let value = author_json(None, &authors, Locale::Tr, BASE);
        assert_eq!(value["name"], "Author a1");
    }

    #[test]
    fn test_no_authors_yields_localized_team_default() {
        let value = author_json(None, &[], Locale::Tr, BASE);
        assert_eq!(value["name"], "BYM Türkiye Ekibi");
        assert_eq!(value["avatar"], DEFAULT_AUTHOR_AVATAR);
        assert_eq!(value["position"], "Yazar");
        assert_eq!(value["bio"], "");

        let value = author_json(None, &[], Locale::En, BASE);
        assert_eq!(value["name"], "BYM Turkey Team");
        assert_eq!(value["position"], "Author");
    }

    #[test]
    fn test_post_json_carries_author_object() {
        let row = BlogPostDetailRow {
            post_id: "p1".to_string(),
            title: "Başlık".to_string(),
            slug: "baslik".to_string(),
            category: None,
            excerpt: "özet".to_string(),
            content: "içerik".to_string(),
            date: Some("2025-07-25".to_string()),
            reading_time: None,
            image: None,
            featured: false,
            author_id: Some("a1".to_string()),
        };
        let authors = vec![author("a1", None)];
        let value = post_json(&row, Vec::new(), &authors, Locale::Tr, BASE);
        assert_eq!(value["author"]["name"], "Author a1");
        assert_eq!(value["date"], "25 Temmuz, 2025");
    }
}
