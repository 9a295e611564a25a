use anyhow::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};

pub async fn connect(url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
    Ok(pool)
}

/// Run database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blog_posts (
            id BIGSERIAL PRIMARY KEY,
            post_id TEXT NOT NULL,
            locale TEXT NOT NULL DEFAULT 'tr',
            title TEXT NOT NULL,
            slug TEXT NOT NULL,
            category TEXT,
            excerpt TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            date TEXT,
            reading_time TEXT,
            image TEXT,
            featured BOOLEAN NOT NULL DEFAULT FALSE,
            author_id TEXT,
            created_at TEXT NOT NULL DEFAULT '',
            UNIQUE (post_id, locale)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blog_post_tags (
            post_id TEXT NOT NULL,
            locale TEXT NOT NULL DEFAULT 'tr',
            tag TEXT NOT NULL,
            PRIMARY KEY (post_id, locale, tag)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blog_authors (
            id BIGSERIAL PRIMARY KEY,
            author_id TEXT NOT NULL,
            locale TEXT NOT NULL DEFAULT 'tr',
            name TEXT NOT NULL,
            position TEXT,
            avatar_path TEXT,
            bio TEXT,
            UNIQUE (author_id, locale)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blog_categories (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            locale TEXT NOT NULL DEFAULT 'tr',
            UNIQUE (name, locale)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contact_messages (
            id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            message TEXT NOT NULL,
            locale TEXT NOT NULL DEFAULT 'tr',
            status TEXT NOT NULL DEFAULT 'new',
            browser TEXT,
            operating_system TEXT,
            device_type TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS representative_applications (
            id TEXT PRIMARY KEY,
            clerk_id TEXT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone_number TEXT NOT NULL,
            birth_date TEXT NOT NULL,
            country TEXT NOT NULL,
            city TEXT NOT NULL,
            university_school TEXT NOT NULL,
            department TEXT NOT NULL,
            grade TEXT NOT NULL,
            language_skills TEXT NOT NULL,
            other_communities TEXT,
            about_yourself TEXT NOT NULL,
            motivation TEXT NOT NULL,
            planned_activities TEXT NOT NULL,
            expectations TEXT NOT NULL,
            additional_notes TEXT,
            terms_accepted BOOLEAN NOT NULL DEFAULT FALSE,
            privacy_policy_accepted BOOLEAN NOT NULL DEFAULT FALSE,
            locale TEXT NOT NULL DEFAULT 'tr',
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_blog_posts_locale_date ON blog_posts (locale, date DESC)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_blog_post_tags_locale ON blog_post_tags (locale, post_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
