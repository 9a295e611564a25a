use serde::{Deserialize, Serialize};

/// Columns fetched for a search hit. Mapped at the store boundary before
/// any merging logic touches the data.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogPostRow {
    pub post_id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub category: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogPostTagRow {
    pub post_id: String,
    pub tag: String,
}

/// Full post row for the blog API.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogPostDetailRow {
    pub post_id: String,
    pub title: String,
    pub slug: String,
    pub category: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub date: Option<String>,
    pub reading_time: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub author_id: Option<String>,
}

/// Author row as stored per locale.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogAuthorRow {
    pub author_id: String,
    pub name: String,
    pub position: Option<String>,
    pub avatar_path: Option<String>,
    pub bio: Option<String>,
}

/// Contact form body. The site frontend posts camelCase keys.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub browser: Option<String>,
    #[serde(default)]
    pub operating_system: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub hcaptcha_token: String,
}

/// Representative application body, snake_case as stored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepresentativeApplication {
    #[serde(default)]
    pub clerk_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: String,
    pub country: String,
    pub city: String,
    pub university_school: String,
    pub department: String,
    pub grade: String,
    pub language_skills: String,
    #[serde(default)]
    pub other_communities: Option<String>,
    pub about_yourself: String,
    pub motivation: String,
    pub planned_activities: String,
    pub expectations: String,
    #[serde(default)]
    pub additional_notes: Option<String>,
    #[serde(default)]
    pub terms_accepted: bool,
    #[serde(default)]
    pub privacy_policy_accepted: bool,
    #[serde(default)]
    pub locale: Option<String>,
}
