use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::state::AppState;
use bym_backend::email::{application_admin_email, application_confirmation_email};
use bym_backend::locale::Locale;
use bym_backend::models::RepresentativeApplication;

/// POST /api/representative-application
///
/// Persists the application and sends the admin notification plus the
/// applicant confirmation. Unlike the contact path, a failed send is
/// reported to the caller; the row stays saved either way.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(application): Json<RepresentativeApplication>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let locale = Locale::resolve(application.locale.as_deref());

    if application.email.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email is required for sending notifications" })),
        ));
    }

    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now().to_rfc3339();
    let insert = sqlx::query(
        "INSERT INTO representative_applications \
         (id, clerk_id, first_name, last_name, email, phone_number, birth_date, \
          country, city, university_school, department, grade, language_skills, \
          other_communities, about_yourself, motivation, planned_activities, \
          expectations, additional_notes, terms_accepted, privacy_policy_accepted, \
          locale, status, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                 $15, $16, $17, $18, $19, $20, $21, $22, 'pending', $23)",
    )
    .bind(&id)
    .bind(&application.clerk_id)
    .bind(&application.first_name)
    .bind(&application.last_name)
    .bind(&application.email)
    .bind(&application.phone_number)
    .bind(&application.birth_date)
    .bind(&application.country)
    .bind(&application.city)
    .bind(&application.university_school)
    .bind(&application.department)
    .bind(&application.grade)
    .bind(&application.language_skills)
    .bind(&application.other_communities)
    .bind(&application.about_yourself)
    .bind(&application.motivation)
    .bind(&application.planned_activities)
    .bind(&application.expectations)
    .bind(&application.additional_notes)
    .bind(application.terms_accepted)
    .bind(application.privacy_policy_accepted)
    .bind(locale.as_str())
    .bind(&created_at)
    .execute(&state.db)
    .await;

    if let Err(e) = insert {
        tracing::error!("Failed to insert representative application: {}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to save application" })),
        ));
    }

    if !state.mailer.is_configured() {
        tracing::warn!("Email not configured, skipping email notifications");
        return Ok(Json(json!({
            "success": false,
            "message": "Email notifications not configured",
        })));
    }

    let (admin_subject, admin_body) = application_admin_email(&application, locale);
    for recipient in state.config.application_emails() {
        if let Err(e) = state
            .mailer
            .send_html(
                recipient,
                &admin_subject,
                &admin_body,
                Some(&application.email),
            )
            .await
        {
            tracing::error!("Failed to send admin notification to {}: {}", recipient, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to send email notifications",
                    "details": e,
                })),
            ));
        }
    }

    let (confirm_subject, confirm_body) =
        application_confirmation_email(&application, locale);
    if let Err(e) = state
        .mailer
        .send_html(&application.email, &confirm_subject, &confirm_body, None)
        .await
    {
        tracing::error!("Failed to send applicant confirmation: {}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to send email notifications",
                "details": e,
            })),
        ));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Email notifications sent successfully",
    })))
}
