use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::state::AppState;
use bym_backend::captcha;
use bym_backend::email::{contact_admin_email, contact_confirmation_email};
use bym_backend::locale::Locale;
use bym_backend::models::ContactForm;

/// POST /api/contact
///
/// Captcha-gated intake: verify the token, persist the row, then send the
/// admin notification and sender confirmation. Email delivery is best
/// effort; a failed send never fails the submission.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let locale = Locale::resolve(form.locale.as_deref());

    if form.first_name.is_empty()
        || form.last_name.is_empty()
        || form.email.is_empty()
        || form.message.is_empty()
        || form.hcaptcha_token.is_empty()
    {
        tracing::warn!("Contact form submission with missing required fields");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing required fields" })),
        ));
    }

    let captcha_ok = captcha::verify_hcaptcha(
        &state.http,
        &state.config.captcha.hcaptcha_secret,
        &form.hcaptcha_token,
    )
    .await;
    if !captcha_ok {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "hCaptcha verification failed" })),
        ));
    }

    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now().to_rfc3339();
    let insert = sqlx::query(
        "INSERT INTO contact_messages \
         (id, first_name, last_name, email, phone, message, locale, status, \
          browser, operating_system, device_type, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, 'new', $8, $9, $10, $11)",
    )
    .bind(&id)
    .bind(&form.first_name)
    .bind(&form.last_name)
    .bind(&form.email)
    .bind(&form.phone)
    .bind(&form.message)
    .bind(locale.as_str())
    .bind(&form.browser)
    .bind(&form.operating_system)
    .bind(&form.device_type)
    .bind(&created_at)
    .execute(&state.db)
    .await;

    if let Err(e) = insert {
        tracing::error!("Failed to insert contact message: {}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to save message to database" })),
        ));
    }

    if state.mailer.is_configured() {
        let (admin_subject, admin_body) = contact_admin_email(&form, locale);
        for recipient in &state.config.notifications.contact_emails {
            if let Err(e) = state
                .mailer
                .send_html(recipient, &admin_subject, &admin_body, Some(&form.email))
                .await
            {
                tracing::error!("Failed to send admin notification to {}: {}", recipient, e);
            }
        }

        let (confirm_subject, confirm_body) = contact_confirmation_email(&form, locale);
        if let Err(e) = state
            .mailer
            .send_html(&form.email, &confirm_subject, &confirm_body, None)
            .await
        {
            tracing::error!("Failed to send confirmation email: {}", e);
        }
    } else {
        tracing::warn!("Email not configured, skipping email notifications");
    }

    Ok(Json(json!({ "success": true })))
}
