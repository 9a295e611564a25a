//! SMTP notifications: admin alerts and sender confirmations for the
//! contact form and the representative application, as localized HTML.

use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::EmailConfig;
use crate::i18n::message;
use crate::locale::Locale;
use crate::models::{ContactForm, RepresentativeApplication};

#[derive(Clone)]
pub struct Mailer {
    settings: EmailConfig,
}

impl Mailer {
    pub fn new(settings: EmailConfig) -> Self {
        Self { settings }
    }

    pub fn is_configured(&self) -> bool {
        !self.settings.username.is_empty() && !self.settings.password.is_empty()
    }

    /// Send one HTML email. `reply_to` is set on admin notifications so a
    /// reply goes straight to the submitter.
    pub async fn send_html(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        reply_to: Option<&str>,
    ) -> Result<(), String> {
        let from = format!("{} <{}>", self.settings.from_name, self.settings.username);
        let mut builder = Message::builder()
            .from(from.parse().map_err(|e| format!("Invalid from address: {}", e))?)
            .to(to.parse().map_err(|e| format!("Invalid to address: {}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = reply_to {
            builder = builder.reply_to(
                reply_to
                    .parse()
                    .map_err(|e| format!("Invalid reply-to address: {}", e))?,
            );
        }

        let email = builder
            .body(body.to_string())
            .map_err(|e| format!("Failed to build email: {}", e))?;

        let creds = Credentials::new(
            self.settings.username.clone(),
            self.settings.password.clone(),
        );

        let mailer: AsyncSmtpTransport<Tokio1Executor> = if self.settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.settings.host)
                .map_err(|e| format!("SMTP connection failed: {}", e))?
                .port(self.settings.port)
                .credentials(creds)
                .build()
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.host)
                .map_err(|e| format!("SMTP connection failed: {}", e))?
                .port(self.settings.port)
                .credentials(creds)
                .build()
        };

        mailer
            .send(email)
            .await
            .map_err(|e| format!("Failed to send email: {}", e))?;

        Ok(())
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn text_block(raw: &str) -> String {
    escape(raw).replace('\n', "<br>")
}

fn wrap(inner: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">{}</div>"#,
        inner
    )
}

fn heading(text: &str) -> String {
    format!(
        r#"<h2 style="color: #a90013; border-bottom: 1px solid #e5e5e5; padding-bottom: 10px;">{}</h2>"#,
        text
    )
}

fn footer(text: &str) -> String {
    format!(
        r#"<p style="margin-top: 30px; font-size: 12px; color: #777; border-top: 1px solid #e5e5e5; padding-top: 10px;">{}</p>"#,
        text
    )
}

fn signature(locale: Locale) -> String {
    format!(
        "<p>{}<br /><strong>BYM Türkiye</strong><br /><strong>UNILAB Vision</strong></p>",
        message(locale, "label.regards")
    )
}

/// Admin notification for a contact-form submission.
pub fn contact_admin_email(form: &ContactForm, locale: Locale) -> (String, String) {
    let subject = format!(
        "{}: {} {}",
        message(locale, "contact.admin-subject"),
        form.first_name,
        form.last_name
    );

    let phone_line = form
        .phone
        .as_deref()
        .map(|phone| {
            format!(
                "<p><strong>{}:</strong> {}</p>",
                message(locale, "label.phone"),
                escape(phone)
            )
        })
        .unwrap_or_default();

    let not_detected = "Not detected";
    let body = wrap(&format!(
        r#"{heading}
<p><strong>{from_label}:</strong> {first} {last}</p>
<p><strong>Email:</strong> {email}</p>
{phone_line}
<div style="margin-top: 20px; background-color: #f9f9f9; padding: 10px; border-left: 4px solid #666;">
  <h3 style="color: #555; margin-top: 0;">{device_label}:</h3>
  <p><strong>{browser_label}:</strong> {browser}</p>
  <p><strong>{os_label}:</strong> {os}</p>
  <p><strong>{device_type_label}:</strong> {device_type}</p>
</div>
<div style="margin-top: 20px;">
  <h3 style="color: #555;">{message_label}:</h3>
  <div style="background-color: #f9f9f9; padding: 15px; border-left: 4px solid #a90013;">{body}</div>
</div>
{footer}"#,
        heading = heading(message(locale, "contact.admin-title")),
        from_label = message(locale, "label.from"),
        first = escape(&form.first_name),
        last = escape(&form.last_name),
        email = escape(&form.email),
        phone_line = phone_line,
        device_label = message(locale, "label.device-info"),
        browser_label = message(locale, "label.browser"),
        browser = escape(form.browser.as_deref().unwrap_or(not_detected)),
        os_label = message(locale, "label.os"),
        os = escape(form.operating_system.as_deref().unwrap_or(not_detected)),
        device_type_label = message(locale, "label.device-type"),
        device_type = escape(form.device_type.as_deref().unwrap_or(not_detected)),
        message_label = message(locale, "label.message"),
        body = text_block(&form.message),
        footer = footer(message(locale, "contact.admin-footer")),
    ));

    (subject, body)
}

/// Confirmation sent back to the person who submitted the contact form.
pub fn contact_confirmation_email(form: &ContactForm, locale: Locale) -> (String, String) {
    let subject = message(locale, "contact.confirm-subject").to_string();

    let body = wrap(&format!(
        r#"{heading}
<p>{dear} {first} {last},</p>
<p>{body_text}</p>
<div style="margin-top: 20px; background-color: #f9f9f9; padding: 15px; border-left: 4px solid #a90013;">
  <h3 style="color: #555; margin-top: 0;">{summary_label}:</h3>
  <p><strong>{date_label}:</strong> {date}</p>
  <p><strong>{subject_label}:</strong> {form_label}</p>
</div>
<p style="margin-top: 20px;">{thanks}</p>
{signature}
{footer}"#,
        heading = heading(message(locale, "contact.confirm-title")),
        dear = message(locale, "label.dear"),
        first = escape(&form.first_name),
        last = escape(&form.last_name),
        body_text = message(locale, "contact.confirm-body"),
        summary_label = message(locale, "contact.confirm-summary"),
        date_label = message(locale, "label.submission-date"),
        date = crate::locale::format_today(locale),
        subject_label = message(locale, "label.subject"),
        form_label = message(locale, "label.contact-form-message"),
        thanks = message(locale, "contact.confirm-thanks"),
        signature = signature(locale),
        footer = footer(message(locale, "contact.confirm-footer")),
    ));

    (subject, body)
}

fn application_section(label: &str, text: &str) -> String {
    format!(
        r#"<div style="background-color: #f9f9f9; padding: 15px; border-left: 4px solid #a90013; margin-bottom: 15px;">
  <h4 style="margin-top: 0;">{}:</h4>
  {}
</div>"#,
        label,
        text_block(text)
    )
}

/// Admin notification carrying the full representative application.
pub fn application_admin_email(
    app: &RepresentativeApplication,
    locale: Locale,
) -> (String, String) {
    let subject = format!(
        "{}: {} {}",
        message(locale, "application.admin-subject"),
        app.first_name,
        app.last_name
    );

    let other_communities = app
        .other_communities
        .as_deref()
        .map(|c| {
            format!(
                "<p><strong>{}:</strong> {}</p>",
                message(locale, "label.other-communities"),
                escape(c)
            )
        })
        .unwrap_or_default();

    let notes_section = app
        .additional_notes
        .as_deref()
        .map(|notes| application_section(message(locale, "application.notes"), notes))
        .unwrap_or_default();

    let body = wrap(&format!(
        r#"{heading}
<p><strong>{name_label}:</strong> {first} {last}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>{phone_label}:</strong> {phone}</p>
<p><strong>{birth_label}:</strong> {birth}</p>
<p><strong>{country_label}:</strong> {country}</p>
<p><strong>{city_label}:</strong> {city}</p>
<div style="margin-top: 20px; background-color: #f9f9f9; padding: 10px; border-left: 4px solid #666;">
  <h3 style="color: #555; margin-top: 0;">{academic_label}:</h3>
  <p><strong>{university_label}:</strong> {university}</p>
  <p><strong>{department_label}:</strong> {department}</p>
  <p><strong>{grade_label}:</strong> {grade}</p>
  <p><strong>{languages_label}:</strong> {languages}</p>
  {other_communities}
</div>
<div style="margin-top: 20px;">
  <h3 style="color: #555;">{details_label}:</h3>
  {about}
  {motivation}
  {activities}
  {expectations}
  {notes}
</div>
{footer}"#,
        heading = heading(message(locale, "application.admin-title")),
        name_label = message(locale, "label.name"),
        first = escape(&app.first_name),
        last = escape(&app.last_name),
        email = escape(&app.email),
        phone_label = message(locale, "label.phone"),
        phone = escape(&app.phone_number),
        birth_label = message(locale, "label.birth-date"),
        birth = escape(&app.birth_date),
        country_label = message(locale, "label.country"),
        country = escape(&app.country),
        city_label = message(locale, "label.city"),
        city = escape(&app.city),
        academic_label = message(locale, "application.academic"),
        university_label = message(locale, "label.university"),
        university = escape(&app.university_school),
        department_label = message(locale, "label.department"),
        department = escape(&app.department),
        grade_label = message(locale, "label.grade"),
        grade = escape(&app.grade),
        languages_label = message(locale, "label.languages"),
        languages = escape(&app.language_skills),
        other_communities = other_communities,
        details_label = message(locale, "application.details"),
        about = application_section(message(locale, "application.about"), &app.about_yourself),
        motivation = application_section(message(locale, "application.motivation"), &app.motivation),
        activities =
            application_section(message(locale, "application.activities"), &app.planned_activities),
        expectations =
            application_section(message(locale, "application.expectations"), &app.expectations),
        notes = notes_section,
        footer = footer(message(locale, "application.admin-footer")),
    ));

    (subject, body)
}

/// Confirmation sent to the applicant.
pub fn application_confirmation_email(
    app: &RepresentativeApplication,
    locale: Locale,
) -> (String, String) {
    let subject = message(locale, "application.confirm-subject").to_string();

    let body = wrap(&format!(
        r#"{heading}
<p>{dear} {first} {last},</p>
<p>{body_text}</p>
<div style="margin-top: 20px; background-color: #f9f9f9; padding: 15px; border-left: 4px solid #a90013;">
  <h3 style="color: #555; margin-top: 0;">{summary_label}:</h3>
  <p><strong>{date_label}:</strong> {date}</p>
  <p><strong>{university_label}:</strong> {university}</p>
  <p><strong>{department_label}:</strong> {department}</p>
</div>
<p style="margin-top: 20px;">{thanks}</p>
{signature}
{footer}"#,
        heading = heading(message(locale, "application.confirm-title")),
        dear = message(locale, "label.dear"),
        first = escape(&app.first_name),
        last = escape(&app.last_name),
        body_text = message(locale, "application.confirm-body"),
        summary_label = message(locale, "application.confirm-summary"),
        date_label = message(locale, "application.date"),
        date = crate::locale::format_today(locale),
        university_label = message(locale, "label.university"),
        university = escape(&app.university_school),
        department_label = message(locale, "label.department"),
        department = escape(&app.department),
        thanks = message(locale, "application.confirm-thanks"),
        signature = signature(locale),
        footer = footer(message(locale, "application.confirm-footer")),
    ));

    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> ContactForm {
        ContactForm {
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            email: "ayse@example.com".to_string(),
            phone: None,
            message: "Merhaba,\nbir sorum var.".to_string(),
            locale: Some("tr".to_string()),
            browser: Some("Firefox".to_string()),
            operating_system: None,
            device_type: None,
            hcaptcha_token: "t".to_string(),
        }
    }

    #[test]
    fn test_contact_admin_subject_carries_name() {
        let (subject, body) = contact_admin_email(&sample_form(), Locale::Tr);
        assert_eq!(subject, "Yeni İletişim Formu Mesajı: Ayşe Yılmaz");
        assert!(body.contains("ayse@example.com"));
        // newlines become line breaks
        assert!(body.contains("Merhaba,<br>bir sorum var."));
    }

    #[test]
    fn test_contact_admin_escapes_html() {
        let mut form = sample_form();
        form.message = "<script>alert(1)</script>".to_string();
        let (_, body) = contact_admin_email(&form, Locale::En);
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_confirmation_localized() {
        let (subject_tr, _) = contact_confirmation_email(&sample_form(), Locale::Tr);
        let (subject_en, _) = contact_confirmation_email(&sample_form(), Locale::En);
        assert!(subject_tr.contains("İletişim Formunuz Alındı"));
        assert!(subject_en.contains("Your Contact Form Has Been Received"));
    }
}
