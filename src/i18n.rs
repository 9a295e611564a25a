//! Single keyed message table for user-facing strings.
//!
//! Every localized string the backend emits lives here, looked up by
//! `(locale, key)`. Unknown keys fall back to the key itself so a missing
//! entry shows up in output instead of panicking.

use crate::locale::Locale;

pub fn message(locale: Locale, key: &str) -> &'static str {
    match locale {
        Locale::Tr => message_tr(key),
        Locale::En => message_en(key),
    }
    .unwrap_or(match locale {
        // Fall back to the other locale before giving up
        Locale::Tr => message_en(key).unwrap_or("?"),
        Locale::En => message_tr(key).unwrap_or("?"),
    })
}

fn message_tr(key: &str) -> Option<&'static str> {
    Some(match key {
        "search.too-short" => "Arama sorgusu en az 2 karakter olmalıdır",
        "search.failed" => "Arama gerçekleştirilemedi",
        "route.go-to" => "{name} sayfasına git",
        "author.team-name" => "BYM Türkiye Ekibi",
        "author.default-position" => "Yazar",
        "contact.admin-subject" => "Yeni İletişim Formu Mesajı",
        "contact.admin-title" => "Yeni İletişim Formu Mesajı",
        "contact.confirm-subject" => "İletişim Formunuz Alındı - BYM Türkiye",
        "contact.confirm-title" => "İletişim Talebiniz Alındı",
        "contact.confirm-body" => "İletişim formu aracılığıyla gönderdiğiniz mesajınız başarıyla alınmıştır. En kısa sürede size geri dönüş yapacağız.",
        "contact.confirm-summary" => "Mesajınızın Özeti",
        "contact.confirm-thanks" => "Bizimle iletişime geçtiğiniz için teşekkür ederiz.",
        "contact.admin-footer" => "Bu e-posta, web sitenizdeki iletişim formundan otomatik olarak gönderilmiştir.",
        "contact.confirm-footer" => "Bu e-posta, web sitemizdeki iletişim formuna gönderdiğiniz mesaja yanıt olarak otomatik olarak gönderilmiştir. Lütfen bu e-postayı yanıtlamayınız.",
        "application.admin-subject" => "Yeni Temsilcilik Başvurusu",
        "application.admin-title" => "Yeni Temsilcilik Başvurusu",
        "application.confirm-subject" => "Temsilcilik Başvurunuz Alındı - BYM Türkiye",
        "application.confirm-title" => "Temsilcilik Başvurunuz Alındı",
        "application.confirm-body" => "Temsilcilik başvuru formu aracılığıyla gönderdiğiniz başvurunuz başarıyla alınmıştır. Başvurunuz değerlendirildikten sonra sizinle iletişime geçeceğiz.",
        "application.confirm-summary" => "Başvurunuzun Özeti",
        "application.confirm-thanks" => "Temsilcilik programımıza gösterdiğiniz ilgi için teşekkür ederiz.",
        "application.admin-footer" => "Bu e-posta, web sitenizdeki temsilcilik başvuru formundan otomatik olarak gönderilmiştir.",
        "application.confirm-footer" => "Bu e-posta, web sitemizdeki temsilcilik başvuru formuna gönderdiğiniz mesaja yanıt olarak otomatik olarak gönderilmiştir. Lütfen bu e-postayı yanıtlamayınız.",
        "application.details" => "Başvuru Detayları",
        "application.academic" => "Akademik Bilgiler",
        "application.about" => "Kendi Hakkında",
        "application.motivation" => "Motivasyon",
        "application.activities" => "Planlanan Etkinlikler",
        "application.expectations" => "Beklentiler",
        "application.notes" => "Ek Notlar",
        "application.date" => "Başvuru Tarihi",
        "label.dear" => "Sayın",
        "label.regards" => "Saygılarımızla,",
        "label.from" => "Gönderen",
        "label.name" => "Ad Soyad",
        "label.phone" => "Telefon",
        "label.message" => "Mesaj",
        "label.subject" => "Konu",
        "label.submission-date" => "İletilme Tarihi",
        "label.birth-date" => "Doğum Tarihi",
        "label.country" => "Ülke",
        "label.city" => "Şehir",
        "label.university" => "Üniversite/Okul",
        "label.department" => "Bölüm",
        "label.grade" => "Sınıf",
        "label.languages" => "Dil Yetenekleri",
        "label.other-communities" => "Diğer Topluluklar",
        "label.device-info" => "Cihaz Bilgileri",
        "label.browser" => "Tarayıcı",
        "label.os" => "İşletim Sistemi",
        "label.device-type" => "Cihaz Türü",
        "label.contact-form-message" => "İletişim Formu Mesajı",
        _ => return None,
    })
}

fn message_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "search.too-short" => "Search query must be at least 2 characters long",
        "search.failed" => "Failed to perform search",
        "route.go-to" => "Go to {name} page",
        "author.team-name" => "BYM Turkey Team",
        "author.default-position" => "Author",
        "contact.admin-subject" => "New Contact Form Message",
        "contact.admin-title" => "New Contact Form Message",
        "contact.confirm-subject" => "Your Contact Form Has Been Received - BYM Turkey",
        "contact.confirm-title" => "Your Contact Request Has Been Received",
        "contact.confirm-body" => "Your message sent through our contact form has been successfully received. We will get back to you as soon as possible.",
        "contact.confirm-summary" => "Summary of Your Message",
        "contact.confirm-thanks" => "Thank you for contacting us.",
        "contact.admin-footer" => "This email was automatically sent from the contact form on your website.",
        "contact.confirm-footer" => "This email was automatically sent in response to your message submitted through our website contact form. Please do not reply to this email.",
        "application.admin-subject" => "New Representative Application",
        "application.admin-title" => "New Representative Application",
        "application.confirm-subject" => "Your Representative Application Has Been Received - BYM Turkey",
        "application.confirm-title" => "Your Representative Application Has Been Received",
        "application.confirm-body" => "Your application submitted through our representative application form has been successfully received. We will contact you after your application has been evaluated.",
        "application.confirm-summary" => "Summary of Your Application",
        "application.confirm-thanks" => "Thank you for your interest in our representative program.",
        "application.admin-footer" => "This email was automatically sent from the representative application form on your website.",
        "application.confirm-footer" => "This email was automatically sent in response to your application submitted through our website representative application form. Please do not reply to this email.",
        "application.details" => "Application Details",
        "application.academic" => "Academic Information",
        "application.about" => "About Themselves",
        "application.motivation" => "Motivation",
        "application.activities" => "Planned Activities",
        "application.expectations" => "Expectations",
        "application.notes" => "Additional Notes",
        "application.date" => "Application Date",
        "label.dear" => "Dear",
        "label.regards" => "Best regards,",
        "label.from" => "From",
        "label.name" => "Name",
        "label.phone" => "Phone",
        "label.message" => "Message",
        "label.subject" => "Subject",
        "label.submission-date" => "Submission Date",
        "label.birth-date" => "Birth Date",
        "label.country" => "Country",
        "label.city" => "City",
        "label.university" => "University/School",
        "label.department" => "Department",
        "label.grade" => "Grade",
        "label.languages" => "Language Skills",
        "label.other-communities" => "Other Communities",
        "label.device-info" => "Device Information",
        "label.browser" => "Browser",
        "label.os" => "Operating System",
        "label.device-type" => "Device Type",
        "label.contact-form-message" => "Contact Form Message",
        _ => return None,
    })
}

/// Excerpt shown for a static route search result ("Go to Blog page").
pub fn route_excerpt(locale: Locale, name: &str) -> String {
    message(locale, "route.go-to").replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_lookup() {
        assert_eq!(
            message(Locale::En, "search.too-short"),
            "Search query must be at least 2 characters long"
        );
        assert_eq!(
            message(Locale::Tr, "search.too-short"),
            "Arama sorgusu en az 2 karakter olmalıdır"
        );
    }

    #[test]
    fn test_route_excerpt() {
        assert_eq!(route_excerpt(Locale::En, "Blog"), "Go to Blog page");
        assert_eq!(route_excerpt(Locale::Tr, "Blog"), "Blog sayfasına git");
    }

    #[test]
    fn test_unknown_key_does_not_panic() {
        assert_eq!(message(Locale::Tr, "no-such-key"), "?");
    }
}
