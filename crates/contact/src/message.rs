use crate::escape::escape_html;
use crate::submission::ContactSubmission;

/// Address that always receives the owner notification for a submission.
pub const OWNER_EMAIL: &str = "tymbeixpoi@gmail.com";

/// Rendered subject and HTML body of one outbound email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html_body: String,
}

/// Renders the owner notification: the subject carries the escaped, trimmed
/// company name, the body lists every escaped field, and newlines in the
/// message become `<br>` line breaks.
pub fn notification_email(submission: &ContactSubmission) -> EmailContent {
    let message = escape_html(&submission.message).replace('\n', "<br>");
    EmailContent {
        subject: format!(
            "Firma: {} — wiadomość z formularza",
            escape_html(submission.company.trim())
        ),
        html_body: format!(
            "<h2>Nowa wiadomość z formularza kontaktowego</h2>\
             <p><strong>Imię:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Telefon:</strong> {}</p>\
             <p><strong>Firma:</strong> {}</p>\
             <p><strong>Wiadomość:</strong></p>\
             <p>{}</p>",
            escape_html(&submission.name),
            escape_html(&submission.email),
            escape_html(&submission.phone),
            escape_html(&submission.company),
            message,
        ),
    }
}

/// Renders the auto-reply that thanks the submitter by (escaped, trimmed)
/// name, signed by the site owner.
pub fn acknowledgement_email(submission: &ContactSubmission) -> EmailContent {
    EmailContent {
        subject: "Dziękujemy za kontakt".to_owned(),
        html_body: format!(
            "<p>Cześć {},</p>\
             <p>Dzięki za wiadomość — wrócimy do Ciebie najszybciej jak się da.</p>\
             <p>Pozdrawiam,<br>Tymoteusz Tymendorf</p>",
            escape_html(submission.name.trim()),
        ),
    }
}
