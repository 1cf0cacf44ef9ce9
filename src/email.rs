//! Inquiry notifications over SMTP

use anyhow::Context;
use askama::Template;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use nashikweb_contact::ContactInquiry;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tracing::info;

use crate::config::EmailConfig;

#[derive(Template)]
#[template(path = "emails/contact-notification.html")]
struct ContactNotificationHtml<'a> {
    inquiry: &'a ContactInquiry,
    received_at: String,
}

#[derive(Template)]
#[template(path = "emails/contact-notification.txt")]
struct ContactNotificationText<'a> {
    inquiry: &'a ContactInquiry,
    received_at: String,
}

#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
    notify: String,
    skip_sending: bool,
    sent: Arc<AtomicUsize>,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
            notify: config.notify_address.clone(),
            skip_sending: false,
            sent: Arc::default(),
        })
    }

    /// Builds messages but never opens an SMTP connection.
    pub fn new_mock(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = SmtpTransport::builder_dangerous("localhost")
            .port(1025)
            .build();

        info!(
            from = %config.from_address,
            notify = %config.notify_address,
            "Mock email service initialized (SMTP calls skipped)"
        );

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
            notify: config.notify_address.clone(),
            skip_sending: true,
            sent: Arc::default(),
        })
    }

    /// Number of notifications handed to the transport (or skipped in mock mode).
    pub fn sent_count(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }

    pub fn contact_notification(&self, inquiry: &ContactInquiry) -> anyhow::Result<Message> {
        let received_at = inquiry.created_at_rfc3339();

        let html = ContactNotificationHtml {
            inquiry,
            received_at: received_at.clone(),
        }
        .render()
        .context("Failed to render HTML email template")?;

        let text = ContactNotificationText {
            inquiry,
            received_at,
        }
        .render()
        .context("Failed to render plain text email template")?;

        let mut builder = Message::builder()
            .from(self.from.parse().context("Failed to parse from address")?)
            .to(self.notify.parse().context("Failed to parse notify address")?)
            .subject(format!(
                "New inquiry: {} from {}",
                inquiry.service, inquiry.name
            ));

        if let Ok(reply_to) = inquiry.email.parse() {
            builder = builder.reply_to(reply_to);
        }

        builder
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html),
                    ),
            )
            .context("Failed to build email message")
    }

    pub async fn send_contact_notification(&self, inquiry: &ContactInquiry) -> anyhow::Result<()> {
        let message = self.contact_notification(inquiry)?;

        if self.skip_sending {
            info!(inquiry.id = %inquiry.id, "Mock email service: skipping SMTP send");
            self.sent.fetch_add(1, Ordering::SeqCst);
            return Ok(());
        }

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .context("SMTP task panicked")?
            .context("SMTP error")?;

        self.sent.fetch_add(1, Ordering::SeqCst);
        info!(inquiry.id = %inquiry.id, to = %self.notify, "Contact notification sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nashikweb_contact::ServiceKind;

    fn inquiry() -> ContactInquiry {
        ContactInquiry {
            id: "inq-1".to_owned(),
            name: "Priya Kulkarni".to_owned(),
            email: "priya@example.com".to_owned(),
            phone: Some("+91 98220 12345".to_owned()),
            service: ServiceKind::DigitalMenuSolutions,
            message: "We need a QR menu for our cafe on College Road.".to_owned(),
            created_at: 1_700_000_000,
        }
    }

    fn config() -> EmailConfig {
        EmailConfig {
            enabled: true,
            notify_address: "owner@nashikwebdev.com".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn notification_carries_inquiry() {
        let service = EmailService::new_mock(&config()).unwrap();
        let message = service.contact_notification(&inquiry()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Subject: New inquiry: Digital Menu Solutions from Priya Kulkarni"));
        assert!(raw.contains("To: owner@nashikwebdev.com"));
        assert!(raw.contains("Reply-To: priya@example.com"));
        assert!(raw.contains("QR menu"));
    }

    #[tokio::test]
    async fn mock_counts_without_sending() {
        let service = EmailService::new_mock(&config()).unwrap();
        service.send_contact_notification(&inquiry()).await.unwrap();

        assert_eq!(service.sent_count(), 1);
    }

    #[test]
    fn invalid_notify_address_fails_to_build() {
        let mut config = config();
        config.notify_address = "not an address".to_owned();
        let service = EmailService::new_mock(&config).unwrap();

        assert!(service.contact_notification(&inquiry()).is_err());
    }
}
