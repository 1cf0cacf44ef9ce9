use std::str::FromStr;

use nashikweb_content::ServiceKind;
use serde::Deserialize;
use validator::Validate;

use crate::{Error, FieldError};

/// Fields in the order errors are reported.
pub const FIELDS: [&str; 5] = ["name", "email", "phone", "service", "message"];

pub const PHONE_MAX_LEN: usize = 20;
pub const PHONE_MIN_DIGITS: usize = 7;

/// Contact form payload as posted by the browser, either as JSON or as an
/// urlencoded form. Missing fields default to empty so they are reported by
/// validation instead of failing deserialization.
#[derive(Validate, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ContactInquiryInput {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,
    #[validate(
        email(message = "Please enter a valid email address"),
        length(max = 320, message = "Email is too long")
    )]
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    #[validate(length(
        min = 10,
        max = 2000,
        message = "Message must be between 10 and 2000 characters"
    ))]
    pub message: String,
}

/// Input that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: ServiceKind,
    pub message: String,
}

impl ContactInquiryInput {
    /// Trims every field and drops a blank phone number.
    pub fn normalize(self) -> Self {
        let phone = self
            .phone
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty());

        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone,
            service: self.service.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }

    pub fn check(self) -> Result<ValidInquiry, Error> {
        let input = self.normalize();
        let mut errors = Vec::new();

        if let Err(validation) = input.validate() {
            for (field, field_errors) in validation.field_errors() {
                let Some(&field) = FIELDS.iter().find(|f| **f == field) else {
                    continue;
                };
                if let Some(first) = field_errors.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {field}"));
                    errors.push(FieldError::new(field, message));
                }
            }
        }

        if input.name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }

        if input.phone.as_deref().is_some_and(|p| !is_valid_phone(p)) {
            errors.push(FieldError::new("phone", "Please enter a valid phone number"));
        }

        let service = match ServiceKind::from_str(&input.service) {
            Ok(service) => Some(service),
            Err(_) => {
                errors.push(FieldError::new("service", "Please select a service"));
                None
            }
        };

        errors.sort_by_key(|e| FIELDS.iter().position(|f| *f == e.field));

        match service {
            Some(service) if errors.is_empty() => Ok(ValidInquiry {
                name: input.name,
                email: input.email,
                phone: input.phone,
                service,
                message: input.message,
            }),
            _ => Err(Error::Validation(errors)),
        }
    }
}

fn is_valid_phone(phone: &str) -> bool {
    if phone.chars().count() > PHONE_MAX_LEN {
        return false;
    }

    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));

    allowed && phone.chars().filter(char::is_ascii_digit).count() >= PHONE_MIN_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactInquiryInput {
        ContactInquiryInput {
            name: "Priya Kulkarni".to_owned(),
            email: "priya@example.com".to_owned(),
            phone: Some("+91 98765 43210".to_owned()),
            service: "Digital Menu Solutions".to_owned(),
            message: "We need a QR menu for our cafe on College Road.".to_owned(),
        }
    }

    fn fields(err: Error) -> Vec<&'static str> {
        err.field_errors().iter().map(|e| e.field).collect()
    }

    #[test]
    fn accepts_a_complete_inquiry() {
        let inquiry = valid().check().unwrap();
        assert_eq!(inquiry.service, ServiceKind::DigitalMenuSolutions);
        assert_eq!(inquiry.phone.as_deref(), Some("+91 98765 43210"));
    }

    #[test]
    fn trims_and_drops_blank_phone() {
        let inquiry = ContactInquiryInput {
            name: "  Priya  ".to_owned(),
            phone: Some("   ".to_owned()),
            ..valid()
        }
        .check()
        .unwrap();

        assert_eq!(inquiry.name, "Priya");
        assert_eq!(inquiry.phone, None);
    }

    #[test]
    fn reports_every_invalid_field_in_order() {
        let err = ContactInquiryInput::default().check().unwrap_err();
        assert_eq!(fields(err), ["name", "email", "service", "message"]);
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let err = ContactInquiryInput {
            name: "   ".to_owned(),
            ..valid()
        }
        .check()
        .unwrap_err();

        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn name_length_bounds() {
        let max = ContactInquiryInput {
            name: "a".repeat(100),
            ..valid()
        };
        assert!(max.check().is_ok());

        let err = ContactInquiryInput {
            name: "a".repeat(101),
            ..valid()
        }
        .check()
        .unwrap_err();
        assert_eq!(err.to_string(), "Name must be at most 100 characters");
    }

    #[test]
    fn rejects_bad_email() {
        let err = ContactInquiryInput {
            email: "not-an-email".to_owned(),
            ..valid()
        }
        .check()
        .unwrap_err();
        assert_eq!(fields(err), ["email"]);
    }

    #[test]
    fn rejects_unknown_service() {
        let err = ContactInquiryInput {
            service: "Mobile Apps".to_owned(),
            ..valid()
        }
        .check()
        .unwrap_err();
        assert_eq!(err.to_string(), "Please select a service");
    }

    #[test]
    fn phone_rules() {
        assert!(is_valid_phone("+91 98765 43210"));
        assert!(is_valid_phone("(0253) 231-4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("call me maybe"));
        assert!(!is_valid_phone("+91 98765 43210 98765 43210"));
    }

    #[test]
    fn message_length_bounds() {
        let short = ContactInquiryInput {
            message: "Hi there".to_owned(),
            ..valid()
        };
        assert_eq!(fields(short.check().unwrap_err()), ["message"]);

        let long = ContactInquiryInput {
            message: "a".repeat(2001),
            ..valid()
        };
        assert!(long.check().is_err());

        let max = ContactInquiryInput {
            message: "a".repeat(2000),
            ..valid()
        };
        assert!(max.check().is_ok());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let input: ContactInquiryInput =
            serde_json::from_str(r#"{"name":"Asha","email":"asha@example.com"}"#).unwrap();
        assert_eq!(input.name, "Asha");
        assert!(input.message.is_empty());
        assert!(input.phone.is_none());
    }
}
