use nashikweb_content::ServiceKind;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::ValidInquiry;

/// A stored contact inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: ServiceKind,
    pub message: String,
    /// Unix timestamp in seconds.
    pub created_at: i64,
}

impl ContactInquiry {
    pub fn new(input: ValidInquiry, id: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            service: input.service,
            message: input.message,
            created_at,
        }
    }

    pub fn created_at_rfc3339(&self) -> String {
        time::OffsetDateTime::from_unix_timestamp(self.created_at)
            .ok()
            .and_then(|dt| {
                dt.format(&time::format_description::well_known::Rfc3339)
                    .ok()
            })
            .unwrap_or_else(|| self.created_at.to_string())
    }
}

#[derive(Debug, FromRow)]
pub struct InquiryRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: sqlx::types::Text<ServiceKind>,
    pub message: String,
    pub created_at: i64,
}

impl From<InquiryRow> for ContactInquiry {
    fn from(row: InquiryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            service: row.service.0,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let inquiry = ContactInquiry {
            id: "abc".to_owned(),
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: None,
            service: ServiceKind::CrmSystems,
            message: "Need a CRM for our showroom".to_owned(),
            created_at: 1_700_000_000,
        };

        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(json["createdAt"], 1_700_000_000);
        assert_eq!(json["service"], "CRM Systems");
        assert!(json["phone"].is_null());
        assert_eq!(inquiry.created_at_rfc3339(), "2023-11-14T22:13:20Z");
    }
}
