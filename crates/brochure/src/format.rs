use serde::Deserialize;
use strum::{Display, EnumString};

use crate::{HTML_FILENAME, PDF_FILENAME};

/// Output format of the downloadable brochure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    #[default]
    Pdf,
    Html,
}

impl Format {
    pub fn filename(self) -> &'static str {
        match self {
            Format::Pdf => PDF_FILENAME,
            Format::Html => HTML_FILENAME,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Format::Pdf => "application/pdf",
            Format::Html => "text/html; charset=utf-8",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Format::from_str("PDF").unwrap(), Format::Pdf);
        assert_eq!(Format::from_str("html").unwrap(), Format::Html);
        assert!(Format::from_str("docx").is_err());
        assert_eq!(Format::Html.to_string(), "html");
    }
}
