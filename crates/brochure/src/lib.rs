//! Studio brochure, rendered on demand as a PDF or a printable HTML page.

mod color;
mod error;
mod font;
mod format;
mod html;
mod layout;
mod pdf;

pub use color::*;
pub use error::*;
pub use font::{Font, encode_win_ansi};
pub use format::Format;
pub use layout::{A4, Align, PdfDocument, TextStyle};

pub const PDF_FILENAME: &str = "Nashik-Web-Dev-Services.pdf";
pub const HTML_FILENAME: &str = "Nashik-Web-Dev-Services.html";

/// The brochure for a given copyright year.
#[derive(Debug, Clone, Copy)]
pub struct Brochure {
    pub year: i32,
}

impl Brochure {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn render_pdf(&self) -> Result<Vec<u8>> {
        let document = self.layout_pdf();
        tracing::debug!(pages = document.page_count(), "brochure pdf laid out");

        Ok(document.finish())
    }

    pub fn render_html(&self) -> Result<String> {
        html::render(self)
    }

    pub fn render(&self, format: Format) -> Result<Vec<u8>> {
        match format {
            Format::Pdf => self.render_pdf(),
            Format::Html => self.render_html().map(String::into_bytes),
        }
    }

    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.year,
            nashikweb_content::studio().name
        )
    }
}
