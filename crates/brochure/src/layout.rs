use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::{
    Rgb, TEXT,
    font::{ASCENT, Font, LINE_HEIGHT, encode_win_ansi},
};

/// A4 page size in points.
pub const A4: (f32, f32) = (595.28, 841.89);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgb,
    pub font: Font,
    pub align: Align,
    pub indent: f32,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            color: TEXT,
            font: Font::Regular,
            align: Align::Left,
            indent: 0.0,
        }
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.font = Font::Bold;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT
    }
}

#[derive(Debug, Default)]
struct Info {
    title: Option<String>,
    author: Option<String>,
    creator: Option<String>,
}

/// A flowing document: text is laid out top to bottom from a cursor and
/// breaks onto a new page when it reaches the bottom margin.
pub struct PdfDocument {
    width: f32,
    height: f32,
    margin: f32,
    pages: Vec<Content>,
    /// Distance of the cursor from the top edge of the current page.
    y: f32,
    line_height: f32,
    info: Info,
}

impl PdfDocument {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
            pages: vec![Content::new()],
            y: margin,
            line_height: 12.0 * LINE_HEIGHT,
            info: Info::default(),
        }
    }

    pub fn a4(margin: f32) -> Self {
        Self::new(A4.0, A4.1, margin)
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.info.title = Some(title.into());
        self
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.info.author = Some(author.into());
        self
    }

    pub fn creator(&mut self, creator: impl Into<String>) -> &mut Self {
        self.info.creator = Some(creator.into());
        self
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    pub fn add_page(&mut self) {
        self.pages.push(Content::new());
        self.y = self.margin;
    }

    /// Moves the cursor down by `lines` of the most recently used text size.
    pub fn move_down(&mut self, lines: f32) {
        self.y += lines * self.line_height;
    }

    /// Paints the whole current page, margins included.
    pub fn fill_page(&mut self, color: Rgb) {
        let (width, height) = (self.width, self.height);
        let content = self.current();
        content.save_state();
        content.set_fill_rgb(color.0, color.1, color.2);
        content.rect(0.0, 0.0, width, height);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Writes a wrapped paragraph at the cursor and advances past it.
    pub fn text(&mut self, text: &str, style: TextStyle) {
        self.line_height = style.line_height();
        let available = self.content_width() - style.indent;
        let lines = wrap(text, style.font, style.size, available);
        let last = lines.len().saturating_sub(1);

        for (index, line) in lines.iter().enumerate() {
            if self.y + style.line_height() > self.height - self.margin {
                self.add_page();
            }

            let line_width = style.font.measure(line, style.size);
            let left = self.margin + style.indent;
            let x = match style.align {
                Align::Left | Align::Justify => left,
                Align::Center => left + (available - line_width) / 2.0,
                Align::Right => left + available - line_width,
            };

            let spaces = line.matches(' ').count();
            let word_spacing = if style.align == Align::Justify && index < last && spaces > 0 {
                (available - line_width) / spaces as f32
            } else {
                0.0
            };

            let baseline = self.height - self.y - style.size * ASCENT;
            let content = self.current();
            content.begin_text();
            content.set_fill_rgb(style.color.0, style.color.1, style.color.2);
            content.set_font(style.font.resource_name(), style.size);
            content.set_word_spacing(word_spacing);
            content.next_line(x, baseline);
            content.show(Str(&encode_win_ansi(line)));
            content.end_text();

            self.y += style.line_height();
        }
    }

    pub fn finish(self) -> Vec<u8> {
        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let regular_id = alloc.bump();
        let bold_id = alloc.bump();
        let info_id = alloc.bump();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);

        let ids: Vec<(Ref, Ref)> = self
            .pages
            .iter()
            .map(|_| (alloc.bump(), alloc.bump()))
            .collect();

        pdf.pages(page_tree_id)
            .kids(ids.iter().map(|(page_id, _)| *page_id))
            .count(ids.len() as i32);

        for ((page_id, content_id), content) in ids.into_iter().zip(self.pages) {
            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(0.0, 0.0, self.width, self.height));
            page.parent(page_tree_id);
            page.contents(content_id);
            page.resources()
                .fonts()
                .pair(Font::Regular.resource_name(), regular_id)
                .pair(Font::Bold.resource_name(), bold_id);
            page.finish();

            pdf.stream(content_id, &content.finish());
        }

        for (id, font) in [(regular_id, Font::Regular), (bold_id, Font::Bold)] {
            pdf.type1_font(id)
                .base_font(font.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let mut info = pdf.document_info(info_id);
        if let Some(title) = &self.info.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.info.author {
            info.author(TextStr(author));
        }
        if let Some(creator) = &self.info.creator {
            info.creator(TextStr(creator));
        }
        info.finish();

        pdf.finish()
    }

    fn current(&mut self) -> &mut Content {
        if self.pages.is_empty() {
            self.pages.push(Content::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

/// Greedy word wrap. Words wider than `width` are split across lines.
pub(crate) fn wrap(text: &str, font: Font, size: f32, width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_owned()
            } else {
                format!("{line} {word}")
            };

            if font.measure(&candidate, size) <= width {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            if font.measure(word, size) <= width {
                line = word.to_owned();
                continue;
            }

            for c in word.chars() {
                let mut next = line.clone();
                next.push(c);
                if !line.is_empty() && font.measure(&next, size) > width {
                    lines.push(std::mem::take(&mut line));
                    line.push(c);
                } else {
                    line = next;
                }
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(
            wrap("Our Services", Font::Regular, 20.0, 495.0),
            ["Our Services"]
        );
    }

    #[test]
    fn wrap_breaks_on_words_within_width() {
        let text = "Transform your business with cutting-edge web technologies and full deployment support.";
        let lines = wrap(text, Font::Regular, 12.0, 200.0);

        assert!(lines.len() > 1);
        assert!(
            lines
                .iter()
                .all(|l| Font::Regular.measure(l, 12.0) <= 200.0)
        );
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_splits_words_wider_than_the_line() {
        let lines = wrap("abcdefghijklmnopqrstuvwxyz", Font::Regular, 12.0, 40.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn wrap_keeps_explicit_newlines_and_empty_input() {
        assert_eq!(wrap("a\nb", Font::Bold, 10.0, 100.0), ["a", "b"]);
        assert_eq!(wrap("", Font::Bold, 10.0, 100.0), [""]);
    }

    #[test]
    fn text_advances_cursor_by_line_height() {
        let mut doc = PdfDocument::a4(50.0);
        let start = doc.y();
        doc.text("Hello", TextStyle::new(10.0));
        assert!((doc.y() - start - 10.0 * LINE_HEIGHT).abs() < 0.001);

        doc.move_down(2.0);
        assert!((doc.y() - start - 3.0 * 10.0 * LINE_HEIGHT).abs() < 0.001);
    }

    #[test]
    fn text_breaks_onto_new_pages() {
        let mut doc = PdfDocument::a4(50.0);
        for _ in 0..80 {
            doc.text("Line", TextStyle::new(12.0));
        }

        assert_eq!(doc.page_count(), 2);
        assert!(doc.y() < A4.1 - 50.0);
    }

    #[test]
    fn add_page_resets_cursor() {
        let mut doc = PdfDocument::a4(40.0);
        doc.text("Hello", TextStyle::new(30.0));
        doc.add_page();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.y(), 40.0);
    }

    #[test]
    fn finish_writes_a_pdf_file() {
        let mut doc = PdfDocument::a4(50.0);
        doc.title("Test").author("Tester");
        doc.text("Hello (world)", TextStyle::new(12.0).bold().align(Align::Center));
        doc.fill_page(crate::PRIMARY);
        let bytes = doc.finish();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.windows(9).any(|w| w == b"Helvetica"));
        assert!(bytes.windows(15).any(|w| w == b"WinAnsiEncoding"));
    }
}
