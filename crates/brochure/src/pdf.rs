use nashikweb_content as content;

use crate::{
    Align, Brochure, MUTED, PRIMARY, PdfDocument, TEXT, TextStyle, WHITE,
};

const MARGIN: f32 = 50.0;
/// Services starting below this point move to a fresh page.
const SERVICE_BREAK_Y: f32 = 650.0;

impl Brochure {
    /// Lays out every brochure page without serializing it.
    pub fn layout_pdf(&self) -> PdfDocument {
        let studio = content::studio();
        let mut doc = PdfDocument::a4(MARGIN);
        doc.title(format!("{} - Service Guide", studio.name))
            .author(studio.name)
            .creator("nashikweb");

        self.cover(&mut doc);
        self.services(&mut doc);

        doc.add_page();
        self.process_and_pricing(&mut doc);

        doc.add_page();
        self.benefits_and_team(&mut doc);

        doc.add_page();
        self.call_to_action(&mut doc);

        doc
    }

    fn cover(&self, doc: &mut PdfDocument) {
        let studio = content::studio();

        doc.text(
            studio.name,
            TextStyle::new(32.0).bold().color(PRIMARY).align(Align::Center),
        );
        doc.move_down(0.5);
        doc.text(
            studio.tagline,
            TextStyle::new(14.0).color(MUTED).align(Align::Center),
        );
        doc.move_down(2.0);

        doc.text("Comprehensive Service Guide", TextStyle::new(24.0).bold());
        doc.move_down(0.5);
        doc.text(
            studio.intro,
            TextStyle::new(12.0).color(MUTED).align(Align::Justify),
        );
        doc.move_down(2.0);
    }

    fn services(&self, doc: &mut PdfDocument) {
        section_heading(doc, "Our Services");

        for service in content::services() {
            if doc.y() > SERVICE_BREAK_Y {
                doc.add_page();
            }

            doc.text(service.title, TextStyle::new(16.0).bold().color(PRIMARY));
            doc.text(service.summary, TextStyle::new(11.0).color(TEXT));
            doc.move_down(0.5);

            for feature in service.features {
                doc.text(
                    &format!("• {feature}"),
                    TextStyle::new(10.0).color(MUTED).indent(20.0),
                );
            }

            doc.move_down(0.3);
            doc.text(
                &format!("Tech Stack: {}", service.brochure_technologies.join(", ")),
                TextStyle::new(9.0).color(PRIMARY).indent(20.0),
            );
            doc.move_down(1.5);
        }
    }

    fn process_and_pricing(&self, doc: &mut PdfDocument) {
        section_heading(doc, "Our Development Process");

        for step in content::process() {
            doc.text(
                &format!("{}. {}", step.number, step.title),
                TextStyle::new(14.0).bold(),
            );
            doc.text(
                step.description,
                TextStyle::new(11.0).color(MUTED).indent(20.0),
            );
            doc.move_down(1.0);
        }

        doc.move_down(1.0);
        section_heading(doc, "Pricing & Timeline");

        for tier in content::pricing() {
            doc.text(tier.service, TextStyle::new(12.0));
            doc.text(
                &format!("{} | {}", tier.price, tier.timeline),
                TextStyle::new(11.0).color(PRIMARY).indent(20.0),
            );
            doc.move_down(0.8);
        }

        doc.text(
            content::PRICING_FOOTNOTE,
            TextStyle::new(9.0).color(MUTED).align(Align::Justify),
        );
    }

    fn benefits_and_team(&self, doc: &mut PdfDocument) {
        section_heading(doc, "Why Choose Us?");

        for benefit in content::benefits() {
            doc.text(benefit.title, TextStyle::new(14.0).bold());
            doc.text(
                benefit.description,
                TextStyle::new(11.0).color(MUTED).indent(20.0),
            );
            doc.move_down(1.0);
        }

        doc.move_down(1.0);
        section_heading(doc, "Our Founding Team");

        for member in content::team() {
            doc.text(member.name, TextStyle::new(14.0).bold());
            doc.text(
                member.role,
                TextStyle::new(11.0).color(PRIMARY).indent(20.0),
            );
            doc.text(member.bio, TextStyle::new(10.0).color(MUTED).indent(20.0));
            doc.move_down(1.2);
        }
    }

    fn call_to_action(&self, doc: &mut PdfDocument) {
        let studio = content::studio();
        doc.fill_page(PRIMARY);

        let centered = |size: f32| TextStyle::new(size).color(WHITE).align(Align::Center);

        doc.text("Ready to Get Started?", centered(28.0).bold());
        doc.move_down(1.0);
        doc.text(
            "Let's discuss your project and create something amazing together. Get a free consultation and detailed proposal.",
            centered(14.0),
        );
        doc.move_down(2.0);

        let lines = [
            format!("Email: {}", studio.email),
            format!("Phone: {}", studio.phone),
            format!("Location: {}", studio.location),
            format!("Hours: {}", studio.hours),
        ];
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                doc.move_down(0.5);
            }
            doc.text(line, centered(14.0));
        }

        doc.move_down(3.0);
        doc.text(&self.copyright(), centered(10.0));
        doc.text(
            &format!("Founded by {}", content::team_line()),
            centered(10.0),
        );
    }
}

fn section_heading(doc: &mut PdfDocument, title: &str) {
    doc.text(title, TextStyle::new(20.0).bold().color(PRIMARY));
    doc.move_down(1.0);
}
