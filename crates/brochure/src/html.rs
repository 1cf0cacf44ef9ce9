use askama::Template;
use nashikweb_content::{
    self as content, Benefit, PricingTier, ProcessStep, Service, Studio, TeamMember,
};

use crate::{Brochure, Result};

#[derive(Template)]
#[template(path = "brochure.html")]
struct BrochureHtml<'a> {
    studio: &'a Studio,
    services: &'a [Service],
    process: &'a [ProcessStep],
    pricing: &'a [PricingTier],
    pricing_footnote: &'a str,
    benefits: &'a [Benefit],
    team: &'a [TeamMember],
    copyright: String,
    founders: String,
}

pub(crate) fn render(brochure: &Brochure) -> Result<String> {
    let template = BrochureHtml {
        studio: content::studio(),
        services: content::services(),
        process: content::process(),
        pricing: content::pricing(),
        pricing_footnote: content::PRICING_FOOTNOTE,
        benefits: content::benefits(),
        team: content::team(),
        copyright: brochure.copyright(),
        founders: content::team_line(),
    };

    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_section() {
        let html = Brochure::new(2025).render_html().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        for heading in [
            "Our Services",
            "Our Development Process",
            "Pricing &amp; Timeline",
            "Why Choose Us?",
            "Our Founding Team",
            "Ready to Get Started?",
        ] {
            assert!(html.contains(heading), "missing {heading}");
        }
        assert!(html.contains("© 2025 Nashik Website Development. All rights reserved."));
        assert!(html.contains("Viraj"));
        assert!(html.contains("₹1,00,000 - ₹3,00,000"));
    }
}
