use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Services a visitor can ask about on the contact form.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum ServiceKind {
    #[default]
    #[strum(serialize = "Website Development")]
    #[serde(rename = "Website Development")]
    WebsiteDevelopment,
    #[strum(serialize = "Digital Menu Solutions")]
    #[serde(rename = "Digital Menu Solutions")]
    DigitalMenuSolutions,
    #[strum(serialize = "CRM Systems")]
    #[serde(rename = "CRM Systems")]
    CrmSystems,
    #[strum(serialize = "Custom Software")]
    #[serde(rename = "Custom Software")]
    CustomSoftware,
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub kind: ServiceKind,
    pub title: &'static str,
    pub tagline: &'static str,
    /// One-liner used on the home page and in the brochure.
    pub summary: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub brochure_technologies: &'static [&'static str],
}

pub static SERVICES: [Service; 4] = [
    Service {
        kind: ServiceKind::WebsiteDevelopment,
        title: "Website Development",
        tagline: "Modern, Responsive & SEO-Optimized",
        summary: "Modern, responsive, and SEO-optimized websites that drive results.",
        description: "We create stunning, high-performance websites that drive results. From simple landing pages to complex web applications, we've got you covered.",
        features: &[
            "Custom responsive design",
            "SEO optimization",
            "Performance optimization",
            "Content management system",
            "E-commerce integration",
            "Full deployment & hosting",
        ],
        technologies: &["React", "Next.js", "Node.js", "MongoDB", "PostgreSQL"],
        brochure_technologies: &["React", "Next.js", "Node.js"],
    },
    Service {
        kind: ServiceKind::DigitalMenuSolutions,
        title: "Digital Menu Solutions",
        tagline: "Interactive & Real-Time Updates",
        summary: "Interactive digital menus for restaurants and cafés with real-time updates.",
        description: "Transform your restaurant or café with modern digital menus. QR code enabled, easy to update, and beautiful presentation for your customers.",
        features: &[
            "QR code generation",
            "Real-time menu updates",
            "Multi-language support",
            "Image galleries",
            "Order management",
            "Analytics dashboard",
        ],
        technologies: &["React", "Firebase", "Cloudinary", "Stripe"],
        brochure_technologies: &["React", "Firebase", "Stripe"],
    },
    Service {
        kind: ServiceKind::CrmSystems,
        title: "CRM Systems",
        tagline: "Streamline Customer Relationships",
        summary: "Custom CRM solutions to manage customer relationships effectively.",
        description: "Custom CRM solutions designed to help you manage customer relationships, track sales, and grow your business effectively.",
        features: &[
            "Customer database",
            "Sales pipeline tracking",
            "Email automation",
            "Reporting & analytics",
            "Task management",
            "Mobile access",
        ],
        technologies: &["React", "Node.js", "PostgreSQL", "Redis"],
        brochure_technologies: &["React", "PostgreSQL", "Node.js"],
    },
    Service {
        kind: ServiceKind::CustomSoftware,
        title: "Custom Software",
        tagline: "Built for Your Unique Needs",
        summary: "Bespoke software solutions tailored to your unique business needs.",
        description: "Bespoke software solutions tailored to your specific business requirements. We turn your vision into powerful, scalable applications.",
        features: &[
            "Requirements analysis",
            "Custom development",
            "API integration",
            "Third-party integrations",
            "Ongoing support",
            "Scalable architecture",
        ],
        technologies: &["React", "Python", "Node.js", "AWS", "Docker"],
        brochure_technologies: &["React", "Python", "AWS"],
    },
];

pub fn services() -> &'static [Service] {
    &SERVICES
}

impl Service {
    pub fn anchor(&self) -> String {
        crate::slugify(self.title)
    }
}
