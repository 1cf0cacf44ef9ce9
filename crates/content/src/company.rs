#[derive(Debug, Clone, Copy)]
pub struct Studio {
    pub name: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_link: &'static str,
    pub location: &'static str,
    pub city: &'static str,
    pub hours: &'static str,
}

pub static STUDIO: Studio = Studio {
    name: "Nashik Website Development",
    tagline: "Premium Digital Solutions for Modern Businesses",
    intro: "Transform your business with cutting-edge web technologies. We specialize in custom websites, digital menu solutions, CRM systems, and bespoke software - all with full deployment support.",
    email: "info@nashikwebdev.com",
    phone: "+91 98765 43210",
    phone_link: "tel:+919876543210",
    location: "Nashik, Maharashtra, India",
    city: "Nashik, Maharashtra",
    hours: "Mon-Sat: 9:00 AM - 6:00 PM",
};

pub fn studio() -> &'static Studio {
    &STUDIO
}

#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

impl ProcessStep {
    /// Two digit label, `01` to `04`.
    pub fn label(&self) -> String {
        format!("{:02}", self.number)
    }
}

pub static PROCESS: [ProcessStep; 4] = [
    ProcessStep {
        number: 1,
        title: "Discovery",
        description: "Understanding your business needs and goals",
    },
    ProcessStep {
        number: 2,
        title: "Design",
        description: "Creating wireframes and visual designs",
    },
    ProcessStep {
        number: 3,
        title: "Development",
        description: "Building with modern technologies",
    },
    ProcessStep {
        number: 4,
        title: "Deployment",
        description: "Launching and maintaining your solution",
    },
];

pub fn process() -> &'static [ProcessStep] {
    &PROCESS
}

#[derive(Debug, Clone, Copy)]
pub struct PricingTier {
    pub service: &'static str,
    pub price: &'static str,
    pub timeline: &'static str,
}

pub static PRICING: [PricingTier; 5] = [
    PricingTier {
        service: "Basic Website (5 pages)",
        price: "₹25,000 - ₹50,000",
        timeline: "2-3 weeks",
    },
    PricingTier {
        service: "E-Commerce Website",
        price: "₹75,000 - ₹1,50,000",
        timeline: "4-6 weeks",
    },
    PricingTier {
        service: "Digital Menu Solution",
        price: "₹30,000 - ₹60,000",
        timeline: "2-3 weeks",
    },
    PricingTier {
        service: "CRM System",
        price: "₹1,00,000 - ₹3,00,000",
        timeline: "6-8 weeks",
    },
    PricingTier {
        service: "Custom Software",
        price: "Custom Quote",
        timeline: "8-12 weeks",
    },
];

pub const PRICING_FOOTNOTE: &str = "*Pricing varies based on project complexity and requirements. All packages include deployment and 30 days of free support.";

pub fn pricing() -> &'static [PricingTier] {
    &PRICING
}

#[derive(Debug, Clone, Copy)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub static BENEFITS: [Benefit; 4] = [
    Benefit {
        title: "Startup Agility",
        description: "Fast turnaround times and flexible approach to meet your evolving needs.",
    },
    Benefit {
        title: "End-to-End Deployment",
        description: "We handle everything from development to deployment and maintenance.",
    },
    Benefit {
        title: "Nashik-Based Support",
        description: "Local team providing personalized service and on-ground support.",
    },
    Benefit {
        title: "Modern Tech Stack",
        description: "Cutting-edge technologies for scalable, performant solutions.",
    },
];

pub fn benefits() -> &'static [Benefit] {
    &BENEFITS
}

/// Benefits highlighted on the home page.
pub fn advantages() -> &'static [Benefit] {
    &BENEFITS[..3]
}

#[derive(Debug, Clone, Copy)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub static VALUES: [Value; 4] = [
    Value {
        title: "Innovation First",
        description: "We embrace cutting-edge technologies and innovative approaches to solve complex problems.",
    },
    Value {
        title: "Quality Driven",
        description: "Excellence is our standard. Every project receives meticulous attention to detail and craftsmanship.",
    },
    Value {
        title: "Client-Centric",
        description: "Your success is our success. We build lasting partnerships through transparent communication and exceptional service.",
    },
    Value {
        title: "Growth Mindset",
        description: "Continuous learning and improvement drive us to stay ahead in the ever-evolving tech landscape.",
    },
];

pub fn values() -> &'static [Value] {
    &VALUES
}

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static MILESTONES: [Milestone; 3] = [
    Milestone {
        year: "2024",
        title: "The Beginning",
        description: "Three passionate developers joined forces to create Nashik Website Development, bringing together expertise in technology, design, and business.",
    },
    Milestone {
        year: "Present",
        title: "Growing Strong",
        description: "Serving 30+ happy clients with 50+ successful projects delivered. Building the future of web development in Nashik.",
    },
    Milestone {
        year: "Future",
        title: "Scaling New Heights",
        description: "Expanding our team, launching new services, and becoming Nashik's premier technology partner for businesses of all sizes.",
    },
];

pub fn milestones() -> &'static [Milestone] {
    &MILESTONES
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat {
        label: "Projects Delivered",
        value: "50+",
    },
    Stat {
        label: "Happy Clients",
        value: "30+",
    },
    Stat {
        label: "Team Members",
        value: "3",
    },
    Stat {
        label: "Technologies",
        value: "20+",
    },
];

pub fn stats() -> &'static [Stat] {
    &STATS
}

pub static TECH_HIGHLIGHTS: [&str; 8] = [
    "React & Next.js",
    "React Native",
    "PostgreSQL & MongoDB",
    "AWS & Vercel",
    "Tailwind CSS",
    "Figma & Design",
    "SEO Tools",
    "Security First",
];

pub fn tech_highlights() -> &'static [&'static str] {
    &TECH_HIGHLIGHTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_labels_are_zero_padded() {
        let labels: Vec<_> = process().iter().map(ProcessStep::label).collect();
        assert_eq!(labels, ["01", "02", "03", "04"]);
    }

    #[test]
    fn advantages_are_the_first_three_benefits() {
        assert_eq!(advantages().len(), 3);
        assert_eq!(advantages()[2].title, "Nashik-Based Support");
    }
}
