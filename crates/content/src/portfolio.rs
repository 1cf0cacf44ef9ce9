#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub results: &'static [&'static str],
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Restaurant Digital Menu",
        category: "Digital Menu",
        description: "Modern QR-based digital menu system for a premium restaurant in Nashik with real-time updates and multi-language support.",
        technologies: &["React", "Firebase", "Tailwind CSS", "QR Codes"],
        results: &[
            "50% faster order processing",
            "Zero printing costs",
            "Instant menu updates",
        ],
    },
    Project {
        title: "E-Commerce Platform",
        category: "Website Development",
        description: "Full-featured e-commerce website with payment integration, inventory management, and admin dashboard.",
        technologies: &["Next.js", "Stripe", "PostgreSQL", "AWS"],
        results: &["200+ daily visitors", "95% uptime", "Secure payments"],
    },
    Project {
        title: "Sales CRM System",
        category: "CRM System",
        description: "Custom CRM solution for a local business to track leads, manage customer relationships, and analyze sales performance.",
        technologies: &["React", "Node.js", "MongoDB", "Charts.js"],
        results: &[
            "30% productivity increase",
            "Better lead tracking",
            "Real-time analytics",
        ],
    },
    Project {
        title: "Inventory Management",
        category: "Custom Software",
        description: "Bespoke inventory management system with barcode scanning, stock alerts, and reporting for a retail chain.",
        technologies: &["React", "Python", "PostgreSQL", "Docker"],
        results: &["Zero stock-outs", "Automated reordering", "Cost savings"],
    },
    Project {
        title: "Corporate Website",
        category: "Website Development",
        description: "Professional corporate website with CMS, blog, and contact forms for a consulting firm.",
        technologies: &["React", "Strapi CMS", "Vercel", "SEO Tools"],
        results: &[
            "Top Google rankings",
            "500% traffic increase",
            "Professional image",
        ],
    },
    Project {
        title: "Appointment Booking System",
        category: "Custom Software",
        description: "Online appointment scheduling system for a healthcare clinic with SMS notifications and calendar integration.",
        technologies: &["React", "Node.js", "Twilio", "Google Calendar API"],
        results: &[
            "80% less no-shows",
            "Automated reminders",
            "Better scheduling",
        ],
    },
];

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Distinct categories in first-seen order.
pub fn project_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for project in PROJECTS.iter() {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }
    categories
}

/// Projects in `category`, matched case-insensitively. `None` keeps all.
pub fn projects_in(category: Option<&str>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category.is_none_or(|c| p.category.eq_ignore_ascii_case(c)))
        .collect()
}
