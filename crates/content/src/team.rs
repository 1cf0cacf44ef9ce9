#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub long_bio: &'static str,
    pub founder: bool,
}

impl TeamMember {
    /// Initials shown in avatar placeholders.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub static TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Aniket Rane",
        role: "Co-Founder & Tech Lead",
        bio: "Full-stack developer with expertise in modern web technologies and cloud architecture.",
        long_bio: "Full-stack developer with 5+ years of experience in building scalable web applications. Expert in React, Node.js, and cloud technologies. Passionate about clean code and performance optimization.",
        founder: true,
    },
    TeamMember {
        name: "Rushi Pagar",
        role: "Co-Founder & Design Lead",
        bio: "UI/UX specialist focused on creating intuitive and beautiful digital experiences.",
        long_bio: "UI/UX specialist with a keen eye for detail and user-centered design. Creates intuitive interfaces that users love. Expert in Figma, user research, and design systems.",
        founder: true,
    },
    TeamMember {
        name: "Dev Pawar",
        role: "Co-Founder & Business Lead",
        bio: "Strategic thinker driving business growth and client success initiatives.",
        long_bio: "Strategic thinker with strong business acumen and client relationship management skills. Drives growth through innovative solutions and customer success initiatives.",
        founder: true,
    },
    TeamMember {
        name: "Viraj",
        role: "UI/UX Designer",
        bio: "Creative designer focused on crafting beautiful and intuitive user experiences.",
        long_bio: "Creative designer focused on crafting beautiful and intuitive user experiences.",
        founder: false,
    },
];

pub fn team() -> &'static [TeamMember] {
    &TEAM
}

pub fn founders() -> impl Iterator<Item = &'static TeamMember> {
    TEAM.iter().filter(|m| m.founder)
}

/// Joins names as "A, B, and C".
pub fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => (*one).to_owned(),
        [a, b] => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

pub fn founders_line() -> String {
    join_names(founders().map(|m| m.name))
}

pub fn team_line() -> String {
    join_names(team().iter().map(|m| m.name))
}
