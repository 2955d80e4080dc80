//! Static page content. Markup lives in `routes.rs`; the data it
//! renders lives here.

#[derive(Clone, Debug)]
pub struct DetailCard {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Debug)]
pub struct Skill {
    pub name: &'static str,
    /// Fill percentage for the skill bar, 0–100.
    pub level: u8,
}

#[derive(Clone, Debug)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Clone, Debug)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Clone, Debug)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

#[derive(Clone, Debug)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const ABOUT_CARDS: &[DetailCard] = &[
    DetailCard {
        title: "What I do",
        body: "I build web applications end to end, from database schemas and \
               service APIs to the pixels people actually click on.",
    },
    DetailCard {
        title: "How I work",
        body: "Small iterations, boring technology where it fits, and enough \
               tests to sleep at night. I'd rather delete code than defend it.",
    },
    DetailCard {
        title: "Right now",
        body: "Shipping Rust on both sides of the wire and helping teams move \
               their front-ends to WebAssembly without losing their minds.",
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Frontend",
        skills: &[
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "React", level: 85 },
            Skill { name: "CSS & design systems", level: 80 },
        ],
    },
    SkillGroup {
        name: "Backend",
        skills: &[
            Skill { name: "Rust", level: 80 },
            Skill { name: "Node.js", level: 85 },
            Skill { name: "PostgreSQL", level: 70 },
        ],
    },
    SkillGroup {
        name: "Tooling",
        skills: &[
            Skill { name: "Docker", level: 75 },
            Skill { name: "CI/CD", level: 75 },
            Skill { name: "Linux", level: 80 },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Shiftless",
        summary: "Rota planning for small clinics. Constraint solver in Rust, \
                  React front-end, boring Postgres underneath.",
        tags: &["rust", "react", "postgres"],
        link: "https://github.com/alexberg/shiftless",
    },
    Project {
        name: "tracegrep",
        summary: "A CLI that slices distributed traces like grep slices text. \
                  Reads OTLP, writes ANSI color.",
        tags: &["rust", "cli", "observability"],
        link: "https://github.com/alexberg/tracegrep",
    },
    Project {
        name: "This site",
        summary: "The page you are reading: Dioxus compiled to WebAssembly, \
                  no JavaScript written by hand.",
        tags: &["rust", "wasm", "dioxus"],
        link: "https://github.com/alexberg/portfolio",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified Solutions Architect — Associate",
        issuer: "Amazon Web Services",
        year: "2024",
    },
    Certification {
        name: "CKA: Certified Kubernetes Administrator",
        issuer: "Cloud Native Computing Foundation",
        year: "2023",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "alex@alexberg.dev",
        href: "mailto:alex@alexberg.dev",
    },
    ContactChannel {
        label: "GitHub",
        value: "github.com/alexberg",
        href: "https://github.com/alexberg",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "linkedin.com/in/alexberg",
        href: "https://linkedin.com/in/alexberg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for group in SKILL_GROUPS {
            for skill in group.skills {
                assert!(skill.level <= 100, "{} exceeds 100%", skill.name);
            }
        }
    }
}
