pub const OWNER_NAME: &str = "Sasidhar Veerni";
pub const OWNER_ROLE: &str = "Associate Software Engineer";
pub const OWNER_EMPLOYER: &str = "Tech Mahindra";

pub const GITHUB_URL: &str = "https://github.com/Sasidharveerni";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sasidhar-v/";

/// Element id the "View Projects" control scrolls to.
pub const PROJECTS_ANCHOR: &str = "projects";

pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Calendar date part of the RFC 3339 build stamp.
pub fn build_date() -> &'static str {
    BUILD_TIME.get(..10).unwrap_or(BUILD_TIME)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Outbound profile links in the closing call to action.
pub static SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "GitHub",
        href: GITHUB_URL,
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
        icon: "devicon-linkedin-plain",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub emoji: &'static str,
    pub class: &'static str,
}

pub static HERO_BADGES: [Badge; 3] = [
    Badge {
        label: "Full-Stack Developer",
        emoji: "💻",
        class: "bg-purple-500/20 text-purple-300 border-purple-500",
    },
    Badge {
        label: "AI & NLP Engineer",
        emoji: "🧠",
        class: "bg-pink-500/20 text-pink-300 border-pink-500",
    },
    Badge {
        label: "Freelance Creator",
        emoji: "✨",
        class: "bg-emerald-500/20 text-emerald-300 border-emerald-500",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub emoji: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const ABOUT_BLURB: &str = "Experienced freelance developer specializing in ReactJS, Node.js, and AI-powered web applications. \
Delivering premium, budget-friendly solutions for startups and enterprises. Based in Hyderabad, \
available for remote projects worldwide.";

pub static ABOUT_TILES: [Tile; 3] = [
    Tile {
        emoji: "🚀",
        title: "Tech Mahindra",
        desc: "Associate Software Engineer, building scalable enterprise solutions",
    },
    Tile {
        emoji: "👥",
        title: "Part-Time Tutor",
        desc: "Mentoring aspiring developers at CompileIt",
    },
    Tile {
        emoji: "🏆",
        title: "3 Freelance Projects",
        desc: "Delivered premium, high-performance web platforms",
    },
];

pub static IDEA_CARDS: [Tile; 2] = [
    Tile {
        emoji: "🧠",
        title: "AI-Powered Lead Intelligence Engine",
        desc: "Turning raw website traffic into actionable sales insights using behavioral analytics, intent detection, and predictive lead scoring.",
    },
    Tile {
        emoji: "⚡",
        title: "Zero-Form Conversion System",
        desc: "Next-gen user onboarding using conversational AI that extracts structured data from natural language. No forms, no friction, pure intent.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_links_are_fixed() {
        let hrefs = SOCIAL_LINKS.iter().map(|l| l.href).collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec![
                "https://github.com/Sasidharveerni",
                "https://www.linkedin.com/in/sasidhar-v/"
            ]
        );
    }

    #[test]
    fn test_build_date_is_a_date() {
        let date = build_date();
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
    }

    #[test]
    fn test_static_sections_have_content() {
        assert_eq!(ABOUT_TILES.len(), 3);
        assert_eq!(IDEA_CARDS.len(), 2);
        assert!(ABOUT_TILES
            .iter()
            .chain(IDEA_CARDS.iter())
            .all(|t| !t.title.is_empty() && !t.desc.is_empty()));
    }
}
