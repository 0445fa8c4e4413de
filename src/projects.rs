/// Which side a project card slides in from. `Right` also flips the
/// description and media columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Self::Right)
    }

    /// Horizontal start of the slide-in, in px from the resting position.
    pub fn slide_from_px(self) -> f64 {
        match self {
            Self::Left => -100.0,
            Self::Right => 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub link: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub achievement: &'static str,
    pub alignment: Alignment,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Icon Star Conferences",
        link: "https://iconstarconferences.com",
        description: "Dubai-based global conference platform managing worldwide events with secure registration, admin dashboards, and real-time attendee management.",
        tags: &["React", "Node.js", "MongoDB", "AWS", "Firebase", "JWT Auth", "Tailwind"],
        achievement: "First freelance project. Full ownership from design to deployment",
        alignment: Alignment::Left,
    },
    Project {
        title: "Nrusimha Seva Trust",
        link: "https://nrusimhaseva.vercel.app",
        description: "Devotional platform with seva registration, online donations, trustee approval system, email automation via Nodemailer, and secure media storage using Cloudinary.",
        tags: &["React", "Node.js", "Cloudinary", "Nodemailer", "Firebase"],
        achievement: "Zero-cost image & transaction storage solution",
        alignment: Alignment::Right,
    },
    Project {
        title: "Manadesham Consultancy",
        link: "https://manadesham.vercel.app",
        description: "Complete redesign of India's largest education consultancy. Reduced API latency to ~100ms. Added advanced analytics dashboard for lead generation and user behavior insights.",
        tags: &["Next.js", "Tailwind", "Firebase", "Analytics Dashboard"],
        achievement: "Transformed outdated site into a modern, high-conversion platform",
        alignment: Alignment::Left,
    },
    Project {
        title: "AU Portal: AI Customer Support",
        link: "https://au-portal.vercel.app",
        description: "Intelligent AI chatbot with DistilBERT + Gemini-2.5-Flash fallback engine. Extracts structured data from natural language using regex + NLP. 99.9% uptime with dual-layer recommendation system.",
        tags: &["React", "FastAPI", "Gemini AI", "LangChain", "MongoDB", "TF-IDF", "NLP Pipeline"],
        achievement: "Revolutionary form-less insurance advisory experience",
        alignment: Alignment::Right,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_alternate_starting_left() {
        for (i, p) in PROJECTS.iter().enumerate() {
            assert_eq!(p.alignment, Alignment::for_index(i), "project {}", p.title);
        }
        assert!(!PROJECTS[0].alignment.is_reversed());
        assert!(PROJECTS[1].alignment.is_reversed());
        assert!(Alignment::Left.slide_from_px() < 0.0);
        assert!(Alignment::Right.slide_from_px() > 0.0);
    }

    #[test]
    fn test_projects_keep_source_order() {
        let titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Icon Star Conferences",
                "Nrusimha Seva Trust",
                "Manadesham Consultancy",
                "AU Portal: AI Customer Support",
            ]
        );
    }

    #[test]
    fn test_project_links_are_https() {
        assert!(PROJECTS.iter().all(|p| p.link.starts_with("https://")));
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }
}
