//! Hand-authored display records rendered by the pages.
//!
//! Everything here is compiled into the bundle and never changes at runtime.

use crate::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub about_intro: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub postal_location: &'static str,
    pub portrait: &'static str,
    pub about_portrait: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "K V Krishna Sri Varma Chekuri",
    short_name: "Sri Varma",
    headline: "Full-Stack Developer & AI Enthusiast",
    bio: "Passionate about creating innovative digital solutions that bridge the gap between cutting-edge technology and user experience. Specializing in full-stack development, AI/ML integration, and building scalable applications.",
    about_intro: "a passionate Full-Stack Developer & AI/ML Enthusiast based in Bhimavaram, Andhra Pradesh. I specialize in building scalable web applications with a focus on AI/ML integration.",
    email: "krishnasrivarmachekuri@gmail.com",
    phone: "+91 9494343299",
    postal_location: "Bhimavaram, Andhra Pradesh, 534126",
    portrait: "/assets/profile.jpg",
    about_portrait: "/assets/about-profile.jpg",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const GITHUB: SocialLink = SocialLink {
    label: "GitHub",
    href: "https://github.com/Varma0099",
    icon: Icon::Github,
};

pub const LINKEDIN: SocialLink = SocialLink {
    label: "LinkedIn",
    href: "https://www.linkedin.com/in/k-v-krishna-sri-varma-chekuri-5b0120263",
    icon: Icon::Linkedin,
};

pub const EMAIL: SocialLink = SocialLink {
    label: "Email",
    href: "mailto:krishnasrivarmachekuri@gmail.com",
    icon: Icon::Mail,
};

/// Shown under the hero.
pub const HERO_SOCIALS: &[SocialLink] = &[GITHUB, LINKEDIN, EMAIL];

/// Shown on the contact page.
pub const CONTACT_SOCIALS: &[SocialLink] = &[GITHUB, LINKEDIN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: Icon,
    pub text: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: Icon::Mail,
        text: PROFILE.email,
    },
    ContactDetail {
        icon: Icon::Phone,
        text: PROFILE.phone,
    },
    ContactDetail {
        icon: Icon::MapPin,
        text: PROFILE.postal_location,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    /// `None` when there is no public deployment yet.
    pub live_url: Option<&'static str>,
    pub features: &'static [&'static str],
    pub status: &'static str,
}

impl Project {
    /// Target for the "Live Demo" button.
    pub fn demo_href(&self) -> &'static str {
        self.live_url.unwrap_or("#")
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "QGenie: AI-Based Question Paper Generator",
        description: "Built an AI-powered tool to generate question papers based on Bloom's Taxonomy. Integrated Flask backend with HTML/JavaScript frontend for seamless user interaction.",
        tech: &["Gemini API", "Python", "Flask", "HTML", "JavaScript"],
        image: "/assets/projects/qgenie-screenshot.png",
        live_url: None,
        features: &[
            "AI-Powered Generation",
            "Bloom's Taxonomy",
            "Flask Backend",
            "Interactive Frontend",
        ],
        status: "Live",
    },
    Project {
        title: "Basketball Highlight Auto-Cropper",
        description: "Created a tool to process basketball videos into 9:16 format for social media. Utilized OpenCV for automated video cropping and highlight extraction.",
        tech: &["OpenCV", "Python", "NumPy"],
        image: "/assets/projects/basketball-cropper.png",
        live_url: None,
        features: &[
            "Video Processing",
            "Auto Cropping",
            "9:16 Format",
            "Highlight Extraction",
        ],
        status: "Live",
    },
    Project {
        title: "Hospo: AI-Powered Healthcare Platform",
        description: "Comprehensive healthcare solution with appointment scheduling, telemedicine, and AI analytics. Developed ML models for disease prediction and medicine tracking system.",
        tech: &[
            "React.js",
            "Node.js",
            "Python",
            "Machine Learning",
            "Data Analytics",
        ],
        image: "/assets/projects/hospo-platform.png",
        live_url: Some("https://hospo-ten.vercel.app/"),
        features: &[
            "Appointment Scheduling",
            "Telemedicine",
            "AI Analytics",
            "Disease Prediction",
        ],
        status: "Live",
    },
    Project {
        title: "Nxt Watch (YouTube Clone)",
        description: "Developed a YouTube alternative with user authentication, video browsing by categories (Trending, Gaming), and saved videos functionality. Implemented secure login with JWT tokens.",
        tech: &[
            "React.js",
            "JavaScript",
            "CSS",
            "Bootstrap",
            "React Router",
            "REST API",
            "JWT",
        ],
        image: "/assets/projects/nxtwatch-clone.png",
        live_url: Some("https://varmanxtwatch9.ccbp.tech/"),
        features: &[
            "User Authentication",
            "Video Categories",
            "Saved Videos",
            "JWT Security",
        ],
        status: "Live",
    },
    Project {
        title: "Tasty Kitchens (Swiggy/Zomato Clone)",
        description: "Built food delivery platform with restaurant listings, shopping cart, and checkout functionality. Created responsive UI with React Slick carousel and Figma-based component design.",
        tech: &[
            "React.js",
            "JavaScript",
            "CSS",
            "Bootstrap",
            "React Slick",
            "Figma",
            "REST API",
        ],
        image: "/assets/projects/tasty-kitchens.png",
        live_url: Some("https://sritastykitapp.ccbp.tech/login"),
        features: &[
            "Restaurant Listings",
            "Shopping Cart",
            "Checkout System",
            "Responsive Design",
        ],
        status: "Live",
    },
    Project {
        title: "Jobby App (Job Search Platform)",
        description: "Developed job portal with authentication, job listings, and application tracking. Implemented protected routes with JWT authentication and persistent login state.",
        tech: &[
            "React.js",
            "JavaScript",
            "CSS",
            "Bootstrap",
            "React Router",
            "REST API",
            "JWT",
        ],
        image: "/assets/projects/jobby-app.png",
        live_url: Some("https://varmajobbyapp99.ccbp.tech/"),
        features: &[
            "Job Listings",
            "Application Tracking",
            "Protected Routes",
            "JWT Authentication",
        ],
        status: "Live",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        category: "Programming Languages",
        icon: Icon::Code,
        skills: &["Python", "C++", "JavaScript"],
    },
    SkillCategory {
        category: "AI/ML",
        icon: Icon::Zap,
        skills: &[
            "Machine Learning",
            "Deep Learning",
            "Generative AI",
            "Fine-Tuning Techniques",
            "Retrieval-Augmented Generation (RAG)",
            "LLM Applications",
        ],
    },
    SkillCategory {
        category: "LLM & Frameworks",
        icon: Icon::Globe,
        skills: &["Langchain", "Gemini", "LLaMA"],
    },
    SkillCategory {
        category: "Vector Databases",
        icon: Icon::Database,
        skills: &["Pinecone", "FAISS"],
    },
    SkillCategory {
        category: "Full-Stack Web Development",
        icon: Icon::Code,
        skills: &[
            "React.js",
            "Node.js",
            "Express.js",
            "HTML5",
            "CSS3",
            "Bootstrap",
        ],
    },
    SkillCategory {
        category: "Databases & Storage",
        icon: Icon::Database,
        skills: &["MongoDB", "SQLite", "Local Storage"],
    },
    SkillCategory {
        category: "Dev Tools & Engineering Practices",
        icon: Icon::Smartphone,
        skills: &["Git", "GitHub", "JWT Authentication", "Docker", "VS Code"],
    },
    SkillCategory {
        category: "Foundational CS",
        icon: Icon::Globe,
        skills: &["Data Structures & Algorithms", "Problem Solving"],
    },
];

/// An education or work entry on the about page timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub period: &'static str,
    pub grade: Option<&'static str>,
    pub summary: &'static str,
}

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        heading: "Nxtwave Disruptive Technologies",
        subheading: "Industry Ready Certification in Full-stack Development",
        period: "Jan 2023 - Ongoing",
        grade: None,
        summary: "Comprehensive full-stack development certification program focusing on modern web technologies, industry best practices, and hands-on project development.",
    },
    TimelineEntry {
        heading: "B.Tech in Computer Science Engineering",
        subheading: "Kalasalingam Academy of Research and Education, Virudhunagar",
        period: "2022 - 2026",
        grade: Some("CGPA: 8.9/10"),
        summary: "Comprehensive study of Computer Science fundamentals including Data Structures & Algorithms, Database Management Systems, Machine Learning, Web Development, and Software Engineering.",
    },
];

pub const EXPERIENCE: &[TimelineEntry] = &[TimelineEntry {
    heading: "Full Stack Developer Intern",
    subheading: "Yashik Yadav & Co",
    period: "June 2025 - Present • Remote",
    grade: None,
    summary: "Contributing to enterprise software solutions and client project development. Working with modern web technologies and agile development methodologies. Enhancing frontend and backend modules using React.js and Node.js.",
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "ACM Students Chapter - Web Master",
        issuer: "Association for Computing Machinery",
        date: "2023-2025",
        description: "Managed university ACM chapter website and organized technical workshops/hackathons. Mentored 100+ students in web development technologies and coordinated 10+ events with 200+ participants.",
    },
    Certification {
        title: "IBM-ICE Hackathon Winner (1st Prize)",
        issuer: "IBM",
        date: "2024",
        description: "Led team to develop innovative solution for enterprise workflow automation. Demonstrated expertise in problem-solving with cutting-edge technologies.",
    },
    Certification {
        title: "Google Cloud Study Jams Completion",
        issuer: "Google Cloud",
        date: "2024",
        description: "Earned certificate by completing hands-on cloud deployment challenges. Enhanced skills in Google Cloud technologies and management.",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_unique<'a>(keys: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate key: {key}");
        }
    }

    #[test]
    fn test_keys_unique_within_lists() {
        assert_unique(PROJECTS.iter().map(|p| p.title));
        assert_unique(SKILLS.iter().map(|c| c.category));
        assert_unique(CERTIFICATIONS.iter().map(|c| c.title));
        assert_unique(EDUCATION.iter().map(|e| e.heading));
        assert_unique(EXPERIENCE.iter().map(|e| e.heading));
        assert_unique(HERO_SOCIALS.iter().map(|s| s.label));
        assert_unique(CONTACT_SOCIALS.iter().map(|s| s.label));
        for project in PROJECTS {
            assert_unique(project.tech.iter().copied());
            assert_unique(project.features.iter().copied());
        }
        for category in SKILLS {
            assert_unique(category.skills.iter().copied());
        }
    }

    #[test]
    fn test_projects_are_complete() {
        assert_eq!(PROJECTS.len(), 6);
        for project in PROJECTS {
            assert!(!project.tech.is_empty(), "{}", project.title);
            assert!(!project.features.is_empty(), "{}", project.title);
            assert!(project.image.starts_with("/assets/projects/"));
        }
    }

    #[test]
    fn test_demo_href_falls_back_to_anchor() {
        let qgenie = &PROJECTS[0];
        assert_eq!(qgenie.live_url, None);
        assert_eq!(qgenie.demo_href(), "#");

        let hospo = PROJECTS
            .iter()
            .find(|p| p.title.starts_with("Hospo"))
            .expect("hospo project should exist");
        assert_eq!(hospo.demo_href(), "https://hospo-ten.vercel.app/");
    }

    #[test]
    fn test_email_link_matches_profile() {
        assert_eq!(EMAIL.href, PROFILE.mailto());
        assert_eq!(CONTACT_DETAILS[0].text, PROFILE.email);
    }
}
