//! The actual portfolio data.
//!
//! Edit this file to make the site yours. Everything is `'static`;
//! the store is assembled once in [`site`] and never mutated.

use super::{
    ExperienceEntry, Icon, PersonalInfo, Project, SiteContent, SkillCategory, SocialLink,
};

/// Build the content store.
pub fn site() -> SiteContent {
    SiteContent {
        personal: PersonalInfo {
            name: "Sham Sundar A",
            title: "Full Stack Developer & UI Designer",
            email: "shamsundar.a29@gmail.com",
            phone: "8939105827",
            location: "Tamil Nadu, India",
            bio: "Passionate Full-stack Developer with 5+ years of experience in \
                  building scalable web applications and crafting seamless user \
                  experiences. I love solving real-world problems through clean \
                  and intuitive code.\n\nI've also mentored freshers, worked as a \
                  Project Manager, and now manage HR operations alongside \
                  server-side deployments via cPanel.",
            resume_url: "/resume.pdf",
        },

        social_links: vec![
            SocialLink {
                name: "LinkedIn",
                url: "https://www.linkedin.com/in/sham-sundar-52106015b/",
                icon: Icon::Linkedin,
            },
            SocialLink {
                name: "Email",
                url: "mailto:shamsundar.a29@gmail.com",
                icon: Icon::Mail,
            },
        ],

        skills: vec![
            SkillCategory {
                category: "Frontend",
                items: &["HTML5", "CSS3", "JavaScript", "JQuery", "Bootstrap", "Tailwind CSS"],
            },
            SkillCategory {
                category: "Backend",
                items: &["PHP", "Laravel", "SQL", "MySQL", "MongoDB", "Redis"],
            },
            SkillCategory {
                category: "Tools & Technologies",
                items: &["Git", "AWS", "Figma", "ClickUp"],
            },
            SkillCategory {
                category: "Design",
                items: &["UI/UX Design", "Prototyping", "Wireframing", "User Research", "Design Systems"],
            },
        ],

        // Chronological by declaration: newest first.
        experience: vec![
            ExperienceEntry {
                title: "Senior Full Stack Developer",
                company: "Mercu.",
                period: "2025 - Present",
                description: "Driving the design and development of scalable, \
                              high-performance web applications. Implemented a robust \
                              microservices architecture and actively mentor junior \
                              developers to elevate team productivity and code quality.",
            },
            ExperienceEntry {
                title: "Frontend Developer",
                company: "Gowebez",
                period: "2020 - 2022",
                description: "Engineered responsive and visually polished web \
                              applications using React and TypeScript. Partnered with \
                              UI/UX designers to implement pixel-perfect components, \
                              ensuring cross-browser compatibility and performance \
                              optimization.",
            },
        ],

        projects: vec![
            Project {
                id: 1,
                title: "Inflowcare",
                description: "Full-stack e-commerce solution with Laravel, MongoDB and \
                              Redis. Features include user authentication, payment \
                              processing, and admin dashboard.",
                image_url: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg",
                technologies: &["React", "Node.js", "PostgreSQL", "Stripe", "AWS"],
                live_url: "https://inflowcare.com/",
                source_url: None,
                featured: true,
            },
            Project {
                id: 2,
                title: "Task Management App",
                description: "Collaborative task management application with real-time \
                              updates, drag-and-drop functionality, and team \
                              collaboration features.",
                image_url: "https://images.pexels.com/photos/3184360/pexels-photo-3184360.jpeg",
                technologies: &["Vue.js", "Express.js", "Socket.io", "MongoDB"],
                live_url: "https://taskmanager-demo.com",
                source_url: None,
                featured: true,
            },
            Project {
                id: 3,
                title: "Weather Dashboard",
                description: "Beautiful weather dashboard with location-based forecasts, \
                              interactive maps, and customizable widgets.",
                image_url: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg",
                technologies: &["React", "TypeScript", "Chart.js", "OpenWeather API"],
                live_url: "https://weather-dashboard-demo.com",
                source_url: None,
                featured: false,
            },
            Project {
                id: 4,
                title: "Social Media Analytics",
                description: "Analytics dashboard for social media metrics with data \
                              visualization, automated reports, and performance insights.",
                image_url: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg",
                technologies: &["Next.js", "Python", "D3.js", "Flask", "Redis"],
                live_url: "https://analytics-demo.com",
                source_url: Some("https://github.com/shamsundar/social-analytics"),
                featured: true,
            },
            Project {
                id: 5,
                title: "Learning Management System",
                description: "Complete LMS with video streaming, progress tracking, \
                              assignments, and interactive quizzes for online education.",
                image_url: "https://images.pexels.com/photos/159844/cellular-education-classroom-159844.jpeg",
                technologies: &["React", "Django", "PostgreSQL", "AWS S3", "WebRTC"],
                live_url: "https://lms-demo.com",
                source_url: Some("https://github.com/shamsundar/lms"),
                featured: false,
            },
            Project {
                id: 6,
                title: "Cryptocurrency Tracker",
                description: "Real-time cryptocurrency tracking application with \
                              portfolio management, price alerts, and market analysis \
                              tools.",
                image_url: "https://images.pexels.com/photos/730547/pexels-photo-730547.jpeg",
                technologies: &["React", "Node.js", "WebSocket", "CoinGecko API"],
                live_url: "https://crypto-tracker-demo.com",
                source_url: Some("https://github.com/shamsundar/crypto-tracker"),
                featured: false,
            },
        ],

        typing_texts: vec![
            "Full Stack Developer",
            "UI/UX Designer",
            "Problem Solver",
            "Tech Enthusiast",
        ],
    }
}
