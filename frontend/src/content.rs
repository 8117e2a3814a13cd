//! Static portfolio content. Everything the page renders that is not behaviour
//! lives here so the components stay about layout and motion.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub in_nav: bool,
}

impl Section {
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const SECTIONS: &[Section] = &[
    Section { id: "hero", label: "Home", in_nav: false },
    Section { id: "about", label: "About", in_nav: true },
    Section { id: "education", label: "Education", in_nav: false },
    Section { id: "skills", label: "Skills", in_nav: true },
    Section { id: "experience", label: "Experience", in_nav: true },
    Section { id: "projects", label: "Projects", in_nav: true },
    Section { id: "contact", label: "Contact", in_nav: true },
];

// Nav order differs from page order on purpose: projects before experience.
pub const NAV_ORDER: &[&str] = &["about", "skills", "projects", "experience", "contact"];

pub fn nav_sections() -> Vec<Section> {
    NAV_ORDER
        .iter()
        .filter_map(|id| SECTIONS.iter().find(|s| s.id == *id && s.in_nav))
        .copied()
        .collect()
}

pub const OWNER_NAME: &str = "Nimmagadda Harish";
pub const OWNER_FIRST: &str = "Nimmagadda";
pub const OWNER_LAST: &str = "Harish";
pub const OWNER_TITLE: &str = "AI Systems Engineer";
pub const TAGLINE: &str = "Building intelligent systems that detect diseases before symptoms escalate.";

pub const ROLES: &[&str] = &[
    "AI Systems Engineer",
    "Healthcare AI Developer",
    "Data Intelligence Architect",
    "Deep Learning Specialist",
    "Full Stack Developer",
];

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 2, suffix: "+", label: "AI Healthcare Models Built" },
    Stat { value: 95, suffix: "%+", label: "Model Accuracy" },
    Stat { value: 3, suffix: "+", label: "Production Projects" },
    Stat { value: 1, suffix: "yr+", label: "Industry Experience" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I am an Aspiring Information Technology professional and a recent B.Tech graduate from Vasireddy Venkatadri Institute of Technology.",
    "My mission is to apply my technical expertise in Python and Data Analytics to contribute to innovative projects that enhance organizational performance. I am a dynamic contributor eager to solve complex problems in a forward-thinking environment.",
    "Beyond code, I have a strong foundation in Research and Academic Excellence, with experience in research publications and conference presentations within the healthcare AI domain.",
];

pub const ABOUT_TAGS: &[&str] = &[
    "Python", "SQL", "MySQL", "Data Analytics", "Power BI", "HTML", "CSS", "Communication", "Problem Solving",
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

pub const EDUCATION: &[Education] = &[Education {
    degree: "Information Technology - BTech",
    institution: "Vasireddy Venkatadri Institute of Technology",
    location: "Guntur, Andhra Pradesh",
    period: "2020 – 2024",
    color: "#06b6d4",
    icon: "🎓",
}];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub glow: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "AI & Deep Learning",
        icon: "🧠",
        color: "#3b82f6",
        glow: "rgba(59,130,246,0.3)",
        skills: &[
            Skill { name: "Python", level: 92 },
            Skill { name: "TensorFlow / Keras", level: 88 },
            Skill { name: "CNN Architecture", level: 90 },
            Skill { name: "MobileNet", level: 85 },
            Skill { name: "EfficientNet", level: 83 },
            Skill { name: "PyTorch", level: 72 },
        ],
    },
    SkillCategory {
        title: "Data Intelligence",
        icon: "📊",
        color: "#8b5cf6",
        glow: "rgba(139,92,246,0.3)",
        skills: &[
            Skill { name: "SQL / MySQL", level: 88 },
            Skill { name: "Pandas / NumPy", level: 90 },
            Skill { name: "Power BI", level: 82 },
            Skill { name: "Data Visualization", level: 85 },
            Skill { name: "Statistical Analysis", level: 78 },
            Skill { name: "Excel / Sheets", level: 80 },
        ],
    },
    SkillCategory {
        title: "Web Development",
        icon: "🌐",
        color: "#06b6d4",
        glow: "rgba(6,182,212,0.3)",
        skills: &[
            Skill { name: "HTML / CSS", level: 85 },
            Skill { name: "React.js", level: 75 },
            Skill { name: "JavaScript", level: 78 },
            Skill { name: "REST APIs", level: 72 },
            Skill { name: "Git / GitHub", level: 82 },
            Skill { name: "Next.js", level: 68 },
        ],
    },
    SkillCategory {
        title: "Tools & Platforms",
        icon: "⚙️",
        color: "#10b981",
        glow: "rgba(16,185,129,0.3)",
        skills: &[
            Skill { name: "VS Code", level: 95 },
            Skill { name: "Google Colab", level: 90 },
            Skill { name: "Jupyter Notebook", level: 88 },
            Skill { name: "Linux / Terminal", level: 72 },
            Skill { name: "Matplotlib / Seaborn", level: 85 },
            Skill { name: "OpenCV", level: 75 },
        ],
    },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub kind: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Data Analyst Intern",
        company: "Codegnan IT Solutions",
        location: "Andhra Pradesh, India",
        period: "2023",
        kind: "Internship",
        color: "#3b82f6",
        icon: "📊",
        description: "Worked on real business datasets to extract actionable insights. Performed end-to-end data cleaning, transformation, and visualization using Python (Pandas, NumPy) and Power BI. Created interactive dashboards that enabled faster business decisions.",
        highlights: &[
            "Built Power BI dashboards with 20+ KPI metrics",
            "Processed and cleaned 100,000+ row datasets",
            "Applied statistical analysis to business problems",
            "Automated data pipelines using Python scripts",
        ],
        skills: &["Python", "Pandas", "Power BI", "SQL", "Data Visualization", "Statistics"],
    },
    Experience {
        title: "Full Stack Developer Trainee",
        company: "Data Valley Virtual",
        location: "Remote",
        period: "2023",
        kind: "Training",
        color: "#8b5cf6",
        icon: "💻",
        description: "Received intensive training in full-stack web development with exposure to ML system integration. Built web interfaces, REST APIs, and learned how to connect machine learning models to production environments.",
        highlights: &[
            "Developed full-stack web applications",
            "Integrated ML models into web interfaces",
            "REST API design and consumption",
            "Learned agile development practices",
        ],
        skills: &["HTML", "CSS", "JavaScript", "React", "REST APIs", "Machine Learning", "Git"],
    },
    Experience {
        title: "B.Tech — Information Technology",
        company: "Andhra Pradesh University",
        location: "Andhra Pradesh, India",
        period: "2020 – 2024",
        kind: "Education",
        color: "#06b6d4",
        icon: "🎓",
        description: "Completed Bachelor of Technology in Information Technology. During the program, independently pursued deep learning research focusing on healthcare applications, building Alzheimer's Detection and Diabetic Retinopathy systems beyond curriculum.",
        highlights: &[
            "Built Alzheimer's Detection System using CNN + MobileNet",
            "Built Diabetic Retinopathy classifier using EfficientNet-B5",
            "Studied Algorithms, DBMS, ML Fundamentals",
            "Led final year AI healthcare project",
        ],
        skills: &["Deep Learning", "Python", "CNN", "MobileNet", "EfficientNet", "Research", "Data Structures"],
    },
];

pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub color: &'static str,
}

pub struct Project {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub glow: &'static str,
    pub tags: &'static [&'static str],
    pub metrics: &'static [Metric],
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "alzheimer",
        number: "01",
        title: "Early Alzheimer's Detection",
        subtitle: "Healthcare AI · Deep Learning",
        description: "A multi-stage dementia prediction system using CNN and MobileNet architectures trained on the ADNI dataset. Classifies MRI brain scans into Normal Cognition, Mild Cognitive Impairment, and Alzheimer's Disease stages with high accuracy, enabling early intervention before severe symptoms manifest.",
        icon: "🧠",
        accent: "#3b82f6",
        glow: "rgba(59,130,246,0.25)",
        tags: &["CNN", "MobileNet", "TensorFlow", "ADNI Dataset", "MRI Classification", "Python", "Keras"],
        metrics: &[
            Metric { label: "Classification Accuracy", value: "94.2%", color: "#3b82f6" },
            Metric { label: "Dataset Images", value: "6,400+", color: "#8b5cf6" },
            Metric { label: "Disease Stages", value: "4 Classes", color: "#06b6d4" },
        ],
    },
    Project {
        id: "retinopathy",
        number: "02",
        title: "Diabetic Retinopathy Detection",
        subtitle: "Healthcare AI · Computer Vision",
        description: "An automated fundus image classification system using EfficientNet-B5 to detect and grade Diabetic Retinopathy severity. The model processes retinal photographs to identify disease progression from No DR to Proliferative DR, enabling mass screening without specialist intervention.",
        icon: "👁️",
        accent: "#8b5cf6",
        glow: "rgba(139,92,246,0.25)",
        tags: &["EfficientNet-B5", "TensorFlow", "Computer Vision", "Fundus Images", "Severity Grading", "Python"],
        metrics: &[
            Metric { label: "Model Architecture", value: "EfficientNet-B5", color: "#8b5cf6" },
            Metric { label: "Severity Grades", value: "5 Levels", color: "#3b82f6" },
            Metric { label: "Task Type", value: "Multi-class", color: "#06b6d4" },
        ],
    },
    Project {
        id: "analytics",
        number: "03",
        title: "Business Analytics Dashboard",
        subtitle: "Data Analytics · Power BI",
        description: "End-to-end data pipeline and analytics solution built during my internship at Codegnan. Performed large-scale data cleaning and transformation using Pandas, developed interactive Power BI dashboards, and generated actionable business insights that directly influenced operational decisions.",
        icon: "📊",
        accent: "#06b6d4",
        glow: "rgba(6,182,212,0.25)",
        tags: &["Python", "Pandas", "Power BI", "Data Cleaning", "SQL", "Business Intelligence", "Visualization"],
        metrics: &[
            Metric { label: "Data Processed", value: "100K+ Rows", color: "#06b6d4" },
            Metric { label: "Dashboard Views", value: "Real-time", color: "#3b82f6" },
            Metric { label: "Insights Generated", value: "20+ KPIs", color: "#8b5cf6" },
        ],
    },
];

pub struct ContactInfo {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub sub: &'static str,
    pub color: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "📍",
        label: "Location",
        value: "Andhra Pradesh, India",
        sub: "Open to remote & relocation",
        color: "#3b82f6",
    },
    ContactInfo {
        icon: "💼",
        label: "Open To",
        value: "AI/ML Roles • Data Science • Full Stack",
        sub: "Full-time · Internship · Remote",
        color: "#8b5cf6",
    },
    ContactInfo {
        icon: "✉️",
        label: "Email",
        value: crate::config::CONTACT_EMAIL,
        sub: "Response within 24 hours",
        color: "#06b6d4",
    },
];

pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub color: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/harish-nimmagadda-30a3471a6/",
        color: "#0a66c2",
    },
    Social {
        label: "GitHub",
        href: "https://github.com/harish-4797",
        color: "#ffffff",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_follow_nav_order() {
        let ids: Vec<&str> = nav_sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, NAV_ORDER);
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            assert!(SECTIONS[i + 1..].iter().all(|b| b.id != a.id), "duplicate id {}", a.id);
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILL_CATEGORIES
            .iter()
            .flat_map(|c| c.skills.iter())
            .all(|s| s.level <= 100));
    }
}
