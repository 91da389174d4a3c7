//! Everything the page says about its owner.

/// What "Preview" on a project card opens, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDemo {
    None,
    Video(&'static str),
    Images(&'static [&'static str]),
}

impl ProjectDemo {
    pub fn is_some(&self) -> bool {
        !matches!(self, ProjectDemo::None)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repository: Option<&'static str>,
    pub demo: ProjectDemo,
    /// Tailwind background of the card header.
    pub gradient: &'static str,
    pub year: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    /// Icon glyph and its colour class.
    pub icon: (&'static str, &'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    /// Tailwind colour family used for the border and tags.
    pub color: &'static str,
    pub skills: &'static [&'static str],
}

pub const GITHUB_URL: &str = "https://github.com/KhoirH";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/hilmi-k-247640131";
pub const EMAIL: &str = "hilmi.khoirulloh02@gmail.com";

pub const YEARS_OF_EXPERIENCE: u32 = 5;

pub const ABOUT: &[&str] = &[
    "As a Fullstack Developer, I take pleasure in creating resilient web and hybrid applications. \
     I possess a comprehensive understanding of the Software Development Life Cycle (SDLC) and can pinpoint the best front-end and back-end technologies to meet project goals effectively. \
     Committed to the SOLID principles, I ensure that my code remains clean, scalable, and easy to maintain. \
     However, my role extends beyond mere coding; I embrace responsibility for my contributions, engage in technical decision-making, and monitor project timelines to guarantee the timely delivery of dependable solutions.",
    "Beyond my coding experience, I have managed comprehensive projects from the initial planning stages all the way to deployment. \
     I have also instructed vocational students and participated in business discussions to shape future project strategies. \
     I am proficient in both Scrum and Waterfall methodologies and can easily adjust to various teams and project needs.",
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        icon: "💻",
        color: "blue",
        skills: &[
            "React", "Vue.js", "TypeScript", "Tailwind CSS", "Next.js", "HTML5", "CSS3",
            "JavaScript", "SASS", "Redux", "Zustand", "PostCSS", "Websocket", "PWA", "Cypress",
            "Jest", "WASM",
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: "🖥️",
        color: "green",
        skills: &["Node.js", "Nest.js", "Express.js", "Golang", "RESTful APIs", "PHP"],
    },
    SkillCategory {
        title: "Database",
        icon: "🗄️",
        color: "purple",
        skills: &["MongoDB", "MySQL", "Redis", "SQLite", "PostgreSQL"],
    },
    SkillCategory {
        title: "Mobile",
        icon: "📱",
        color: "red",
        skills: &[
            "React Native", "Flutter", "Flutter Bloc", "Dart", "React Navigation", "Firebase",
            "Google Maps SDK",
        ],
    },
    SkillCategory {
        title: "Tools",
        icon: "🌐",
        color: "pink",
        skills: &[
            "Git", "Docker", "Kubernetes", "Vercel", "Postman", "VS Code", "Linux",
            "Apache JMeter", "Datadog", "MediaMTX", "FFmpeg",
        ],
    },
];

const HRIS_DESCRIPTION: &str = "An HRIS (Human Resource Information System) is a platform that manages employee data, attendance, payroll, and other HR-related processes in one integrated system. In this project, I developed the attendance feature, the \"Ask the Expert\" application, and the community application. I also worked on developing the community website to support employee engagement and knowledge sharing.";

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Video Analytic System",
        description: "A Video Analytic System is an intelligent solution that utilizes computer vision and AI to analyze video content in real time. In this project, I contributed by designing the CMS and Analytic dashboard, as well as setting up the media server and integrating tools like Datadog for system observability.",
        tech: &[
            "React", "Next.js", "Node.js", "Tailwind", "FSD", "Atomic", "React Query", "Scss",
            "Webrtc", "FFmpeg", "Linux", "MediaMTX", "Datadog", "HTML5", "CSS3",
        ],
        repository: None,
        demo: ProjectDemo::Video("/assets/video-analytic-system/demo-cms.mp4"),
        gradient: "bg-gradient-to-br from-blue-400 to-purple-500",
        year: 2025,
    },
    ProjectEntry {
        title: "Public Service System",
        description: "A Public Service System is a digital platform that helps manage interactions between government institutions and the public. It allows citizens to access services, submit complaints, give feedback, and track their requests transparently. In this project, I worked on slicing the design and integrating it into the system.",
        tech: &[
            "React", "Next.js", "Websocket", "Material UI", "React Query", "Jitsi", "PWA",
            "Workbox", "HTML5", "CSS3",
        ],
        repository: None,
        demo: ProjectDemo::Images(&["/assets/public-service-system/image.png"]),
        gradient: "bg-gradient-to-br from-green-400 to-blue-500",
        year: 2022,
    },
    ProjectEntry {
        title: "eKYC",
        description: "An eKYC (Electronic Know Your Customer) is a toolkit that allows digital identity verification include feature active liveness detection. In this project, I created an embedding system that consumes the SDK for both Android and iOS platforms.",
        tech: &["React", "WASM", "Webhook"],
        repository: None,
        demo: ProjectDemo::None,
        gradient: "bg-gradient-to-br from-pink-400 to-red-500",
        year: 2025,
    },
    ProjectEntry {
        title: "Assets Management System",
        description: "An Assets Management System is a platform used to track, monitor, and manage company assets, both physical and digital, more efficiently. It helps organize asset data, monitor usage, assign ownership, and manage the asset lifecycle. In this project, I was fully involved in designing the system from front to back.",
        tech: &[
            "React", "Antd", "Next.js", "Nest.js", "Prisma", "ORM", "MySql", "Linux", "Node.js",
            "HTML5", "CSS3",
        ],
        repository: Some("https://github.com/orgs/AMS-Khoir"),
        demo: ProjectDemo::None,
        gradient: "bg-gradient-to-br from-purple-400 to-pink-500",
        year: 2024,
    },
    ProjectEntry {
        title: "Workforce Planning System",
        description: "A Workforce Planning System is a platform designed to help organizations manage employee allocation, scheduling, and resource planning effectively. In this project, I worked on developing the frontend dashboard for both client and admin sides.",
        tech: &["React", "React Router", "Material UI", "Redux", "HTML5", "CSS3"],
        repository: None,
        demo: ProjectDemo::Images(&[
            "/assets/workforce-planning-system/image-admin.jpeg",
            "/assets/workforce-planning-system/image-client.jpeg",
        ]),
        gradient: "bg-gradient-to-br from-cyan-400 to-blue-500",
        year: 2021,
    },
    ProjectEntry {
        title: "HRIS System",
        description: HRIS_DESCRIPTION,
        tech: &[
            "React", "Flutter", "Material UI", "Redux", "HTML5", "CSS3", "Dart", "Next.js",
        ],
        repository: None,
        demo: ProjectDemo::Images(&[
            "/assets/hris-system/image-application.jpeg",
            "/assets/hris-system/image-dashboard.jpeg",
        ]),
        gradient: "bg-gradient-to-br from-green-400 to-teal-500",
        year: 2021,
    },
    ProjectEntry {
        title: "Sosial Media Analytic",
        // note - shares the HRIS copy until this one gets its own write-up
        description: HRIS_DESCRIPTION,
        tech: &[
            "React", "Flutter", "Material UI", "Redux", "HTML5", "CSS3", "Dart", "Next.js",
        ],
        repository: None,
        demo: ProjectDemo::Images(&["/assets/sosial-media-analytic/image.jpeg"]),
        gradient: "bg-gradient-to-br from-orange-400 to-red-500",
        year: 2020,
    },
    ProjectEntry {
        title: "Biometric Application",
        description: "A Biometric Application is a system that uses fingerprint or face recognition for secure identity verification. In this project, I handled the integration of the biometric system and its implementation with the payment gateway to ensure secure transaction processing.",
        tech: &["React", "React Native", "Java", "Redux", "React Navigation"],
        repository: None,
        demo: ProjectDemo::Images(&["/assets/biometric-application/image.jpeg"]),
        gradient: "bg-gradient-to-br from-indigo-400 to-violet-500",
        year: 2019,
    },
    ProjectEntry {
        title: "Lifestyle Application",
        description: "A Lifestyle Application is a mobile platform designed to support daily activities like personal well-being. In this project, I built the system end-to-end, from initialization to publishing on the Play Store.",
        tech: &["React", "React Native", "Java", "Gradle", "React Navigation", "XML"],
        repository: None,
        demo: ProjectDemo::Images(&["/assets/life-style-application/image.jpeg"]),
        gradient: "bg-gradient-to-br from-teal-400 to-purple-500",
        year: 2018,
    },
];

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Bigbox - Telkom Indonesia",
        position: "Software Engineer",
        duration: "2024 - Present",
        description: "As a Software Engineer, I design and develop scalable solutions for real-time video analytics platforms. My work spans from backend architecture to frontend development, with a focus on delivering high-performance, user-friendly applications.",
        achievements: &[
            "Designed the architecture for service migration and media server integration using STUN/TURN servers",
            "Developed SaaS dashboard video analytics",
            "Leveraged WebRTC for low-latency real-time video streaming and analytics",
            "Implemented CI/CD pipelines to automate the development and deployment process",
        ],
        icon: ("⚡", "text-yellow-400"),
    },
    ExperienceEntry {
        company: "Bigbox - Telkom Indonesia",
        position: "Frontend Developer",
        duration: "2021 - 2024",
        description: "As an accomplished Web Developer with a strong track record of delivering high-impact projects, I specialize in leveraging modern technologies to build dynamic, scalable, and responsive web applications.",
        achievements: &[
            "Developed visually compelling landing pages, product showcases, and admin panels using React.js and Redux, enhancing user engagement and interface performance",
            "Built a B2B object detection dashboard using an atomic design pattern to support modularity and scalability in web architecture",
            "Implemented end-to-end testing using Cypress and component testing with Jest, ensuring application stability and cross-platform reliability",
            "Engineered real-time dashboards for crowd detection, people counting, and vehicle counting by integrating WebRTC for live video streaming and Tailwind CSS for modern UI design",
            "Delivered cutting-edge Progressive Web Apps (PWAs) using Next.js, leveraging Workbox for service worker management (precaching, routing, runtime caching) and React Query for efficient server state handling",
        ],
        icon: ("</>", "text-blue-400"),
    },
    ExperienceEntry {
        company: "Bagidata - Telkom Indonesia",
        position: "Frontend Developer",
        duration: "2019 - 2020",
        description: "As a dedicated Frontend Developer, I have consistently delivered high-quality applications across web and mobile platforms. My work combines a user-centered approach with technical expertise to build performant and reliable digital products.",
        achievements: &[
            "Developed user-friendly and high-performance B2C mobile applications using React Native, ensuring seamless experiences across Android and iOS devices",
            "Built dynamic, responsive web applications with React.js, utilizing Redux for global state management and application consistency",
            "Created robust web solutions using PHP, demonstrating flexibility in adapting to various tech stacks to meet diverse client requirements",
        ],
        icon: ("</>", "text-blue-400"),
    },
];
