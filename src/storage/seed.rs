//! Sample records loaded into a fresh store.

use chrono::{DateTime, TimeZone, Utc};

use crate::modules::blog::application::domain::entities::NewBlogPost;
use crate::modules::education::application::domain::entities::NewEducation;
use crate::modules::experience::application::domain::entities::NewExperience;
use crate::modules::project::application::domain::entities::NewProject;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn education() -> Vec<NewEducation> {
    vec![
        NewEducation {
            degree: "Bachelor of Science in Computer Science".to_string(),
            institution: "University of Technology".to_string(),
            location: "New York, NY".to_string(),
            start_year: "2018".to_string(),
            end_year: Some("2022".to_string()),
            description: Some(
                "Focused on software engineering, algorithms, and web development. Graduated Magna Cum Laude."
                    .to_string(),
            ),
            gpa: Some("3.8/4.0".to_string()),
        },
        NewEducation {
            degree: "Master of Science in Software Engineering".to_string(),
            institution: "Tech Institute".to_string(),
            location: "San Francisco, CA".to_string(),
            start_year: "2022".to_string(),
            end_year: Some("2024".to_string()),
            description: Some(
                "Advanced studies in distributed systems, cloud computing, and AI/ML applications."
                    .to_string(),
            ),
            gpa: Some("3.9/4.0".to_string()),
        },
    ]
}

pub fn experience() -> Vec<NewExperience> {
    vec![
        NewExperience {
            title: "Senior Full Stack Developer".to_string(),
            company: "TechCorp Solutions".to_string(),
            location: "San Francisco, CA".to_string(),
            start_date: "2024-01".to_string(),
            end_date: None,
            description: "Leading development of enterprise web applications using React, Node.js, and cloud technologies. Managing a team of 4 developers and architecting scalable solutions.".to_string(),
            technologies: strings(&["React", "Node.js", "TypeScript", "AWS", "PostgreSQL", "Docker"]),
            is_current_job: true,
        },
        NewExperience {
            title: "Full Stack Developer".to_string(),
            company: "StartupX".to_string(),
            location: "Remote".to_string(),
            start_date: "2022-06".to_string(),
            end_date: Some("2023-12".to_string()),
            description: "Built and maintained multiple web applications from concept to deployment. Implemented CI/CD pipelines and improved application performance by 40%.".to_string(),
            technologies: strings(&["React", "Express.js", "MongoDB", "Redis", "Kubernetes"]),
            is_current_job: false,
        },
        NewExperience {
            title: "Software Developer Intern".to_string(),
            company: "InnovateTech".to_string(),
            location: "Boston, MA".to_string(),
            start_date: "2021-06".to_string(),
            end_date: Some("2021-08".to_string()),
            description: "Developed REST APIs and contributed to frontend development. Collaborated with senior developers on code reviews and system design.".to_string(),
            technologies: strings(&["JavaScript", "Python", "Flask", "MySQL"]),
            is_current_job: false,
        },
    ]
}

pub fn projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "E-commerce Platform".to_string(),
            description: "A full-featured e-commerce platform with payment integration, inventory management, and admin dashboard. Built with modern web technologies and deployed on cloud infrastructure.".to_string(),
            technologies: strings(&["React", "Node.js", "PostgreSQL", "Stripe API", "AWS"]),
            github_url: Some("https://github.com/johndoe/ecommerce-platform".to_string()),
            live_url: Some("https://demo-ecommerce.example.com".to_string()),
            image_url: None,
            featured: true,
        },
        NewProject {
            title: "Task Management App".to_string(),
            description: "A collaborative task management application with real-time updates, team collaboration features, and advanced filtering options.".to_string(),
            technologies: strings(&["Vue.js", "Express.js", "Socket.io", "MongoDB"]),
            github_url: Some("https://github.com/johndoe/task-manager".to_string()),
            live_url: Some("https://taskmanager.example.com".to_string()),
            image_url: None,
            featured: true,
        },
        NewProject {
            title: "Weather Dashboard".to_string(),
            description: "A responsive weather dashboard that displays current conditions and forecasts for multiple cities with beautiful data visualizations.".to_string(),
            technologies: strings(&["React", "Chart.js", "OpenWeather API", "Tailwind CSS"]),
            github_url: Some("https://github.com/johndoe/weather-dashboard".to_string()),
            live_url: Some("https://weather-dash.example.com".to_string()),
            image_url: None,
            featured: false,
        },
        NewProject {
            title: "Blog CMS".to_string(),
            description: "A content management system for bloggers with markdown support, SEO optimization, and analytics integration.".to_string(),
            technologies: strings(&["Next.js", "Prisma", "PostgreSQL", "Vercel"]),
            github_url: Some("https://github.com/johndoe/blog-cms".to_string()),
            live_url: None,
            image_url: None,
            featured: false,
        },
    ]
}

fn midnight_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Posts paired with their original publication time.
pub fn blog_posts() -> Vec<(NewBlogPost, DateTime<Utc>)> {
    vec![
        (
            NewBlogPost {
                title: "Getting Started with React and TypeScript".to_string(),
                slug: "getting-started-with-react-typescript".to_string(),
                content: CONTENT_ONE.to_string(),
                excerpt: Some(
                    "Learn how to set up and use TypeScript with React for better development experience and type safety."
                        .to_string(),
                ),
                published: true,
                tags: strings(&["React", "TypeScript", "JavaScript", "Frontend"]),
                file_path: None,
                original_filename: None,
            },
            midnight_utc(2024, 1, 15),
        ),
        (
            NewBlogPost {
                title: "Building Scalable APIs with Node.js".to_string(),
                slug: "building-scalable-apis-nodejs".to_string(),
                content: CONTENT_TWO.to_string(),
                excerpt: Some(
                    "Best practices and patterns for building scalable and maintainable APIs using Node.js and Express."
                        .to_string(),
                ),
                published: true,
                tags: strings(&["Node.js", "API", "Backend", "Express"]),
                file_path: None,
                original_filename: None,
            },
            midnight_utc(2024, 1, 10),
        ),
    ]
}

const CONTENT_ONE: &str = "TypeScript has become an essential tool for React developers. In this comprehensive guide, we'll explore how to set up a React project with TypeScript, understand the benefits it provides, and learn best practices for type-safe React development.\n\n## Why TypeScript with React?\n\nTypeScript brings static typing to JavaScript, which helps catch errors at compile time rather than runtime. When combined with React, it provides:\n\n- Better IDE support with autocomplete and refactoring\n- Catch prop type errors early\n- Self-documenting components\n- Improved maintainability\n\n## Setting Up the Project\n\nThe easiest way to start a React TypeScript project is using Create React App:\n\n```bash\nnpx create-react-app my-app --template typescript\n```\n\nThis sets up everything you need to get started with React and TypeScript.";

const CONTENT_TWO: &str = "Building scalable APIs is crucial for modern web applications. In this article, we'll explore best practices for creating robust, maintainable APIs using Node.js and Express.\n\n## API Design Principles\n\nWhen designing APIs, consider these key principles:\n\n1. **RESTful Design**: Follow REST conventions for predictable endpoints\n2. **Consistent Response Format**: Use a standard format for all responses\n3. **Error Handling**: Implement comprehensive error handling\n4. **Authentication**: Secure your endpoints appropriately\n5. **Rate Limiting**: Protect against abuse\n\n## Express.js Best Practices\n\nExpress.js is a minimal framework, but following these practices will help you build better APIs:\n\n- Use middleware for cross-cutting concerns\n- Implement proper error handling middleware\n- Use environment variables for configuration\n- Structure your routes logically";
