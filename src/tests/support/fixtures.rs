use chrono::{TimeZone, Utc};

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::project::application::domain::entities::Project;

pub fn sample_education(id: i32) -> Education {
    Education {
        id,
        degree: "BSc Computer Science".to_string(),
        institution: "University of Technology".to_string(),
        location: "New York, NY".to_string(),
        start_year: "2018".to_string(),
        end_year: Some("2022".to_string()),
        description: None,
        gpa: Some("3.8/4.0".to_string()),
    }
}

pub fn sample_experience(id: i32) -> Experience {
    Experience {
        id,
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        start_date: "2024-01".to_string(),
        end_date: None,
        description: "Builds services".to_string(),
        technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        is_current_job: true,
    }
}

pub fn sample_project(id: i32, featured: bool) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        description: "A sample project".to_string(),
        technologies: vec!["Rust".to_string()],
        github_url: Some("https://github.com/johndoe/sample".to_string()),
        live_url: None,
        image_url: None,
        featured,
    }
}

pub fn sample_post(id: i32, slug: &str, published: bool) -> BlogPost {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .unwrap();

    BlogPost {
        id,
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        content: "Some content for the post".to_string(),
        excerpt: Some("Some content...".to_string()),
        published,
        tags: vec!["Rust".to_string()],
        created_at,
        updated_at: created_at,
        original_filename: None,
        file_path: None,
    }
}
