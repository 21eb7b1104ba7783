//! Records loaded at startup when `store.seed` is enabled.

use chrono::{DateTime, Utc};

use crate::model::{Category, Project, ProjectStatus};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The initial project catalogue, stamped with `created_at`.
pub fn projects(created_at: DateTime<Utc>) -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Machine Learning Applications in Healthcare Diagnosis".into(),
            description: Some(
                "A comprehensive study on implementing machine learning algorithms for early disease detection and diagnosis in healthcare systems.".into(),
            ),
            author: "Sarah Johnson".into(),
            university: Some("Stanford University".into()),
            department: Some("Computer Science".into()),
            year: Some(2024),
            project_type: Some("Thesis".into()),
            category: "Technology".into(),
            subject: Some("Machine Learning".into()),
            pages: Some(156),
            language: Some("English".into()),
            price: 45.99,
            rating: Some(4.8),
            downloads: 234,
            tags: strings(&["Machine Learning", "Healthcare", "AI", "Diagnosis", "Deep Learning"]),
            abstract_text: Some(
                "This thesis explores the application of advanced machine learning techniques in healthcare diagnosis, focusing on early detection of cardiovascular diseases and cancer. The research presents novel algorithms that achieve 94% accuracy in preliminary diagnosis, potentially revolutionizing healthcare delivery in underserved communities.".into(),
            ),
            table_of_contents: strings(&[
                "Introduction and Literature Review",
                "Methodology and Data Collection",
                "Machine Learning Model Development",
                "Implementation and Testing",
                "Results and Analysis",
                "Conclusion and Future Work",
            ]),
            upload_date: Some("2024-01-15".into()),
            file_size: Some("12.4 MB".into()),
            format: Some("PDF".into()),
            status: ProjectStatus::Published,
            created_at,
        },
        Project {
            id: 2,
            title: "Machine Learning in Agriculture".into(),
            description: Some(
                "Exploring ML applications in crop yield prediction and pest detection.".into(),
            ),
            author: "John Doe".into(),
            university: Some("University of California, Davis".into()),
            department: Some("Computer Engineering".into()),
            year: Some(2023),
            project_type: Some("Dissertation".into()),
            category: "Technology".into(),
            subject: Some("Machine Learning".into()),
            pages: Some(210),
            language: Some("English".into()),
            price: 209.0,
            rating: Some(4.2),
            downloads: 5234,
            tags: strings(&["Machine Learning", "Agriculture", "AI"]),
            abstract_text: Some(
                "This work analyzes ML techniques for agriculture, including remote sensing and time-series forecasting for yield optimization.".into(),
            ),
            table_of_contents: strings(&[
                "Introduction",
                "Related Work",
                "Data and Methods",
                "Experiments",
                "Results",
                "Discussion and Conclusions",
            ]),
            upload_date: Some("2023-06-10".into()),
            file_size: Some("8.7 MB".into()),
            format: Some("PDF".into()),
            status: ProjectStatus::Unpublished,
            created_at,
        },
    ]
}

/// The initial category list.
pub fn categories() -> Vec<Category> {
    [("Medicine", 1900), ("Economics", 1500), ("Law", 1200)]
        .into_iter()
        .zip(1..)
        .map(|((title, project_count), id)| Category {
            id,
            title: title.into(),
            project_count,
        })
        .collect()
}
