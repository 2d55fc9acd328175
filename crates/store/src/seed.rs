//! Seed defaults written the first time a resource file is accessed and
//! found missing. Content mirrors what the portfolio ships with before any
//! admin has touched the dashboard.

use atelier_core::ids;
use chrono::Utc;

use crate::models::inquiry::{InquiryPriority, InquiryStatus, ProjectInquiry};
use crate::models::notification::{Notification, NotificationCategory, NotificationType};
use crate::models::project::{Project, ProjectStatus};
use crate::models::testimonial::{Testimonial, TestimonialStatus};

pub fn projects() -> Vec<Project> {
    let now = Utc::now();
    vec![
        Project {
            id: ids::next_string_id(),
            title: "Atelier Portfolio".to_string(),
            description: "This site: a personal portfolio with an admin and client dashboard."
                .to_string(),
            status: ProjectStatus::Live,
            technologies: vec![
                "Next.js".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
            ],
            url: Some("https://atelier.dev".to_string()),
            github_url: Some("https://github.com/atelier/portfolio".to_string()),
            image_url: None,
            featured: true,
            created_at: now,
            updated_at: now,
        },
        Project {
            id: ids::next_string_id(),
            title: "Storefront".to_string(),
            description: "Headless e-commerce storefront with cart, checkout and CMS-driven \
                          product pages."
                .to_string(),
            status: ProjectStatus::InProgress,
            technologies: vec!["React".to_string(), "Stripe".to_string()],
            url: None,
            github_url: Some("https://github.com/atelier/storefront".to_string()),
            image_url: None,
            featured: false,
            created_at: now,
            updated_at: now,
        },
        Project {
            id: ids::next_string_id(),
            title: "Spotify Clone".to_string(),
            description: "Streaming UI clone built to exercise audio APIs and infinite lists."
                .to_string(),
            status: ProjectStatus::Clone,
            technologies: vec!["React".to_string(), "Node.js".to_string()],
            url: None,
            github_url: None,
            image_url: None,
            featured: false,
            created_at: now,
            updated_at: now,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    let now = Utc::now();
    vec![
        Testimonial {
            id: ids::next_string_id(),
            name: "Sara Lindqvist".to_string(),
            position: "Product Manager".to_string(),
            company: "Northwind".to_string(),
            content: "Delivered ahead of schedule and communicated clearly the whole way through."
                .to_string(),
            rating: 5,
            avatar_url: None,
            status: TestimonialStatus::Approved,
            created_at: now,
            updated_at: now,
        },
        Testimonial {
            id: ids::next_string_id(),
            name: "Marcus Webb".to_string(),
            position: "CTO".to_string(),
            company: "Fathom Labs".to_string(),
            content: "Rare combination of design sense and engineering depth.".to_string(),
            rating: 5,
            avatar_url: None,
            status: TestimonialStatus::Approved,
            created_at: now,
            updated_at: now,
        },
        Testimonial {
            id: ids::next_string_id(),
            name: "Aicha Benali".to_string(),
            position: "Founder".to_string(),
            company: "Petite Presse".to_string(),
            content: "Our launch went flawlessly. Would hire again without hesitation."
                .to_string(),
            rating: 4,
            avatar_url: None,
            status: TestimonialStatus::Pending,
            created_at: now,
            updated_at: now,
        },
    ]
}

pub fn inquiries() -> Vec<ProjectInquiry> {
    let now = Utc::now();
    vec![ProjectInquiry {
        id: ids::next_id(),
        client_name: "Jordan Blake".to_string(),
        client_email: "jordan@example.com".to_string(),
        client_phone: None,
        project_title: "Company website redesign".to_string(),
        description: "Refresh our marketing site with a CMS the team can edit.".to_string(),
        project_type: "web-design".to_string(),
        budget: "$5k-$10k".to_string(),
        timeline: "2-3 months".to_string(),
        status: InquiryStatus::Pending,
        priority: InquiryPriority::Medium,
        progress: 0,
        messages: Vec::new(),
        tasks: Vec::new(),
        documents: Vec::new(),
        invoices: Vec::new(),
        team_members: Vec::new(),
        created_at: now,
        updated_at: now,
    }]
}

pub fn notifications() -> Vec<Notification> {
    vec![Notification {
        id: ids::next_string_id(),
        title: "Welcome to the dashboard".to_string(),
        message: "Projects, testimonials and inquiries are managed from here.".to_string(),
        notification_type: NotificationType::Info,
        category: NotificationCategory::System,
        is_read: false,
        created_at: Utc::now(),
        action_url: None,
        action_text: None,
    }]
}
