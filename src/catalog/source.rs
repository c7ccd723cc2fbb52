use chrono::NaiveDate;
use thiserror::Error;

use super::record::{Category, Complexity, Metrics, ProjectRecord, Status, Technology};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Couldn't fetch projects: {0}")]
    Fetch(String),
    #[error("Project list not found")]
    NotFound,
    #[error("Couldn't parse projects: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Fetched(Vec<ProjectRecord>),
    /// The read failed and the built-in list stands in for it.
    Fallback(Vec<ProjectRecord>),
}

impl LoadOutcome {
    pub fn into_projects(self) -> Vec<ProjectRecord> {
        match self {
            Self::Fetched(projects) | Self::Fallback(projects) => projects,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(CatalogError),
}

/// Turns the result of the single project read into the list to display.
/// Failures are logged and replaced by [`sample_projects`].
pub fn resolve_load(result: Result<Vec<ProjectRecord>, CatalogError>) -> LoadOutcome {
    match result {
        Ok(projects) => LoadOutcome::Fetched(projects),
        Err(e) => {
            log::warn!("{e}; using built-in sample projects");
            LoadOutcome::Fallback(sample_projects())
        }
    }
}

fn tech(name: &str, color: &str) -> Technology {
    Technology {
        name: name.to_string(),
        color: color.to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("sample dates are valid calendar dates")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn metrics(users: Option<&str>, performance: Option<&str>, accuracy: Option<&str>) -> Option<Metrics> {
    Some(Metrics {
        users: users.map(str::to_string),
        performance: performance.map(str::to_string),
        accuracy: accuracy.map(str::to_string),
    })
}

/// Built-in catalog used when the project endpoint can't be read.
pub fn sample_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "1".to_string(),
            title: "AI Image Classification Platform".to_string(),
            description: "Real-time image classification using computer vision with 95% accuracy on custom datasets.".to_string(),
            long_description: "A comprehensive platform that leverages TensorFlow and React to provide real-time image classification. Features include custom model training, batch processing, and detailed analytics dashboard.".to_string(),
            image: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=800&h=600&fit=crop".to_string(),
            technologies: vec![
                tech("TensorFlow", "bg-orange-500"),
                tech("React", "bg-blue-500"),
                tech("Python", "bg-green-500"),
                tech("FastAPI", "bg-teal-500"),
            ],
            category: Category::AiMl,
            live_url: Some("https://ai-classifier-demo.com".to_string()),
            github_url: "https://github.com/username/ai-classifier".to_string(),
            features: strings(&["Real-time classification", "Custom model training", "Batch processing", "Analytics dashboard"]),
            metrics: metrics(Some("1.2k+"), Some("< 100ms"), Some("95%")),
            status: Status::Completed,
            date_completed: date(2024, 1, 15),
            complexity: Complexity::Advanced,
        },
        ProjectRecord {
            id: "2".to_string(),
            title: "NLP Chatbot with RAG".to_string(),
            description: "Intelligent chatbot using retrieval-augmented generation for accurate, context-aware responses.".to_string(),
            long_description: "Advanced conversational AI system built with OpenAI GPT and custom retrieval mechanisms. Implements RAG architecture for domain-specific knowledge integration.".to_string(),
            image: "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?w=800&h=600&fit=crop".to_string(),
            technologies: vec![
                tech("OpenAI API", "bg-purple-500"),
                tech("Node.js", "bg-green-600"),
                tech("MongoDB", "bg-green-500"),
                tech("Socket.io", "bg-gray-600"),
            ],
            category: Category::AiMl,
            live_url: Some("https://nlp-chatbot-demo.com".to_string()),
            github_url: "https://github.com/username/nlp-chatbot".to_string(),
            features: strings(&["RAG architecture", "Real-time chat", "Context memory", "Multi-language support"]),
            metrics: metrics(Some("800+"), Some("< 200ms"), Some("92%")),
            status: Status::Completed,
            date_completed: date(2023, 12, 20),
            complexity: Complexity::Advanced,
        },
        ProjectRecord {
            id: "3".to_string(),
            title: "Predictive Analytics Dashboard".to_string(),
            description: "Interactive dashboard for business intelligence with ML-powered forecasting and insights.".to_string(),
            long_description: "Comprehensive analytics platform combining machine learning models with interactive visualizations. Features predictive modeling, trend analysis, and automated reporting.".to_string(),
            image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop".to_string(),
            technologies: vec![
                tech("scikit-learn", "bg-orange-600"),
                tech("D3.js", "bg-orange-500"),
                tech("Express", "bg-gray-600"),
                tech("PostgreSQL", "bg-blue-600"),
            ],
            category: Category::AiMl,
            live_url: None,
            github_url: "https://github.com/username/analytics-dashboard".to_string(),
            features: strings(&["Predictive modeling", "Interactive charts", "Automated reporting", "Real-time updates"]),
            metrics: metrics(Some("500+"), None, Some("88%")),
            status: Status::Completed,
            date_completed: date(2024, 2, 10),
            complexity: Complexity::Intermediate,
        },
        ProjectRecord {
            id: "4".to_string(),
            title: "Real-time Object Detection".to_string(),
            description: "Browser-based object detection using YOLO model with WebRTC for live video processing.".to_string(),
            long_description: "Real-time object detection system running entirely in the browser. Uses TensorFlow.js implementation of YOLO for detecting multiple objects in live video streams.".to_string(),
            image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800&h=600&fit=crop".to_string(),
            technologies: vec![
                tech("TensorFlow.js", "bg-orange-500"),
                tech("WebRTC", "bg-blue-600"),
                tech("React", "bg-blue-500"),
                tech("OpenCV", "bg-green-600"),
            ],
            category: Category::AiMl,
            live_url: Some("https://object-detection-demo.com".to_string()),
            github_url: "https://github.com/username/object-detection".to_string(),
            features: strings(&["Real-time detection", "Multiple object classes", "Video recording", "Performance metrics"]),
            metrics: metrics(None, Some("30 FPS"), Some("85%")),
            status: Status::InProgress,
            date_completed: date(2024, 3, 1),
            complexity: Complexity::Advanced,
        },
        ProjectRecord {
            id: "5".to_string(),
            title: "E-commerce Platform".to_string(),
            description: "Full-stack e-commerce solution with payment integration, inventory management, and analytics.".to_string(),
            long_description: "Complete e-commerce platform built with MERN stack. Features include user authentication, payment processing via Stripe, inventory management, order tracking, and comprehensive admin dashboard.".to_string(),
            image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop".to_string(),
            technologies: vec![
                tech("React", "bg-blue-500"),
                tech("Node.js", "bg-green-600"),
                tech("MongoDB", "bg-green-500"),
                tech("Stripe", "bg-purple-600"),
            ],
            category: Category::Mern,
            live_url: Some("https://ecommerce-demo.com".to_string()),
            github_url: "https://github.com/username/ecommerce-platform".to_string(),
            features: strings(&["Payment processing", "Inventory management", "Order tracking", "Admin dashboard"]),
            metrics: metrics(Some("2.5k+"), Some("98% uptime"), None),
            status: Status::Completed,
            date_completed: date(2023, 11, 30),
            complexity: Complexity::Advanced,
        },
        ProjectRecord {
            id: "6".to_string(),
            title: "Social Media App".to_string(),
            description: "Real-time social platform with posts, messaging, notifications, and live chat features.".to_string(),
            long_description: "Modern social media application with real-time features. Includes post sharing, direct messaging, push notifications, story features, and live chat functionality.".to_string(),
            image: "https://images.unsplash.com/photo-1611262588024-d12430b98920?w=800&h=600&fit=crop".to_string(),
            technologies: vec![
                tech("React", "bg-blue-500"),
                tech("Express", "bg-gray-600"),
                tech("Socket.io", "bg-gray-600"),
                tech("JWT", "bg-red-500"),
            ],
            category: Category::Mern,
            live_url: Some("https://social-app-demo.com".to_string()),
            github_url: "https://github.com/username/social-media-app".to_string(),
            features: strings(&["Real-time messaging", "Post sharing", "Push notifications", "Story features"]),
            metrics: metrics(Some("1.8k+"), Some("< 50ms latency"), None),
            status: Status::Completed,
            date_completed: date(2024, 1, 5),
            complexity: Complexity::Intermediate,
        },
        ProjectRecord {
            id: "7".to_string(),
            title: "Task Management System".to_string(),
            description: "Collaborative project management tool with real-time updates, file sharing, and team analytics.".to_string(),
            long_description: "Task management platform for small teams. Features include project boards, task assignment, file sharing, time tracking, and progress overviews.".to_string(),
            image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=800&h=600&fit=crop".to_string(),
            technologies: vec![
                tech("React", "bg-blue-500"),
                tech("Node.js", "bg-green-600"),
                tech("PostgreSQL", "bg-blue-600"),
            ],
            category: Category::FullStack,
            live_url: None,
            github_url: "https://github.com/username/task-management".to_string(),
            features: strings(&["Project boards", "Task assignment", "File sharing", "Time tracking"]),
            metrics: None,
            status: Status::Completed,
            date_completed: date(2023, 10, 15),
            complexity: Complexity::Beginner,
        },
        ProjectRecord {
            id: "8".to_string(),
            title: "Real-time Chat Application".to_string(),
            description: "Multi-room chat app with video calls, file sharing, message encryption, and presence indicators.".to_string(),
            long_description: "Feature-rich chat application supporting multiple rooms, video calls via WebRTC, file sharing, end-to-end message encryption, user presence indicators, and message history.".to_string(),
            image: "https://images.unsplash.com/photo-1577563908411-5077b6dc7624?w=800&h=600&fit=crop".to_string(),
            technologies: vec![
                tech("React", "bg-blue-500"),
                tech("Express", "bg-gray-600"),
                tech("Socket.io", "bg-gray-600"),
                tech("WebRTC", "bg-blue-600"),
            ],
            category: Category::Mern,
            live_url: Some("https://chat-app-demo.com".to_string()),
            github_url: "https://github.com/username/chat-application".to_string(),
            features: strings(&["Multi-room chat", "Video calls", "File sharing", "Message encryption"]),
            metrics: metrics(Some("1.5k+"), Some("< 30ms latency"), None),
            status: Status::InProgress,
            date_completed: date(2024, 2, 28),
            complexity: Complexity::Advanced,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_failed_read_falls_back() {
        let outcome = resolve_load(Err(CatalogError::Fetch("connection refused".to_string())));
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_projects().len(), 8);

        let outcome = resolve_load(Err(CatalogError::Parse("expected `[`".to_string())));
        assert_eq!(outcome, LoadOutcome::Fallback(sample_projects()));
    }

    #[test]
    fn test_successful_read_is_used_as_is() {
        let mut projects = sample_projects();
        projects.truncate(2);
        let outcome = resolve_load(Ok(projects.clone()));
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.into_projects(), projects);
    }

    #[test]
    fn test_samples_cover_every_branch() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 8);

        let ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), projects.len());

        for category in [Category::AiMl, Category::Mern, Category::FullStack] {
            assert!(projects.iter().any(|p| p.category == category), "{category}");
        }
        for complexity in [
            Complexity::Beginner,
            Complexity::Intermediate,
            Complexity::Advanced,
        ] {
            assert!(projects.iter().any(|p| p.complexity == complexity), "{complexity}");
        }
        for status in [Status::Completed, Status::InProgress] {
            assert!(projects.iter().any(|p| p.status == status), "{status}");
        }
        assert!(projects.iter().any(|p| p.live_url.is_some()));
        assert!(projects.iter().any(|p| p.live_url.is_none()));
        assert!(projects.iter().any(|p| p.metrics.is_none()));
        assert!(projects
            .iter()
            .filter_map(|p| p.metrics.as_ref())
            .any(|m| m.users.is_none()));
    }

    #[test]
    fn test_sample_dates_are_real() {
        let earliest = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date");
        for project in sample_projects() {
            assert!(project.date_completed >= earliest, "{}", project.id);
        }
    }
}
