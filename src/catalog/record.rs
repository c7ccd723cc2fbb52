use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    /// Tailwind background class used for the badge, e.g. `bg-blue-500`.
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "MERN")]
    Mern,
    #[serde(rename = "Full Stack")]
    FullStack,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::AiMl => "AI/ML",
            Self::Mern => "MERN",
            Self::FullStack => "Full Stack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Users,
    Performance,
    Accuracy,
}

impl MetricKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Performance => "Performance",
            Self::Accuracy => "Accuracy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    pub kind: MetricKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    LiveDemo,
    Source,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub href: String,
}

/// One showcased project, as served by `/api/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub technologies: Vec<Technology>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub github_url: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    pub status: Status,
    pub date_completed: NaiveDate,
    pub complexity: Complexity,
}

impl ProjectRecord {
    /// Case-insensitive substring match on title, description and technology names.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self
                .technologies
                .iter()
                .any(|t| t.name.to_lowercase().contains(&term))
    }

    /// Tiles for the metrics that are present, in users/performance/accuracy order.
    pub fn metric_tiles(&self) -> Vec<MetricTile> {
        let Some(metrics) = &self.metrics else {
            return Vec::new();
        };
        [
            (MetricKind::Users, &metrics.users),
            (MetricKind::Performance, &metrics.performance),
            (MetricKind::Accuracy, &metrics.accuracy),
        ]
        .into_iter()
        .filter_map(|(kind, value)| {
            value.as_ref().map(|v| MetricTile {
                kind,
                value: v.clone(),
            })
        })
        .collect()
    }

    pub fn links(&self) -> Vec<ProjectLink> {
        let mut links = Vec::with_capacity(2);
        if let Some(href) = &self.live_url {
            links.push(ProjectLink {
                kind: LinkKind::LiveDemo,
                href: href.clone(),
            });
        }
        links.push(ProjectLink {
            kind: LinkKind::Source,
            href: self.github_url.clone(),
        });
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::source::sample_projects;

    fn find(id: &str) -> ProjectRecord {
        sample_projects()
            .into_iter()
            .find(|p| p.id == id)
            .expect("sample project should exist")
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let project = find("1");
        assert!(project.matches_search("react"));
        assert!(project.matches_search("REACT"));
        assert!(project.matches_search("classification"));
        assert!(project.matches_search(""));
        assert!(!project.matches_search("kubernetes"));
    }

    #[test]
    fn test_missing_live_url_has_no_demo_link() {
        let project = find("3");
        assert!(project.live_url.is_none());
        let links = project.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, LinkKind::Source);
        assert_eq!(links[0].href, project.github_url);

        let project = find("1");
        let kinds: Vec<LinkKind> = project.links().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LinkKind::LiveDemo, LinkKind::Source]);
    }

    #[test]
    fn test_metric_tiles_follow_present_keys() {
        // object detection has accuracy and performance but no users
        let tiles = find("4").metric_tiles();
        let kinds: Vec<MetricKind> = tiles.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![MetricKind::Performance, MetricKind::Accuracy]);
        assert!(!kinds.contains(&MetricKind::Users));

        let tiles = find("1").metric_tiles();
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].value, "1.2k+");

        let no_metrics = find("7");
        assert!(no_metrics.metrics.is_none());
        assert!(no_metrics.metric_tiles().is_empty());
    }

    #[test]
    fn test_complexity_order() {
        assert!(Complexity::Beginner < Complexity::Intermediate);
        assert!(Complexity::Intermediate < Complexity::Advanced);
        assert_eq!(Complexity::Advanced.ordinal(), 3);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "x",
            "title": "Title",
            "description": "Short",
            "longDescription": "Long",
            "image": "https://example.com/x.png",
            "technologies": [{ "name": "Rust", "color": "bg-orange-600" }],
            "category": "Full Stack",
            "githubUrl": "https://github.com/example/x",
            "features": ["One"],
            "metrics": { "users": "10+" },
            "status": "In Progress",
            "dateCompleted": "2024-05-01",
            "complexity": "Beginner"
        }"#;
        let project: ProjectRecord = serde_json::from_str(json).expect("should decode");
        assert_eq!(project.category, Category::FullStack);
        assert_eq!(project.status, Status::InProgress);
        assert!(project.live_url.is_none());
        assert_eq!(
            project.date_completed,
            NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
        );
        let metrics = project.metrics.expect("metrics present");
        assert_eq!(metrics.users.as_deref(), Some("10+"));
        assert!(metrics.accuracy.is_none());
    }

    #[test]
    fn test_github_url_is_required() {
        let json = r#"{
            "id": "x",
            "title": "Title",
            "description": "Short",
            "longDescription": "Long",
            "image": "https://example.com/x.png",
            "technologies": [],
            "category": "MERN",
            "features": [],
            "status": "Completed",
            "dateCompleted": "2024-05-01",
            "complexity": "Advanced"
        }"#;
        assert!(serde_json::from_str::<ProjectRecord>(json).is_err());
    }
}
