use std::cmp::Reverse;

use super::record::{Category, ProjectRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons, in display order.
    pub const ALL: [CategoryFilter; 4] = [
        Self::All,
        Self::Only(Category::AiMl),
        Self::Only(Category::Mern),
        Self::Only(Category::FullStack),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(category) => category.label(),
        }
    }

    pub fn admits(self, project: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently completed first.
    #[default]
    Date,
    /// Fewest technologies first.
    Technologies,
    /// Beginner, Intermediate, Advanced.
    Complexity,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::Date, Self::Technologies, Self::Complexity];

    /// Value of the matching `<option>`.
    pub fn value(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Technologies => "technology",
            Self::Complexity => "complexity",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Sort by Date",
            Self::Technologies => "Sort by Technologies",
            Self::Complexity => "Sort by Complexity",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub filter: CategoryFilter,
    pub search: String,
    pub sort: SortKey,
}

/// Filter, then search, then sort. Ties keep their post-search order.
pub fn derive_view<'a>(projects: &'a [ProjectRecord], query: &Query) -> Vec<&'a ProjectRecord> {
    let mut view = projects
        .iter()
        .filter(|p| query.filter.admits(p))
        .filter(|p| p.matches_search(&query.search))
        .collect::<Vec<_>>();
    match query.sort {
        SortKey::Date => view.sort_by_key(|p| Reverse(p.date_completed)),
        SortKey::Technologies => view.sort_by_key(|p| p.technologies.len()),
        SortKey::Complexity => view.sort_by_key(|p| p.complexity.ordinal()),
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::{Complexity, Status, Technology};
    use crate::catalog::source::sample_projects;
    use chrono::NaiveDate;

    fn project(id: &str, date: &str, complexity: Complexity, techs: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: "A project".to_string(),
            long_description: "A longer description".to_string(),
            image: "https://example.com/image.png".to_string(),
            technologies: techs
                .iter()
                .map(|name| Technology {
                    name: name.to_string(),
                    color: "bg-gray-600".to_string(),
                })
                .collect(),
            category: Category::FullStack,
            live_url: None,
            github_url: format!("https://github.com/example/{id}"),
            features: vec![],
            metrics: None,
            status: Status::Completed,
            date_completed: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date"),
            complexity,
        }
    }

    fn ids(view: &[&ProjectRecord]) -> Vec<String> {
        view.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_sort_by_complexity() {
        let projects = vec![
            project("a", "2024-01-01", Complexity::Advanced, &[]),
            project("b", "2024-01-01", Complexity::Beginner, &[]),
            project("c", "2024-01-01", Complexity::Intermediate, &[]),
        ];
        let query = Query {
            sort: SortKey::Complexity,
            ..Query::default()
        };
        let complexities: Vec<Complexity> = derive_view(&projects, &query)
            .iter()
            .map(|p| p.complexity)
            .collect();
        assert_eq!(
            complexities,
            vec![
                Complexity::Beginner,
                Complexity::Intermediate,
                Complexity::Advanced
            ]
        );
    }

    #[test]
    fn test_sort_by_date_descending() {
        let projects = vec![
            project("old", "2023-12-20", Complexity::Advanced, &[]),
            project("new", "2024-01-15", Complexity::Advanced, &[]),
        ];
        let view = derive_view(&projects, &Query::default());
        assert_eq!(ids(&view), vec!["new", "old"]);
    }

    #[test]
    fn test_sort_by_technologies_is_stable() {
        let projects = vec![
            project("three", "2024-01-01", Complexity::Beginner, &["A", "B", "C"]),
            project("one-a", "2024-01-01", Complexity::Beginner, &["A"]),
            project("two", "2024-01-01", Complexity::Beginner, &["A", "B"]),
            project("one-b", "2024-01-01", Complexity::Beginner, &["B"]),
        ];
        let query = Query {
            sort: SortKey::Technologies,
            ..Query::default()
        };
        let view = derive_view(&projects, &query);
        assert_eq!(ids(&view), vec!["one-a", "one-b", "two", "three"]);
    }

    #[test]
    fn test_filter_then_search() {
        let projects = sample_projects();
        let query = Query {
            filter: CategoryFilter::Only(Category::AiMl),
            search: "REACT".to_string(),
            sort: SortKey::Date,
        };
        let view = derive_view(&projects, &query);
        assert!(!view.is_empty());
        for p in &view {
            assert_eq!(p.category, Category::AiMl);
            assert!(p.technologies.iter().any(|t| t.name == "React")
                || p.title.to_lowercase().contains("react")
                || p.description.to_lowercase().contains("react"));
        }
        let lower = Query {
            search: "react".to_string(),
            ..query.clone()
        };
        assert_eq!(ids(&view), ids(&derive_view(&projects, &lower)));
    }

    #[test]
    fn test_view_is_subset_and_deterministic() {
        let projects = sample_projects();
        for filter in CategoryFilter::ALL {
            for sort in SortKey::ALL {
                let query = Query {
                    filter,
                    search: "a".to_string(),
                    sort,
                };
                let first = derive_view(&projects, &query);
                let second = derive_view(&projects, &query);
                assert_eq!(ids(&first), ids(&second));
                let expected = projects
                    .iter()
                    .filter(|p| filter.admits(p) && p.matches_search("a"))
                    .count();
                assert_eq!(first.len(), expected);
            }
        }
    }

    #[test]
    fn test_no_results() {
        let projects = sample_projects();
        let query = Query {
            search: "no such project anywhere".to_string(),
            ..Query::default()
        };
        assert!(derive_view(&projects, &query).is_empty());
    }

    #[test]
    fn test_sort_key_values() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_value(key.value()), Some(key));
        }
        assert_eq!(SortKey::from_value("popularity"), None);
        assert_eq!(CategoryFilter::All.label(), "All Projects");
        assert_eq!(CategoryFilter::Only(Category::Mern).label(), "MERN");
    }
}
