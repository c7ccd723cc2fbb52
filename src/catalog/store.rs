use rust_embed::Embed;

use super::{record::ProjectRecord, source::CatalogError};

const PROJECTS_FILE: &str = "projects.json";

#[derive(Embed)]
#[folder = "data"]
pub struct DataAssets;

/// Reads the project list served at `/api/projects`.
pub fn load_projects() -> Result<Vec<ProjectRecord>, CatalogError> {
    let file = DataAssets::get(PROJECTS_FILE).ok_or(CatalogError::NotFound)?;
    let projects = serde_json::from_slice::<Vec<ProjectRecord>>(&file.data).map_err(|e| {
        tracing::error!(error = %e, "invalid {PROJECTS_FILE}");
        CatalogError::Parse(e.to_string())
    })?;
    tracing::debug!(count = projects.len(), "loaded project list");
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_projects_decode() {
        let projects = load_projects().expect("embedded projects should decode");
        assert!(projects.len() > crate::catalog::PAGE_SIZE);

        let ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), projects.len());
        assert!(projects.iter().all(|p| !p.github_url.is_empty()));
    }
}
