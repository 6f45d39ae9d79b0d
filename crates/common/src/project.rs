use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Inactive,
    Pending,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Inactive => "Inactive",
            ProjectStatus::Pending => "Pending",
        }
    }
}

/// A project as seen by the sync screens. Only `id` and `name` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

/// Paging for `GET /projects`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectsQueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl ProjectsQueryParams {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ignores_unknown_fields() {
        let raw = r#"{"id":3,"name":"Bridge","owner":"x","status":"inactive"}"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.id, 3);
        assert_eq!(project.status, Some(ProjectStatus::Inactive));
    }

    #[test]
    fn test_project_query_pairs() {
        assert_eq!(
            ProjectsQueryParams::new(1, 100).query_pairs(),
            vec![("page", "1".to_string()), ("size", "100".to_string())]
        );
        assert!(ProjectsQueryParams::default().query_pairs().is_empty());
    }
}
