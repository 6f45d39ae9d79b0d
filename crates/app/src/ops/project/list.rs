use std::io::IsTerminal;

use clap::Args;

use client::ui::{project_options, Badge};
use client::QueryState;
use common::prelude::{ProjectStatus, ProjectsQueryParams, EMPTY_PLACEHOLDER};

#[derive(Args, Debug, Clone)]
pub struct List {
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, default_value_t = 50)]
    pub size: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectListError {
    #[error("Failed to load projects: {0}")]
    Request(#[from] client::RequestError),
}

#[async_trait::async_trait]
impl crate::op::Op for List {
    type Error = ProjectListError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let params = ProjectsQueryParams::new(self.page, self.size);
        let page = match ctx.resources.projects.list(params).await {
            QueryState::Success(page) => page,
            QueryState::Failure(error) => return Err(error.into()),
            QueryState::Idle | QueryState::Loading => return Ok(String::new()),
        };

        if page.is_empty() {
            return Ok("No projects found".to_string());
        }

        let color = std::io::stdout().is_terminal();
        let output = project_options(&page.data)
            .into_iter()
            .zip(&page.data)
            .map(|(option, project)| project_line(&option.label, project.status, color))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(output)
    }
}

fn project_line(label: &str, status: Option<ProjectStatus>, color: bool) -> String {
    let status = match status.map(Badge::project_status) {
        Some(badge) if color => badge.colored(),
        Some(badge) => badge.label.to_string(),
        None => EMPTY_PLACEHOLDER.to_string(),
    };
    format!("{}  [{}]", label, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_line() {
        assert_eq!(
            project_line("Harbour Bridge (ID: 7)", Some(ProjectStatus::Active), false),
            "Harbour Bridge (ID: 7)  [Active]"
        );
        assert_eq!(
            project_line("Harbour Bridge (ID: 7)", Some(ProjectStatus::Active), true),
            "Harbour Bridge (ID: 7)  [\x1b[32mActive\x1b[0m]"
        );
        assert_eq!(
            project_line("Opera House (ID: 9)", None, true),
            format!("Opera House (ID: 9)  [{}]", EMPTY_PLACEHOLDER)
        );
    }
}
