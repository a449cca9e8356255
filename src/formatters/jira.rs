use super::util::{dash_if_blank, render_table, truncate, unassigned_if_blank};
use crate::products::jira::{JiraComment, JiraIssue, JiraProject, JiraSprint};

#[must_use]
pub fn format_issue_detail(issue: &JiraIssue) -> String {
    format!(
        "## {} — {}\nStatus: {}\nType: {}\nPriority: {}\nAssignee: {}\nReporter: {}\nProject: {}\nURL: {}\n\n{}",
        issue.key,
        issue.summary,
        dash_if_blank(&issue.status),
        dash_if_blank(&issue.issue_type),
        dash_if_blank(&issue.priority),
        unassigned_if_blank(&issue.assignee),
        dash_if_blank(&issue.reporter),
        dash_if_blank(&issue.project_key),
        issue.url,
        issue.description,
    )
}

#[must_use]
pub fn format_issue_list(issues: &[JiraIssue]) -> String {
    let headers = ["Key", "Summary", "Status", "Assignee"];
    let rows = issues
        .iter()
        .map(|i| {
            vec![
                i.key.clone(),
                truncate(&i.summary, 50),
                dash_if_blank(&i.status),
                unassigned_if_blank(&i.assignee),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

#[must_use]
pub fn format_project_list(projects: &[JiraProject]) -> String {
    let headers = ["Key", "Name", "Type", "Lead"];
    let rows = projects
        .iter()
        .map(|p| {
            vec![
                p.key.clone(),
                truncate(&p.name, 40),
                dash_if_blank(&p.project_type),
                unassigned_if_blank(&p.lead),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

#[must_use]
pub fn format_sprint_detail(sprint: &JiraSprint) -> String {
    format!(
        "## Sprint {} — {}\nState: {}\nGoal: {}",
        sprint.id,
        sprint.name,
        dash_if_blank(&sprint.state),
        dash_if_blank(&sprint.goal)
    )
}

#[must_use]
pub fn format_comment_list(comments: &[JiraComment]) -> String {
    let headers = ["Id", "Author", "Created", "Body"];
    let rows = comments
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                unassigned_if_blank(&c.author),
                dash_if_blank(&c.created),
                truncate(&c.body, 50),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}
