use super::util::{dash_if_blank, render_table, truncate, unassigned_if_blank};
use crate::products::bitbucket::{
    BitbucketBranch, BitbucketCodeSearchHit, BitbucketCommit, BitbucketPullRequest,
    BitbucketRepository,
};

#[must_use]
pub fn format_repo_detail(repo: &BitbucketRepository) -> String {
    format!(
        "## {}\nWorkspace: {}\nPrivate: {}\n\n{}",
        repo.name,
        dash_if_blank(&repo.workspace),
        repo.is_private,
        repo.description,
    )
}

#[must_use]
pub fn format_repo_list(repos: &[BitbucketRepository]) -> String {
    let headers = ["Slug", "Name", "Workspace", "Private"];
    let rows = repos
        .iter()
        .map(|r| {
            vec![
                r.slug.clone(),
                truncate(&r.name, 40),
                dash_if_blank(&r.workspace),
                r.is_private.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

#[must_use]
pub fn format_pull_request_detail(pr: &BitbucketPullRequest) -> String {
    format!(
        "## PR #{} — {}\nState: {}\nAuthor: {}\n{} -> {}\n\n{}",
        pr.id,
        pr.title,
        dash_if_blank(&pr.state),
        unassigned_if_blank(&pr.author),
        dash_if_blank(&pr.source_branch),
        dash_if_blank(&pr.destination_branch),
        pr.description,
    )
}

#[must_use]
pub fn format_pull_request_list(prs: &[BitbucketPullRequest]) -> String {
    let headers = ["Id", "Title", "State", "Author"];
    let rows = prs
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                truncate(&p.title, 50),
                dash_if_blank(&p.state),
                unassigned_if_blank(&p.author),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

#[must_use]
pub fn format_branch_list(branches: &[BitbucketBranch]) -> String {
    let headers = ["Name", "Target"];
    let rows = branches
        .iter()
        .map(|b| vec![b.name.clone(), truncate(&b.target_hash, 12)])
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

#[must_use]
pub fn format_commit_list(commits: &[BitbucketCommit]) -> String {
    let headers = ["Hash", "Author", "Message"];
    let rows = commits
        .iter()
        .map(|c| {
            vec![
                truncate(&c.hash, 12),
                unassigned_if_blank(&c.author),
                truncate(&c.message, 50),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

#[must_use]
pub fn format_code_search_results(hits: &[BitbucketCodeSearchHit]) -> String {
    let headers = ["Repository", "Path"];
    let rows = hits
        .iter()
        .map(|h| vec![h.repository.clone(), truncate(&h.path, 50)])
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}
