use super::util::{dash_if_blank, render_table, truncate};
use crate::products::confluence::{ConfluencePage, ConfluenceSpace};

#[must_use]
pub fn format_page_detail(page: &ConfluencePage) -> String {
    format!(
        "## {}\nSpace: {}\nVersion: {}\nURL: {}\n\n{}",
        page.title,
        dash_if_blank(&page.space_key),
        page.version,
        page.url,
        page.body,
    )
}

#[must_use]
pub fn format_page_list(pages: &[ConfluencePage]) -> String {
    let headers = ["Id", "Title", "Space", "Version"];
    let rows = pages
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                truncate(&p.title, 50),
                dash_if_blank(&p.space_key),
                p.version.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

#[must_use]
pub fn format_space_list(spaces: &[ConfluenceSpace]) -> String {
    let headers = ["Key", "Name", "Type"];
    let rows = spaces
        .iter()
        .map(|s| vec![s.key.clone(), truncate(&s.name, 40), dash_if_blank(&s.space_type)])
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}
