//! Dashboard page: summary counters and the most recent posts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::DateTime;
use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::types::{BlogStats, BlogSummary};

/// Number of posts in the "recent activity" list.
pub const RECENT_LIMIT: usize = 5;

/// Label/value pairs for the summary cards.
pub fn stat_cards(stats: &BlogStats) -> [(&'static str, u64); 4] {
    [
        ("Total Blogs", stats.total_blogs),
        ("Published", stats.published_blogs),
        ("Drafts", stats.draft_blogs),
        ("Total Views", stats.total_views),
    ]
}

pub fn status_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "published" => "status-badge status-badge--published",
        "draft" => "status-badge status-badge--draft",
        _ => "status-badge",
    }
}

/// `Jan 05, 2024` for an RFC 3339 timestamp; `-` when missing or unparsable.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map_or_else(|| "-".to_owned(), |date| date.format("%b %d, %Y").to_string())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let api = session.api().clone();

    let stats = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.blog_stats().await }
        }
    });
    let recent = LocalResource::new(move || {
        let api = api.clone();
        async move { api.recent_blogs(RECENT_LIMIT).await }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(stats) => view! { <SummaryCards stats=stats/> }.into_any(),
                            Err(e) => {
                                log::warn!("dashboard: stats failed: {e}");
                                view! { <p class="dashboard-page__error">"Could not load stats."</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <section class="dashboard-page__recent">
                <h2>"Recent Blog Activity"</h2>
                <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                    {move || {
                        recent
                            .get()
                            .map(|result| match result {
                                Ok(blogs) if blogs.is_empty() => {
                                    view! { <p>"No posts yet."</p> }.into_any()
                                }
                                Ok(blogs) => view! { <BlogList blogs=blogs/> }.into_any(),
                                Err(e) => {
                                    log::warn!("dashboard: recent posts failed: {e}");
                                    view! { <p class="dashboard-page__error">"Could not load posts."</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn SummaryCards(stats: BlogStats) -> impl IntoView {
    let cards = stat_cards(&stats)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="summary-card">
                    <span class="summary-card__label">{label}</span>
                    <span class="summary-card__value">{value}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();
    view! { <div class="dashboard-page__cards">{cards}</div> }
}

/// Table of posts shared by the dashboard and the all-blogs page.
#[component]
pub fn BlogList(blogs: Vec<BlogSummary>) -> impl IntoView {
    let rows = blogs
        .into_iter()
        .map(|blog| {
            let class = status_class(&blog.status);
            let date = format_date(blog.created_at.as_deref());
            view! {
                <tr>
                    <td>{blog.title}</td>
                    <td><span class=class>{blog.status}</span></td>
                    <td>{date}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <table class="blog-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Status"</th>
                    <th>"Created"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
