//! Content listing pages: all posts and categories.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;

use super::dashboard::BlogList;
use crate::app::AppSession;
use crate::net::types::{ApiError, Category};

/// `"1 post"` / `"3 posts"`.
pub fn post_count_label(count: u64) -> String {
    if count == 1 { "1 post".to_owned() } else { format!("{count} posts") }
}

/// Active categories first, then by name.
pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| b.is_active.cmp(&a.is_active).then_with(|| a.name.cmp(&b.name)));
}

#[component]
pub fn AllBlogsPage() -> impl IntoView {
    let api = expect_context::<AppSession>().api().clone();
    let blogs = LocalResource::new(move || {
        let api = api.clone();
        async move { api.blogs().await }
    });

    view! {
        <div class="content-page">
            <h1>"All Blogs"</h1>
            <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                {move || {
                    blogs
                        .get()
                        .map(|result| match result {
                            Ok(blogs) => view! { <BlogList blogs=blogs/> }.into_any(),
                            Err(e) => {
                                log::warn!("all blogs: load failed: {e}");
                                view! { <p class="content-page__error">"Could not load posts."</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let api = expect_context::<AppSession>().api().clone();
    let categories = LocalResource::new(move || {
        let api = api.clone();
        async move {
            let mut categories = api.categories().await?;
            sort_categories(&mut categories);
            Ok::<_, ApiError>(categories)
        }
    });

    view! {
        <div class="content-page">
            <h1>"Categories"</h1>
            <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                {move || {
                    categories
                        .get()
                        .map(|result| match result {
                            Ok(categories) => {
                                let cards = categories
                                    .into_iter()
                                    .map(|category| {
                                        let count = post_count_label(category.post_count);
                                        let class = if category.is_active {
                                            "category-card"
                                        } else {
                                            "category-card category-card--inactive"
                                        };
                                        view! {
                                            <div class=class>
                                                <h3>{category.name}</h3>
                                                <p>{category.description}</p>
                                                <span class="category-card__count">{count}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! { <div class="category-grid">{cards}</div> }.into_any()
                            }
                            Err(e) => {
                                log::warn!("categories: load failed: {e}");
                                view! { <p class="content-page__error">"Could not load categories."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
