//! New post editor: saves a draft or publishes through the session's
//! authenticated request path, so an expired credential signs the user out.

#[cfg(test)]
#[path = "new_blog_test.rs"]
mod new_blog_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::content::sort_categories;
use crate::app::AppSession;
use crate::net::types::{ApiError, NewBlog};
use crate::util::route_guard::Page;

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";

/// `" rust, ,web ,"` becomes `"rust,web"`.
pub fn normalize_tags(raw: &str) -> String {
    raw.split(',').map(str::trim).filter(|tag| !tag.is_empty()).collect::<Vec<_>>().join(",")
}

/// Trim the form and stamp `status`. Publishing also needs content.
pub fn prepare_blog(form: &NewBlog, status: &'static str) -> Result<NewBlog, &'static str> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err("Title is required");
    }
    if status == STATUS_PUBLISHED && form.content.trim().is_empty() {
        return Err("Content is required to publish");
    }
    let meta_title = form.meta_title.trim();
    Ok(NewBlog {
        title: title.to_owned(),
        content: form.content.trim().to_owned(),
        excerpt: form.excerpt.trim().to_owned(),
        category: form.category.as_deref().map(str::trim).filter(|id| !id.is_empty()).map(str::to_owned),
        tags: normalize_tags(&form.tags),
        status: status.to_owned(),
        meta_title: if meta_title.is_empty() { title.to_owned() } else { meta_title.to_owned() },
        meta_description: form.meta_description.trim().to_owned(),
    })
}

pub fn create_error_message(err: &ApiError) -> String {
    match err {
        ApiError::MissingToken | ApiError::Unauthorized { .. } => "Your session has expired. Please sign in again.".to_owned(),
        other => other.user_message().unwrap_or("Failed to save post").to_owned(),
    }
}

#[component]
pub fn NewBlogPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let form = RwSignal::new(NewBlog::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api = session.api().clone();
    let categories = LocalResource::new(move || {
        let api = api.clone();
        async move {
            let mut categories = api.categories().await.unwrap_or_else(|e| {
                log::warn!("new blog: categories failed: {e}");
                Vec::new()
            });
            sort_categories(&mut categories);
            categories
        }
    });

    let submit = move |status: &'static str| {
        if busy.get() {
            return;
        }
        let blog = match form.with(|f| prepare_blog(f, status)) {
            Ok(blog) => blog,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.create_blog(&blog).await {
                Ok(()) => {
                    busy.set(false);
                    navigate(Page::AllBlogs.path(), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("new blog: save failed: {e}");
                    info.set(create_error_message(&e));
                    busy.set(false);
                }
            }
        });
    };
    let on_draft = {
        let submit = submit.clone();
        move |_| submit(STATUS_DRAFT)
    };
    let on_publish = move |_| submit(STATUS_PUBLISHED);

    view! {
        <div class="content-page new-blog">
            <header class="content-page__header">
                <h1>"Create New Blog Post"</h1>
                <div class="content-page__actions">
                    <button class="btn" on:click=on_draft disabled=move || busy.get()>
                        "Save Draft"
                    </button>
                    <button class="btn btn--primary" on:click=on_publish disabled=move || busy.get()>
                        "Publish"
                    </button>
                </div>
            </header>
            <input
                class="new-blog__title"
                type="text"
                placeholder="Enter your blog title..."
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.title = value);
                }
            />
            <textarea
                class="new-blog__content"
                placeholder="Write your post..."
                prop:value=move || form.with(|f| f.content.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.content = value);
                }
            ></textarea>
            <textarea
                class="new-blog__excerpt"
                placeholder="Short summary shown in listings"
                prop:value=move || form.with(|f| f.excerpt.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.excerpt = value);
                }
            ></textarea>
            <label class="settings-field">
                <span>"Category"</span>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.category = Some(value));
                }>
                    <option value="">"Uncategorized"</option>
                    <Suspense fallback=|| ()>
                        {move || {
                            categories
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|c| view! { <option value=c.id>{c.name}</option> })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </Suspense>
                </select>
            </label>
            <label class="settings-field">
                <span>"Tags"</span>
                <input
                    type="text"
                    placeholder="rust, web, tutorial"
                    prop:value=move || form.with(|f| f.tags.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.tags = value);
                    }
                />
            </label>
            <label class="settings-field">
                <span>"Meta Description"</span>
                <textarea
                    prop:value=move || form.with(|f| f.meta_description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.meta_description = value);
                    }
                ></textarea>
            </label>
            <Show when=move || !info.get().is_empty()>
                <p class="content-page__error">{move || info.get()}</p>
            </Show>
        </div>
    }
}
