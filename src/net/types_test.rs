use super::*;

// =============================================================
// ApiError
// =============================================================

#[test]
fn unauthorized_is_detected() {
    assert!(ApiError::Unauthorized { status: 401 }.is_unauthorized());
    assert!(!ApiError::Status { status: 500, message: String::new() }.is_unauthorized());
    assert!(!ApiError::MissingToken.is_unauthorized());
}

#[test]
fn user_message_prefers_server_wording() {
    let err = ApiError::Status { status: 400, message: "Email already in use".to_owned() };
    assert_eq!(err.user_message(), Some("Email already in use"));
    assert_eq!(ApiError::Rejected("nope".to_owned()).user_message(), Some("nope"));
}

#[test]
fn user_message_is_none_for_transport_errors() {
    assert_eq!(ApiError::Request("offline".to_owned()).user_message(), None);
    assert_eq!(ApiError::Status { status: 502, message: String::new() }.user_message(), None);
}

#[test]
fn api_error_display() {
    assert_eq!(ApiError::Unauthorized { status: 401 }.to_string(), "unauthorized: status 401");
    assert_eq!(
        ApiError::Status { status: 500, message: "boom".to_owned() }.to_string(),
        "request failed with status 500: boom"
    );
}

// =============================================================
// ProfileUser
// =============================================================

#[test]
fn profile_user_renames_mongo_id_and_camel_case() {
    let user: ProfileUser = serde_json::from_value(serde_json::json!({
        "_id": "1",
        "username": "jd",
        "firstName": "J",
        "lastName": "D",
        "email": "j@d.com",
        "profilePhoto": "https://cdn.test/p.png",
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.first_name, "J");
    assert_eq!(user.last_name, "D");
    assert_eq!(user.profile_photo.as_deref(), Some("https://cdn.test/p.png"));
    assert_eq!(user.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(user.updated_at, None);
    assert_eq!(user.bio, None);
}

#[test]
fn profile_user_requires_id() {
    let parsed = serde_json::from_value::<ProfileUser>(serde_json::json!({ "username": "jd" }));
    assert!(parsed.is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn new_account_serializes_camel_case() {
    let account = NewAccount {
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        username: "ada".to_owned(),
        bio: String::new(),
    };
    let value = serde_json::to_value(&account).unwrap();
    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["lastName"], "Lovelace");
}

#[test]
fn profile_update_omits_unset_fields() {
    let update = ProfileUpdate { bio: Some("hello".to_owned()), ..ProfileUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "bio": "hello" }));
}

#[test]
fn profile_update_sends_null_to_clear_photo() {
    let update = ProfileUpdate { profile_photo: Some(None), ..ProfileUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "profilePhoto": null }));
}

#[test]
fn profile_update_is_empty_by_default() {
    assert!(ProfileUpdate::default().is_empty());
    assert!(!ProfileUpdate { email: Some("x@y.z".to_owned()), ..ProfileUpdate::default() }.is_empty());
}

// =============================================================
// Listing types
// =============================================================

#[test]
fn category_defaults_and_lenient_numbers() {
    let category: Category = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "blogCount": "7",
        "icon": "0"
    }))
    .unwrap();
    assert_eq!(category.name, "Untitled");
    assert_eq!(category.description, "");
    assert_eq!(category.post_count, 7);
    assert!(!category.is_active);
    assert_eq!(category.icon, 1);
}

#[test]
fn category_missing_icon_uses_first_palette_entry() {
    let category: Category = serde_json::from_value(serde_json::json!({ "_id": "c1", "icon": 4 })).unwrap();
    assert_eq!(category.icon, 4);
    let category: Category = serde_json::from_value(serde_json::json!({ "_id": "c2" })).unwrap();
    assert_eq!(category.icon, 1);
}

#[test]
fn blog_stats_accepts_strings_and_floats() {
    let stats: BlogStats = serde_json::from_value(serde_json::json!({
        "totalBlogs": 12,
        "publishedBlogs": "9",
        "draftBlogs": 3.0,
        "totalViews": null
    }))
    .unwrap();
    assert_eq!(stats, BlogStats { total_blogs: 12, published_blogs: 9, draft_blogs: 3, total_views: 0 });
}

#[test]
fn blog_summary_defaults() {
    let blog: BlogSummary = serde_json::from_value(serde_json::json!({ "_id": "b1" })).unwrap();
    assert_eq!(blog.title, "Untitled");
    assert_eq!(blog.status, "draft");
    assert_eq!(blog.created_at, None);
}

#[test]
fn new_blog_serializes_camel_case_without_empty_category() {
    let blog = NewBlog {
        title: "Hello".to_owned(),
        status: "draft".to_owned(),
        meta_title: "Hello | Blog".to_owned(),
        ..NewBlog::default()
    };
    let value = serde_json::to_value(&blog).unwrap();
    assert_eq!(value["metaTitle"], "Hello | Blog");
    assert_eq!(value["status"], "draft");
    assert!(value.get("category").is_none());

    let with_category = NewBlog { category: Some("c1".to_owned()), ..blog };
    assert_eq!(serde_json::to_value(&with_category).unwrap()["category"], "c1");
}
