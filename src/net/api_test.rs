use super::*;
use serde_json::json;

// =============================================================
// Request shaping
// =============================================================

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = HttpApi::new("https://blog.example.test/api/");
    assert_eq!(api.base_url(), "https://blog.example.test/api");
    assert_eq!(api.endpoint(PROFILE_PATH), "https://blog.example.test/api/auth/profile");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn blogs_path_appends_limit() {
    assert_eq!(blogs_path(Some(5)), "/blogs?limit=5");
    assert_eq!(blogs_path(None), "/blogs");
}

#[test]
fn native_transport_is_unavailable() {
    let api = HttpApi::new("/api");
    let result = futures::executor::block_on(api.fetch_profile("abc"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn native_create_blog_is_unavailable() {
    let api = HttpApi::new("/api");
    let result = futures::executor::block_on(api.create_blog("abc", &NewBlog::default()));
    assert_eq!(result, Err(ApiError::Unavailable));
}

// =============================================================
// interpret_response
// =============================================================

#[test]
fn interpret_maps_401_and_403_to_unauthorized() {
    assert_eq!(interpret_response(401, ""), Err(ApiError::Unauthorized { status: 401 }));
    assert_eq!(
        interpret_response(403, r#"{"message":"forbidden"}"#),
        Err(ApiError::Unauthorized { status: 403 })
    );
}

#[test]
fn interpret_uses_server_message_for_other_statuses() {
    assert_eq!(
        interpret_response(400, r#"{"success":false,"message":"Email already in use"}"#),
        Err(ApiError::Status { status: 400, message: "Email already in use".to_owned() })
    );
}

#[test]
fn interpret_falls_back_when_error_body_is_not_json() {
    assert_eq!(
        interpret_response(500, "<html>oops</html>"),
        Err(ApiError::Status { status: 500, message: "request failed".to_owned() })
    );
}

#[test]
fn interpret_rejects_malformed_success_body() {
    assert!(matches!(interpret_response(200, "not json"), Err(ApiError::Decode(_))));
}

#[test]
fn interpret_treats_empty_success_body_as_null() {
    assert_eq!(interpret_response(204, ""), Ok(Value::Null));
    assert_eq!(interpret_response(200, "  \n"), Ok(Value::Null));
}

#[test]
fn interpret_empty_error_body_keeps_status() {
    assert_eq!(
        interpret_response(500, ""),
        Err(ApiError::Status { status: 500, message: "request failed".to_owned() })
    );
}

#[test]
fn interpret_rejects_success_false_envelope() {
    assert_eq!(
        interpret_response(200, r#"{"success":false,"message":"Invalid credentials"}"#),
        Err(ApiError::Rejected("Invalid credentials".to_owned()))
    );
}

#[test]
fn interpret_passes_success_body_through() {
    assert_eq!(interpret_response(201, r#"{"success":true}"#), Ok(json!({ "success": true })));
}

// =============================================================
// Profile and token parsing
// =============================================================

#[test]
fn parse_profile_reads_envelope_user() {
    let body = json!({
        "success": true,
        "data": { "user": { "_id": "1", "username": "jd", "firstName": "J", "lastName": "D", "email": "j@d.com" } }
    });
    let user = parse_profile(&body).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "jd");
    assert_eq!(user.email, "j@d.com");
}

#[test]
fn parse_profile_accepts_top_level_user() {
    let body = json!({ "user": { "_id": "2" } });
    assert_eq!(parse_profile(&body).unwrap().id, "2");
}

#[test]
fn parse_profile_without_user_is_decode_error() {
    assert!(matches!(parse_profile(&json!({ "data": {} })), Err(ApiError::Decode(_))));
}

#[test]
fn parse_profile_user_without_id_is_decode_error() {
    assert!(matches!(
        parse_profile(&json!({ "data": { "user": { "username": "jd" } } })),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn parse_token_reads_nested_or_top_level() {
    assert_eq!(parse_token(&json!({ "data": { "token": "t1" } })), Ok(Some("t1".to_owned())));
    assert_eq!(parse_token(&json!({ "token": "t2" })), Ok(Some("t2".to_owned())));
    assert_eq!(parse_token(&json!({ "success": true })), Ok(None));
}

#[test]
fn parse_token_rejects_non_string() {
    assert!(matches!(parse_token(&json!({ "token": 42 })), Err(ApiError::Decode(_))));
}

// =============================================================
// List normalization
// =============================================================

#[test]
fn parse_list_accepts_nested_envelope() {
    let body = json!({ "success": true, "data": { "blogs": [{ "_id": "b1", "title": "Hello" }] } });
    let blogs: Vec<BlogSummary> = parse_list(&body, "blogs").unwrap();
    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0].title, "Hello");
}

#[test]
fn parse_list_accepts_keyed_object() {
    let body = json!({ "categories": [{ "_id": "c1", "name": "Rust" }, { "_id": "c2" }] });
    let categories: Vec<Category> = parse_list(&body, "categories").unwrap();
    assert_eq!(categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), ["Rust", "Untitled"]);
}

#[test]
fn parse_list_accepts_bare_array_and_data_array() {
    let bare: Vec<BlogSummary> = parse_list(&json!([{ "_id": "b1" }]), "blogs").unwrap();
    assert_eq!(bare[0].id, "b1");
    let data: Vec<BlogSummary> = parse_list(&json!({ "data": [{ "_id": "b2" }] }), "blogs").unwrap();
    assert_eq!(data[0].id, "b2");
}

#[test]
fn parse_list_missing_list_is_decode_error() {
    let result: Result<Vec<BlogSummary>, _> = parse_list(&json!({ "data": { "posts": [] } }), "blogs");
    assert_eq!(result, Err(ApiError::Decode("response has no blogs list".to_owned())));
}

#[test]
fn parse_list_bad_item_is_decode_error() {
    let result: Result<Vec<BlogSummary>, _> = parse_list(&json!({ "blogs": [{ "title": "no id" }] }), "blogs");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn parse_stats_accepts_all_shapes() {
    let expected = BlogStats { total_blogs: 3, ..BlogStats::default() };
    assert_eq!(parse_stats(&json!({ "data": { "stats": { "totalBlogs": 3 } } })), Ok(expected.clone()));
    assert_eq!(parse_stats(&json!({ "data": { "totalBlogs": 3 } })), Ok(expected.clone()));
    assert_eq!(parse_stats(&json!({ "totalBlogs": 3 })), Ok(expected));
}

#[test]
fn parse_stats_rejects_non_object() {
    assert!(matches!(parse_stats(&json!([1, 2])), Err(ApiError::Decode(_))));
}
