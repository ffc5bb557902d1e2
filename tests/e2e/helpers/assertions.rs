use blog_api::domain::post::{BlogPost, NewBlogPost};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::collections::BTreeSet;

pub const POST_KEYS: [&str; 5] = ["author", "content", "created", "id", "title"];

/// Check a serialized post has exactly the public fields
pub fn assert_post_shape(post: &Value) {
    let object = post
        .as_object()
        .unwrap_or_else(|| panic!("Expected a JSON object, got {}", post));

    let keys: BTreeSet<&str> = object.keys().map(|k| k.as_str()).collect();
    let expected: BTreeSet<&str> = POST_KEYS.into_iter().collect();
    assert_eq!(keys, expected, "Post response keys mismatch");

    let id = post["id"].as_str().expect("id should be a string");
    assert!(!id.is_empty(), "Post ID should not be empty");
    assert!(post["author"].is_string(), "author should be a display string");
    assert!(post["created"].is_string(), "created should be a timestamp string");
}

/// Check a serialized post against the fixture it was created from
pub fn assert_post_response(post: &Value, expected: &NewBlogPost) {
    assert_post_shape(post);
    assert_eq!(post["title"].as_str(), Some(expected.title.as_str()), "title mismatch");
    assert_eq!(
        post["content"].as_str(),
        Some(expected.content.as_str()),
        "content mismatch"
    );
    assert_eq!(
        post["author"].as_str(),
        Some(expected.author.display_name().as_str()),
        "author mismatch"
    );
}

/// Check a stored post against the fixture it was created from
pub fn assert_stored_post(stored: &BlogPost, expected: &NewBlogPost) {
    assert_eq!(stored.title, expected.title, "stored title mismatch");
    assert_eq!(stored.content, expected.content, "stored content mismatch");
    assert_eq!(stored.author.0, expected.author, "stored author mismatch");
}
