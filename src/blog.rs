//! The blog data model as it appears on the wire.

use serde::{Deserialize, Serialize};

/// A single blog post.
///
/// `id` is assigned by the store on [`MemStore::add`](crate::store::MemStore::add)
/// and always equals the key the record is filed under — a caller-supplied id
/// in a POST body is overwritten. Every field is serde-defaulted so a partial
/// JSON body decodes with zero values instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub likes: i64,
    pub comments: Vec<Comment>,
}

/// A comment attached to a blog post.
///
/// Comments have no lifecycle of their own — they live and die with their
/// parent [`Blog`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub author: String,
    #[serde(rename = "commentText")]
    pub comment_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_body_decodes_with_defaults() {
        let blog: Blog = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        assert_eq!(blog.title, "Hello");
        assert_eq!(blog.id, "");
        assert_eq!(blog.likes, 0);
        assert!(blog.comments.is_empty());
    }

    #[test]
    fn comment_uses_camel_case_wire_name() {
        let comment = Comment {
            author: "bo".into(),
            comment_text: "nice".into(),
        };
        let json = serde_json::to_string(&comment).unwrap();
        assert_eq!(json, r#"{"author":"bo","commentText":"nice"}"#);

        let back: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, comment);
    }
}
