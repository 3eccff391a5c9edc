//! Shared test harness for repository backends
//!
//! Provides field builders for posts and comments and the
//! `repository_tests!` macro.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod repository_tests;

use blog::core::{CommentFields, PostFields};

/// Post fields with every value present.
pub fn full_post(title: &str, content: &str, img: &str) -> PostFields {
    PostFields {
        title: Some(title.to_string()),
        content: Some(content.to_string()),
        img: Some(img.to_string()),
    }
}

/// Post fields with only a title.
pub fn titled_post(title: &str) -> PostFields {
    PostFields {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

/// Comment fields referencing `post_id`.
pub fn comment_on(post_id: &str, content: &str) -> CommentFields {
    CommentFields {
        post_id: Some(post_id.to_string()),
        content: Some(content.to_string()),
    }
}
