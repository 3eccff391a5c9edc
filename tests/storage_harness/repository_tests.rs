//! Macro-generated test suite for the `Repository<T>` contract.
//!
//! The `repository_tests!` macro generates a test module that validates a
//! pair of `Repository<Post>` / `Repository<Comment>` implementations.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use blog::storage::InMemoryRepository;
//!
//! repository_tests!(
//!     InMemoryRepository::<Post>::new(),
//!     InMemoryRepository::<Comment>::new()
//! );
//! ```
//!
//! # Generated Tests
//!
//! - `test_insert_and_find_roundtrip`: inserted fields come back with the assigned id
//! - `test_insert_partial_fields`: omitted fields read back as `None`
//! - `test_ids_are_unique`: every insert gets a fresh id
//! - `test_find_nonexistent`: unknown id returns `None`
//! - `test_find_all_empty` / `test_find_all_multiple`
//! - `test_find_by_field`: foreign-key lookup returns exactly the matching comments
//! - `test_update_overwrites_all_fields`: absent values clear the stored field
//! - `test_update_nonexistent_is_noop`
//! - `test_delete_existing` / `test_delete_nonexistent_is_noop`
//! - `test_delete_post_leaves_comments`: no cascade
//! - `test_concurrent_inserts`: parallel inserts from spawned tasks

/// Generate a full repository conformance test suite.
///
/// `$posts` and `$comments` are re-evaluated for each test. The concurrent
/// test also requires the post repository to be `Clone + 'static`.
#[macro_export]
macro_rules! repository_tests {
    ($posts:expr, $comments:expr) => {
        mod repository_contract_tests {
            use super::*;
            use blog::core::{Comment, EntityId, Post, PostFields, Repository};

            // ==================================================================
            // Insert & find
            // ==================================================================

            #[tokio::test]
            async fn test_insert_and_find_roundtrip() {
                let posts = $posts;

                let id = posts
                    .insert(full_post("Hello", "World", "/img/hello.png"))
                    .await
                    .unwrap();

                let post: Post = posts.find_by_id(&id).await.unwrap().unwrap();
                assert_eq!(post.id, id);
                assert_eq!(post.title.as_deref(), Some("Hello"));
                assert_eq!(post.content.as_deref(), Some("World"));
                assert_eq!(post.img.as_deref(), Some("/img/hello.png"));
            }

            #[tokio::test]
            async fn test_insert_partial_fields() {
                let comments = $comments;

                let id = comments
                    .insert(blog::core::CommentFields {
                        post_id: None,
                        content: Some("loose".to_string()),
                    })
                    .await
                    .unwrap();

                let comment: Comment = comments.find_by_id(&id).await.unwrap().unwrap();
                assert_eq!(comment.post_id, None);
                assert_eq!(comment.content.as_deref(), Some("loose"));
            }

            #[tokio::test]
            async fn test_ids_are_unique() {
                let posts = $posts;

                let a = posts.insert(PostFields::default()).await.unwrap();
                let b = posts.insert(PostFields::default()).await.unwrap();

                assert_ne!(a, b);
            }

            #[tokio::test]
            async fn test_find_nonexistent() {
                let posts = $posts;

                let result: Option<Post> = posts.find_by_id(&EntityId::new()).await.unwrap();
                assert!(result.is_none(), "Unknown id should return None");
            }

            // ==================================================================
            // Find all
            // ==================================================================

            #[tokio::test]
            async fn test_find_all_empty() {
                let comments = $comments;

                let all: Vec<Comment> = comments.find_all().await.unwrap();
                assert!(all.is_empty(), "Empty collection should list nothing");
            }

            #[tokio::test]
            async fn test_find_all_multiple() {
                let posts = $posts;
                let mut expected = Vec::new();
                for i in 0..5 {
                    expected.push(posts.insert(titled_post(&format!("post {i}"))).await.unwrap());
                }

                let all: Vec<Post> = posts.find_all().await.unwrap();
                assert_eq!(all.len(), 5);

                let returned: Vec<EntityId> = all.iter().map(|p| p.id).collect();
                for id in &expected {
                    assert!(returned.contains(id), "Listed posts should contain {}", id);
                }
            }

            // ==================================================================
            // Foreign-key lookup
            // ==================================================================

            #[tokio::test]
            async fn test_find_by_field() {
                let comments = $comments;
                let target = EntityId::new().to_string();
                let other = EntityId::new().to_string();

                comments.insert(comment_on(&target, "first")).await.unwrap();
                comments.insert(comment_on(&other, "elsewhere")).await.unwrap();
                comments.insert(comment_on(&target, "second")).await.unwrap();

                let found: Vec<Comment> = comments.find_by_field("postId", &target).await.unwrap();
                let mut contents: Vec<String> =
                    found.into_iter().filter_map(|c| c.content).collect();
                contents.sort();
                assert_eq!(contents, vec!["first", "second"]);

                let none: Vec<Comment> = comments
                    .find_by_field("postId", &EntityId::new().to_string())
                    .await
                    .unwrap();
                assert!(none.is_empty());
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_overwrites_all_fields() {
                let posts = $posts;
                let id = posts.insert(full_post("t", "c", "i")).await.unwrap();

                posts.update_by_id(&id, titled_post("t2")).await.unwrap();

                let post: Post = posts.find_by_id(&id).await.unwrap().unwrap();
                assert_eq!(post.id, id);
                assert_eq!(post.title.as_deref(), Some("t2"));
                assert_eq!(post.content, None);
                assert_eq!(post.img, None);
            }

            #[tokio::test]
            async fn test_update_nonexistent_is_noop() {
                let posts = $posts;
                let kept = posts.insert(titled_post("kept")).await.unwrap();
                let ghost = EntityId::new();

                posts.update_by_id(&ghost, titled_post("ghost")).await.unwrap();

                let ghost_post: Option<Post> = posts.find_by_id(&ghost).await.unwrap();
                assert!(ghost_post.is_none(), "Update must not create a record");
                let all: Vec<Post> = posts.find_all().await.unwrap();
                assert_eq!(all.len(), 1);
                assert_eq!(all[0].id, kept);
                assert_eq!(all[0].title.as_deref(), Some("kept"));
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let comments = $comments;
                let id = comments
                    .insert(comment_on(&EntityId::new().to_string(), "bye"))
                    .await
                    .unwrap();

                comments.delete_by_id(&id).await.unwrap();

                let gone: Option<Comment> = comments.find_by_id(&id).await.unwrap();
                assert!(gone.is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent_is_noop() {
                let posts = $posts;
                posts.insert(titled_post("survivor")).await.unwrap();

                posts.delete_by_id(&EntityId::new()).await.unwrap();

                let all: Vec<Post> = posts.find_all().await.unwrap();
                assert_eq!(all.len(), 1);
            }

            #[tokio::test]
            async fn test_delete_post_leaves_comments() {
                let posts = $posts;
                let comments = $comments;
                let post_id = posts.insert(titled_post("parent")).await.unwrap();
                comments
                    .insert(comment_on(&post_id.to_string(), "orphan"))
                    .await
                    .unwrap();

                posts.delete_by_id(&post_id).await.unwrap();

                let remaining: Vec<Comment> = comments
                    .find_by_field("postId", &post_id.to_string())
                    .await
                    .unwrap();
                assert_eq!(remaining.len(), 1);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let posts = $posts;
                let mut handles = Vec::new();

                for i in 0..10 {
                    let repo = posts.clone();
                    handles.push(tokio::spawn(async move {
                        repo.insert(titled_post(&format!("concurrent {i}"))).await
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap().unwrap());
                }
                ids.sort_by_key(|id| id.to_string());
                ids.dedup();
                assert_eq!(ids.len(), 10);

                let all: Vec<Post> = posts.find_all().await.unwrap();
                assert_eq!(all.len(), 10);
            }
        }
    };
}
