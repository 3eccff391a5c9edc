//! Resolver set: one method per schema field
//!
//! Each method maps a GraphQL field onto one or two repository calls and
//! normalizes what comes back. Nothing here is atomic: the create, update and
//! delete mutations read the collection again (or first) in a separate call,
//! so a concurrent writer can change the record in between.

use super::schema::{CommentNode, PostNode};
use crate::core::{
    Comment, CommentFields, Entity, EntityId, Post, PostFields, Repository, Result, normalize,
    normalize_all,
};
use std::sync::Arc;

/// Field name of a comment's reference to its post.
const POST_ID_FIELD: &str = "postId";

/// Resolver set shared by every GraphQL request
///
/// Holds the two repositories explicitly; it is registered as schema data
/// and cloned cheaply.
#[derive(Clone)]
pub struct Resolvers {
    posts: Arc<dyn Repository<Post>>,
    comments: Arc<dyn Repository<Comment>>,
}

impl Resolvers {
    pub fn new(posts: Arc<dyn Repository<Post>>, comments: Arc<dyn Repository<Comment>>) -> Self {
        Self { posts, comments }
    }

    /// `Query.post`
    pub async fn post(&self, id: Option<&str>) -> Result<Option<PostNode>> {
        tracing::debug!(id = ?id, "resolving Query.post");
        Ok(normalize(find(self.posts.as_ref(), id).await?))
    }

    /// `Query.posts`
    pub async fn posts(&self) -> Result<Vec<PostNode>> {
        tracing::debug!("resolving Query.posts");
        Ok(normalize_all(self.posts.find_all().await?))
    }

    /// `Query.comment`
    pub async fn comment(&self, id: Option<&str>) -> Result<Option<CommentNode>> {
        tracing::debug!(id = ?id, "resolving Query.comment");
        Ok(normalize(find(self.comments.as_ref(), id).await?))
    }

    /// `Query.comments`
    pub async fn comments(&self) -> Result<Vec<CommentNode>> {
        tracing::debug!("resolving Query.comments");
        Ok(normalize_all(self.comments.find_all().await?))
    }

    /// `Post.comments`: every comment whose `postId` is the parent's id
    pub async fn post_comments(&self, post_id: &str) -> Result<Vec<CommentNode>> {
        tracing::debug!(post_id, "resolving Post.comments");
        let comments = self.comments.find_by_field(POST_ID_FIELD, post_id).await?;
        Ok(normalize_all(comments))
    }

    /// `Comment.post`: the post the parent comment points to
    ///
    /// A comment without `postId` has no post. A `postId` that is not a
    /// valid identifier fails like any other malformed id.
    pub async fn comment_post(&self, post_id: Option<&str>) -> Result<Option<PostNode>> {
        tracing::debug!(post_id = ?post_id, "resolving Comment.post");
        Ok(normalize(find(self.posts.as_ref(), post_id).await?))
    }

    /// `Mutation.createPost`
    pub async fn create_post(&self, fields: PostFields) -> Result<Option<PostNode>> {
        let id = self.posts.insert(fields).await?;
        tracing::debug!(%id, "created post");
        Ok(normalize(self.posts.find_by_id(&id).await?))
    }

    /// `Mutation.createComment`
    pub async fn create_comment(&self, fields: CommentFields) -> Result<Option<CommentNode>> {
        let id = self.comments.insert(fields).await?;
        tracing::debug!(%id, "created comment");
        Ok(normalize(self.comments.find_by_id(&id).await?))
    }

    /// `Mutation.deletePost`: returns the post as it was before deletion
    pub async fn delete_post(&self, id: Option<&str>) -> Result<Option<PostNode>> {
        tracing::debug!(id = ?id, "resolving Mutation.deletePost");
        Ok(normalize(delete(self.posts.as_ref(), id).await?))
    }

    /// `Mutation.deleteComment`: returns the comment as it was before deletion
    pub async fn delete_comment(&self, id: Option<&str>) -> Result<Option<CommentNode>> {
        tracing::debug!(id = ?id, "resolving Mutation.deleteComment");
        Ok(normalize(delete(self.comments.as_ref(), id).await?))
    }

    /// `Mutation.updatePost`: overwrite then read back
    ///
    /// An unknown id updates nothing and reads back `None`.
    pub async fn update_post(
        &self,
        id: Option<&str>,
        fields: PostFields,
    ) -> Result<Option<PostNode>> {
        let Some(id) = EntityId::parse_opt(id)? else {
            return Ok(None);
        };

        self.posts.update_by_id(&id, fields).await?;
        tracing::debug!(%id, "updated post");
        Ok(normalize(self.posts.find_by_id(&id).await?))
    }
}

/// Look up a record by a client-supplied id. A missing id finds nothing.
async fn find<T: Entity>(repo: &dyn Repository<T>, id: Option<&str>) -> Result<Option<T>> {
    match EntityId::parse_opt(id)? {
        Some(id) => repo.find_by_id(&id).await,
        None => Ok(None),
    }
}

/// Read a record, then delete it. Returns the record as read.
async fn delete<T: Entity>(repo: &dyn Repository<T>, id: Option<&str>) -> Result<Option<T>> {
    let Some(id) = EntityId::parse_opt(id)? else {
        return Ok(None);
    };

    let snapshot = repo.find_by_id(&id).await?;
    repo.delete_by_id(&id).await?;
    tracing::debug!(%id, collection = T::resource_name(), found = snapshot.is_some(), "deleted");

    Ok(snapshot)
}
