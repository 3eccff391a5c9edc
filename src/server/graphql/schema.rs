//! GraphQL schema definition
//!
//! ```graphql
//! type Post    { id: String!  title: String  content: String  img: String  comments: [Comment!] }
//! type Comment { id: String!  postId: String  content: String  post: Post }
//!
//! type Query {
//!   post(id: String): Post
//!   posts: [Post!]
//!   comment(id: String): Comment
//!   comments: [Comment!]
//! }
//!
//! type Mutation {
//!   createPost(title: String, content: String, img: String): Post
//!   createComment(postId: String, content: String): Comment
//!   deletePost(id: String): Post
//!   deleteComment(id: String): Comment
//!   updatePost(id: String, title: String, content: String, img: String): Post
//! }
//! ```
//!
//! Field resolvers delegate to [`Resolvers`]; failures are reported per field
//! with an `extensions.code` taken from [`BlogError::error_code`]. Every field
//! that can fail is nullable, so a failure nulls that field only and its
//! siblings still resolve.

use super::resolvers::Resolvers;
use crate::core::{BlogError, Comment, CommentFields, Normalize, Post, PostFields};
use async_graphql::{
    ComplexObject, Context, EmptySubscription, ErrorExtensions, Object, Result, Schema,
    SimpleObject,
};

/// Executable schema type served at `/graphql`
pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around a resolver set.
pub fn build_schema(resolvers: Resolvers) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(resolvers)
        .finish()
}

fn field_error(err: BlogError) -> async_graphql::Error {
    tracing::debug!(error = %err, code = err.error_code(), "field resolution failed");
    err.extend()
}

/// A post as returned to clients
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(complex, name = "Post")]
pub struct PostNode {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub img: Option<String>,
}

#[ComplexObject]
impl PostNode {
    /// Comments referencing this post
    async fn comments(&self, ctx: &Context<'_>) -> Result<Option<Vec<CommentNode>>> {
        ctx.data::<Resolvers>()?
            .post_comments(&self.id)
            .await
            .map(Some)
            .map_err(field_error)
    }
}

impl Normalize for Post {
    type Output = PostNode;

    fn normalize(self) -> PostNode {
        PostNode {
            id: self.id.to_string(),
            title: self.title,
            content: self.content,
            img: self.img,
        }
    }
}

/// A comment as returned to clients
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(complex, name = "Comment")]
pub struct CommentNode {
    pub id: String,
    pub post_id: Option<String>,
    pub content: Option<String>,
}

#[ComplexObject]
impl CommentNode {
    /// The post this comment references, if it exists
    async fn post(&self, ctx: &Context<'_>) -> Result<Option<PostNode>> {
        ctx.data::<Resolvers>()?
            .comment_post(self.post_id.as_deref())
            .await
            .map_err(field_error)
    }
}

impl Normalize for Comment {
    type Output = CommentNode;

    fn normalize(self) -> CommentNode {
        CommentNode {
            id: self.id.to_string(),
            post_id: self.post_id,
            content: self.content,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn post(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<PostNode>> {
        ctx.data::<Resolvers>()?
            .post(id.as_deref())
            .await
            .map_err(field_error)
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Option<Vec<PostNode>>> {
        ctx.data::<Resolvers>()?
            .posts()
            .await
            .map(Some)
            .map_err(field_error)
    }

    async fn comment(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<CommentNode>> {
        ctx.data::<Resolvers>()?
            .comment(id.as_deref())
            .await
            .map_err(field_error)
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Option<Vec<CommentNode>>> {
        ctx.data::<Resolvers>()?
            .comments()
            .await
            .map(Some)
            .map_err(field_error)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: Option<String>,
        content: Option<String>,
        img: Option<String>,
    ) -> Result<Option<PostNode>> {
        let fields = PostFields {
            title,
            content,
            img,
        };
        ctx.data::<Resolvers>()?
            .create_post(fields)
            .await
            .map_err(field_error)
    }

    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        post_id: Option<String>,
        content: Option<String>,
    ) -> Result<Option<CommentNode>> {
        let fields = CommentFields { post_id, content };
        ctx.data::<Resolvers>()?
            .create_comment(fields)
            .await
            .map_err(field_error)
    }

    /// Delete a post and return it as it was. Its comments are kept.
    async fn delete_post(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<PostNode>> {
        ctx.data::<Resolvers>()?
            .delete_post(id.as_deref())
            .await
            .map_err(field_error)
    }

    async fn delete_comment(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
    ) -> Result<Option<CommentNode>> {
        ctx.data::<Resolvers>()?
            .delete_comment(id.as_deref())
            .await
            .map_err(field_error)
    }

    /// Overwrite title, content and img. Omitted arguments clear the field.
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
        title: Option<String>,
        content: Option<String>,
        img: Option<String>,
    ) -> Result<Option<PostNode>> {
        let fields = PostFields {
            title,
            content,
            img,
        };
        ctx.data::<Resolvers>()?
            .update_post(id.as_deref(), fields)
            .await
            .map_err(field_error)
    }
}
