//! Stored entities and the fields clients may set on them

use crate::core::id::EntityId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A document type stored in its own collection.
///
/// `Fields` is the set of client-writable fields. It is what `insert` stores
/// and what `update_by_id` overwrites; the identifier is never part of it.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Fields: Clone + Send + Sync + Serialize + 'static;

    /// Collection name (e.g. "posts")
    fn resource_name() -> &'static str;

    fn id(&self) -> EntityId;

    /// Build a stored record from freshly inserted fields.
    fn from_fields(id: EntityId, fields: Self::Fields) -> Self;

    /// Replace every writable field with the given values. Absent values
    /// clear the field.
    fn overwrite(&mut self, fields: Self::Fields);

    /// Value of a string field by its stored name, used by foreign-key lookups.
    fn field_value(&self, field: &str) -> Option<&str>;
}

/// A blog post
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub img: Option<String>,
}

/// Arguments of `createPost` and `updatePost`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostFields {
    pub title: Option<String>,
    pub content: Option<String>,
    pub img: Option<String>,
}

impl Entity for Post {
    type Fields = PostFields;

    fn resource_name() -> &'static str {
        "posts"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_fields(id: EntityId, fields: PostFields) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
            img: fields.img,
        }
    }

    fn overwrite(&mut self, fields: PostFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.img = fields.img;
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "title" => self.title.as_deref(),
            "content" => self.content.as_deref(),
            "img" => self.img.as_deref(),
            _ => None,
        }
    }
}

/// A comment on a post
///
/// `post_id` holds the hex form of the post's id and is not checked against
/// the posts collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub post_id: Option<String>,
    pub content: Option<String>,
}

/// Arguments of `createComment`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentFields {
    pub post_id: Option<String>,
    pub content: Option<String>,
}

impl Entity for Comment {
    type Fields = CommentFields;

    fn resource_name() -> &'static str {
        "comments"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_fields(id: EntityId, fields: CommentFields) -> Self {
        Self {
            id,
            post_id: fields.post_id,
            content: fields.content,
        }
    }

    fn overwrite(&mut self, fields: CommentFields) {
        self.post_id = fields.post_id;
        self.content = fields.content;
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "postId" => self.post_id.as_deref(),
            "content" => self.content.as_deref(),
            _ => None,
        }
    }
}
