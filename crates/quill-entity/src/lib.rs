//! # quill-entity
//!
//! Domain entity models for Quill: registered users and posts.

pub mod post;
pub mod user;

pub use post::Post;
pub use user::User;
