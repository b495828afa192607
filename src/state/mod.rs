/// State management module
///
/// This module handles all application state, including:
/// - The post data model and author grouping (posts.rs)
/// - The gallery slot map and picker selection state (gallery.rs)

pub mod gallery;
pub mod posts;
