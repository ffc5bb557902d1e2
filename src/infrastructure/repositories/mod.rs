pub mod post_repository;

pub use post_repository::BlogPostRepository;
