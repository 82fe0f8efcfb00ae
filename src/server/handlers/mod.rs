pub mod orderings;
pub mod sessions;
