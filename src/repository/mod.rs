//! Item cache and the paged/search fetches that fill it.

mod cache;

pub use cache::ItemRepository;
