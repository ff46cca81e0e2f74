pub mod browse;
pub mod carousel;
pub mod catalog;
pub mod favorites;
pub mod filters;
pub mod listing;
pub mod pipeline;
pub mod search;
