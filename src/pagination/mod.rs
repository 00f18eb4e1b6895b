//! Pagination module
//!
//! Page-number pagination for collection responses: the calculator turns
//! `(page, page_size, total)` into a record window and the link builder
//! turns that window into the rendered pagination block.
//!
//! # Overview
//!
//! Both steps are total. Requests for a page before the first or past the
//! last are clamped instead of rejected, because the block is a navigation
//! aid rather than a contract.

mod calculator;
mod links;
mod types;

pub use calculator::{calculate, is_last_page};
pub use links::LinkBuilder;
pub use types::{
    effective_page_size, PageRequest, PageWindow, PaginationEntry, PaginationMetadata,
    DEFAULT_PAGE_PARAM, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_PARAM,
};
