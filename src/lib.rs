#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # DownTrack
//!
//! Services behind the DownTrack equipment tracker: sections and their
//! departments, the equipment they hold, maintenance performed on it,
//! technician evaluations, and equipment transfers between departments.
//!
//! Every service operation opens a [`UnitOfWork`], reads and writes through
//! [`Repository`] views bound to its transaction, and completes it once the
//! whole operation has succeeded:
//!
//! ```ignore
//! use downtrack::{dto::DepartmentDto, service::DepartmentService};
//!
//! let line_1 = DepartmentService::create(
//!     &db,
//!     DepartmentDto { id: 0, name: "Line-1".to_owned(), section_id: 1 },
//! )
//! .await?;
//! ```
//!
//! Listings are paginated with [`PagedRequest`] and answered with a
//! [`PagedResult`] that links to the neighbouring pages.

pub mod dto;
pub mod error;
pub mod filter;
pub mod paging;
pub mod repository;
pub mod service;
pub mod unit_of_work;

pub use downtrack_entity as entity;
pub use error::{Result, ServiceError};
pub use paging::{PagedRequest, PagedResult, MAX_PAGE_SIZE};
pub use repository::Repository;
pub use sea_orm;
pub use unit_of_work::UnitOfWork;
