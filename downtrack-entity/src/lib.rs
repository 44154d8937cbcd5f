pub mod prelude;

pub mod department;
pub mod done_maintenance;
pub mod employee;
pub mod equipment;
pub mod evaluation;
pub mod sea_orm_active_enums;
pub mod section;
pub mod transfer;
pub mod transfer_request;

pub use sea_orm;
