//! One router per resource, nested under `/api/<Resource>`.
//!
//! Handlers only translate between HTTP and the service layer.

pub mod department;
pub mod employee;
pub mod equipment;
pub mod evaluation;
pub mod maintenance;
pub mod section;
pub mod transfer;
pub mod transfer_request;
