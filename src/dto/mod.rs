//! Shapes exchanged with API clients. Entities never cross the service
//! boundary; every service maps to and from these types.

mod department;
mod employee;
mod equipment;
mod evaluation;
mod maintenance;
mod section;
mod transfer;
mod transfer_request;

pub use department::DepartmentDto;
pub use employee::{EmployeeDto, RoleProfile};
pub use equipment::EquipmentDto;
pub use evaluation::EvaluationDto;
pub use maintenance::DoneMaintenanceDto;
pub use section::SectionDto;
pub use transfer::TransferDto;
pub use transfer_request::TransferRequestDto;
