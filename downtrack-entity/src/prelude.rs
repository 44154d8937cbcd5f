pub use super::department::Entity as Department;
pub use super::done_maintenance::Entity as DoneMaintenance;
pub use super::employee::Entity as Employee;
pub use super::equipment::Entity as Equipment;
pub use super::evaluation::Entity as Evaluation;
pub use super::section::Entity as Section;
pub use super::transfer::Entity as Transfer;
pub use super::transfer_request::Entity as TransferRequest;
