pub mod coordinator;
pub mod report;
pub mod worker;
