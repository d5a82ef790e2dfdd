pub mod blanket_advisor;
pub mod compliance_analyzer;
pub mod maintenance_scheduler;

pub use blanket_advisor::IBlanketAdvisor;
pub use compliance_analyzer::IComplianceAnalyzer;
pub use maintenance_scheduler::IMaintenanceScheduler;
