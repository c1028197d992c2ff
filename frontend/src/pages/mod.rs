pub mod canchas;
pub mod dashboard;
pub mod delete_confirmation;
pub mod error_report;
pub mod reservas;

pub use canchas::CanchasPage;
pub use dashboard::Dashboard;
pub use delete_confirmation::DeleteConfirmationPage;
pub use error_report::ErrorReport;
pub use reservas::ReservasPage;
