pub mod button;
pub mod field_input;
pub mod form_report;
pub mod toggle;

pub use button::{Button, ButtonKind};
pub use field_input::FieldInput;
pub use form_report::FormReportView;
pub use toggle::Toggle;
