pub mod forms;
pub mod helpers;
pub mod layout;
pub mod presentation;
