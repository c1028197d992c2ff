pub mod header;
pub mod page_content;
pub mod section;

pub use header::{Header, NavPage};
pub use page_content::PageContent;
pub use section::Section;
