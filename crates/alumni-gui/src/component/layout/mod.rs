//! Layout components for page structure.
//!
//! - **TabBar**: main navigation
//! - **PageHeader**: tab title with actions
//! - **SectionCard** / **list_card** / **card_grid**: content containers

mod page_header;
mod section_card;
mod tab_bar;

pub use page_header::PageHeader;
pub use section_card::{SectionCard, card_grid, list_card, panel};
pub use tab_bar::{TabItem, tab_bar};
