//! Site components

mod cards;
mod footer;
mod nav;
mod scroll_top;

pub use cards::*;
pub use footer::Footer;
pub use nav::SiteHeader;
pub use scroll_top::ScrollToTopButton;
