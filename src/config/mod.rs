//! Configuration module

mod site;

pub use site::CommentsConfig;
pub use site::HighlightConfig;
pub use site::LogoConfig;
pub use site::MenuItem;
pub use site::SiteConfig;
