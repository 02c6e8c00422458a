//! Configuration module

mod site;

pub use site::ItemDefaults;
pub use site::LabelConfig;
pub use site::SiteConfig;
pub use site::ViewerDefaults;
