pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod pyramid;
pub mod region;
pub mod section;
pub mod spy;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use content::Portfolio;
pub use error::{Error, Result};
pub use region::Region;
pub use section::{NavItem, SectionId, NAV_ITEMS};
