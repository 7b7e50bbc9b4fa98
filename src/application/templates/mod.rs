mod banners;
mod demo_component;

pub use banners::{error_banner, quota_banner};
pub use demo_component::{DEMO_SEPARATOR, demo_component};

pub(crate) use banners::escape_html;
