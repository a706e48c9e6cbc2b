pub mod cms;
pub mod content;

pub use cms::ReqwestCms;
pub use content::{RichContent, parse_rich_content, plain_text, sanitize_html};
