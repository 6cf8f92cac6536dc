pub mod html;

pub use html::{DEFAULT_OUTPUT_FILE, render_page, render_with_template};
