mod icons;
mod references;

pub use icons::{icon_candidates, IconResolver};
pub use references::{count_identifier_text, is_unused};
