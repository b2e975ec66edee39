mod display;
mod resolve;

pub(crate) use display::{metadata_changes, metadata_text, or_na, print_banner, value_text};
pub(crate) use resolve::{resolve_user_id, CREATED_USER};
