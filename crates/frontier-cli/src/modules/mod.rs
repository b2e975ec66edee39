pub(crate) mod auth;
pub(crate) mod groups;
pub(crate) mod organizations;
pub(crate) mod projects;
pub(crate) mod serviceusers;
pub(crate) mod shared;
pub(crate) mod system;
pub(crate) mod users;
