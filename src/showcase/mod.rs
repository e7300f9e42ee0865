pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod session;
