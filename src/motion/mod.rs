pub(crate) mod stagger;
pub(crate) mod style;
pub(crate) mod variants;
