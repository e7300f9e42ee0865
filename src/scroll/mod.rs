pub(crate) mod offset;
pub(crate) mod progress;
pub(crate) mod visibility;
