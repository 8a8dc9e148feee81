pub(crate) mod legacy;
pub(crate) mod model;
