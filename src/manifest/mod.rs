pub(crate) mod load;
pub(crate) mod model;
pub(crate) mod naming;
