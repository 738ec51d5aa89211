pub(crate) mod decode;
pub(crate) mod field;
pub(crate) mod index;
