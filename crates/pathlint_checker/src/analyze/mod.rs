pub(crate) mod arguments;
pub mod typing;
