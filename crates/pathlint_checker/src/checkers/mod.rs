pub(crate) mod ast;
pub(crate) mod use_pathlib;
