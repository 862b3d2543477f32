//! Configuration sources layered by the loader.

pub(crate) mod conf_file;
