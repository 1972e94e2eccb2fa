pub mod consts;
pub mod error;
pub mod geometry;
pub mod source;
pub mod mask;
pub mod stroke;
pub mod history;
pub mod compose;
pub mod remote;
pub mod session;
