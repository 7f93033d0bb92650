pub mod classify;
pub mod descriptor;
pub mod kind;
pub mod resource;
