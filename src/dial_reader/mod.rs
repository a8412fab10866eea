pub mod extract;
pub mod gate;
pub mod isolate;
