pub mod completion;
pub mod persona;
