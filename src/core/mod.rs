//! Core grid model: geographic regions, the grid header with its derived
//! dimensions and registration handling, and the window/padding index
//! arithmetic shared by the read and write paths.
pub mod header;
pub mod region;
pub mod window;
