//! Core conversion library for `skl2dx-rs`: reads a skeleton crystal
//! structure and emits OpenDX field/object documents for the lattice box
//! and the atom positions.

pub mod domain;
pub mod dx;
pub mod elements;
pub mod select;
pub mod serialization;
pub mod skeleton;
