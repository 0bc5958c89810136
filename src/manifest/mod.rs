pub mod modfile;

pub use modfile::{parse, ModuleDescriptor, GNO_MOD_FILENAME};
