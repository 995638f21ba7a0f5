mod directory;
mod filter;
mod spec_file;

pub use directory::{DirectoryScanner, ensure_directory};
pub use filter::{FileFilter, SpecFilter};
pub use spec_file::{SPEC_SUFFIX, SpecLabel, SpecNumber, file_name};
