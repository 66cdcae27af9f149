pub mod doctor;
pub mod index;
pub mod list;
pub mod node;
pub mod output;
pub mod search;
pub mod session;
pub mod stats;
pub mod subtree;
pub mod tree;

use std::path::Path;

/// Options shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOpts<'a> {
    pub config: Option<&'a Path>,
    pub profile: Option<&'a str>,
    pub root: Option<&'a Path>,
}
