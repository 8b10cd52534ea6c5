use crate::{
    error::{Error, Result},
    front_end::{parse, EdgeList},
};
use log::debug;
use memmap::Mmap;
use std::{fs::File, path::Path};

/// Reads and parses the edge list file at `path`.
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    let file = File::open(path.as_ref())?;
    let len = file.metadata()?.len();
    debug!("reading {} ({} bytes)", path.as_ref().display(), len);
    if len == 0 {
        // Empty files cannot be mapped.
        return parse("");
    }
    let mmap = unsafe { Mmap::map(&file)? };
    parse(std::str::from_utf8(&mmap).map_err(Error::Encoding)?)
}
