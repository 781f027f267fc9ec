use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::model::structure::Structure;

pub mod reader;
pub mod writer;

pub use reader::read;
pub use writer::write;

use super::error::Error;

/// File extension handled by this module (matched case-insensitively
/// by the batch scanner).
pub const EXTENSION: &str = "xyz";

pub fn read_file(path: &Path) -> Result<Structure, Error> {
    let file = File::open(path)?;
    read(BufReader::new(file))
}

pub fn write_file(path: &Path, structure: &Structure) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, structure)?;
    writer.flush()?;
    Ok(())
}
