use std::fs::File;
use std::io;
use std::path::Path;

pub fn open_file(path: &Path) -> io::Result<File> {
    std::fs::File::open(path)
}
