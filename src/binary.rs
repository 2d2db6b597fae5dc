//! Precompiled kernel containers (`.xclbin`).
//!
//! The contents are opaque to the host. The whole file is handed to the
//! OpenCL runtime as the program binary for a single device.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use log::debug;
use crate::error::{Error, Result};


/// An xclbin read fully into host memory.
#[derive(Debug, Clone)]
pub struct XclBinary {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl XclBinary {
    /// Reads the file at `path`.
    ///
    /// ### Errors
    ///
    /// Failing to open the file and failing to read all of it are reported
    /// separately (`Error::BinaryOpen` and `Error::BinaryRead`). A zero-length
    /// file is an `Error::EmptyBinary`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<XclBinary> {
        let path = path.as_ref().to_path_buf();

        let mut file = File::open(&path)
            .map_err(|source| Error::BinaryOpen { path: path.clone(), source })?;

        let expected = file.metadata()
            .map(|m| m.len() as usize)
            .map_err(|source| Error::BinaryRead { path: path.clone(), source })?;

        let mut bytes = Vec::with_capacity(expected);
        file.read_to_end(&mut bytes)
            .map_err(|source| Error::BinaryRead { path: path.clone(), source })?;

        if bytes.is_empty() {
            return Err(Error::EmptyBinary { path });
        }

        debug!("Loaded kernel binary '{}' ({} bytes).", path.display(), bytes.len());
        Ok(XclBinary { path, bytes })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
