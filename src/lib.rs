//! Minshall-French symlink ("MF-symlink") parsing.
//!
//! SMB/CIFS clients store symbolic links on symlink-less filesystems as
//! ordinary 1067-byte files carrying an `XSym` marker, the target path and
//! an MD5 checksum. This crate decodes and validates those files; it never
//! creates them and never touches the filesystem itself.
//!
//! See: <https://wiki.samba.org/index.php/UNIX_Extensions#Minshall.2BFrench_symlinks>

pub mod format;

pub use format::{is_possible_symlink, parse, MfSymlinkError, MARKER, SIZE};
