//! MF-symlink decoding: fixed-grammar parse + MD5 integrity check.
//!
//! # On-disk layout
//!
//! A Minshall-French symlink is an ordinary regular file of exactly
//! [`SIZE`] (1067) bytes holding four newline-delimited segments:
//!
//! ```text
//! XSym\n          marker, 4 bytes
//! 0026\n          target length, decimal ASCII
//! <32 hex>\n      MD5 of the target bytes
//! <target><pad>   target path, padded out to the fixed file size
//! ```
//!
//! Only the first *target length* bytes of the fourth segment are
//! meaningful; the remainder is filler that brings the file to its fixed
//! total size. The MD5 is computed over the unpadded target only. It is a
//! corruption check required by the on-disk format, not a security
//! mechanism.
//!
//! The parser never reads files itself: callers supply the byte buffer
//! (and the file size for [`is_possible_symlink`]) and keep ownership of
//! both. Parsing is deterministic, single-pass and retains no reference
//! to the input.

use md5::{Digest, Md5};
use thiserror::Error;

/// Exact byte length of every well-formed MF-symlink file.
pub const SIZE: u64 = 1067;
/// First-segment literal identifying the format.
pub const MARKER: &[u8; 4] = b"XSym";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MfSymlinkError {
    /// The buffer does not match the envelope grammar at all. The file is
    /// a plain regular file, not a symlink stand-in.
    #[error("not a mfsymlink")]
    NotMfSymlink,
    /// The envelope is well formed but the target fails MD5 verification.
    /// Unlike [`NotMfSymlink`](MfSymlinkError::NotMfSymlink) this indicates
    /// real on-disk corruption and should not be silently ignored.
    #[error("corrupt mfsymlink: md5 checksum mismatch")]
    Md5Mismatch,
}

/// Cheap pre-filter: could a file of `size` bytes be an MF-symlink?
///
/// True iff `size` equals [`SIZE`]. Lets directory walkers skip the content
/// read for everything else, since the format mandates an exact total size.
pub fn is_possible_symlink(size: u64) -> bool {
    size == SIZE
}

/// Decode an MF-symlink buffer and return its link target.
///
/// `content` must hold the complete file. The total-size constant is NOT
/// enforced here, only the four-segment grammar; callers wanting the fast
/// path filter with [`is_possible_symlink`] first.
///
/// Errors are split by meaning: [`MfSymlinkError::NotMfSymlink`] for any
/// grammar violation, [`MfSymlinkError::Md5Mismatch`] for a well-formed
/// envelope whose payload fails verification.
pub fn parse(content: &[u8]) -> Result<String, MfSymlinkError> {
    // At most 4 segments: a target containing '\n' stays in one piece.
    let segments: Vec<&[u8]> = content.splitn(4, |&b| b == b'\n').collect();
    if segments.len() != 4 {
        return Err(MfSymlinkError::NotMfSymlink);
    }
    if segments[0] != MARKER {
        return Err(MfSymlinkError::NotMfSymlink);
    }
    // Strict decimal, no trimming. Negative lengths are grammar errors.
    let declared_len: usize = std::str::from_utf8(segments[1])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(MfSymlinkError::NotMfSymlink)?;
    let expected_md5 = hex::decode(segments[2]).map_err(|_| MfSymlinkError::NotMfSymlink)?;

    let mut target = segments[3];
    if target.len() > declared_len {
        // Drop the filler that pads the file to its fixed total size.
        target = &target[..declared_len];
    }
    // A shorter-than-declared target is accepted as-is. Real producers
    // always pad the file out, so this only comes up for synthetic input.

    let actual_md5 = Md5::digest(target);
    if expected_md5.as_slice() != actual_md5.as_slice() {
        return Err(MfSymlinkError::Md5Mismatch);
    }
    Ok(String::from_utf8_lossy(target).into_owned())
}
