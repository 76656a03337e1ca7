//! Domain types for the backup configuration.
//!
//! Pure values with no I/O: constructing, mutating and validating a section
//! never touches the filesystem, so everything here can be tested in
//! isolation.  Persistence lives in [`crate::storage`].

/// Holding disk section: defaults, setters and the chunk-size rule.
///
/// See [`holdingdisk::HoldingDiskConfig`] for the main type.
pub mod holdingdisk;
