use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::io::Error;

/// Pull-based source of records sharing one header.
///
/// Finite tables and bounded generators both fit; every record handed out
/// conforms to [`Stream::header`].
pub trait Stream {
    fn header(&self) -> &InstanceHeader;

    /// Once this is `false`, [`Stream::next_instance`] returns `None`.
    fn has_more_instances(&self) -> bool;

    fn next_instance(&mut self) -> Option<Box<dyn Instance>>;

    /// Rewinds to the first record. Generators re-seed.
    fn restart(&mut self) -> Result<(), Error>;
}
