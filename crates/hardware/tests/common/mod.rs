
/// `TestContext`: a core plus a RAM-backed system.
pub mod harness;
