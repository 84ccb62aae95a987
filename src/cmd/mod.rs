/// Hierarchy model JSON dump command.
pub mod dump;
/// Hierarchy record listing command.
pub mod ids;
/// Chunk and section summary command.
pub mod info;
/// Event source resolution command.
pub mod resolve;
/// Argument parsing and output helpers shared by commands.
pub(crate) mod util;
