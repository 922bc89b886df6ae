//! Tool registry and invocation gateway
//!
//! A tool is a named capability with a declared argument schema. The
//! [`ToolGateway`] is the single entry point through which both stage agents
//! (in-process) and the remote protocol endpoint invoke tools: it validates
//! arguments, executes the tool, and always hands back a string-serialized
//! payload: a serialized result on success, a serialized error object
//! otherwise. Nothing ever raises past this boundary.

pub mod gateway;
pub mod registry;
pub mod tool;

pub use gateway::{ToolGateway, ToolSpec};
pub use registry::ToolRegistry;
pub use tool::Tool;
