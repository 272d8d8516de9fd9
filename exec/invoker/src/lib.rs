//! Argument construction and process execution for the external storage CLI.

pub mod error;
pub mod invocation;
pub mod invoker;
pub mod result;
pub mod verb;

pub use error::ProcessError;
pub use invocation::ArgvBuilder;
pub use invocation::Invocation;
pub use invoker::ProcessInvoker;
pub use result::InvocationResult;
pub use verb::Verb;
