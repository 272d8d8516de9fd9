//! Text cleanup for filenames typed by the user and for raw `storage_cli`
//! output.
//!
//! Both transforms are built from small, independently testable
//! [`RepairRule`]s assembled into a [`Pipeline`]. New upstream quirks are
//! handled by adding a rule to the relevant pipeline.
//!
//! ```
//! use vdisk_sanitize::sanitize_filename;
//! use vdisk_sanitize::sanitize_output;
//!
//! assert_eq!(sanitize_filename(" report 2 . txt "), "report2.txt");
//! assert_eq!(sanitize_output("\x1b[32mok\x1b[0m\nDEBUG: argc = 3"), "ok");
//! ```

pub mod filename;
pub mod output;
pub mod rules;

pub use filename::filename_pipeline;
pub use filename::sanitize_filename;
pub use output::output_pipeline;
pub use output::sanitize_output;
pub use rules::Pipeline;
pub use rules::RepairRule;
