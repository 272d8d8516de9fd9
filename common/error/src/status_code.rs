//! Unified status codes for error classification.
//!
//! Status code format: XX_YYY (5-digit)
//! - XX = Category (00-99)
//! - YYY = Code within category (000-999)
//!
//! Category layout:
//! - General/Core (01-05): Common, Input, Auth
//! - Business (10-14): Config, Process, Session

use strum::AsRefStr;
use strum::EnumIter;

/// Status code metadata.
#[derive(Debug, Clone, Copy)]
pub struct StatusMeta {
    pub log_error: bool,
    pub category: StatusCategory,
}

/// Status code category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    // ====== General/Core (00-05) ======
    /// Success (00_xxx)
    Success,
    /// Common/internal errors (01_xxx)
    Common,
    /// Parameter/validation errors (02_xxx)
    Input,
    /// Authentication/authorization errors (05_xxx)
    Auth,

    // ====== Business (10-14) ======
    /// Configuration errors (10_xxx)
    Config,
    /// External process errors (13_xxx)
    Process,
    /// Interactive session errors (14_xxx)
    Session,
}

macro_rules! define_status_codes {
    ($(
        $(#[$attr:meta])*
        $name:ident = $value:expr => {
            log_error: $log:expr,
            category: $cat:ident $(,)?
        }
    ),* $(,)?) => {
        /// Status codes for error classification.
        ///
        /// Format: XX_YYY (5-digit)
        /// - XX = Category (00-99)
        /// - YYY = Code within category (000-999)
        ///
        /// Ranges:
        /// - 00_000: Success
        /// - 01_xxx: Common/Generic errors
        /// - 02_xxx: Input/Validation errors
        /// - 05_xxx: Auth errors
        /// - 10_xxx: Config errors
        /// - 13_xxx: External process errors
        /// - 14_xxx: Session errors
        #[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
        #[repr(i32)]
        pub enum StatusCode {
            $($(#[$attr])* $name = $value,)*
        }

        impl StatusCode {
            /// Returns the metadata for this status code.
            pub const fn meta(&self) -> StatusMeta {
                match self {
                    $(Self::$name => StatusMeta {
                        log_error: $log,
                        category: StatusCategory::$cat,
                    },)*
                }
            }

            /// Returns the string name of this status code.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }
        }

        // Compile-time check for duplicate status code values
        const _: () = {
            const CODES: &[i32] = &[$($value),*];
            const fn check_unique() {
                let mut i = 0;
                while i < CODES.len() {
                    let mut j = i + 1;
                    while j < CODES.len() {
                        if CODES[i] == CODES[j] {
                            panic!("Duplicate status code value detected");
                        }
                        j += 1;
                    }
                    i += 1;
                }
            }
            check_unique();
        };
    };
}

define_status_codes! {
    // ====== Success (00_xxx) ======
    /// Operation succeeded.
    Success = 00_000 => { log_error: false, category: Success },

    // ====== Common errors (01_xxx) ======
    /// Unknown error.
    Unknown = 01_000 => { log_error: true, category: Common },
    /// Internal error, unexpected BUG.
    Internal = 01_001 => { log_error: true, category: Common },
    /// Task was cancelled.
    Cancelled = 01_003 => { log_error: false, category: Common },

    // ====== Input/Validation errors (02_xxx) ======
    /// Command verb is not on the whitelist.
    UnknownCommand = 02_004 => { log_error: false, category: Input },

    // ====== Auth errors (05_xxx) ======
    /// Authentication failed (invalid credentials).
    AuthenticationFailed = 05_000 => { log_error: false, category: Auth },

    // ====== Config errors (10_xxx) ======
    /// Invalid configuration.
    InvalidConfig = 10_000 => { log_error: false, category: Config },
    /// Config file error.
    ConfigFileError = 10_001 => { log_error: false, category: Config },

    // ====== External process errors (13_xxx) ======
    /// External binary does not resolve to an executable.
    BinaryNotFound = 13_000 => { log_error: true, category: Process },
    /// Launching or talking to the child process failed.
    ExecutionFailed = 13_001 => { log_error: true, category: Process },
    /// The child process outlived its deadline.
    Timeout = 13_002 => { log_error: false, category: Process },

    // ====== Session errors (14_xxx) ======
    /// A command is already in flight for this session.
    SessionBusy = 14_000 => { log_error: false, category: Session },
}

impl StatusCode {
    /// Returns true if the error should be logged.
    pub const fn should_log_error(&self) -> bool {
        self.meta().log_error
    }

    /// Returns the category of this status code.
    pub const fn category(&self) -> StatusCategory {
        self.meta().category
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
#[path = "status_code.test.rs"]
mod tests;
