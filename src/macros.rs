//! Variadic front ends for the process-wide logger.
//!
//! Each macro takes any number of `Display` values and forwards them, in
//! order, to the matching function in [`crate::global`]:
//!
//! ```no_run
//! let items = 3;
//! conlog::info!("Processing", items, "items");
//! conlog::timed_warning!("Disk space low");
//! ```

/// Builds the `&[&dyn Display]` slice the emitters take.
#[doc(hidden)]
#[macro_export]
macro_rules! __display_args {
    ($($arg:expr),* $(,)?) => {
        &[$(&$arg as &dyn ::core::fmt::Display),*]
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::global::debug($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::global::info($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! okay {
    ($($arg:tt)*) => { $crate::global::okay($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => { $crate::global::warning($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::global::error($crate::__display_args!($($arg)*)) };
}

/// Exits the process after writing; destructors do not run.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => { $crate::global::fatal($crate::__display_args!($($arg)*)) };
}

/// Unwinds after writing, with the values joined by spaces as a `String` payload.
#[macro_export]
macro_rules! panic {
    ($($arg:tt)*) => { $crate::global::panic($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! timed_debug {
    ($($arg:tt)*) => { $crate::global::timed_debug($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! timed_info {
    ($($arg:tt)*) => { $crate::global::timed_info($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! timed_okay {
    ($($arg:tt)*) => { $crate::global::timed_okay($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! timed_warning {
    ($($arg:tt)*) => { $crate::global::timed_warning($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! timed_error {
    ($($arg:tt)*) => { $crate::global::timed_error($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! timed_fatal {
    ($($arg:tt)*) => { $crate::global::timed_fatal($crate::__display_args!($($arg)*)) };
}

#[macro_export]
macro_rules! timed_panic {
    ($($arg:tt)*) => { $crate::global::timed_panic($crate::__display_args!($($arg)*)) };
}
