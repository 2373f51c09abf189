/// Emits a `tracing` event at the debug level when the `tracing` feature is
/// enabled and expands to nothing otherwise.
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($tt)*);
        }
    };
}

pub(crate) use debug;
