//! Error conversion macros
//!
//! Reduces boilerplate for error enums that wrap foreign error types
//! without pulling in `#[from]` on every variant.

/// Implement `From<SourceError>` for one variant of an error enum
///
/// # Example
///
/// ```ignore
/// use ghostline_common::impl_error_from;
///
/// #[derive(Debug)]
/// enum EngineError {
///     Io(std::io::Error),
/// }
///
/// impl_error_from!(std::io::Error => EngineError::Io);
/// ```
#[macro_export]
macro_rules! impl_error_from {
    ($source:ty => $target:ident::$variant:ident) => {
        impl From<$source> for $target {
            fn from(err: $source) -> Self {
                $target::$variant(err)
            }
        }
    };
}

/// Implement several `From` conversions for an error enum at once
///
/// # Example
///
/// ```ignore
/// use ghostline_common::impl_errors_from;
///
/// impl_errors_from!(EngineError {
///     Io(std::io::Error),
///     Serialization(serde_json::Error),
/// });
/// ```
#[macro_export]
macro_rules! impl_errors_from {
    ($target:ident { $($variant:ident($source:ty)),* $(,)? }) => {
        $(
            impl From<$source> for $target {
                fn from(err: $source) -> Self {
                    $target::$variant(err)
                }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug)]
    enum TestError {
        Io(std::io::Error),
        Parse(std::num::ParseIntError),
    }

    impl_errors_from!(TestError {
        Io(std::io::Error),
        Parse(std::num::ParseIntError),
    });

    #[test]
    fn test_single_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TestError = io_err.into();
        assert!(matches!(err, TestError::Io(_)));
    }

    #[test]
    fn test_multiple_conversions() {
        let parse_err = "x".parse::<i32>().unwrap_err();
        let err: TestError = parse_err.into();
        assert!(matches!(err, TestError::Parse(_)));
    }
}
