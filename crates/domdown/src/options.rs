//! Configuration options for conversion

/// Options for [`Converter`](crate::Converter)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Abort on the first unrecognized tag or missing required attribute
    /// instead of recording it and carrying on.
    pub throw_on_error: bool,
}
