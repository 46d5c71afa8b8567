/// The core trait for evaluation units in steptrace.
///
/// A `Component` takes an input and produces an output, or an error when
/// the input cannot be processed. Implementations must be deterministic:
/// the same input always produces the same result, with no side effects
/// and no state carried between calls. This makes every component safe to
/// invoke from multiple threads at once.
///
/// Types whose constructors already establish all invariants typically use
/// [`std::convert::Infallible`] as their error type.
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the component cannot produce an output for
    /// this input.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
