/// Failures surfaced by the arithmetic engine.
///
/// Every failure is synchronous and deterministic; there is no retry path
/// inside the engine. The panicking operator forms print these messages
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The literal is not an optional `-` followed by ASCII decimal digits.
    #[error("malformed decimal literal {0:?}")]
    Format(String),

    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A finalized value needs more decimal digits than its width cap.
    #[error("number {value} is too big for {limit} digits")]
    Overflow { value: String, limit: u32 },

    /// Factorial of a negative value.
    #[error("factorial of negative number {0}")]
    InvalidArgument(String),
}
