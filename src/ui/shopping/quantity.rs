use std::num::NonZeroU32;

/// Quantity used when the entered text is not a positive integer.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Initial contents of the quantity field.
pub const DEFAULT_QUANTITY_TEXT: &str = "1";

/// Resolve quantity text to a positive count, falling back to
/// [`DEFAULT_QUANTITY`].
///
/// Never fails: empty, non-numeric, negative, zero and overflowing input all
/// resolve to the default.
pub fn parse_quantity(text: &str) -> u32 {
    text.trim()
        .parse::<NonZeroU32>()
        .map(NonZeroU32::get)
        .unwrap_or(DEFAULT_QUANTITY)
}
