//! Counter color palette.

/// Colors offered for new counters, in suggestion order.
pub const COUNTER_COLORS: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

/// Color given to imported counters that carry none.
pub const DEFAULT_COLOR: &str = COUNTER_COLORS[0];

/// First palette color not already in `used`; the first palette color once
/// every color is taken.
#[must_use]
pub fn suggest_color<S: AsRef<str>>(used: &[S]) -> &'static str {
    COUNTER_COLORS
        .iter()
        .copied()
        .find(|color| !used.iter().any(|u| u.as_ref().eq_ignore_ascii_case(color)))
        .unwrap_or(DEFAULT_COLOR)
}
