//! Short labels for objectives and log lines.

use std::fmt::Display;

/// Longest argument rendering kept verbatim in a label
pub const MAX_ARG_CHARS: usize = 15;

/// Placeholder for arguments too long to show
pub const ELLIPSIS: &str = "...";

/// Render an argument for a label.
///
/// Renderings longer than [`MAX_ARG_CHARS`] characters, or spanning more than
/// one line, collapse to `"..."`.
///
/// ```
/// use featvis::labels::make_arg_str;
/// assert_eq!(make_arg_str("mixed4a"), "mixed4a");
/// assert_eq!(make_arg_str("a rather long layer name"), "...");
/// ```
pub fn make_arg_str<T: Display + ?Sized>(arg: &T) -> String {
    let rendered = arg.to_string();
    let too_big = rendered.chars().count() > MAX_ARG_CHARS || rendered.contains('\n');
    if too_big {
        ELLIPSIS.to_string()
    } else {
        rendered
    }
}

/// Objective description: `name` followed by each shortened argument.
pub fn describe(name: &str, args: &[&dyn Display]) -> String {
    let mut description = name.to_string();
    for arg in args {
        description.push(' ');
        description.push_str(&make_arg_str(*arg));
    }
    description
}

/// Shortened rendering of an optional argument, `None` when absent.
pub(crate) fn optional_arg<T: Display>(arg: Option<T>) -> String {
    match arg {
        Some(value) => make_arg_str(&value),
        None => "None".to_string(),
    }
}
