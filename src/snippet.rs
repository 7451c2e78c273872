//! Snippet and signature rendering for function arguments

use crate::models::Argument;

/// Render an argument list as snippet placeholders
///
/// Each argument becomes `${i:type name}` (with ` = default` appended when a
/// default exists), numbered from 1 and joined by `", "`. An argument with no
/// type drops the `type ` prefix. Absent or empty lists render as `()`.
pub fn format_arguments(arguments: Option<&[Argument]>) -> String {
    let arguments = match arguments {
        Some(arguments) if !arguments.is_empty() => arguments,
        _ => return "()".to_string(),
    };

    let placeholders: Vec<String> = arguments
        .iter()
        .enumerate()
        .map(|(i, argument)| placeholder(i + 1, argument))
        .collect();

    format!("({})", placeholders.join(", "))
}

fn placeholder(index: usize, argument: &Argument) -> String {
    let label = if argument.ty.is_empty() {
        argument.name.clone()
    } else {
        format!("{} {}", argument.ty, argument.name)
    };
    match &argument.default {
        Some(default) => format!("${{{}:{} = {}}}", index, label, default),
        None => format!("${{{}:{}}}", index, label),
    }
}

/// Render a human-readable signature: `prefix(name1, name2)`
pub fn format_signature(prefix: &str, arguments: Option<&[Argument]>) -> String {
    let names: Vec<&str> = arguments
        .unwrap_or_default()
        .iter()
        .map(|argument| argument.name.as_str())
        .collect();

    format!("{}({})", prefix, names.join(", "))
}
