//! Translation of short data-type codes to DBML display names.

/// The code substituted when a column declares no `dtype`.
pub const DEFAULT_CODE: &str = "T";

/// Translates a short type code into its display name.
///
/// Empty or absent codes fall back to `T` (Text) before lookup. A
/// non-empty code with no entry in the table passes through unchanged,
/// so diagram tools see whatever the model author wrote.
pub fn translate(code: Option<&str>) -> String {
    let code = match code {
        Some(c) if !c.is_empty() => c,
        _ => DEFAULT_CODE,
    };

    match code {
        "T" => "Text",
        "N" => "Numeric",
        "I" => "Integer",
        "L" => "Long",
        "B" => "Bool",
        "D" => "Date",
        "H" => "Time",
        "DH" => "DateTime",
        "P" => "Image",
        "X" => "Bag",
        other => other,
    }
    .to_string()
}
