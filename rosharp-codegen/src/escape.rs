//! String escaping for generated C# literals.

/// Escapes `s` for use inside a double-quoted C# string literal.
///
/// Escapes backslashes first, then double quotes, so a pre-escaped quote in
/// the source text stays escaped instead of collapsing.
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escapes `s` for use inside a double-quoted C# wide-string literal.
///
/// Wide strings use the same escape grammar as narrow ones; only the `u`
/// prefix on the literal differs, and that is added by the caller.
pub fn escape_wstring(s: &str) -> String {
    escape_string(s)
}
