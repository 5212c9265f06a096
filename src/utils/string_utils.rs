/// Utilitários para manipulação segura de strings UTF-8

/// Trunca uma string de forma segura, garantindo que o índice não corte no meio de um caractere UTF-8
///
/// Usado para logar tokens e codes OAuth sem expô-los inteiros.
///
/// # Exemplo
/// ```
/// use linkedin_publisher_bff::utils::string_utils::truncate_safe;
///
/// let text = "Olá, mundo! 🌍";
/// assert_eq!(truncate_safe(text, 10), "Olá, mund");
/// ```
pub fn truncate_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }

    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

/// Mantém os `max_chars` primeiros caracteres e acrescenta `suffix` se cortou algo
///
/// Conta caracteres, não bytes: é o que o front exibe como "200 caracteres".
pub fn truncate_chars_with_suffix(s: &str, max_chars: usize, suffix: &str) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{}", &s[..idx], suffix),
        None => s.to_string(),
    }
}

/// Trata string vazia como ausente
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Escapa texto para inclusão em HTML
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Literal de string JavaScript seguro dentro de `<script>`
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_safe_ascii() {
        let text = "Hello, World!";
        assert_eq!(truncate_safe(text, 5), "Hello");
        assert_eq!(truncate_safe(text, 100), text);
    }

    #[test]
    fn test_truncate_safe_utf8() {
        let text = "Olá, mundo!";
        // "Olá" = 4 bytes (O=1, l=1, á=2)
        assert_eq!(truncate_safe(text, 3), "Ol");
        assert_eq!(truncate_safe(text, 4), "Olá");
    }

    #[test]
    fn test_truncate_chars_with_suffix() {
        assert_eq!(truncate_chars_with_suffix("abcdef", 3, "..."), "abc...");
        assert_eq!(truncate_chars_with_suffix("abc", 3, "..."), "abc");
        assert_eq!(truncate_chars_with_suffix("été été", 3, "..."), "été...");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("x")), Some("x".to_string()));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"a\" & 'b'</b>"), "&lt;b&gt;&quot;a&quot; &amp; &#x27;b&#x27;&lt;/b&gt;");
    }

    #[test]
    fn test_js_string_literal_cannot_close_script() {
        let lit = js_string_literal("x</script><script>alert(1)");
        assert!(!lit.contains("</script>"));
        assert!(lit.starts_with('"') && lit.ends_with('"'));
    }
}
