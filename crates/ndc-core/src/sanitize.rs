//! Character sanitizer.
//!
//! Every leaf of the notice is restricted to printable ASCII (32..=126).
//! Accented Latin letters fold to their base letter, a few symbols are
//! spelled out or removed, anything else outside the range is dropped.

/// Sanitize one leaf value. Whitespace-only input yields an empty string.
pub fn sanitize(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if let Some(replacement) = substitute(ch) {
            out.push_str(replacement);
        } else if is_printable_ascii(ch) {
            out.push(ch);
        }
    }
    out
}

pub fn is_printable_ascii(ch: char) -> bool {
    matches!(ch, ' '..='~')
}

fn substitute(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => "A",
        'É' | 'È' | 'Ê' | 'Ë' => "E",
        'Í' | 'Ì' | 'Î' | 'Ï' => "I",
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => "O",
        'Ú' | 'Ù' | 'Û' | 'Ü' => "U",
        'Ç' => "C",
        'Ñ' => "N",
        'á' | 'à' | 'â' | 'ã' | 'ä' => "a",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => "o",
        'ú' | 'ù' | 'û' | 'ü' => "u",
        'ç' => "c",
        'ñ' => "n",
        '°' => " graus",
        '&' => "e",
        '@' => "at",
        '\\' => "/",
        'º' | 'ª' | '¹' | '²' | '³' => "",
        '<' | '>' | '"' | '\'' | '\u{201C}' | '\u{201D}' => "",
        '^' | '~' | '´' | '`' | '¨' => "",
        _ => return None,
    };
    Some(replacement)
}
