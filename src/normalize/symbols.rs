//! Rewrites the Unicode logical notation used by the benchmark into the
//! ASCII token set the prover accepts.

/// Replaces every known Unicode connective/punctuation character with its
/// ASCII counterpart. Pure character substitution; no other character
/// classes are touched, so the function is a fixed point on its own output.
pub(crate) fn replace_symbols(text: &str) -> String {
    // "—>" is an em-dash ligature some records use for implication; it has
    // to go before the per-char pass since it spans two chars.
    let text = text.replace("—>", "=>");

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '∨' => out.push('|'),
            '∧' => out.push('&'),
            '¬' => out.push('-'),
            '→' => out.push_str("=>"),
            '⊕' => out.push_str("<~>"),
            '⇔' | '↔' => out.push_str("<=>"),
            // Known limitation: inequality is conflated with negation.
            '≠' => out.push('-'),
            // '.' would collide with the clause terminator, quotes with the
            // prover's string delimiter.
            '.' | '\'' | '’' => out.push('_'),
            other => out.push(fold_accent(other)),
        }
    }
    out
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        _ => c,
    }
}
