//! The prover's identifier grammar forbids symbols starting with a digit;
//! this pass rewrites such tokens into legal identifiers.

/// Rewrites every maximal word token that begins with decimal digits:
/// an `n` marker is prepended and, when letters follow the digits, a `_`
/// separator is inserted before them (`2008SummerOlympics` becomes
/// `n2008_SummerOlympics`, `2008` becomes `n2008`). Purely lexical; the
/// benchmark domain has no arithmetic literals this could clash with.
pub(crate) fn sanitize_identifiers(clause: &str) -> String {
    let mut out = String::with_capacity(clause.len());
    let mut word = String::new();
    for c in clause.chars() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush_token(&mut out, &mut word);
            out.push(c);
        }
    }
    flush_token(&mut out, &mut word);
    out
}

fn flush_token(out: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        let digits_end = word
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(word.len());
        out.push('n');
        out.push_str(&word[..digits_end]);
        if digits_end < word.len() {
            out.push('_');
            out.push_str(&word[digits_end..]);
        }
    } else {
        out.push_str(word);
    }
    word.clear();
}
