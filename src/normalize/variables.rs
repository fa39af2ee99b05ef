//! Uppercases variable names so the prover can tell variables from
//! constants by case alone.

use std::collections::BTreeSet;

/// Replaces every whole-word occurrence of each name in `vars` with its
/// uppercase form. Matching is on maximal word-character runs, so a name
/// that is merely a substring of a longer identifier is never touched
/// (folding `x` must not corrupt `max`).
pub(crate) fn fold_variables(clause: &str, vars: &BTreeSet<String>) -> String {
    if vars.is_empty() {
        return clause.to_owned();
    }
    let mut out = String::with_capacity(clause.len());
    let mut word = String::new();
    for c in clause.chars() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush_word(&mut out, &mut word, vars);
            out.push(c);
        }
    }
    flush_word(&mut out, &mut word, vars);
    out
}

fn flush_word(out: &mut String, word: &mut String, vars: &BTreeSet<String>) {
    if word.is_empty() {
        return;
    }
    if vars.contains(word.as_str()) {
        out.push_str(&word.to_uppercase());
    } else {
        out.push_str(word);
    }
    word.clear();
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::fold_variables;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn whole_words_are_uppercased() {
        assert_eq!(
            fold_variables("! [x] : (P(x) => Q(x))", &set(&["x"])),
            "! [X] : (P(X) => Q(X))"
        );
    }

    #[test]
    fn substrings_of_longer_identifiers_survive() {
        assert_eq!(
            fold_variables("max(x, y)", &set(&["x"])),
            "max(X, y)"
        );
        assert_eq!(
            fold_variables("exam(examiner)", &set(&["exam"])),
            "EXAM(examiner)"
        );
    }

    #[test]
    fn several_variables_fold_together() {
        assert_eq!(
            fold_variables("R(x, y, constant)", &set(&["x", "y"])),
            "R(X, Y, constant)"
        );
    }

    #[test]
    fn empty_set_is_identity() {
        let s = "P(a) & Q(b)";
        assert_eq!(fold_variables(s, &BTreeSet::new()), s);
    }

    #[test]
    fn unbound_occurrence_is_still_folded() {
        // A name bound elsewhere must fold even where it appears free.
        assert_eq!(fold_variables("P(x)", &set(&["x"])), "P(X)");
    }
}
