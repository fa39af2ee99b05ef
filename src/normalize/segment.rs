//! Splits a run of concatenated, unseparated top-level formulas into
//! individual sentences.
//!
//! This is the only context-free step in the pipeline: it tracks
//! parenthesis depth and uses one token of lookahead, it does not build an
//! AST.

/// Scans left to right keeping a paren-depth counter. A closing paren that
/// returns the depth to zero ends a sentence unless the next
/// non-blank character starts a binary connective, in which case the
/// parenthesized group is an operand of a still-open formula. Each flushed
/// sentence is trimmed and terminated with `.`.
///
/// An unbalanced trailing fragment is dropped without error; so is any
/// text that never reaches a depth-zero closing paren.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut sentence = String::new();
    let mut depth = 0i32;

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' => {
                depth += 1;
                sentence.push(c);
            }
            ')' => {
                depth -= 1;
                sentence.push(c);
                if depth == 0 && !binary_follows(&chars[i + 1..]) {
                    let mut finished = sentence.trim().to_owned();
                    finished.push('.');
                    sentences.push(finished);
                    sentence.clear();
                }
            }
            _ => sentence.push(c),
        }
    }

    sentences
}

/// Lookahead: does the remaining text, after spaces/tabs, start with a
/// binary connective (`&`, the `v`/`V` disjunction marker, or a `<`-headed
/// relational/biconditional token)?
fn binary_follows(rest: &[char]) -> bool {
    for &c in rest {
        match c {
            '&' | 'V' | 'v' | '<' => return true,
            ' ' | '\t' => continue,
            _ => return false,
        }
    }
    false
}
