//! Converts `∀x` / `∃x` quantifier prefixes to the prover's binder syntax
//! and reports which variable names were bound.

/// Variable names bound in a clause, split by quantifier kind, in order of
/// first occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct BoundVars {
    pub(crate) universal: Vec<String>,
    pub(crate) existential: Vec<String>,
}

impl BoundVars {
    pub(crate) fn iter(&self) -> impl Iterator<Item = &String> {
        self.universal.iter().chain(self.existential.iter())
    }
}

/// Rewrites every `∀<name>` as `! [<name>] :` and every `∃<name>` as
/// `? [<name>] :`, where `<name>` is the maximal word-character run
/// immediately following the glyph. The name keeps its original case here;
/// uppercasing happens later against the full accumulated variable set.
///
/// A quantifier glyph not directly followed by a word character (e.g.
/// `∀ x` with a space) is left in place, matching the upstream notation's
/// requirement that the variable be adjacent.
pub(crate) fn rewrite_quantifiers(clause: &str) -> (BoundVars, String) {
    let mut vars = BoundVars::default();
    let mut out = String::with_capacity(clause.len());
    let mut chars = clause.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '∀' && c != '∃' {
            out.push(c);
            continue;
        }
        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_alphanumeric() || next == '_' {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if name.is_empty() {
            out.push(c);
            continue;
        }
        let (prefix, bucket) = if c == '∀' {
            ("! [", &mut vars.universal)
        } else {
            ("? [", &mut vars.existential)
        };
        // Duplicate quantification of the same name is legal.
        if !bucket.contains(&name) {
            bucket.push(name.clone());
        }
        out.push_str(prefix);
        out.push_str(&name);
        out.push_str("] :");
    }

    (vars, out)
}
