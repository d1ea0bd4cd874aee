//! Decision tree walker.

use keyswitch_ir::{CaseFold, Decision};

use crate::input::{Cursor, MatchInput};

/// Run `decision` against `input`, folding each inspected character with `fold`.
///
/// `fold` must be the fold the tree was compiled with. Returns the payload of
/// the matched label, or `None` when no label matches.
///
/// Total over all inputs: every path ends in a return after at most one
/// inspection per character. The walk is a loop, not a recursion, so tree
/// depth costs no stack.
pub fn eval<'d, V, I>(decision: &'d Decision<V>, input: &I, fold: CaseFold) -> Option<&'d V>
where
    I: MatchInput + ?Sized,
{
    let len = input.char_len();
    let mut cursor = Cursor::new(input.match_chars());
    let mut node = decision;

    loop {
        match node {
            Decision::LengthCheck { check, next } => {
                if !check.admits(len) {
                    return None;
                }
                node = next.as_ref();
            }

            Decision::CondensedEquality { terms, next } => {
                for term in terms {
                    let c = cursor.char_at(term.offset)?;
                    if fold.apply(c) != term.expected {
                        return None;
                    }
                }
                node = next.as_ref();
            }

            Decision::CharDispatch { offset, on_end, .. } => {
                if len == *offset {
                    return on_end.as_ref();
                }
                let c = fold.apply(cursor.char_at(*offset)?);
                node = node.case(c)?;
            }

            Decision::TerminalReturn(payload) => return Some(payload),

            Decision::NotFoundReturn => return None,
        }
    }
}

#[cfg(test)]
mod tests;
