//! Rust function emission.

use keyswitch_ir::{CaseFold, Decision, EqualityTerm, LengthCheck};
use keyswitch_stack::with_stack;

/// Shape of the emitted function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Function name.
    pub fn_name: String,
    /// Payload type, returned as `Option<return_type>`.
    pub return_type: String,
    /// Fold the tree was compiled with. `IgnoreCase` emits a local fold helper.
    pub fold: CaseFold,
    /// Emit `pub fn` instead of `fn`.
    pub public: bool,
}

impl EmitOptions {
    pub fn new(fn_name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            fn_name: fn_name.into(),
            return_type: return_type.into(),
            fold: CaseFold::Ordinal,
            public: false,
        }
    }

    #[must_use]
    pub fn with_fold(mut self, fold: CaseFold) -> Self {
        self.fold = fold;
        self
    }

    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }
}

/// Render `decision` as a standalone Rust function taking `s: &[char]`.
///
/// `render` turns a payload into a Rust expression of type
/// `options.return_type` (a literal, a path like `Keyword::Fn`, ...).
pub fn emit_rust_fn<V>(
    options: &EmitOptions,
    decision: &Decision<V>,
    render: impl Fn(&V) -> String,
) -> String {
    let stats = decision.stats();
    let reads_input = stats.dispatches + stats.condensed > 0;
    let reads_len = stats.length_checks + stats.early_returns > 0;

    let mut emitter = RustEmitter {
        out: String::new(),
        render: &render,
        fold: options.fold,
    };

    let visibility = if options.public { "pub " } else { "" };
    let param = if reads_input || reads_len { "s" } else { "_s" };
    emitter.line(
        0,
        &format!(
            "{visibility}fn {}({param}: &[char]) -> Option<{}> {{",
            options.fn_name, options.return_type
        ),
    );
    if reads_input && !options.fold.is_ordinal() {
        emitter.fold_helper();
    }
    if reads_len {
        emitter.line(1, "let len = s.len();");
    }
    emitter.decision(decision, 1);
    emitter.line(0, "}");

    tracing::debug!(
        fn_name = %options.fn_name,
        bytes = emitter.out.len(),
        "emitted rust function"
    );
    emitter.out
}

struct RustEmitter<'r, V> {
    out: String,
    render: &'r dyn Fn(&V) -> String,
    fold: CaseFold,
}

impl<V> RustEmitter<'_, V> {
    /// One line at `depth` levels of four spaces.
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("    ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn fold_helper(&mut self) {
        self.line(1, "let fold = |c: char| -> char {");
        self.line(2, "let mut upper = c.to_uppercase();");
        self.line(2, "match (upper.next(), upper.next()) {");
        self.line(3, "(Some(u), None) => u,");
        self.line(3, "_ => c,");
        self.line(2, "}");
        self.line(1, "};");
    }

    /// Expression reading the (folded) input character at `offset`.
    fn input_char(&self, offset: usize) -> String {
        match self.fold {
            CaseFold::Ordinal => format!("s[{offset}]"),
            CaseFold::IgnoreCase => format!("fold(s[{offset}])"),
        }
    }

    /// Statements ending in a tail expression of type `Option<_>`.
    fn decision(&mut self, decision: &Decision<V>, depth: usize) {
        match decision {
            Decision::LengthCheck { check, next } => {
                self.early_miss(depth, &length_failure(*check));
                with_stack(|| self.decision(next, depth));
            }
            Decision::CondensedEquality { terms, next } => {
                let failure = self.terms_failure(terms);
                self.early_miss(depth, &failure);
                with_stack(|| self.decision(next, depth));
            }
            Decision::CharDispatch {
                offset,
                on_end,
                cases,
            } => {
                if let Some(payload) = on_end {
                    self.line(depth, &format!("if len == {offset} {{"));
                    let value = (self.render)(payload);
                    self.line(depth + 1, &format!("return Some({value});"));
                    self.line(depth, "}");
                }
                let scrutinee = self.input_char(*offset);
                self.line(depth, &format!("match {scrutinee} {{"));
                for (c, case) in cases {
                    self.line(depth + 1, &format!("{c:?} => {{"));
                    with_stack(|| self.decision(case, depth + 2));
                    self.line(depth + 1, "}");
                }
                self.line(depth + 1, "_ => None,");
                self.line(depth, "}");
            }
            Decision::TerminalReturn(payload) => {
                let value = (self.render)(payload);
                self.line(depth, &format!("Some({value})"));
            }
            Decision::NotFoundReturn => self.line(depth, "None"),
        }
    }

    fn early_miss(&mut self, depth: usize, failure: &str) {
        self.line(depth, &format!("if {failure} {{"));
        self.line(depth + 1, "return None;");
        self.line(depth, "}");
    }

    /// Condition that holds when any term fails.
    fn terms_failure(&self, terms: &[EqualityTerm]) -> String {
        terms
            .iter()
            .map(|term| format!("{} != {:?}", self.input_char(term.offset), term.expected))
            .collect::<Vec<_>>()
            .join(" || ")
    }
}

/// Condition that holds when `check` rejects the input length.
fn length_failure(check: LengthCheck) -> String {
    match check {
        LengthCheck::Exact(n) => format!("len != {n}"),
        LengthCheck::Min(n) => format!("len < {n}"),
        LengthCheck::Max(n) => format!("len > {n}"),
        LengthCheck::Range { min, max } => format!("len < {min} || len > {max}"),
    }
}
