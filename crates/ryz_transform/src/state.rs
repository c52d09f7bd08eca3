//! The compilation-unit state machine.
//!
//! Seven tagged state kinds instead of a class hierarchy: each kind binds a
//! fixed, ordered list of transformer capabilities, and nested states carry
//! their payload (block signature, multiline indentation) in the stack
//! entry. The predecessor link is the stack itself, so push/pop balance is
//! guaranteed by construction.

/// Which state the unit is in. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Initial,
    InsideClass,
    InsideMethod,
    InsideParameters,
    InsideBlock,
    InsideComment,
    InsideMultilineString,
}

impl StateKind {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            StateKind::Initial => "at the top level",
            StateKind::InsideClass => "inside a class body",
            StateKind::InsideMethod => "inside a method body",
            StateKind::InsideParameters => "inside a parameter list",
            StateKind::InsideBlock => "inside a block body",
            StateKind::InsideComment => "inside a comment",
            StateKind::InsideMultilineString => "inside a multi-line string",
        }
    }

    /// The ordered transformer list offered every line seen in this state.
    pub(crate) fn transformers(self) -> &'static [TransformerId] {
        use TransformerId::*;
        match self {
            StateKind::Initial => &[PackageClass, Comment, ClosingKey, Annotation],
            StateKind::InsideClass => &[
                PackageClass,
                Import,
                Attribute,
                Comment,
                ClosingKey,
                Method,
                Constructor,
                Annotation,
            ],
            StateKind::InsideMethod | StateKind::InsideBlock => &[
                Attribute,
                Comment,
                ClosingKey,
                Return,
                Statement,
                SimpleAssignment,
                SingleValue,
                InlineBlock,
            ],
            StateKind::InsideParameters => &[Comment, SimpleAssignment, Statement, SingleValue],
            StateKind::InsideComment => &[Comment],
            StateKind::InsideMultilineString => &[MultilineString],
        }
    }
}

/// The single-responsibility translators a state can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransformerId {
    PackageClass,
    Import,
    Annotation,
    Attribute,
    Comment,
    ClosingKey,
    Method,
    Constructor,
    Return,
    Statement,
    SimpleAssignment,
    SingleValue,
    InlineBlock,
    MultilineString,
}

/// Per-entry payload on the state stack.
#[derive(Debug)]
pub(crate) enum StateDetail {
    None,
    /// Return type captured when the enclosing method or constructor was
    /// registered; consumed by the return-marking post-pass.
    Method { return_type: String },
    /// `params:returnType` signature of the block being compiled.
    Block { signature: String },
    /// Indentation captured at entry plus whether any continuation line has
    /// been folded yet.
    MultilineString { indent: usize, seen_fragment: bool },
}

#[derive(Debug)]
pub(crate) struct State {
    pub kind: StateKind,
    pub detail: StateDetail,
}

impl State {
    pub(crate) fn new(kind: StateKind) -> Self {
        State {
            kind,
            detail: StateDetail::None,
        }
    }
}
