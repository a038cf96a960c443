//! Indentation context chain.
//!
//! Every analyzer state carries a stack of [`Context`] records, innermost on
//! top. Records live in an [`IndexVec`] arena and point at their enclosing
//! context by [`ContextId`], so the chain can be cloned and serialized along
//! with the rest of the state.
//!
//! The classifier only ever creates the root context. [`ContextStack::push`]
//! and [`ContextStack::pop`] are there for bracket-aware indentation; the
//! root can never be popped. A deserialized stack is checked against the
//! same shape before it is handed out.

use dylex_util::{define_idx, Idx, IndexVec};
use serde::{Deserialize, Serialize};

use crate::error::ContextError;

define_idx!(
    /// Index of a [`Context`] in its [`ContextStack`].
    #[derive(Serialize, Deserialize)]
    ContextId
);

/// What opened a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextKind {
    /// The document itself
    Top,
    /// A bracketed group, tagged with its closing delimiter
    Group(char),
}

impl ContextKind {
    /// Short tag for display and debugging.
    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::Top => "top",
            ContextKind::Group(')') => "paren",
            ContextKind::Group(']') => "bracket",
            ContextKind::Group('}') => "brace",
            ContextKind::Group(_) => "group",
        }
    }
}

/// One level of nesting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Indentation of the line that opened the context. Negative for a root
    /// created with a base column smaller than the indent unit.
    pub indented: i32,
    /// Column where the context was opened
    pub column: usize,
    /// What opened the context
    pub kind: ContextKind,
    /// Whether content is aligned with the opening column
    pub align: bool,
    /// Enclosing context; `None` only for the root
    pub prev: Option<ContextId>,
}

/// Stack of contexts backed by an arena.
///
/// The arena mirrors the stack: the current context is always the last
/// record, and popping removes it. Record 0 is the root; every other record
/// links to the one directly below it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContextStack")]
pub struct ContextStack {
    arena: IndexVec<ContextId, Context>,
}

/// Unchecked wire form of a [`ContextStack`].
#[derive(Deserialize)]
struct RawContextStack {
    arena: IndexVec<ContextId, Context>,
}

impl TryFrom<RawContextStack> for ContextStack {
    type Error = ContextError;

    fn try_from(raw: RawContextStack) -> Result<Self, Self::Error> {
        let mut records = raw.arena.iter_enumerated();
        let (_, root) = records.next().ok_or(ContextError::EmptyChain)?;
        if root.prev.is_some() || root.kind != ContextKind::Top {
            return Err(ContextError::InvalidRoot);
        }
        for (id, context) in records {
            let expected = id.index() - 1;
            if context.prev.map(Idx::index) != Some(expected) {
                return Err(ContextError::BrokenLink {
                    index: id.index(),
                    expected,
                });
            }
        }
        Ok(Self { arena: raw.arena })
    }
}

impl ContextStack {
    /// Creates a stack holding only the root (`top`) context.
    pub fn new(indented: i32) -> Self {
        let mut arena = IndexVec::with_capacity(4);
        arena.push(Context {
            indented,
            column: 0,
            kind: ContextKind::Top,
            align: false,
            prev: None,
        });
        Self { arena }
    }

    /// Id of the root context.
    pub fn root_id(&self) -> ContextId {
        ContextId(0)
    }

    /// Id of the innermost context.
    pub fn current_id(&self) -> ContextId {
        // The root is never removed, so the arena is never empty.
        self.arena.last_index().unwrap_or(ContextId(0))
    }

    /// The innermost context.
    pub fn current(&self) -> &Context {
        &self.arena[self.current_id()]
    }

    /// The root context.
    pub fn root(&self) -> &Context {
        &self.arena[self.root_id()]
    }

    /// Looks up a context by id.
    pub fn get(&self, id: ContextId) -> Option<&Context> {
        self.arena.get(id)
    }

    /// Number of contexts on the stack, root included.
    pub fn depth(&self) -> usize {
        self.arena.len()
    }

    /// Opens a new innermost context and returns its id.
    pub fn push(&mut self, kind: ContextKind, indented: i32, column: usize, align: bool) -> ContextId {
        let prev = Some(self.current_id());
        self.arena.push(Context {
            indented,
            column,
            kind,
            align,
            prev,
        })
    }

    /// Closes the innermost context and returns it.
    pub fn pop(&mut self) -> Result<Context, ContextError> {
        if self.arena.len() <= 1 {
            return Err(ContextError::RootPop);
        }
        self.arena
            .pop()
            .map(|(_, context)| context)
            .ok_or(ContextError::RootPop)
    }

    /// Walks from the innermost context out to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = (ContextId, &Context)> {
        let mut next = Some(self.current_id());
        std::iter::from_fn(move || {
            let id = next?;
            let context = self.arena.get(id)?;
            next = context.prev;
            Some((id, context))
        })
    }
}
