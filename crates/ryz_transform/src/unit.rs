//! The compilation unit: one source file being translated.
//!
//! Owns the generated-output buffer, the state stack, the symbol table, and
//! the unit's package/class identity. Lines are fed one at a time through
//! the current state's transformer list; every transformer is offered every
//! line, appending zero or more output chunks.

use std::sync::Arc;

use tracing::{debug, trace};

use ryz_matcher::MatcherContext;
use ryz_support::LINE_SEPARATOR;

use crate::error::TransformError;
use crate::interfaces::InterfaceInventory;
use crate::state::{State, StateDetail, StateKind};
use crate::symbols::{SymbolTable, INSTANCE_SCOPE};
use crate::transformers;

pub struct CompilationUnit {
    source_file: String,
    source_lines: Vec<String>,
    generated: Vec<String>,
    package_name: Option<String>,
    class_name: Option<String>,
    /// `name:returnType` signatures, insertion-ordered.
    methods: Vec<String>,
    constructors: Vec<String>,
    symbols: SymbolTable,
    states: Vec<State>,
    /// Scope key of the most recently registered method or constructor.
    last_scope: Option<String>,
    interfaces: Arc<InterfaceInventory>,
    attempted_fixes: Vec<String>,
    unprocessed: Vec<usize>,
    current_line: usize,
}

impl CompilationUnit {
    pub fn new(source_file: impl Into<String>, source_lines: Vec<String>) -> Self {
        Self::with_interfaces(source_file, source_lines, Arc::new(InterfaceInventory::default()))
    }

    pub fn with_interfaces(
        source_file: impl Into<String>,
        source_lines: Vec<String>,
        interfaces: Arc<InterfaceInventory>,
    ) -> Self {
        CompilationUnit {
            source_file: source_file.into(),
            source_lines,
            generated: Vec::new(),
            package_name: None,
            class_name: None,
            methods: Vec::new(),
            constructors: Vec::new(),
            symbols: SymbolTable::default(),
            states: vec![State::new(StateKind::Initial)],
            last_scope: None,
            interfaces,
            attempted_fixes: Vec::new(),
            unprocessed: Vec::new(),
            current_line: 0,
        }
    }

    /// Feeds every source line through the current state's transformers.
    pub fn transform_source_code(&mut self) -> Result<(), TransformError> {
        let lines = self.source_lines.clone();
        for (index, line) in lines.iter().enumerate() {
            self.current_line = index + 1;
            let chunks_before = self.generated.len();
            let kind_before = self.current_kind();
            trace!(line = index + 1, state = kind_before.describe(), text = line.as_str(), "feeding line");
            for id in kind_before.transformers() {
                transformers::dispatch(*id, self, line)?;
            }
            if !line.trim().is_empty()
                && self.generated.len() == chunks_before
                && self.current_kind() == kind_before
            {
                self.unprocessed.push(index + 1);
            }
        }
        match self.current_kind() {
            StateKind::Initial => Ok(()),
            kind => Err(TransformError::UnterminatedScope {
                state: kind.describe(),
                pending: self.states.len() - 1,
            }),
        }
    }

    /// The translated output, as ordered chunks of Java text.
    pub fn output_lines(&self) -> &[String] {
        &self.generated
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// Source lines (1-based indices) that produced no output and no state
    /// change; the driver reports them as "not processed".
    pub fn unprocessed_lines(&self) -> &[usize] {
        &self.unprocessed
    }

    pub fn has_class_name(&self) -> bool {
        self.class_name.is_some()
    }

    /// The resolved class name. Reading it before the header transformer
    /// has run is a programming error and fails fast.
    pub fn class_name(&self) -> &str {
        self.class_name
            .as_deref()
            .expect("class name is not set until a class header line has been recognized")
    }

    /// The resolved package name; same fail-fast contract as `class_name`.
    pub fn package_name(&self) -> &str {
        self.package_name
            .as_deref()
            .expect("package name is not set until a class header line has been recognized")
    }

    /// `name:returnType` signatures registered so far, in declaration order.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn constructors(&self) -> &[String] {
        &self.constructors
    }

    /// Replaces the generated buffer with a corrected version, remembering
    /// the fingerprint of the fix. Returns false (and leaves the buffer
    /// untouched) when this fingerprint was already attempted, so a
    /// driver-side correction loop cannot cycle.
    pub fn mark_error(&mut self, fingerprint: &str, corrected: Vec<String>) -> bool {
        if self.attempted_fixes.iter().any(|f| f == fingerprint) {
            debug!(fingerprint, "fix already attempted, refusing replacement");
            return false;
        }
        self.attempted_fixes.push(fingerprint.to_string());
        self.generated = corrected;
        true
    }

    // ---- state machine ----------------------------------------------------

    pub(crate) fn current_kind(&self) -> StateKind {
        self.current().kind
    }

    fn current(&self) -> &State {
        self.states.last().expect("state stack is never empty")
    }

    fn push_state(&mut self, state: State) {
        self.states.push(state);
    }

    fn pop_state(&mut self) {
        debug_assert!(self.states.len() > 1, "state stack underflow");
        if self.states.len() > 1 {
            self.states.pop();
        }
    }

    pub(crate) fn set_package_name(&mut self, package_name: impl Into<String>) {
        self.package_name = Some(package_name.into());
    }

    /// Write-once; recognizing a second header is rejected by the header
    /// transformer before this is reached.
    pub(crate) fn set_class_name(&mut self, class_name: impl Into<String>) {
        debug_assert!(self.class_name.is_none(), "class name is write-once");
        self.class_name = Some(class_name.into());
        self.push_state(State::new(StateKind::InsideClass));
    }

    pub(crate) fn add_method(&mut self, name: &str, return_type: &str) {
        let signature = format!("{}:{}", name, return_type);
        trace!(signature = signature.as_str(), "registering method");
        self.methods.push(signature.clone());
        self.last_scope = Some(signature);
        self.push_state(State {
            kind: StateKind::InsideMethod,
            detail: StateDetail::Method {
                return_type: return_type.to_string(),
            },
        });
    }

    pub(crate) fn add_constructor(&mut self, name: &str) {
        trace!(name, "registering constructor");
        self.constructors.push(name.to_string());
        self.last_scope = Some(name.to_string());
        self.push_state(State {
            kind: StateKind::InsideMethod,
            detail: StateDetail::Method {
                return_type: "void".to_string(),
            },
        });
    }

    pub(crate) fn enter_block(&mut self, signature: String) {
        self.push_state(State {
            kind: StateKind::InsideBlock,
            detail: StateDetail::Block { signature },
        });
    }

    pub(crate) fn enter_comment(&mut self) {
        self.push_state(State::new(StateKind::InsideComment));
    }

    pub(crate) fn exit_comment(&mut self) {
        self.pop_state();
    }

    pub(crate) fn enter_multiline(&mut self, indent: usize) {
        self.push_state(State {
            kind: StateKind::InsideMultilineString,
            detail: StateDetail::MultilineString {
                indent,
                seen_fragment: false,
            },
        });
    }

    pub(crate) fn exit_multiline(&mut self) {
        self.pop_state();
    }

    pub(crate) fn multiline_detail(&self) -> Option<(usize, bool)> {
        match &self.current().detail {
            StateDetail::MultilineString { indent, seen_fragment } => Some((*indent, *seen_fragment)),
            _ => None,
        }
    }

    pub(crate) fn note_multiline_fragment(&mut self) {
        if let Some(state) = self.states.last_mut() {
            if let StateDetail::MultilineString { seen_fragment, .. } = &mut state.detail {
                *seen_fragment = true;
            }
        }
    }

    /// A closing brace was recognized: unwind one level, running the
    /// return-marking post-pass for method and block bodies.
    pub(crate) fn close_key(&mut self) -> Result<(), TransformError> {
        match self.current().kind {
            StateKind::Initial => Err(TransformError::UnbalancedClose {
                line: self.current_line,
            }),
            StateKind::InsideBlock => {
                let return_type = match &self.current().detail {
                    StateDetail::Block { signature } => signature
                        .split(':')
                        .nth(1)
                        .unwrap_or("")
                        .to_string(),
                    _ => String::new(),
                };
                // Terminator required by the anonymous-object syntax.
                self.emit(format!("}};{}", LINE_SEPARATOR));
                self.mark_last_line_as_return(&return_type);
                self.pop_state();
                Ok(())
            }
            StateKind::InsideMethod => {
                let return_type = match &self.current().detail {
                    StateDetail::Method { return_type } => return_type.clone(),
                    _ => "void".to_string(),
                };
                self.mark_last_line_as_return(&return_type);
                self.pop_state();
                Ok(())
            }
            _ => {
                self.pop_state();
                Ok(())
            }
        }
    }

    /// Rewrites the final statement of a closing scope into a return.
    ///
    /// `void` bodies are left alone. The capitalized `Void` placeholder
    /// needs an explicit `return null;` appended rather than substituted;
    /// both paths are deliberate and distinct. Anything else rewrites the
    /// second-to-last chunk (the last one is the already-emitted closer).
    pub(crate) fn mark_last_line_as_return(&mut self, return_type: &str) {
        if return_type == "void" {
            return;
        }
        let len = self.generated.len();
        if len < 2 {
            return;
        }
        if return_type == "Void" {
            self.generated
                .insert(len - 1, format!("        return null;{}", LINE_SEPARATOR));
        } else {
            let last_statement = self.generated.remove(len - 2);
            self.generated
                .insert(len - 2, format!("        return {}", last_statement));
        }
    }

    // ---- output buffer ----------------------------------------------------

    pub(crate) fn emit(&mut self, chunk: String) {
        self.generated.push(chunk);
    }

    pub(crate) fn last_chunk(&self) -> Option<&str> {
        self.generated.last().map(String::as_str)
    }

    pub(crate) fn pop_chunk(&mut self) -> Option<String> {
        self.generated.pop()
    }

    pub(crate) fn current_line(&self) -> usize {
        self.current_line
    }

    pub(crate) fn interfaces(&self) -> &InterfaceInventory {
        &self.interfaces
    }

    // ---- symbol policies --------------------------------------------------

    /// Scope key for declarations at the current nesting: the innermost
    /// block signature if any, otherwise the last registered method or
    /// constructor.
    pub(crate) fn current_scope_key(&self) -> Option<String> {
        for state in self.states.iter().rev() {
            if let StateDetail::Block { signature } = &state.detail {
                return Some(signature.clone());
            }
        }
        self.last_scope.clone()
    }

    /// Registers a declaration under the active state's insertion policy.
    /// Returns whether the declaration was added; callers emit a typed
    /// declaration only on `true` and degrade to a bare assignment
    /// otherwise.
    pub(crate) fn add_variable(&mut self, name: &str, ty: &str) -> bool {
        match self.current_kind() {
            StateKind::InsideClass => self.symbols.insert(INSTANCE_SCOPE, name, ty),
            StateKind::InsideMethod | StateKind::InsideBlock => {
                let Some(scope) = self.current_scope_key() else {
                    return true;
                };
                if self.symbols.contains_name(&scope, name)
                    || self.symbols.contains_name(INSTANCE_SCOPE, name)
                {
                    debug!(scope = scope.as_str(), name, "declaration would shadow an existing binding");
                    return false;
                }
                self.symbols.insert(&scope, name, ty)
            }
            StateKind::InsideParameters => {
                // Parameters may legitimately shadow attributes.
                if let Some(scope) = self.current_scope_key() {
                    self.symbols.insert(&scope, name, ty);
                }
                true
            }
            _ => true,
        }
    }

    /// True when `name` was declared (as attribute or local in the current
    /// scope) with one of the generated functional-interface types.
    pub(crate) fn is_block_invocation(&self, name: &str) -> bool {
        let declared_as_block = |scope: &str| {
            self.symbols
                .bindings(scope)
                .iter()
                .any(|b| b.name == name && b.ty.starts_with("ryz.lang.block.Block"))
        };
        if declared_as_block(INSTANCE_SCOPE) {
            return true;
        }
        self.current_scope_key()
            .map(|scope| declared_as_block(&scope))
            .unwrap_or(false)
    }

    /// Runs the declaration machinery over a comma-separated parameter list
    /// and re-serializes the result as Java parameter text.
    pub(crate) fn transform_parameter_list(&mut self, raw: &str) -> String {
        let mut text = raw;
        if text.starts_with('(') && text.ends_with(')') {
            text = &text[1..text.len() - 1];
        }
        if text.trim().is_empty() {
            return String::new();
        }
        self.push_state(State::new(StateKind::InsideParameters));
        let mut scratch = Vec::new();
        for param in text.trim().split(',') {
            transformers::attribute::transform_declaration(self, param.trim(), false, &mut scratch);
        }
        self.pop_state();
        let pieces: Vec<String> = scratch
            .iter()
            .map(|chunk| {
                // Drop the trailing `; \n` so the pieces join with commas.
                let end = chunk.len().saturating_sub(LINE_SEPARATOR.len() + 2);
                chunk[..end].to_string()
            })
            .collect();
        pieces.join(",")
    }
}

impl MatcherContext for CompilationUnit {
    fn method_return_type(&self, name: &str) -> Option<String> {
        self.methods.iter().find_map(|signature| {
            let (method, return_type) = signature.split_once(':')?;
            (method == name).then(|| return_type.to_string())
        })
    }

    fn transform_parameters(&mut self, raw: &str) -> String {
        self.transform_parameter_list(raw)
    }
}
