//! Syntax tree for a parsed flag syntax definition.
//!
//! Nodes are plain data. Each constructor derives the node's display name by
//! trimming the fixed delimiters the lexer put around it (`-`, `<>`, `<>...`,
//! `[]`); nothing here re-scans input.
//!
//! `Display` on every node writes its literal, and on [`StatementNode`]
//! writes the canonical usage form of the whole definition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Strips `prefix` and `suffix` from `literal`, or returns it unchanged when
/// either delimiter is missing.
fn strip_delimiters<'a>(literal: &'a str, prefix: &str, suffix: &str) -> &'a str {
    literal
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(suffix))
        .unwrap_or(literal)
}

/// The leading flag of a statement, e.g. `-sp`.
///
/// # Examples
///
/// ```
/// use flag_syntax_core::FlagNode;
///
/// let flag = FlagNode::new("-sp");
/// assert_eq!(flag.name, "sp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagNode {
    /// Literal text including the dash.
    pub literal: String,
    /// Flag identifier without the dash.
    pub name: String,
}

impl FlagNode {
    /// Creates a flag node from a `-name` literal.
    pub fn new(literal: &str) -> Self {
        Self {
            literal: literal.to_string(),
            name: strip_delimiters(literal, "-", "").to_string(),
        }
    }
}

/// A required positional parameter, e.g. `<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalParamNode {
    /// Literal text including the angle brackets.
    pub literal: String,
    /// Parameter name.
    pub name: String,
}

impl PositionalParamNode {
    /// Creates a node from a `<name>` literal.
    pub fn new(literal: &str) -> Self {
        Self {
            literal: literal.to_string(),
            name: strip_delimiters(literal, "<", ">").to_string(),
        }
    }
}

/// A variadic positional parameter, e.g. `<id>...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalParamListNode {
    /// Literal text including the angle brackets and ellipsis.
    pub literal: String,
    /// Parameter name.
    pub name: String,
}

impl PositionalParamListNode {
    /// Creates a node from a `<name>...` literal.
    pub fn new(literal: &str) -> Self {
        Self {
            literal: literal.to_string(),
            name: strip_delimiters(literal, "<", ">...").to_string(),
        }
    }
}

/// A free-form optional descriptive value, e.g. `[description]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalParamNode {
    /// Literal text including the square brackets.
    pub literal: String,
    /// Parameter name.
    pub name: String,
}

impl OptionalParamNode {
    /// Creates a node from a `[name]` literal.
    pub fn new(literal: &str) -> Self {
        Self {
            literal: literal.to_string(),
            name: strip_delimiters(literal, "[", "]").to_string(),
        }
    }
}

/// A nested flag parameter, e.g. `[-t title]` or `[-t]`.
///
/// # Examples
///
/// ```
/// use flag_syntax_core::FlagParamNode;
///
/// let named = FlagParamNode::new("[-t title]");
/// assert_eq!(named.flag.name, "t");
/// assert_eq!(named.name, "title");
///
/// let bare = FlagParamNode::new("[-t]");
/// assert_eq!(bare.flag.literal, "-t");
/// assert_eq!(bare.name, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagParamNode {
    /// Literal text including the square brackets.
    pub literal: String,
    /// The nested flag.
    pub flag: FlagNode,
    /// Name of the flag's value; empty when the flag takes none.
    pub name: String,
}

impl FlagParamNode {
    /// Creates a node from a `[-flag]` or `[-flag name]` literal.
    ///
    /// The lexer always separates the flag and name with exactly one space.
    pub fn new(literal: &str) -> Self {
        let inner = strip_delimiters(literal, "[", "]");
        let (flag, name) = inner.split_once(' ').unwrap_or((inner, ""));
        Self {
            literal: literal.to_string(),
            flag: FlagNode::new(flag),
            name: name.to_string(),
        }
    }

    /// Returns `true` if the nested flag takes a named value.
    pub fn takes_value(&self) -> bool {
        !self.name.is_empty()
    }
}

/// One parameter of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Param {
    /// `[-t title]` or `[-t]`.
    FlagParam(FlagParamNode),
    /// `<id>`.
    Positional(PositionalParamNode),
    /// `<id>...`.
    PositionalList(PositionalParamListNode),
    /// `[description]`.
    Optional(OptionalParamNode),
}

impl Param {
    /// Literal text of the wrapped node.
    pub fn literal(&self) -> &str {
        match self {
            Self::FlagParam(node) => &node.literal,
            Self::Positional(node) => &node.literal,
            Self::PositionalList(node) => &node.literal,
            Self::Optional(node) => &node.literal,
        }
    }

    /// Derived name of the wrapped node.
    ///
    /// For flag parameters this is the value name, which may be empty.
    pub fn name(&self) -> &str {
        match self {
            Self::FlagParam(node) => &node.name,
            Self::Positional(node) => &node.name,
            Self::PositionalList(node) => &node.name,
            Self::Optional(node) => &node.name,
        }
    }
}

/// Parameters of a statement, grouped by kind in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Flag parameters.
    pub flag_params: Vec<FlagParamNode>,
    /// Positional parameters.
    pub positional_params: Vec<PositionalParamNode>,
    /// Optional parameters.
    pub optional_params: Vec<OptionalParamNode>,
    /// The variadic positional parameter, if any.
    pub positional_param_list: Option<PositionalParamListNode>,
}

impl ParameterSet {
    /// Returns `true` if the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of parameters across all kinds.
    pub fn len(&self) -> usize {
        self.flag_params.len()
            + self.positional_params.len()
            + self.optional_params.len()
            + usize::from(self.positional_param_list.is_some())
    }

    /// Iterates over every parameter in canonical order: flag parameters,
    /// positional parameters, the positional list, then optional parameters.
    pub fn iter(&self) -> impl Iterator<Item = Param> + '_ {
        self.flag_params
            .iter()
            .cloned()
            .map(Param::FlagParam)
            .chain(self.positional_params.iter().cloned().map(Param::Positional))
            .chain(
                self.positional_param_list
                    .iter()
                    .cloned()
                    .map(Param::PositionalList),
            )
            .chain(self.optional_params.iter().cloned().map(Param::Optional))
    }

    /// Adds a parameter to the group for its kind.
    ///
    /// No ordering rules are checked here; a second list replaces the first.
    pub(crate) fn insert(&mut self, param: Param) {
        match param {
            Param::FlagParam(node) => self.flag_params.push(node),
            Param::Positional(node) => self.positional_params.push(node),
            Param::PositionalList(node) => self.positional_param_list = Some(node),
            Param::Optional(node) => self.optional_params.push(node),
        }
    }
}

/// Root of the tree: one flag and its parameters.
///
/// # Examples
///
/// ```
/// let statement = flag_syntax_core::parse("-u [ -t  title ]   <id>").unwrap();
/// assert_eq!(statement.to_string(), "-u [-t title] <id>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementNode {
    /// The leading flag.
    pub flag: FlagNode,
    /// Parameters following the flag; possibly empty.
    pub params: ParameterSet,
}

impl fmt::Display for FlagNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StatementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag)?;
        if !self.params.is_empty() {
            write!(f, " {}", self.params)?;
        }
        Ok(())
    }
}
