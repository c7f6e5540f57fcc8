//! The theme aggregate

use dskit_tokens::{Token, VariationKind};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::warn;

/// All tokens of a design system, indexed by variation kind and name
///
/// Tokens are mutated in place through [`Theme::token_mut`]; removal is done
/// by disabling a token rather than dropping it.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    name: String,
    version: String,
    tokens: FxHashMap<VariationKind, IndexMap<String, Token>>,
}

impl Theme {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            tokens: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Tokens of one kind, in insertion order
    pub fn tokens(&self, kind: VariationKind) -> Vec<&Token> {
        self.tokens
            .get(&kind)
            .map(|tokens| tokens.values().collect())
            .unwrap_or_default()
    }

    pub fn tokens_mut(&mut self, kind: VariationKind) -> impl Iterator<Item = &mut Token> {
        self.tokens.get_mut(&kind).into_iter().flat_map(|t| t.values_mut())
    }

    /// Exact-name lookup
    pub fn token(&self, name: &str, kind: VariationKind) -> Option<&Token> {
        self.tokens.get(&kind)?.get(name)
    }

    pub fn token_mut(&mut self, name: &str, kind: VariationKind) -> Option<&mut Token> {
        self.tokens.get_mut(&kind)?.get_mut(name)
    }

    /// Add a token under `kind`.
    ///
    /// Returns `false` and keeps the existing token when the name is taken,
    /// or when the token belongs to another kind.
    pub fn add_token(&mut self, kind: VariationKind, token: Token) -> bool {
        if token.kind() != kind {
            warn!(
                "Token `{}` is a {} token, refusing to add it as {}",
                token.name(),
                token.kind(),
                kind
            );
            return false;
        }

        let tokens = self.tokens.entry(kind).or_default();
        if tokens.contains_key(token.name()) {
            warn!(
                "Token `{}` ({}) already exists in theme `{}`, keeping the original",
                token.name(),
                kind,
                self.name
            );
            return false;
        }

        tokens.insert(token.name().to_string(), token);
        true
    }

    /// Kinds holding at least one token, in canonical order
    pub fn kinds(&self) -> Vec<VariationKind> {
        VariationKind::all()
            .iter()
            .copied()
            .filter(|kind| self.tokens.get(kind).is_some_and(|t| !t.is_empty()))
            .collect()
    }

    /// Every token, kinds in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        VariationKind::all()
            .iter()
            .filter_map(|kind| self.tokens.get(kind))
            .flat_map(|tokens| tokens.values())
    }

    pub fn len(&self) -> usize {
        self.tokens.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tokens whose values differ from their construction baseline
    pub fn modified_tokens(&self) -> Vec<&Token> {
        self.iter().filter(|t| t.is_modified()).collect()
    }
}
