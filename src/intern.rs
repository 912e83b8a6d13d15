//! A small interner used to turn line (or other token) content into cheap,
//! collision-free integer ids.
//!
//! [`Sequence`](crate::sequence::Sequence) implementations need a `hash`
//! function where equal hashes imply equal content (spec §3: "two positions
//! are equal iff their hashes match"). A raw 64-bit content hash only gets
//! you *probabilistic* safety against that; interning gets you an exact
//! guarantee for the price of a hashtable lookup, which is what
//! [`LineSequence`](crate::sequence::LineSequence) relies on.

use ahash::RandomState;
use hashbrown::raw::RawTable;
use std::hash::Hash;
use std::ops::Index;

/// An interned value.
///
/// Two tokens compare equal iff the content they were interned from compares
/// equal, so comparing (or hashing) `Token`s is exactly as precise as
/// comparing the original content, just much cheaper.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Token(pub u32);

/// A hashtable-backed interner that hands back a small, exactly-comparable
/// [`Token`] for each distinct value seen so far.
#[derive(Default)]
pub struct Interner<T: Hash + Eq> {
    tokens: Vec<T>,
    table: RawTable<Token>,
    hasher: RandomState,
}

impl<T: Hash + Eq> Interner<T> {
    pub fn new(capacity: usize) -> Self {
        Interner {
            tokens: Vec::with_capacity(capacity),
            table: RawTable::with_capacity(capacity),
            hasher: RandomState::new(),
        }
    }

    pub fn intern(&mut self, token: T) -> Token {
        let hash = self.hasher.hash_one(&token);
        if let Some(&token) = self
            .table
            .get(hash, |&it| self.tokens[it.0 as usize] == token)
        {
            token
        } else {
            let interned = Token(self.tokens.len() as u32);
            self.table.insert(hash, interned, |&token| {
                self.hasher.hash_one(&self.tokens[token.0 as usize])
            });
            self.tokens.push(token);
            interned
        }
    }

    pub fn num_tokens(&self) -> u32 {
        self.tokens.len() as u32
    }
}

impl<T: Hash + Eq> Index<Token> for Interner<T> {
    type Output = T;
    fn index(&self, index: Token) -> &Self::Output {
        &self.tokens[index.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_content_interns_to_same_token() {
        let mut interner = Interner::new(4);
        let a = interner.intern("line one\n");
        let b = interner.intern("line two\n");
        let c = interner.intern("line one\n");
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(interner.num_tokens(), 2);
        assert_eq!(interner[a], "line one\n");
    }
}
