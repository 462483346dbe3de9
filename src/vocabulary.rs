// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # SMILES Token Vocabulary
//!
//! The fixed, ordered set of tokens the external normalizer recognizes when
//! parsing a SMILES string, plus the payload length bound. Both are static
//! for the lifetime of the process and never mutated after definition.

/// Maximum accepted length of a submitted SMILES string, in characters.
pub const MAX_SMILES_LENGTH: usize = 54;

/// Tokens the external normalizer recognizes.
///
/// Ordered: element symbols, bond symbols, and ring-closure digits appear in
/// the order the normalization service expects them. Aromatic (lowercase)
/// atoms are listed separately from their aliphatic forms.
pub const SMILES_VOCABULARY: &[&str] = &[
    "#", "(", ")", "1", "2", "3", "=", "Br", "C", "Cl", "F", "N", "O", "S", "[nH]", "c", "n", "o",
    "s",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_covers_reference_tokens() {
        assert_eq!(SMILES_VOCABULARY.len(), 19);
        for token in ["C", "Br", "[nH]", "#", "="] {
            assert!(SMILES_VOCABULARY.contains(&token), "missing token {token}");
        }
    }

    #[test]
    fn vocabulary_order_is_stable() {
        assert_eq!(SMILES_VOCABULARY[0], "#");
        assert_eq!(SMILES_VOCABULARY[SMILES_VOCABULARY.len() - 1], "s");
    }

    #[test]
    fn length_bound_matches_reference_deployment() {
        assert_eq!(MAX_SMILES_LENGTH, 54);
    }
}
