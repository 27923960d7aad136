// src/noyau/priorite.rs

/// Table des priorités : plus le nombre est grand, plus l'opérateur lie fort.
///
/// `None` = pas un opérateur pour l'analyse. Les chiffres, le point, les
/// parenthèses et `%` sont structurels et traités à part.
pub fn priorite(c: char) -> Option<u8> {
    match c {
        '+' | '-' => Some(1),
        '*' | '/' => Some(2),
        '^' => Some(3),
        '!' | '√' => Some(4),
        _ => None,
    }
}

/// Vrai si `c` figure dans la table des priorités.
pub fn est_operateur(c: char) -> bool {
    priorite(c).is_some()
}

/// Vrai si la tranche contient au moins un opérateur de la table.
pub fn contient_operateur(exp: &[char]) -> bool {
    exp.iter().any(|&c| est_operateur(c))
}
