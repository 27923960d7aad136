// src/noyau/operations.rs

use super::erreurs::ErreurNoyau;

/// Répartiteur des opérations primitives.
///
/// La division par zéro suit la sémantique IEEE (inf / NaN), ce n'est pas
/// une erreur. `!` ignore son opérande droit, `√` ignore son opérande
/// gauche. Tout autre symbole signale un invariant violé.
pub fn effectuer_operation(gauche: f64, operateur: char, droite: f64) -> Result<f64, ErreurNoyau> {
    match operateur {
        '+' => Ok(gauche + droite),
        '-' => Ok(gauche - droite),
        '*' => Ok(gauche * droite),
        '/' => Ok(gauche / droite),
        '^' => Ok(gauche.powf(droite)),
        '!' => factorielle(gauche),
        '√' => Ok(droite.sqrt()),
        autre => Err(ErreurNoyau::OperateurInconnu(autre)),
    }
}

/// Factorielle entière : produit 2·3·…·n en flottant.
///
/// Pour n entier négatif, la boucle ne tourne pas et le résultat vaut 1 —
/// comportement hérité, conservé tel quel.
pub fn factorielle(n: f64) -> Result<f64, ErreurNoyau> {
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(ErreurNoyau::FactorielleNonEntiere(n));
    }

    let fin = n as i64;
    let mut produit = 1.0_f64;
    let mut k: i64 = 2;
    while k <= fin {
        produit *= k as f64;
        if produit.is_infinite() {
            // inf est absorbant : la suite de la boucle ne change plus rien.
            break;
        }
        k += 1;
    }

    Ok(produit)
}
