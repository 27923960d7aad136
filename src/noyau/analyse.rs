// src/noyau/analyse.rs
//
// Recherche de l'opérateur de coupe
// ---------------------------------
// Balayage droite→gauche d'une tranche déjà débarrassée de ses parenthèses
// appariées (la profondeur est quand même suivie pour ignorer l'intérieur
// d'éventuelles parenthèses orphelines).
//
// Règles d'exclusion avant de retenir un candidat :
// - `%` en dernière position : pour-cent suffixe, jamais un point de coupe
//   (règle conservée bien que `%` soit hors table) ;
// - `-` en position 0, ou précédé d'un opérateur ou de `(` : moins unaire ;
// - `!` en dernière position : factorielle suffixe ;
// - `√` en position 0, ou précédé d'un opérateur : forme préfixe.
//
// Comparaison STRICTE : à priorité égale, l'occurrence déjà retenue (la plus
// à droite, le balayage venant de la droite) est conservée. Les chaînes de
// même priorité se coupent donc au dernier opérateur : 8-3-2 devient
// (8-3)-2, évaluation de gauche à droite.

use super::priorite::priorite;

/// Opérateur de plus basse priorité hors exclusions, avec son indice.
/// `None` si aucun candidat éligible.
pub fn operateur_le_moins_prioritaire(exp: &[char]) -> Option<(char, usize)> {
    let dernier = exp.len().checked_sub(1)?;

    let mut plus_basse = u8::MAX;
    let mut retenu: Option<(char, usize)> = None;
    let mut profondeur: i32 = 0;

    for i in (0..exp.len()).rev() {
        let c = exp[i];
        if c == ')' {
            profondeur += 1;
        } else if c == '(' {
            profondeur -= 1;
        }
        if profondeur != 0 {
            continue;
        }

        let Some(p) = priorite(c) else { continue };

        if c == '%' && i == dernier {
            continue;
        }
        if c == '-' && (i == 0 || priorite(exp[i - 1]).is_some() || exp[i - 1] == '(') {
            continue;
        }
        if c == '!' && i == dernier {
            continue;
        }
        if c == '√' && (i == 0 || priorite(exp[i - 1]).is_some()) {
            continue;
        }

        if p < plus_basse {
            plus_basse = p;
            retenu = Some((c, i));
        }
    }

    retenu
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupe(s: &str) -> Option<(char, usize)> {
        let exp: Vec<char> = s.chars().collect();
        operateur_le_moins_prioritaire(&exp)
    }

    #[test]
    fn priorite_la_plus_basse_gagne() {
        assert_eq!(coupe("2+3*4"), Some(('+', 1)));
        assert_eq!(coupe("2*3+4"), Some(('+', 3)));
        assert_eq!(coupe("2^3*4"), Some(('*', 3)));
    }

    #[test]
    fn chaine_meme_priorite_coupe_a_droite() {
        assert_eq!(coupe("8-3-2"), Some(('-', 3)));
        assert_eq!(coupe("2-3+4"), Some(('+', 3)));
        assert_eq!(coupe("100/5/2"), Some(('/', 5)));
    }

    #[test]
    fn moins_unaire_exclu() {
        assert_eq!(coupe("-5"), None);
        assert_eq!(coupe("5*-3"), Some(('*', 1)));
        assert_eq!(coupe("5--3"), Some(('-', 1)));
    }

    #[test]
    fn suffixes_exclus() {
        assert_eq!(coupe("5!"), None);
        assert_eq!(coupe("50%"), None);
    }

    #[test]
    fn racine_prefixe_exclue() {
        assert_eq!(coupe("√9"), None);
        assert_eq!(coupe("-√9"), None);
        assert_eq!(coupe("2*√9"), Some(('*', 1)));
        // Racine avec opérande à gauche : seule candidate, retenue.
        assert_eq!(coupe("2√9"), Some(('√', 1)));
    }

    #[test]
    fn tranche_vide_ou_sans_operateur() {
        assert_eq!(coupe(""), None);
        assert_eq!(coupe("123.45"), None);
    }
}
