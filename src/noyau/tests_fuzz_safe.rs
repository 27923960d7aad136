//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs et profondeurs bornées
//! - budget temps global
//! - invariant clé : AUCUNE entrée ne fait paniquer le noyau ; il sort
//!   toujours un f64 ou une erreur de la taxonomie.

use std::time::{Duration, Instant};

use super::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions ------------------------ */

const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/',
    '^', '!', '%', '√', '(', ')',
];

fn soupe_de_caracteres(rng: &mut Rng, longueur_max: usize) -> String {
    let longueur = rng.pick(longueur_max as u32) as usize;
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn nombre_borne(rng: &mut Rng) -> String {
    let n = rng.pick(100);
    if rng.coin() {
        format!("{n}.{}", rng.pick(100))
    } else {
        format!("{n}")
    }
}

fn expression_bien_formee(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return nombre_borne(rng);
    }

    match rng.pick(8) {
        0 => nombre_borne(rng),
        1 => format!(
            "({}+{})",
            expression_bien_formee(rng, profondeur - 1),
            expression_bien_formee(rng, profondeur - 1)
        ),
        2 => format!(
            "({}-{})",
            expression_bien_formee(rng, profondeur - 1),
            expression_bien_formee(rng, profondeur - 1)
        ),
        3 => format!(
            "({}*{})",
            expression_bien_formee(rng, profondeur - 1),
            expression_bien_formee(rng, profondeur - 1)
        ),
        4 => format!(
            "({}/{})",
            expression_bien_formee(rng, profondeur - 1),
            expression_bien_formee(rng, profondeur - 1)
        ),
        5 => format!("√({})", expression_bien_formee(rng, profondeur - 1)),
        6 => format!("-({})", expression_bien_formee(rng, profondeur - 1)),
        _ => format!("({}%)", nombre_borne(rng)),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_soupe_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..2000 {
        budget(t0, max);
        let exp = soupe_de_caracteres(&mut rng, 40);
        // Ok ou Err, peu importe : l'invariant est l'absence de panic.
        let _ = evaluer(&exp);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        let ea = soupe_de_caracteres(&mut a, 40);
        let eb = soupe_de_caracteres(&mut b, 40);
        assert_eq!(ea, eb);

        let ra = evaluer(&ea);
        let rb = evaluer(&eb);
        match (ra, rb) {
            (Ok(x), Ok(y)) => {
                assert!(x == y || (x.is_nan() && y.is_nan()), "exp={ea:?}")
            }
            (Err(x), Err(y)) => assert_eq!(x, y, "exp={ea:?}"),
            autres => panic!("résultats divergents pour {ea:?}: {autres:?}"),
        }
    }
}

#[test]
fn fuzz_safe_bien_forme_et_idempotence() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFEED_u64);

    let mut finis = 0_usize;

    for _ in 0..300 {
        budget(t0, max);
        let exp = expression_bien_formee(&mut rng, 4);
        let v = evaluer(&exp).unwrap_or_else(|e| panic!("exp={exp:?} err={e}"));

        // Ré-évaluer le rendu décimal d'un résultat fini redonne ce résultat.
        if v.is_finite() {
            finis += 1;
            let relu = evaluer(&format!("{v}")).unwrap();
            assert!(
                (relu - v).abs() <= f64::EPSILON * v.abs().max(1.0),
                "exp={exp:?} v={v} relu={relu}"
            );
        }
    }

    // Si presque rien n'est fini, le générateur ne balaye rien d'utile.
    assert!(finis > 150, "trop peu de résultats finis: {finis}");
}
