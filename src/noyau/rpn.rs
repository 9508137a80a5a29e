// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Num : sortie directe (les littéraux négatifs sont déjà fusionnés aux jetons)
// - Ident : fonction connue => pile (elle sort à la parenthèse fermante),
//   identifiant inconnu => erreur immédiate
// - Opérateur : dépile tant que le sommet est un opérateur de précédence >=
//   => TOUS les opérateurs sont associatifs à gauche, '^' compris.
//   2^3^2 = (2^3)^2 = 64 : c'est un contrat de comportement, à reproduire
//   tel quel même si la convention mathématique voudrait l'inverse.

use super::erreurs::ErreurCalc;
use super::fonctions::Fonction;
use super::jetons::Jeton;

/// Classe de précédence : `+ -` = 1, `* / %` = 2, `^` = 3.
fn precedence(t: &Jeton) -> i32 {
    match t {
        Jeton::Plus | Jeton::Minus => 1,
        Jeton::Star | Jeton::Slash | Jeton::Percent => 2,
        Jeton::Caret => 3,
        _ => 0,
    }
}

fn est_operateur(t: &Jeton) -> bool {
    matches!(
        t,
        Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash | Jeton::Percent | Jeton::Caret
    )
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Ident("sin"), LPar, Num("90"), RPar]
///   rpn:    [Num("90"), Ident("sin")]
///
/// Déterministe : même suite de jetons => même RPN, à chaque appel.
pub fn en_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurCalc> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Num(_) => out.push(jeton),

            Jeton::Ident(nom) => {
                if Fonction::depuis_nom(&nom).is_some() {
                    // fonction : en pile, elle sortira après son argument
                    ops.push(Jeton::Ident(nom));
                } else {
                    return Err(ErreurCalc::JetonInconnu(nom));
                }
            }

            Jeton::LPar => ops.push(jeton),

            Jeton::RPar => {
                // dépile jusqu'à '('
                loop {
                    match ops.pop() {
                        Some(Jeton::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalc::ParentheseOrpheline),
                    }
                }

                // une fonction au sommet se lie à l'opérande qu'on vient
                // de fermer : elle sort immédiatement
                if let Some(Jeton::Ident(_)) = ops.last() {
                    out.push(ops.pop().unwrap());
                }
            }

            _ => {
                // opérateur binaire : dépile à précédence >= (jamais au
                // travers d'une '(' ni d'une fonction), puis empile
                while let Some(top) = ops.last() {
                    if est_operateur(top) && precedence(top) >= precedence(&jeton) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(jeton);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::LPar | Jeton::RPar) {
            return Err(ErreurCalc::ParentheseOrpheline);
        }
        out.push(op);
    }

    Ok(out)
}
