//! Noyau — évaluation (pipeline complet)
//!
//! tokenize -> RPN -> évaluation postfixe
//!
//! Chaque étage retourne un `Result` vérifié par le suivant ; aucune panique
//! ne traverse la frontière d'un étage. Le pipeline est pur : pas d'état
//! entre deux appels, des appelants concurrents peuvent évaluer en parallèle.

use log::debug;

use super::erreurs::ErreurCalc;
use super::fonctions::Fonction;
use super::jetons::{format_jetons, tokenize, Jeton};
use super::rpn::en_rpn;

/// Marqueur d'erreur du rendu texte. L'historique ne persiste jamais un
/// résultat qui commence par ce marqueur.
pub const MARQUEUR_ERREUR: &str = "ERREUR";

/// API publique : évalue une expression et retourne la valeur.
///
/// Exemple:
///   evaluer("3 + 4 * 2") == Ok(11.0)
pub fn evaluer(expr: &str) -> Result<f64, ErreurCalc> {
    let jetons = tokenize(expr.trim())?;
    let rpn = en_rpn(&jetons)?;
    debug!("rpn({expr}) = {}", format_jetons(&rpn));
    eval_rpn(&rpn)
}

/// Rendu texte pour les frontaux (console, JSON) : la valeur affichable,
/// ou `"ERREUR: ..."`. L'appelant reçoit toujours une chaîne, jamais une
/// faute non rattrapée.
pub fn evaluer_texte(expr: &str) -> String {
    match evaluer(expr) {
        Ok(v) => format!("{v}"),
        Err(e) => format!("{MARQUEUR_ERREUR}: {e}"),
    }
}

/// Évaluation postfixe sur pile de valeurs. Un seul passage ; la pile est
/// locale à l'appel et jetée ensuite.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Num(texte) => {
                // parse tardif : "1.2.3" échoue ICI, pas à la tokenisation
                let v = texte
                    .parse::<f64>()
                    .map_err(|_| ErreurCalc::NombreInvalide(texte.clone()))?;
                pile.push(v);
            }

            Jeton::Ident(nom) => {
                // en_rpn garantit une fonction connue ; on revalide par contrat
                let f = Fonction::depuis_nom(nom)
                    .ok_or_else(|| ErreurCalc::JetonInconnu(nom.clone()))?;
                let x = pile
                    .pop()
                    .ok_or_else(|| ErreurCalc::FonctionSansArgument(nom.clone()))?;
                pile.push(f.appliquer(x)?);
            }

            Jeton::LPar | Jeton::RPar => return Err(ErreurCalc::ExpressionInvalide),

            op => {
                if pile.len() < 2 {
                    return Err(ErreurCalc::OperandesInsuffisantes);
                }
                let b = pile.pop().unwrap();
                let a = pile.pop().unwrap();
                pile.push(appliquer_operateur(op, a, b)?);
            }
        }
    }

    // exactement UNE valeur doit rester
    if pile.len() != 1 {
        return Err(ErreurCalc::ExpressionInvalide);
    }
    Ok(pile.pop().unwrap())
}

fn appliquer_operateur(op: &Jeton, a: f64, b: f64) -> Result<f64, ErreurCalc> {
    match op {
        Jeton::Plus => Ok(a + b),
        Jeton::Minus => Ok(a - b),
        Jeton::Star => Ok(a * b),

        Jeton::Slash => {
            if b == 0.0 {
                Err(ErreurCalc::DivisionParZero)
            } else {
                Ok(a / b)
            }
        }

        // pas de garde zéro ici : reste IEEE (x % 0 == NaN), cf. DESIGN.md
        Jeton::Percent => Ok(a % b),

        Jeton::Caret => Ok(a.powf(b)),

        _ => Err(ErreurCalc::ExpressionInvalide),
    }
}
