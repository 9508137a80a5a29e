// src/noyau/fonctions.rs
//
// Table des fonctions unaires.
// - sin / cos / tan : argument en DEGRÉS
// - log : logarithme népérien
// - factorial : domaine invalide => NaN, jamais d'erreur dure
//   (asymétrie voulue : sqrt et log, eux, échouent dur hors domaine)

use super::erreurs::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Sqrt,
    Factorielle,
}

impl Fonction {
    /// Résout un identifiant en fonction connue. La résolution se fait une
    /// fois, au passage RPN — pas de comparaison de chaînes à l'évaluation.
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        match nom {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "log" => Some(Fonction::Log),
            "sqrt" => Some(Fonction::Sqrt),
            "factorial" => Some(Fonction::Factorielle),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Sqrt => "sqrt",
            Fonction::Factorielle => "factorial",
        }
    }

    /// Applique la fonction, avec validation EXPLICITE du domaine avant le
    /// calcul (pas de calcul "pour voir" suivi d'un rattrapage).
    pub fn appliquer(self, x: f64) -> Result<f64, ErreurCalc> {
        match self {
            Fonction::Sin => Ok(x.to_radians().sin()),
            Fonction::Cos => Ok(x.to_radians().cos()),
            Fonction::Tan => Ok(x.to_radians().tan()),

            Fonction::Log => {
                if x <= 0.0 {
                    Err(self.hors_domaine(x))
                } else {
                    Ok(x.ln())
                }
            }

            Fonction::Sqrt => {
                if x < 0.0 {
                    Err(self.hors_domaine(x))
                } else {
                    Ok(x.sqrt())
                }
            }

            Fonction::Factorielle => Ok(factorielle(x)),
        }
    }

    fn hors_domaine(self, x: f64) -> ErreurCalc {
        ErreurCalc::ArgumentInvalide {
            fonction: self.nom(),
            argument: x,
        }
    }
}

/// n! pour x entier >= 0 ; NaN sinon.
/// NaN en entrée échoue les deux gardes et ressort NaN.
fn factorielle(x: f64) -> f64 {
    if x >= 0.0 && x.fract() == 0.0 && x.is_finite() {
        let n = x as u64;
        (1..=n).fold(1.0_f64, |acc, k| acc * k as f64)
    } else {
        f64::NAN
    }
}
