//! Noyau d'évaluation
//!
//! Organisation interne :
//! - erreurs.rs   : erreurs typées (un seul enum pour les trois étages)
//! - jetons.rs    : tokenisation (moins unaire résolu au balayage)
//! - fonctions.rs : table des fonctions unaires (degrés, log népérien…)
//! - rpn.rs       : shunting-yard (infix -> postfix)
//! - eval.rs      : évaluation postfixe + pipeline complet
//!
//! Le noyau est pur et synchrone : pas d'état partagé, pas d'E/S.

pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_calculs;


// API publique minimale
pub use erreurs::ErreurCalc;
pub use eval::{evaluer, evaluer_texte, MARQUEUR_ERREUR};
