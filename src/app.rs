// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les deux frontaux (menu console + serveur web)
// - Aucun calcul ici : les frontaux passent tout au noyau et à l'historique,
//   et ne font que présenter le résultat.

pub mod menu;
pub mod serveur;
