// src/main.rs
//
// Calculatrice scientifique — point d'entrée
// -------------------------------------------
// Deux frontaux au choix, même noyau, même historique :
// - par défaut             : menu console interactif
// - sous-commande serveur  : JSON sur HTTP
//
// La journalisation se pilote par RUST_LOG (env_logger).

use clap::{Parser, Subcommand};

mod app;
mod historique;
mod noyau;

use historique::{Historique, BASE_DEFAUT};

#[derive(Parser)]
#[command(about = "Calculatrice scientifique (console + web) avec historique SQLite")]
struct Args {
    /// Fichier SQLite de l'historique
    #[arg(long, default_value = BASE_DEFAUT)]
    base: String,

    #[command(subcommand)]
    commande: Option<Commande>,
}

#[derive(Subcommand)]
enum Commande {
    /// Lance le serveur web JSON
    Serveur {
        /// Adresse d'écoute
        #[arg(long, default_value = "127.0.0.1:8000")]
        adresse: String,
    },
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let historique = match Historique::ouvrir(&args.base) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("ouverture de l'historique impossible ({}): {e}", args.base);
            std::process::exit(1);
        }
    };

    match args.commande {
        Some(Commande::Serveur { adresse }) => {
            if let Err(e) = app::serveur::lancer(&adresse, &historique) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        None => app::menu::lancer(&historique),
    }
}
