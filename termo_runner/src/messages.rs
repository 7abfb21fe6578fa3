//! Message content shown to the player.
//!
//! Kept apart from the event loop so the narrative text can be swapped
//! without touching anything else.

pub const WIN: &str =
    "Tudo pode ser usado para avançar entre as pistas; guarde-as, pois serão importantes.";

pub const INCOMPLETE: &str = "Palavra incompleta!";

pub const RESTART: &str = "enter reinicia · esc sai";

pub fn loss(answer: &str) -> String {
    format!("Fim de jogo! A palavra era: {answer}")
}
