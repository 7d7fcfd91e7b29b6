//! Console texts. Prompts carry no trailing newline, the answer is typed on
//! the same line.

use crate::{NameInfo, DEFAULT_NAME};

pub const EXIT_PROMPT: &str = "Presiona Enter para salir...";

pub fn name_prompt() -> String {
    format!("Ingresa tu nombre (o presiona Enter para '{DEFAULT_NAME}'): ")
}

pub fn length_line(info: &NameInfo) -> String {
    format!("Tu nombre tiene {} caracteres.", info.length)
}

pub fn reversed_line(info: &NameInfo) -> String {
    format!("Tu nombre al revés: {}", info.reversed)
}
