use crate::Name;

/// Returns the greeting for `name`, e.g. `Hola, Ana!`.
///
/// The name is interpolated verbatim, without any escaping.
pub fn greet(name: &Name) -> String {
    format!("Hola, {}!", name.as_str())
}
