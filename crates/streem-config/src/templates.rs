//! Configuration template for `streem init`.

/// Local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Returns the local configuration template with every setting commented out.
pub fn local_template() -> String {
    let mut result = String::with_capacity(LOCAL_TEMPLATE.len() * 2);
    for line in LOCAL_TEMPLATE.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}
