pub const DESCRIBE: &str = include_str!("../data/prompts/describe.txt");
pub const RESTYLE: &str = include_str!("../data/prompts/restyle.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!DESCRIBE.is_empty());
        assert!(!RESTYLE.is_empty());
    }

    #[test]
    fn test_restyle_has_placeholders() {
        assert!(RESTYLE.contains("{{description}}"));
        assert!(RESTYLE.contains("{{style}}"));
    }

    #[test]
    fn test_restyle_template_has_no_trailing_newline() {
        // The composed prompt must end exactly with the fixed suffix text.
        assert!(RESTYLE.ends_with("high detail."));
    }
}
