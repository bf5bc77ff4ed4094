pub const GENERATION_SYSTEM: &str = include_str!("../data/prompts/generation_system.txt");
pub const GENERATION_USER: &str = include_str!("../data/prompts/generation_user.txt");
pub const TRANSLATE_SYSTEM: &str = include_str!("../data/prompts/translate_system.txt");
pub const TRANSLATE_USER: &str = include_str!("../data/prompts/translate_user.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
