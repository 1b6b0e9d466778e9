use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// An optional fallback can be given as `{{ env.VAR | default("...") }}`;
/// it is used when the variable is unset instead of returning an error.
///
/// Expansion runs on the raw text before deserialization, so config structs
/// stay plain `String`/`SecretString`. Comment lines are passed through
/// unchanged, which keeps commented-out secrets from failing the load.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // Group 1: the scope (only `env` is supported), group 2: the variable
        // name, group 3: the optional default value inside default("...")
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*(\w+)\.(\w+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;

        for captures in re().captures_iter(line) {
            let overall = captures.get(0).unwrap();
            let scope = captures.get(1).unwrap().as_str();
            let var_name = captures.get(2).unwrap().as_str();
            let default_value = captures.get(3).map(|m| m.as_str());

            output.push_str(&line[last_end..overall.start()]);

            if scope != "env" {
                return Err(format!("only variables scoped with 'env.' are supported: `{scope}.{var_name}`"));
            }

            match std::env::var(var_name) {
                Ok(value) => output.push_str(&value),
                Err(_) => match default_value {
                    Some(default) => output.push_str(default),
                    None => return Err(format!("environment variable not found: `{var_name}`")),
                },
            }

            last_end = overall.end();
        }

        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
