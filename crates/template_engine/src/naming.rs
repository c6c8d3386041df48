//! Sample-name sanitization and output file naming

use std::sync::OnceLock;

use regex_lite::Regex;

/// Fixed name of the minimum-information readme output
pub const MIMS_README_FILENAME: &str = "README_MIMS_metadata.csv";

fn non_word_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W+").expect("valid pattern"))
}

/// Join parts with `sep`, then collapse every run of non-word characters
/// into a single `sep`
///
/// Idempotent: sanitizing an already-sanitized string changes nothing.
pub fn sanitize_join(parts: &[String], sep: char) -> String {
    let joined = parts.join(&sep.to_string());
    non_word_runs()
        .replace_all(&joined, sep.to_string().as_str())
        .into_owned()
}

/// Name of the main template file for one sample batch
pub fn template_filename(prefix: &str, packages: &[String], samples: usize) -> String {
    format!(
        "{}_{}_{}_samples.csv",
        prefix,
        sanitize_join(packages, '_'),
        samples
    )
}

/// Name of the package-fields readme file for one selection
pub fn package_readme_filename(packages: &[String]) -> String {
    format!("README_{}_metadata.csv", sanitize_join(packages, '_'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn packages(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_sanitize_join_single() {
        assert_eq!(sanitize_join(&packages(&["soil"]), '.'), "soil");
    }

    #[test]
    fn test_sanitize_join_multiple() {
        assert_eq!(
            sanitize_join(&packages(&["soil", "water"]), '.'),
            "soil.water"
        );
    }

    #[test]
    fn test_sanitize_join_collapses_non_word_runs() {
        assert_eq!(
            sanitize_join(&packages(&["microbial mat/biofilm"]), '.'),
            "microbial.mat.biofilm"
        );
        assert_eq!(
            sanitize_join(&packages(&["wastewater/sludge", "misc environment"]), '_'),
            "wastewater_sludge_misc_environment"
        );
    }

    #[test]
    fn test_template_filename() {
        assert_eq!(
            template_filename("Study1", &packages(&["soil", "water"]), 0),
            "Study1_soil_water_0_samples.csv"
        );
    }

    #[test]
    fn test_package_readme_filename() {
        assert_eq!(
            package_readme_filename(&packages(&["human-gut"])),
            "README_human_gut_metadata.csv"
        );
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(s in ".{0,40}") {
            let once = sanitize_join(&[s], '.');
            let twice = sanitize_join(&[once.clone()], '.');
            prop_assert_eq!(once, twice);
        }
    }
}
