use std::path::Path;

use thiserror::Error;

/// Built-in skills inventory used when no skills file is configured.
pub const DEFAULT_SKILLS: &[&str] = &["Python", "Machine Learning", "Data Science", "React", "SQL"];

#[derive(Debug, Error)]
pub enum SkillsFileError {
    #[error("failed to read skills file: {0}")]
    Io(#[from] std::io::Error),
    #[error("skills file is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn default_skills() -> Vec<String> {
    DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
}

/// Load a skills inventory from a JSON file (an array of strings). Callers
/// fall back to the default list on failure.
pub fn load_skills_file(path: impl AsRef<Path>) -> Result<Vec<String>, SkillsFileError> {
    let raw = std::fs::read_to_string(path)?;
    let skills: Vec<String> = serde_json::from_str(&raw)?;
    Ok(skills)
}

/// Skills present in the resume by case-insensitive containment, reported
/// in their inventory casing and order.
pub fn find_skills(resume_text: &str, skills: &[String]) -> Vec<String> {
    let resume_lower = resume_text.to_lowercase();
    skills
        .iter()
        .filter(|skill| resume_lower.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Share of the inventory found, scaled to 0–100 and rounded; zero for an
/// empty inventory.
pub fn skill_score(found: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (found as f64 / total as f64 * 100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn finds_skills_case_insensitively() {
        let skills = default_skills();
        let found = find_skills("Built PYTHON pipelines over sql warehouses", &skills);
        assert_eq!(found, vec!["Python".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn multi_word_skills_match_as_substrings() {
        let skills = default_skills();
        let found = find_skills("Focus on machine learning systems", &skills);
        assert!(found.contains(&"Machine Learning".to_string()));
    }

    #[test]
    fn score_is_rounded_share() {
        assert_eq!(skill_score(2, 5), 40.0);
        assert_eq!(skill_score(1, 3), 33.0);
        assert_eq!(skill_score(0, 0), 0.0);
    }

    #[test]
    fn loads_skills_from_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["Rust", "Go", "Terraform"]"#).unwrap();

        let skills = load_skills_file(file.path()).unwrap();
        assert_eq!(skills.len(), 3);
        assert_eq!(skills[0], "Rust");
    }

    #[test]
    fn malformed_skills_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "an array"}}"#).unwrap();

        assert!(matches!(
            load_skills_file(file.path()),
            Err(SkillsFileError::Parse(_))
        ));
    }
}
