//! Parsing of generated recommendation lists

/// Minimum number of usable lines in a generated list
pub const MIN_RECOMMENDATIONS: usize = 3;

const BULLETS: &[char] = &['-', '•', '*'];

/// Split a bulleted list into clean lines, dropping bullets and blanks
pub fn parse_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().trim_start_matches(BULLETS).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
