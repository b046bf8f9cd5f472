//! Summary rendering: sentence cleanup, section grouping, console and file layouts

use crate::segmenter::{contains_marker, ends_with_terminal};

/// Clean one selected sentence for display.
///
/// Trims, collapses whitespace runs, reattaches possessive `'s`, and appends
/// a period when the sentence has no terminal mark.
pub fn format_sentence(text: &str) -> String {
    let mut formatted = text.split_whitespace().collect::<Vec<_>>().join(" ");
    formatted = formatted.replace(" 's", "'s").replace(" \u{2019}s", "\u{2019}s");
    if !formatted.is_empty() && !ends_with_terminal(&formatted) {
        formatted.push('.');
    }
    formatted
}

/// Split sentences into sections, starting a new one at every sentence that
/// contains a section marker. Never yields an empty section.
pub fn group_sections<S: AsRef<str>>(sentences: &[S], markers: &[String]) -> Vec<Vec<String>> {
    let mut sections: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for sentence in sentences {
        let sentence = sentence.as_ref();
        if contains_marker(sentence, markers) && !current.is_empty() {
            sections.push(std::mem::take(&mut current));
        }
        current.push(sentence.to_string());
    }
    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

/// Console layout: a blank line before each section, bullets on every sentence
pub fn render_console(sections: &[Vec<String>]) -> String {
    render(sections, "\u{2022} ")
}

/// File layout: a blank line before each section, one plain sentence per line
pub fn render_file(sections: &[Vec<String>]) -> String {
    render(sections, "")
}

fn render(sections: &[Vec<String>], bullet: &str) -> String {
    let mut out = String::new();
    for section in sections {
        out.push('\n');
        for sentence in section {
            out.push_str(bullet);
            out.push_str(sentence);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::DEFAULT_SECTION_MARKERS;

    fn markers() -> Vec<String> {
        DEFAULT_SECTION_MARKERS.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_format_sentence_cleanup() {
        assert_eq!(format_sentence("  The   tool 's output  "), "The tool's output.");
        assert_eq!(format_sentence("Is it fast?"), "Is it fast?");
        assert_eq!(format_sentence("He said \"stop.\""), "He said \"stop.\"");
        assert_eq!(format_sentence("Key Features"), "Key Features.");
        assert_eq!(format_sentence("   "), "");
    }

    #[test]
    fn test_group_sections() {
        let sentences = [
            "Intro one.",
            "Intro two.",
            "Key Features include speed.",
            "It is small.",
            "In conclusion it works.",
        ];
        let sections = group_sections(&sentences, &markers());
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0], vec!["Intro one.", "Intro two."]);
        assert_eq!(sections[1].len(), 2);
        assert_eq!(sections[2], vec!["In conclusion it works."]);
    }

    #[test]
    fn test_leading_marker_does_not_create_empty_section() {
        let sections = group_sections(&["Key Features are many.", "Speed."], &markers());
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_render_layouts() {
        let sections = vec![
            vec!["A.".to_string(), "B.".to_string()],
            vec!["In conclusion C.".to_string()],
        ];
        assert_eq!(
            render_console(&sections),
            "\n\u{2022} A.\n\u{2022} B.\n\n\u{2022} In conclusion C.\n"
        );
        assert_eq!(render_file(&sections), "\nA.\nB.\n\nIn conclusion C.\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_file(&[]), "");
    }
}
