//! Text extraction from resume documents

use crate::error::Result;
use crate::input::document::DocumentHandle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait TextExtractor {
    fn extract(&self, document: &DocumentHandle) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Decodes the raw bytes as UTF-8, replacing invalid sequences.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, document: &DocumentHandle) -> Result<String> {
        let bytes = document.read_bytes().await?;
        Ok(decode_text(bytes))
    }
}

pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

const SYNTHETIC_SECTIONS: &[&str] = &[
    "Education",
    "Work Experience",
    "Skills",
    "Projects",
    "Certifications",
    "Achievements",
];

const SYNTHETIC_SKILLS: &[&str] = &[
    "JavaScript", "React", "Node.js", "TypeScript", "HTML", "CSS",
    "Python", "Java", "C++", "AWS", "Azure", "GCP",
    "Git", "Docker", "Kubernetes", "REST API", "GraphQL",
    "MongoDB", "SQL", "PostgreSQL", "Redis", "Elasticsearch",
    "Leadership", "Project Management", "Agile", "Scrum",
];

const SECTION_PROBABILITY: f64 = 0.7;
const SKILL_PROBABILITY: f64 = 0.4;

/// Stand-in for binary formats that cannot be parsed here.
///
/// Produces a short pseudo-resume derived only from the document's name and
/// size, so the same document always yields the same text. Swap in a real
/// PDF/Word parser through `InputManager::with_binary_extractor`.
pub struct SyntheticTextExtractor;

impl TextExtractor for SyntheticTextExtractor {
    async fn extract(&self, document: &DocumentHandle) -> Result<String> {
        // Read anyway so an unreadable document still surfaces as a read error.
        document.read_bytes().await?;
        Ok(synthesize_text(&document.file_name, document.size))
    }
}

/// Selects the experience sentence template.
///
/// The name is measured in UTF-16 code units.
pub fn template_seed(file_name: &str, size: u64) -> u64 {
    file_name.encode_utf16().count() as u64 + size % 1000
}

fn rng_seed(file_name: &str, size: u64) -> u64 {
    // FNV-1a over the name, then fold in the size
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in file_name.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash ^ size.wrapping_mul(0x9e37_79b9_7f4a_7c15)
}

pub fn synthesize_text(file_name: &str, size: u64) -> String {
    let mut rng = StdRng::seed_from_u64(rng_seed(file_name, size));

    let sections: Vec<&str> = SYNTHETIC_SECTIONS
        .iter()
        .copied()
        .filter(|_| rng.gen_bool(SECTION_PROBABILITY))
        .collect();
    let skills: Vec<&str> = SYNTHETIC_SKILLS
        .iter()
        .copied()
        .filter(|_| rng.gen_bool(SKILL_PROBABILITY))
        .collect();

    let mut text = sections.join("\n\n");
    text.push_str("\n\nSkills: ");
    text.push_str(&skills.join(", "));
    text.push_str("\n\nExperience: ");

    match template_seed(file_name, size) % 3 {
        0 => {
            text.push_str("Developed multiple applications using ");
            text.push_str(&skills[..skills.len().min(3)].join(" and "));
        }
        1 => {
            text.push_str("Led a team of engineers in building ");
            text.push_str(&skills[..skills.len().min(2)].join(" and "));
            text.push_str(" systems");
        }
        _ => {
            text.push_str("Designed and implemented ");
            text.push_str(&skills[..skills.len().min(4)].join(", "));
            text.push_str(" solutions");
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::file_detector::MediaType;

    #[tokio::test]
    async fn test_plain_text_is_verbatim() {
        let content = "Line one\n\tTabbed\u{00A0}line";
        let handle = DocumentHandle::from_bytes("a.txt", MediaType::PlainText, content.as_bytes().to_vec());
        let text = PlainTextExtractor.extract(&handle).await.unwrap();
        assert_eq!(text, content);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let handle = DocumentHandle::from_bytes("a.txt", MediaType::PlainText, vec![b'o', b'k', 0xff]);
        let text = PlainTextExtractor.extract(&handle).await.unwrap();
        assert_eq!(text, "ok\u{FFFD}");
    }

    #[test]
    fn test_synthetic_text_is_deterministic() {
        let first = synthesize_text("jane_doe_resume.pdf", 48_213);
        let second = synthesize_text("jane_doe_resume.pdf", 48_213);
        assert_eq!(first, second);
    }

    #[test]
    fn test_synthetic_text_layout() {
        let text = synthesize_text("resume.pdf", 1234);
        assert!(text.contains("\n\nSkills: "));
        assert!(text.contains("\n\nExperience: "));
    }

    #[test]
    fn test_template_follows_seed() {
        // "a.pdf" has 5 chars; 5 + 1 = 6 -> template 0
        assert_eq!(template_seed("a.pdf", 1), 6);
        assert!(synthesize_text("a.pdf", 1).contains("Experience: Developed multiple applications using "));
        // 5 + 2 = 7 -> template 1
        let text = synthesize_text("a.pdf", 2);
        assert!(text.contains("Experience: Led a team of engineers in building "));
        assert!(text.ends_with(" systems"));
        // 5 + 3 = 8 -> template 2
        let text = synthesize_text("a.pdf", 3);
        assert!(text.contains("Experience: Designed and implemented "));
        assert!(text.ends_with(" solutions"));
    }

    #[test]
    fn test_template_seed_wraps_size() {
        assert_eq!(template_seed("cv.pdf", 1_000), 6);
        assert_eq!(template_seed("cv.pdf", 2_999), 6 + 999);
    }

    #[test]
    fn test_template_seed_counts_utf16_units() {
        // U+1F4C4 is one char but a surrogate pair in UTF-16
        assert_eq!(template_seed("\u{1F4C4}.pdf", 0), 6);
        assert_eq!(template_seed("résumé.pdf", 0), 10);
    }

    #[tokio::test]
    async fn test_synthetic_extractor_ignores_content() {
        let a = DocumentHandle::from_bytes("cv.pdf", MediaType::Pdf, vec![1, 2, 3]);
        let b = DocumentHandle::from_bytes("cv.pdf", MediaType::Pdf, vec![9, 9, 9]);
        let text_a = SyntheticTextExtractor.extract(&a).await.unwrap();
        let text_b = SyntheticTextExtractor.extract(&b).await.unwrap();
        assert_eq!(text_a, text_b);
    }
}
