//! Maps a `(language, topic)` pair to guideline markdown.
//!
//! Pairs with a bundled document resolve to it verbatim; every other pair
//! resolves to the generic skeleton rendered by [`render_fallback`].

pub mod guidelines;

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub use guidelines::{get_bundled_guidelines, GuidelineTemplate};

pub static REGISTRY: Lazy<TemplateRegistry> = Lazy::new(TemplateRegistry::bundled);

type ContentFn = Box<dyn Fn() -> String + Send + Sync>;
type FallbackFn = fn(&str, &str) -> String;

pub struct TemplateRegistry {
    entries: HashMap<String, HashMap<String, ContentFn>>,
    fallback: FallbackFn,
}

/// Resolved document text and whether it came from the generic skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDocument {
    pub content: String,
    pub used_fallback: bool,
}

impl TemplateRegistry {
    pub fn new(fallback: FallbackFn) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    pub fn bundled() -> Self {
        let mut registry = Self::new(render_fallback);
        for template in get_bundled_guidelines() {
            let body = template.body;
            registry.register(template.language, template.topic, move || body.to_string());
        }
        registry
    }

    pub fn register<F>(&mut self, language: &str, topic: &str, content: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.entries
            .entry(language.to_string())
            .or_default()
            .insert(topic.to_string(), Box::new(content));
    }

    fn exact(&self, language: &str, topic: &str) -> Option<&ContentFn> {
        self.entries.get(language)?.get(topic)
    }

    pub fn has_exact(&self, language: &str, topic: &str) -> bool {
        self.exact(language, topic).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn resolve(&self, language: &str, topic: &str) -> String {
        self.resolve_document(language, topic).content
    }

    pub fn resolve_document(&self, language: &str, topic: &str) -> ResolvedDocument {
        match self.exact(language, topic) {
            Some(content) => ResolvedDocument {
                content: content(),
                used_fallback: false,
            },
            None => ResolvedDocument {
                content: (self.fallback)(language, topic),
                used_fallback: true,
            },
        }
    }
}

/// `code-styling` -> `code styling`
pub fn humanize_topic(topic: &str) -> String {
    topic.replace('-', " ")
}

/// Upper-cases the first letter of each word, lower-cases the rest.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

pub fn render_fallback(language: &str, topic: &str) -> String {
    let display_language = title_case(language);
    let display_topic = humanize_topic(topic);

    format!(
        "# {display_language} {display_topic} Guidelines

## Overview
This document contains best practices and guidelines for {display_topic} in {display_language}.

## Key Principles
1. Write clean, readable code
2. Follow established conventions
3. Test your code thoroughly
4. Document important decisions
5. Keep learning and improving

## Best Practices
- Follow the community standards for {language}
- Use appropriate tools and frameworks
- Write comprehensive tests
- Document your code properly
- Review code regularly

## Resources
- Official {language} documentation
- Community style guides
- Popular frameworks and libraries
- Testing tools and practices

## Common Pitfalls
- Not following established patterns
- Ignoring performance implications
- Insufficient testing
- Poor error handling
- Lack of documentation

---
*This is a template document. Please customize with specific {language} {topic} guidelines.*
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;

    #[test]
    fn test_exact_golang_styling() {
        let content = REGISTRY.resolve("golang", "code-styling");
        assert!(content.contains("Golang Code Styling Guidelines"));
        assert!(REGISTRY.has_exact("golang", "code-styling"));
    }

    #[test]
    fn test_fallback_react_performance() {
        assert!(!REGISTRY.has_exact("react", "performance"));
        let content = REGISTRY.resolve("react", "performance");
        assert!(content.starts_with("# React performance Guidelines\n"));
        assert!(content.contains("guidelines for performance in React."));
        assert!(content.contains("customize with specific react performance guidelines"));
    }

    #[test]
    fn test_fallback_humanizes_hyphenated_topic() {
        let content = REGISTRY.resolve("react", "state-management");
        assert!(content.starts_with("# React state management Guidelines"));
        for section in [
            "## Overview",
            "## Key Principles",
            "## Best Practices",
            "## Common Pitfalls",
        ] {
            assert!(content.contains(section), "missing {}", section);
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        for (language, topic) in [("python", "async"), ("javascript", "modules")] {
            assert_eq!(
                REGISTRY.resolve(language, topic),
                REGISTRY.resolve(language, topic)
            );
        }
    }

    #[test]
    fn test_every_catalog_pair_resolves() {
        let catalog = Catalog::builtin();
        for language in &catalog.languages {
            for topic in &language.topics {
                let content = REGISTRY.resolve(&language.name, topic);
                assert!(content.starts_with("# "), "{}/{}", language.name, topic);
            }
        }
    }

    #[test]
    fn test_bundled_pairs_are_in_builtin_catalog() {
        let catalog = Catalog::builtin();
        for template in get_bundled_guidelines() {
            let topics = catalog.topics_for(template.language).unwrap();
            assert!(topics.iter().any(|t| t == template.topic));
        }
        assert_eq!(REGISTRY.len(), 14);
    }

    #[test]
    fn test_custom_registry_entry() {
        let mut registry = TemplateRegistry::new(render_fallback);
        assert!(registry.is_empty());
        registry.register("rust", "ownership", || "# Borrow it\n".to_string());
        assert_eq!(registry.resolve("rust", "ownership"), "# Borrow it\n");
        assert!(registry
            .resolve("rust", "error-handling")
            .starts_with("# Rust error handling Guidelines"));
    }

    #[test]
    fn test_resolve_document_reports_source() {
        let exact = REGISTRY.resolve_document("python", "packaging");
        assert!(!exact.used_fallback);
        assert!(exact.content.contains("Python Packaging Guidelines"));

        let fallback = REGISTRY.resolve_document("javascript", "modules");
        assert!(fallback.used_fallback);
        assert_eq!(fallback.content, REGISTRY.resolve("javascript", "modules"));
        assert!(!REGISTRY.has_exact("javascript", "modules"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("golang"), "Golang");
        assert_eq!(title_case("javaScript"), "Javascript");
        assert_eq!(title_case("objective-c"), "Objective-C");
        assert_eq!(title_case(""), "");
    }
}
