#[derive(Debug, Clone)]
pub struct GuidelineTemplate {
    pub language: &'static str,
    pub topic: &'static str,
    pub body: &'static str,
}

pub fn get_bundled_guidelines() -> Vec<GuidelineTemplate> {
    vec![
        GuidelineTemplate {
            language: "golang",
            topic: "code-styling",
            body: include_str!("guidelines/golang/code-styling.md"),
        },
        GuidelineTemplate {
            language: "golang",
            topic: "error-handling",
            body: include_str!("guidelines/golang/error-handling.md"),
        },
        GuidelineTemplate {
            language: "golang",
            topic: "testing",
            body: include_str!("guidelines/golang/testing.md"),
        },
        GuidelineTemplate {
            language: "golang",
            topic: "concurrency",
            body: include_str!("guidelines/golang/concurrency.md"),
        },
        GuidelineTemplate {
            language: "golang",
            topic: "performance",
            body: include_str!("guidelines/golang/performance.md"),
        },
        GuidelineTemplate {
            language: "python",
            topic: "code-styling",
            body: include_str!("guidelines/python/code-styling.md"),
        },
        GuidelineTemplate {
            language: "python",
            topic: "testing",
            body: include_str!("guidelines/python/testing.md"),
        },
        GuidelineTemplate {
            language: "python",
            topic: "packaging",
            body: include_str!("guidelines/python/packaging.md"),
        },
        GuidelineTemplate {
            language: "python",
            topic: "performance",
            body: include_str!("guidelines/python/performance.md"),
        },
        GuidelineTemplate {
            language: "python",
            topic: "async",
            body: include_str!("guidelines/python/async.md"),
        },
        GuidelineTemplate {
            language: "javascript",
            topic: "code-styling",
            body: include_str!("guidelines/javascript/code-styling.md"),
        },
        GuidelineTemplate {
            language: "javascript",
            topic: "testing",
            body: include_str!("guidelines/javascript/testing.md"),
        },
        GuidelineTemplate {
            language: "react",
            topic: "components",
            body: include_str!("guidelines/react/components.md"),
        },
        GuidelineTemplate {
            language: "react",
            topic: "hooks",
            body: include_str!("guidelines/react/hooks.md"),
        },
    ]
}
