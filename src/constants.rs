pub mod limits {
    pub const MIN_FILES_PER_DIR: usize = 3;
    pub const MAX_FILES_PER_DIR: usize = 6;
}

pub const DOCUMENT_EXTENSION: &str = "md";
pub const NAME_SEPARATOR: char = '.';
pub const NAMING_PATTERN: &str = "developer-name.programming-language.topic.md";
pub const BANNER_WIDTH: usize = 50;

pub const DEFAULT_IDENTITIES: &[&str] = &[
    "ghonDou",
    "sarahLee",
    "alexChen",
    "mariaSilva",
    "johnSmith",
    "linaWang",
    "davidJones",
    "annaKowalski",
    "rajPatel",
    "emmaWhite",
];

pub const DEFAULT_DIRECTORIES: &[&str] = &["eyes", "fleet", "flex", "ido", "mind"];

pub const DEFAULT_LANGUAGES: &[(&str, &[&str])] = &[
    (
        "golang",
        &[
            "code-styling",
            "error-handling",
            "testing",
            "concurrency",
            "performance",
        ],
    ),
    (
        "python",
        &["code-styling", "testing", "packaging", "performance", "async"],
    ),
    (
        "javascript",
        &["code-styling", "testing", "async", "modules", "performance"],
    ),
    (
        "react",
        &[
            "components",
            "hooks",
            "state-management",
            "performance",
            "testing",
        ],
    ),
];
