//! Per-language separator tables for source code
//!
//! Each table lists separators from coarsest to finest. The final empty
//! separator stands for the character level.

use crate::error::{CleaveError, Result};
use std::path::Path;

const CSHARP: &[&str] = &[
    "\ninterface ",
    "\nenum ",
    "\nimplements ",
    "\ndelegate ",
    "\nevent ",
    "\nclass ",
    "\nabstract ",
    "\npublic ",
    "\nprotected ",
    "\nprivate ",
    "\nstatic ",
    "\nreturn ",
    "\nif ",
    "\ncontinue ",
    "\nfor ",
    "\nforeach ",
    "\nwhile ",
    "\nswitch ",
    "\nbreak ",
    "\ncase ",
    "\nelse ",
    "\ntry ",
    "\nthrow ",
    "\nfinally ",
    "\ncatch ",
    "\n\n",
    "\n",
    " ",
    "",
];

const CPP: &[&str] = &[
    "\nclass ",
    "\nvoid ",
    "\nint ",
    "\nfloat ",
    "\ndouble ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
    "",
];

const GO: &[&str] = &[
    "\nfunc ",
    "\nvar ",
    "\nconst ",
    "\ntype ",
    "\nif ",
    "\nfor ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
    "",
];

const JAVA: &[&str] = &[
    "\nclass ",
    "\npublic ",
    "\nprotected ",
    "\nprivate ",
    "\nstatic ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
    "",
];

const KOTLIN: &[&str] = &[
    "\nclass ",
    "\npublic ",
    "\nprotected ",
    "\nprivate ",
    "\ninternal ",
    "\ncompanion ",
    "\nfun ",
    "\nval ",
    "\nvar ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nwhen ",
    "\ncase ",
    "\nelse ",
    "\n\n",
    "\n",
    " ",
    "",
];

const JAVASCRIPT: &[&str] = &[
    "\nfunction ",
    "\nconst ",
    "\nlet ",
    "\nvar ",
    "\nclass ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\ndefault ",
    "\n\n",
    "\n",
    " ",
    "",
];

const TYPESCRIPT: &[&str] = &[
    "\nenum ",
    "\ninterface ",
    "\nnamespace ",
    "\ntype ",
    "\nclass ",
    "\nfunction ",
    "\nconst ",
    "\nlet ",
    "\nvar ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nswitch ",
    "\ncase ",
    "\ndefault ",
    "\n\n",
    "\n",
    " ",
    "",
];

const PYTHON: &[&str] = &["\nclass ", "\ndef ", "\n\tdef ", "\n\n", "\n", " ", ""];

const RUBY: &[&str] = &[
    "\ndef ",
    "\nclass ",
    "\nif ",
    "\nunless ",
    "\nwhile ",
    "\nfor ",
    "\ndo ",
    "\nbegin ",
    "\nrescue ",
    "\n\n",
    "\n",
    " ",
    "",
];

const RUST: &[&str] = &[
    "\nfn ",
    "\nconst ",
    "\nlet ",
    "\nif ",
    "\nwhile ",
    "\nfor ",
    "\nloop ",
    "\nmatch ",
    "\nconst ",
    "\n\n",
    "\n",
    " ",
    "",
];

const SCALA: &[&str] = &[
    "\nclass ",
    "\nobject ",
    "\ndef ",
    "\nval ",
    "\nvar ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\nmatch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
    "",
];

const SWIFT: &[&str] = &[
    "\nfunc ",
    "\nclass ",
    "\nstruct ",
    "\nenum ",
    "\nif ",
    "\nfor ",
    "\nwhile ",
    "\ndo ",
    "\nswitch ",
    "\ncase ",
    "\n\n",
    "\n",
    " ",
    "",
];

/// A programming language with a built-in separator table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeLanguage {
    /// C#
    CSharp,
    /// C++
    Cpp,
    /// Go
    Go,
    /// Java
    Java,
    /// Kotlin
    Kotlin,
    /// JavaScript
    JavaScript,
    /// TypeScript
    TypeScript,
    /// Python
    Python,
    /// Ruby
    Ruby,
    /// Rust
    Rust,
    /// Scala
    Scala,
    /// Swift
    Swift,
}

impl CodeLanguage {
    /// Every supported language
    pub const ALL: [CodeLanguage; 12] = [
        CodeLanguage::CSharp,
        CodeLanguage::Cpp,
        CodeLanguage::Go,
        CodeLanguage::Java,
        CodeLanguage::Kotlin,
        CodeLanguage::JavaScript,
        CodeLanguage::TypeScript,
        CodeLanguage::Python,
        CodeLanguage::Ruby,
        CodeLanguage::Rust,
        CodeLanguage::Scala,
        CodeLanguage::Swift,
    ];

    /// Separators from coarsest to finest
    pub fn separators(&self) -> &'static [&'static str] {
        match self {
            CodeLanguage::CSharp => CSHARP,
            CodeLanguage::Cpp => CPP,
            CodeLanguage::Go => GO,
            CodeLanguage::Java => JAVA,
            CodeLanguage::Kotlin => KOTLIN,
            CodeLanguage::JavaScript => JAVASCRIPT,
            CodeLanguage::TypeScript => TYPESCRIPT,
            CodeLanguage::Python => PYTHON,
            CodeLanguage::Ruby => RUBY,
            CodeLanguage::Rust => RUST,
            CodeLanguage::Scala => SCALA,
            CodeLanguage::Swift => SWIFT,
        }
    }

    /// File extensions (without the dot) mapped to this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            CodeLanguage::CSharp => &["cs"],
            CodeLanguage::Cpp => &["cpp"],
            CodeLanguage::Go => &["go"],
            CodeLanguage::Java => &["java"],
            CodeLanguage::Kotlin => &["kt"],
            CodeLanguage::JavaScript => &["js", "jsm"],
            CodeLanguage::TypeScript => &["ts", "tsx"],
            CodeLanguage::Python => &["py"],
            CodeLanguage::Ruby => &["rb"],
            CodeLanguage::Rust => &["rs"],
            CodeLanguage::Scala => &["sc", "scala"],
            CodeLanguage::Swift => &["swift"],
        }
    }

    /// Lowercase identifier
    pub fn name(&self) -> &'static str {
        match self {
            CodeLanguage::CSharp => "csharp",
            CodeLanguage::Cpp => "cpp",
            CodeLanguage::Go => "go",
            CodeLanguage::Java => "java",
            CodeLanguage::Kotlin => "kotlin",
            CodeLanguage::JavaScript => "javascript",
            CodeLanguage::TypeScript => "typescript",
            CodeLanguage::Python => "python",
            CodeLanguage::Ruby => "ruby",
            CodeLanguage::Rust => "rust",
            CodeLanguage::Scala => "scala",
            CodeLanguage::Swift => "swift",
        }
    }

    /// Look up a language by extension, ignoring case and a leading dot
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.extensions().contains(&extension.as_str()))
    }

    /// Look up a language from a file name or path
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Path::new(file_name)
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(Self::from_extension)
    }

    /// Look up a language by its identifier (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CleaveError::UnknownLanguage {
                name: name.to_string(),
            })
    }
}

impl std::str::FromStr for CodeLanguage {
    type Err = CleaveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
