use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::messages::UNSUPPORTED_FORMAT;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(RequestId);

/// Resume formats the analysis endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", UNSUPPORTED_FORMAT)]
pub struct UnsupportedFormat {
    pub extension: String,
}

impl ResumeFormat {
    pub fn from_file_name(name: &str) -> Result<Self, UnsupportedFormat> {
        let extension = file_extension(name);
        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(UnsupportedFormat { extension }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn all() -> [Self; 2] {
        [Self::Pdf, Self::Docx]
    }
}

/// Text after the last `.`, lower-cased. A name without a dot is returned whole.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_taken_after_last_dot_and_lowercased() {
        assert_eq!(file_extension("cv.final.PDF"), "pdf");
        assert_eq!(file_extension("resume.Docx"), "docx");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("README"), "readme");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn only_pdf_and_docx_are_accepted() {
        assert_eq!(ResumeFormat::from_file_name("a.pdf"), Ok(ResumeFormat::Pdf));
        assert_eq!(ResumeFormat::from_file_name("A.DOCX"), Ok(ResumeFormat::Docx));

        let err = ResumeFormat::from_file_name("x.txt").expect_err("txt rejected");
        assert_eq!(err.extension, "txt");
        assert_eq!(err.to_string(), "Only PDF and DOCX files are supported.");

        assert!(ResumeFormat::from_file_name("resume.doc").is_err());
        assert!(ResumeFormat::from_file_name("pdf.").is_err());
    }
}
