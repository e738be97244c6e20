use crate::paths::Basename;

/// Where a versioned resume lives: `<documents_directory><name_prefix>_v<version>/<filename>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeLocation {
    pub documents_directory: String,
    pub name_prefix: String,
    pub version: i64,
    pub filename: String,
}

impl Default for ResumeLocation {
    fn default() -> Self {
        ResumeLocation {
            documents_directory: "/home/h/Documents/".to_string(),
            name_prefix: "CV".to_string(),
            version: 3,
            filename: "resume.pdf".to_string(),
        }
    }
}

impl ResumeLocation {
    pub fn folder_name(&self) -> String {
        format!("{}_v{}", self.name_prefix, self.version)
    }

    /// The documents directory is used verbatim, so it is expected to
    /// carry its own trailing separator.
    pub fn path(&self) -> String {
        format!("{}{}{}{}",
                self.documents_directory,
                self.folder_name(),
                std::path::MAIN_SEPARATOR,
                self.filename)
    }

    pub fn file_name(&self) -> String {
        self.path().basename().to_string()
    }
}

impl std::fmt::Display for ResumeLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_folder_name() {
        assert_eq!(ResumeLocation::default().folder_name(), "CV_v3");
    }

    #[cfg(unix)]
    #[test]
    fn default_path() {
        let location = ResumeLocation::default();
        assert_eq!(location.path(), "/home/h/Documents/CV_v3/resume.pdf");
        assert_eq!(location.to_string(), location.path());
    }

    #[test]
    fn default_file_name() {
        assert_eq!(ResumeLocation::default().file_name(), "resume.pdf");
    }

    #[test]
    fn negative_version() {
        let location = ResumeLocation { version: -1, ..Default::default() };
        assert_eq!(location.folder_name(), "CV_v-1");
        assert_eq!(location.file_name(), "resume.pdf");
    }

    #[test]
    fn path_is_never_empty() {
        let location = ResumeLocation {
            documents_directory: String::new(),
            name_prefix: String::new(),
            version: 0,
            filename: "a".to_string(),
        };
        assert!(!location.path().is_empty());
        assert_eq!(location.file_name(), "a");
    }

    proptest! {
        #[test]
        fn version_does_not_change_file_name(version in any::<i64>()) {
            let location = ResumeLocation { version, ..Default::default() };
            prop_assert_eq!(location.file_name(), "resume.pdf");
        }
    }
}
