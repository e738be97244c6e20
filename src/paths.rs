/// Returns the final segment of `path`, i.e. everything after the last
/// path separator. A trailing separator yields an empty string, and a
/// path without any separator is returned unchanged.
pub fn basename(path: &str) -> &str {
    match path.rfind(std::path::is_separator) {
        // Separators are ASCII, so the byte after one is a char boundary.
        Some(index) => &path[index + 1..],
        None => path
    }
}

pub trait Basename {
    fn basename(&self) -> &str;
}

impl Basename for str {
    fn basename(&self) -> &str {
        basename(self)
    }
}

impl Basename for String {
    fn basename(&self) -> &str {
        self.as_str().basename()
    }
}
