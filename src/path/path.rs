//! Path builder.

use std::fmt;

/// Path identifies the position of a value inside the matched tree.
///
/// Children are built by plain concatenation, so a key directly below the
/// root produces a doubled slash (`//key`). [`Path::normalized`] strips it
/// before a path is handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(String);

impl Path {
    /// Returns the root path `/`.
    pub fn root() -> Self {
        Path("/".to_string())
    }

    /// Returns the path of an object member.
    pub fn key(&self, key: &str) -> Path {
        let mut s = String::with_capacity(self.0.len() + key.len() + 1);
        s.push_str(&self.0);
        s.push('/');
        s.push_str(key);
        Path(s)
    }

    /// Returns the path of an array element.
    pub fn index(&self, index: usize) -> Path {
        Path(format!("{}[{}]", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path as reported to callers.
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }
}

/// Strips one leading slash from paths starting with `//`.
pub fn normalize(path: &str) -> String {
    match path.strip_prefix('/') {
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::root()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Path> for String {
    fn from(p: Path) -> Self {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        assert_eq!(Path::root().as_str(), "/");
        assert_eq!(Path::root().normalized(), "/");
    }

    #[test]
    fn test_nested_keys() {
        let p = Path::root().key("a").key("b");
        assert_eq!(p.as_str(), "//a/b");
        assert_eq!(p.normalized(), "/a/b");
    }

    #[test]
    fn test_indices() {
        assert_eq!(Path::root().index(1).normalized(), "/[1]");
        assert_eq!(Path::root().key("items").index(0).key("id").normalized(), "/items[0]/id");
        assert_eq!(Path::root().index(2).index(3).as_str(), "/[2][3]");
    }

    #[test]
    fn test_normalize_strips_only_one_slash() {
        assert_eq!(normalize("///x"), "//x");
        assert_eq!(normalize("/x"), "/x");
        assert_eq!(normalize("//"), "/");
        assert_eq!(normalize(""), "");
    }
}
