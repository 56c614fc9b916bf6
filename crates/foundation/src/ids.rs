/// Identifier of one scene record, unique within the bundled dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SceneId(u32);

impl SceneId {
    pub fn new(n: u32) -> Self {
        SceneId(n)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::SceneId;

    #[test]
    fn ordering_follows_raw_value() {
        assert!(SceneId::new(1) < SceneId::new(2));
        assert_eq!(SceneId::new(7).raw(), 7);
        assert_eq!(SceneId::new(7).to_string(), "7");
    }
}
