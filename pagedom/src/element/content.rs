#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Children(Vec<super::Element>),
}

impl Content {
    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            Self::None => &[],
        }
    }
}
