#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element label exactly as it appeared in the input file.
    pub element: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            element: element.into(),
            position,
        }
    }
}
