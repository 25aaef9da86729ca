/// Accordion state for one FAQ group. `open` holds the only expanded item,
/// so two open items cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FaqGroup {
    len: usize,
    open: Option<usize>,
}

impl FaqGroup {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Closes everything, then opens `index` unless it was the open one.
    /// Out-of-range indices are ignored.
    pub fn activate(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let open = if self.open == Some(index) { None } else { Some(index) };
        Self { open, ..self }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn aria_expanded(&self, index: usize) -> &'static str {
        if self.is_expanded(index) {
            "true"
        } else {
            "false"
        }
    }
}

pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

pub fn answer_id(group: &str, index: usize) -> String {
    format!("faq-answer-{}-{}", group, index)
}
