/// Field values that can appear on the right-hand side of a `Name: value`
/// pair in a request summary.
pub(crate) trait SummaryValue {
    fn render(&self) -> String;
}

impl SummaryValue for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl SummaryValue for i32 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl SummaryValue for bool {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl SummaryValue for Vec<String> {
    fn render(&self) -> String {
        format!("[{}]", self.join(", "))
    }
}

/// Accumulates the single-line summary of a request: `Name: value` pairs
/// for present fields only, in the order they are pushed, comma-separated
/// and brace-delimited. Absent fields leave no trace in the output.
pub(crate) struct Summary {
    parts: Vec<String>,
}

impl Summary {
    pub(crate) fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub(crate) fn field<T: SummaryValue>(mut self, name: &str, value: &Option<T>) -> Self {
        if let Some(value) = value {
            self.parts.push(format!("{}: {}", name, value.render()));
        }

        self
    }

    pub(crate) fn finish(self) -> String {
        format!("{{{}}}", self.parts.join(","))
    }
}
